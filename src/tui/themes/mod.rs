//! Colour themes for the pagination TUI
//!
//! A theme is a small set of semantic colours; the styles used by the
//! pagination bar are derived from them once, when the theme is built.

use ratatui::style::{Color, Modifier, Style};

pub mod presets;

/// Semantic colours plus the styles derived from them
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub is_dark: bool,

    pub primary: Color,
    pub accent: Color,

    pub bg_base: Color,
    pub bg_subtle: Color,

    pub fg_base: Color,
    pub fg_muted: Color,
    pub fg_subtle: Color,
    pub fg_selected: Color,

    pub border: Color,
    pub border_focus: Color,

    pub info: Color,

    pub pagination: PaginationStyles,
}

/// Styles for the parts of a pagination bar
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationStyles {
    /// The current page
    pub current_page: Style,

    /// Other page links
    pub page: Style,

    /// Enabled arrows
    pub navigation: Style,

    /// Disabled arrows
    pub disabled: Style,

    /// Gap markers
    pub ellipsis: Style,

    /// Overlay for the entry holding keyboard focus
    pub focused: Style,
}

impl Theme {
    /// Derive the component styles from the colours that are set
    pub fn with_built_styles(mut self) -> Self {
        self.pagination = self.build_pagination_styles();
        self
    }

    fn build_pagination_styles(&self) -> PaginationStyles {
        let base = Style::default().fg(self.fg_base);

        PaginationStyles {
            current_page: base
                .bg(self.primary)
                .fg(self.fg_selected)
                .add_modifier(Modifier::BOLD),
            page: base.fg(self.info).add_modifier(Modifier::UNDERLINED),
            navigation: base.fg(self.accent).add_modifier(Modifier::BOLD),
            disabled: base.fg(self.fg_subtle).add_modifier(Modifier::DIM),
            ellipsis: base.fg(self.fg_muted),
            focused: Style::default()
                .bg(self.bg_subtle)
                .add_modifier(Modifier::REVERSED),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg_base)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focus)
        } else {
            Style::default().fg(self.border)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        presets::dark()
    }
}

impl Default for PaginationStyles {
    fn default() -> Self {
        Self {
            current_page: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            page: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            navigation: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default().fg(Color::DarkGray),
            ellipsis: Style::default().fg(Color::Gray),
            focused: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_follow_theme_colors() {
        let theme = presets::dark();
        assert_eq!(theme.pagination.current_page.bg, Some(theme.primary));
        assert_eq!(theme.pagination.disabled.fg, Some(theme.fg_subtle));
        assert_ne!(theme.pagination, PaginationStyles::default());
    }

    #[test]
    fn test_border_style() {
        let theme = Theme::default();
        assert_eq!(theme.border_style(true).fg, Some(theme.border_focus));
        assert_eq!(theme.border_style(false).fg, Some(theme.border));
    }
}
