//! Built-in themes

use super::{PaginationStyles, Theme};
use ratatui::style::Color;

/// Default dark theme
pub fn dark() -> Theme {
    Theme {
        name: "dark".to_string(),
        is_dark: true,

        primary: Color::Rgb(0x8A, 0x67, 0xFF),
        accent: Color::Rgb(0xFF, 0xA5, 0x00),

        bg_base: Color::Rgb(0x2D, 0x2D, 0x2D),
        bg_subtle: Color::Rgb(0x4A, 0x4A, 0x4A),

        fg_base: Color::Rgb(0xD0, 0xD0, 0xD0),
        fg_muted: Color::Rgb(0xA0, 0xA0, 0xA0),
        fg_subtle: Color::Rgb(0x70, 0x70, 0x70),
        fg_selected: Color::Rgb(0xF5, 0xF5, 0xF5),

        border: Color::Rgb(0x4A, 0x4A, 0x4A),
        border_focus: Color::Rgb(0x8A, 0x67, 0xFF),

        info: Color::Rgb(0x29, 0xB6, 0xF6),

        pagination: PaginationStyles::default(),
    }
    .with_built_styles()
}

/// Light variant with darker accents for contrast
pub fn light() -> Theme {
    Theme {
        name: "light".to_string(),
        is_dark: false,

        primary: Color::Rgb(0x67, 0x3A, 0xB7),
        accent: Color::Rgb(0xD3, 0x2F, 0x2F),

        bg_base: Color::Rgb(0xFD, 0xFD, 0xFD),
        bg_subtle: Color::Rgb(0xF1, 0xF3, 0xF4),

        fg_base: Color::Rgb(0x21, 0x21, 0x21),
        fg_muted: Color::Rgb(0x61, 0x61, 0x61),
        fg_subtle: Color::Rgb(0x9E, 0x9E, 0x9E),
        fg_selected: Color::Rgb(0xFF, 0xFF, 0xFF),

        border: Color::Rgb(0xE0, 0xE0, 0xE0),
        border_focus: Color::Rgb(0x67, 0x3A, 0xB7),

        info: Color::Rgb(0x19, 0x76, 0xD2),

        pagination: PaginationStyles::default(),
    }
    .with_built_styles()
}

/// Look a preset up by name
pub fn by_name(name: &str) -> Option<Theme> {
    match name.to_ascii_lowercase().as_str() {
        "dark" => Some(dark()),
        "light" => Some(light()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("Dark").unwrap().name, "dark");
        assert!(!by_name("light").unwrap().is_dark);
        assert!(by_name("solarized").is_none());
    }
}
