//! Terminal rendering of a pagination control.
//!
//! The bar draws the container's entries on one line, keeps keyboard focus by
//! entry key, maps mouse clicks back to entries and executes the effects an
//! activation asks for.

use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use super::container::PaginationContainer;
use super::entry::{Activation, ActivationEffect, EntryDescriptor, EntryKind};
use crate::sequence::{PageNumber, Token};
use crate::tui::components::{Component, ComponentState};
use crate::tui::themes::{PaginationStyles, Theme};
use crate::tui::Frame;

/// Columns occupied by one entry on screen
#[derive(Debug, Clone, PartialEq, Eq)]
struct HitRegion {
    row: u16,
    start: u16,
    end: u16,
    key: String,
}

/// Pagination control drawn into the terminal
#[derive(Debug)]
pub struct PaginationBar {
    container: PaginationContainer,
    entries: Vec<EntryDescriptor>,
    focused: Option<String>,
    hits: Vec<HitRegion>,
    state: ComponentState,
}

impl PaginationBar {
    pub fn new(container: PaginationContainer) -> Self {
        Self {
            container,
            entries: Vec::new(),
            focused: None,
            hits: Vec::new(),
            state: ComponentState::default(),
        }
    }

    /// Rebuild the entries for a new sequence.
    ///
    /// Focus stays on the entry with the same key if it is still interactive
    /// and is dropped otherwise.
    pub fn update(&mut self, cur_page: PageNumber, num_pages: PageNumber, sequence: &[Token]) {
        self.entries = self.container.render(cur_page, num_pages, sequence);
        self.hits.clear();

        if let Some(key) = &self.focused {
            let still_there = self
                .entries
                .iter()
                .any(|entry| &entry.key == key && entry.is_interactive());
            if !still_there {
                debug!(key = %key, "Focused entry disappeared, dropping focus");
                self.focused = None;
            }
        }
    }

    pub fn entries(&self) -> &[EntryDescriptor] {
        &self.entries
    }

    pub fn container_mut(&mut self) -> &mut PaginationContainer {
        &mut self.container
    }

    pub fn focused_key(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Focus the entry with `key`; only interactive entries can take focus
    pub fn focus_key(&mut self, key: &str) -> bool {
        let focusable = self
            .entries
            .iter()
            .any(|entry| entry.key == key && entry.is_interactive());
        if focusable {
            self.focused = Some(key.to_string());
        }
        focusable
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let interactive: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_interactive())
            .map(|(index, _)| index)
            .collect();

        if interactive.is_empty() {
            self.focused = None;
            return;
        }

        let len = interactive.len();
        let current = self.focused.as_ref().and_then(|key| {
            interactive
                .iter()
                .position(|&index| &self.entries[index].key == key)
        });

        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(position), true) => (position + 1) % len,
            (Some(position), false) => (position + len - 1) % len,
        };

        self.focused = Some(self.entries[interactive[next]].key.clone());
    }

    /// Activate the entry with `key` and carry out the resulting effects
    pub fn activate_key(&mut self, key: &str) -> Activation {
        let Some(entry) = self.entries.iter().find(|entry| entry.key == key) else {
            return Activation::inert();
        };

        let activation = self.container.activate(entry);
        self.execute_effects(&activation.effects);
        activation
    }

    pub fn activate_focused(&mut self) -> Activation {
        match self.focused.clone() {
            Some(key) => self.activate_key(&key),
            None => Activation::inert(),
        }
    }

    fn execute_effects(&mut self, effects: &[ActivationEffect]) {
        for effect in effects {
            match effect {
                ActivationEffect::SuppressDefaultNavigation => {
                    trace!("Nothing to suppress, terminals have no default navigation");
                }
                ActivationEffect::ClearFocus => {
                    self.focused = None;
                }
            }
        }
    }

    /// Entry drawn at the given screen cell during the last render
    pub fn entry_at(&self, column: u16, row: u16) -> Option<&EntryDescriptor> {
        let hit = self
            .hits
            .iter()
            .find(|hit| hit.row == row && (hit.start..hit.end).contains(&column))?;
        self.entries.iter().find(|entry| entry.key == hit.key)
    }

    /// The entries as one styled line
    pub fn to_line(&self, styles: &PaginationStyles) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.entries.len() * 2);

        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }

            let mut style = entry_style(entry, styles);
            if self.focused.as_deref() == Some(entry.key.as_str()) {
                style = style.patch(styles.focused);
            }

            spans.push(Span::styled(segment_text(entry), style));
        }

        Line::from(spans)
    }

    fn layout_hits(&mut self, inner: Rect) {
        self.hits.clear();

        let right = inner.x.saturating_add(inner.width);
        let mut x = inner.x;

        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                x = x.saturating_add(1);
            }
            if x >= right {
                break;
            }

            let width = segment_text(entry).width() as u16;
            let end = x.saturating_add(width).min(right);
            self.hits.push(HitRegion {
                row: inner.y,
                start: x,
                end,
                key: entry.key.clone(),
            });
            x = end;
        }
    }
}

fn entry_style(entry: &EntryDescriptor, styles: &PaginationStyles) -> Style {
    match entry.kind() {
        EntryKind::Ellipsis => styles.ellipsis,
        EntryKind::Disabled => styles.disabled,
        EntryKind::Link if entry.role.is_arrow() => styles.navigation,
        EntryKind::Link if entry.is_current => styles.current_page,
        EntryKind::Link => styles.page,
    }
}

/// Text drawn for one entry; the current page is bracketed
fn segment_text(entry: &EntryDescriptor) -> String {
    if entry.is_current {
        format!("[{}]", entry.label)
    } else {
        entry.label.clone()
    }
}

/// Render entries as a single line of plain text, e.g. `« ‹ 1 2 … 4 [5] 6 … 9 10 › »`
pub fn plain_text(entries: &[EntryDescriptor]) -> String {
    entries
        .iter()
        .map(segment_text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl Component for PaginationBar {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<bool> {
        match event.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.focus_next();
                Ok(true)
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.focus_previous();
                Ok(true)
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.focused.is_some() => {
                self.activate_focused();
                Ok(true)
            }
            KeyCode::Esc if self.focused.is_some() => {
                self.clear_focus();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<bool> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(false);
        }

        let Some(key) = self
            .entry_at(event.column, event.row)
            .filter(|entry| entry.is_interactive())
            .map(|entry| entry.key.clone())
        else {
            return Ok(false);
        };

        debug!(key = %key, column = event.column, row = event.row, "Clicked pagination entry");
        self.activate_key(&key);
        Ok(true)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.state.size = area;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(self.state.has_focus))
            .title(" Pages ");
        let inner = block.inner(area);
        self.layout_hits(inner);

        let paragraph = Paragraph::new(self.to_line(&theme.pagination)).block(block);
        frame.render_widget(paragraph, area);
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        self.state.has_focus = focus;
        if !focus {
            self.focused = None;
        }
    }
}
