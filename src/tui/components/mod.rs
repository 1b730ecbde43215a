//! Interactive TUI components

pub mod pagination;

use crate::tui::{themes::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

/// Base trait for UI components
#[async_trait]
pub trait Component: Send + Sync {
    /// Handle keyboard input, returning whether the key was consumed
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<bool> {
        let _ = event;
        Ok(false)
    }

    /// Handle mouse input, returning whether the event was consumed
    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<bool> {
        let _ = event;
        Ok(false)
    }

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Area the component was last rendered into
    fn size(&self) -> Rect;

    fn set_size(&mut self, size: Rect);

    fn has_focus(&self) -> bool {
        false
    }

    fn set_focus(&mut self, focus: bool) {
        let _ = focus;
    }
}

/// State shared by most components
#[derive(Debug, Clone, Default)]
pub struct ComponentState {
    pub size: Rect,
    pub has_focus: bool,
}
