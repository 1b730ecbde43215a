use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            key,
            modifiers,
            description: description.to_string(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers
    }
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit from anywhere
    pub quit: KeyBinding,

    /// Quit when the pagination bar did not consume the key
    pub close: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit"),
            close: KeyBinding::new(KeyCode::Char('q'), KeyModifiers::NONE, "Close"),
        }
    }
}

impl KeyMap {
    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.quit.matches(event)
    }

    /// Check if an unconsumed event should close the application
    pub fn should_close(&self, event: &KeyEvent) -> bool {
        self.close.matches(event) || event.code == KeyCode::Esc
    }

    /// One-line key help shown under the bar
    pub fn help_text(&self) -> String {
        format!(
            "←/→ Tab focus · Enter activate · click a page · Esc clear focus · q {} · Ctrl+C {}",
            self.close.description.to_lowercase(),
            self.quit.description.to_lowercase()
        )
    }
}
