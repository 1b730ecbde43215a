//! A single pagination entry: page link, arrow, current-page marker or gap.
//!
//! Entries are plain values. Deciding whether an entry is interactive lives
//! here; carrying out the resulting [`ActivationEffect`]s is left to the render
//! layer.

use serde::Serialize;
use tracing::trace;

use crate::sequence::{PageNumber, Token, ELLIPSIS};

/// Handler invoked with the target page when an entry is activated
pub type EntryClickHandler = Box<dyn FnMut(PageNumber) + Send + Sync>;

/// Position of an entry within the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRole {
    First,
    Prev,
    Normal,
    Next,
    Last,
}

impl EntryRole {
    pub fn is_arrow(&self) -> bool {
        !matches!(self, EntryRole::Normal)
    }
}

/// How an entry behaves when the user interacts with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Gap marker, never interactive
    Ellipsis,
    /// Shown but inert
    Disabled,
    /// Navigates to its page when activated
    Link,
}

/// Side effects the render layer carries out after activating a link entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationEffect {
    /// Do not perform whatever default navigation the host would do
    SuppressDefaultNavigation,
    /// Move input focus away from the activated entry
    ClearFocus,
}

/// Result of activating an entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activation {
    /// Effects for the render layer to execute, in order
    pub effects: Vec<ActivationEffect>,

    /// Page passed to the click handler, if one was invoked
    pub dispatched: Option<PageNumber>,
}

impl Activation {
    /// An activation that did nothing at all
    pub fn inert() -> Self {
        Self::default()
    }

    pub fn is_inert(&self) -> bool {
        self.effects.is_empty() && self.dispatched.is_none()
    }
}

/// Rendering-ready description of one pagination element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDescriptor {
    /// Identity of the visual slot, stable across renders for the same value
    pub key: String,
    pub role: EntryRole,
    pub value: Token,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub is_current: bool,
    pub is_disabled: bool,
}

impl EntryDescriptor {
    pub fn kind(&self) -> EntryKind {
        match self.value {
            Token::Ellipsis => EntryKind::Ellipsis,
            Token::Page(_) if self.is_disabled => EntryKind::Disabled,
            Token::Page(_) => EntryKind::Link,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.kind() == EntryKind::Link
    }

    /// Activate this entry.
    ///
    /// Gaps and disabled entries are inert. A link yields
    /// [`ActivationEffect::SuppressDefaultNavigation`] and
    /// [`ActivationEffect::ClearFocus`], then calls `on_entry_click` once with
    /// its page when a handler is given.
    pub fn activate(&self, on_entry_click: Option<&mut EntryClickHandler>) -> Activation {
        let Token::Page(page) = self.value else {
            return Activation::inert();
        };

        if self.is_disabled {
            trace!(key = %self.key, "Ignoring activation of disabled entry");
            return Activation::inert();
        }

        let effects = vec![
            ActivationEffect::SuppressDefaultNavigation,
            ActivationEffect::ClearFocus,
        ];

        let dispatched = on_entry_click.map(|handler| {
            handler(page);
            page
        });

        trace!(key = %self.key, page, handled = dispatched.is_some(), "Activated entry");

        Activation {
            effects,
            dispatched,
        }
    }
}

/// Label and title an entry gets when none are given explicitly
pub fn default_label_and_title(value: &Token) -> (String, Option<String>) {
    match value {
        Token::Page(page) => (page.to_string(), Some(format!("Go to page {}", page))),
        Token::Ellipsis => (ELLIPSIS.to_string(), None),
    }
}

/// Builder for a single entry
#[derive(Debug, Clone)]
pub struct PaginationEntry {
    value: Token,
    role: EntryRole,
    label: Option<String>,
    title: Option<String>,
    is_current: bool,
    is_disabled: bool,
}

impl PaginationEntry {
    pub fn new(value: Token) -> Self {
        Self {
            value,
            role: EntryRole::Normal,
            label: None,
            title: None,
            is_current: false,
            is_disabled: false,
        }
    }

    pub fn page(page: PageNumber) -> Self {
        Self::new(Token::Page(page))
    }

    pub fn ellipsis() -> Self {
        Self::new(Token::Ellipsis)
    }

    pub fn role(mut self, role: EntryRole) -> Self {
        self.role = role;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Build the descriptor. Links get an href of `{base_url}/page/{n}`.
    pub fn describe(self, key: impl Into<String>, base_url: &str) -> EntryDescriptor {
        let (default_label, default_title) = default_label_and_title(&self.value);
        let label = self.label.unwrap_or(default_label);

        let is_link = matches!(self.value, Token::Page(_)) && !self.is_disabled;
        let title = if is_link {
            self.title.or(default_title)
        } else {
            None
        };
        let href = match self.value {
            Token::Page(page) if is_link => Some(format!("{}/page/{}", base_url, page)),
            _ => None,
        };

        EntryDescriptor {
            key: key.into(),
            role: self.role,
            value: self.value,
            label,
            title,
            href,
            is_current: self.is_current && !self.role.is_arrow(),
            is_disabled: self.is_disabled,
        }
    }
}
