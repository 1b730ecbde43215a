//! Composes arrows and the generated sequence into one pagination control.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::{Activation, EntryClickHandler, EntryDescriptor, EntryRole, PaginationEntry};
use crate::sequence::{PageNumber, Token, ELLIPSIS};

pub const FIRST_LABEL: &str = "«";
pub const PREV_LABEL: &str = "‹";
pub const NEXT_LABEL: &str = "›";
pub const LAST_LABEL: &str = "»";

/// Which parts of the control to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Show the « and » arrows
    pub show_first_last_arrows: bool,

    /// Show the ‹ and › arrows
    pub show_next_prev_arrows: bool,

    /// Prefix for entry links
    pub base_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_first_last_arrows: true,
            show_next_prev_arrows: true,
            base_url: "#".to_string(),
        }
    }
}

/// The pagination control: arrows around the page sequence
pub struct PaginationContainer {
    options: RenderOptions,
    on_entry_click: Option<EntryClickHandler>,
}

impl fmt::Debug for PaginationContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationContainer")
            .field("options", &self.options)
            .field("has_click_handler", &self.on_entry_click.is_some())
            .finish()
    }
}

impl Default for PaginationContainer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl PaginationContainer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            on_entry_click: None,
        }
    }

    /// Set the handler invoked with the target page of an activated entry
    pub fn with_on_entry_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut(PageNumber) + Send + Sync + 'static,
    {
        self.on_entry_click = Some(Box::new(handler));
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Build the entries of the control, left to right.
    ///
    /// `sequence` is expected to come from [`crate::sequence::generate`] for
    /// the same `cur_page` and `num_pages`; it is not validated again.
    pub fn render(
        &self,
        cur_page: PageNumber,
        num_pages: PageNumber,
        sequence: &[Token],
    ) -> Vec<EntryDescriptor> {
        let base_url = self.options.base_url.as_str();
        let on_first_page = cur_page == 1;
        let on_last_page = cur_page >= num_pages;

        let mut entries = Vec::with_capacity(sequence.len() + 4);

        if self.options.show_first_last_arrows {
            entries.push(
                PaginationEntry::page(1)
                    .role(EntryRole::First)
                    .label(FIRST_LABEL)
                    .title("Go to First Page")
                    .disabled(on_first_page)
                    .describe("first", base_url),
            );
        }

        if self.options.show_next_prev_arrows {
            entries.push(
                PaginationEntry::page(cur_page.saturating_sub(1))
                    .role(EntryRole::Prev)
                    .label(PREV_LABEL)
                    .title("Go to Previous Page")
                    .disabled(on_first_page)
                    .describe("prev", base_url),
            );
        }

        for (index, token) in sequence.iter().enumerate() {
            let entry = match token {
                Token::Page(page) => PaginationEntry::page(*page)
                    .current(*page == cur_page)
                    .describe(format!("page-{}", page), base_url),
                Token::Ellipsis => PaginationEntry::ellipsis()
                    .describe(format!("page-{}-{}", ELLIPSIS, index), base_url),
            };
            entries.push(entry);
        }

        if self.options.show_next_prev_arrows {
            entries.push(
                PaginationEntry::page(cur_page.saturating_add(1))
                    .role(EntryRole::Next)
                    .label(NEXT_LABEL)
                    .title("Go to Next Page")
                    .disabled(on_last_page)
                    .describe("next", base_url),
            );
        }

        if self.options.show_first_last_arrows {
            entries.push(
                PaginationEntry::page(num_pages)
                    .role(EntryRole::Last)
                    .label(LAST_LABEL)
                    .title("Go to Last Page")
                    .disabled(on_last_page)
                    .describe("last", base_url),
            );
        }

        entries
    }

    /// Activate an entry produced by [`Self::render`] with this control's handler
    pub fn activate(&mut self, entry: &EntryDescriptor) -> Activation {
        entry.activate(self.on_entry_click.as_mut())
    }
}
