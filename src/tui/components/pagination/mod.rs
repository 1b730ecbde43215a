//! Pagination control: entries, their composition, and the terminal bar.
//!
//! [`PaginationContainer`] turns a generated sequence into
//! [`EntryDescriptor`]s; [`PaginationBar`] draws them with ratatui and turns
//! key presses and clicks into activations.

pub mod bar;
pub mod container;
pub mod entry;

pub use bar::{plain_text, PaginationBar};
pub use container::{PaginationContainer, RenderOptions};
pub use entry::{
    default_label_and_title, Activation, ActivationEffect, EntryClickHandler, EntryDescriptor,
    EntryKind, EntryRole, PaginationEntry,
};
