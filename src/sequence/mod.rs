//! Pagination sequence generation.
//!
//! Given the current page, the number of pages and two context sizes, this
//! module produces the short run of page numbers and gap markers that make up
//! a pagination bar, e.g. `[1,2,…,4,5,6,…,9,10]`.

mod errors;
mod generator;
mod token;

pub use errors::{SequenceError, SequenceResult};
pub use generator::{generate, validate, SequenceParams};
pub use token::{format_sequence, Token, ELLIPSIS};

/// A one-based page number
pub type PageNumber = i64;
