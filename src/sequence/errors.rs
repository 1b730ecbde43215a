//! Error types for sequence generation

use thiserror::Error;

use super::PageNumber;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid page range: number of pages must not be negative (got {0})")]
    NegativePageCount(PageNumber),

    #[error("Invalid page range: current page {current} is outside 1..={total}")]
    CurrentPageOutOfRange {
        current: PageNumber,
        total: PageNumber,
    },

    #[error("Negative context: {parameter} must not be negative (got {value})")]
    NegativeContext {
        parameter: &'static str,
        value: PageNumber,
    },
}

impl SequenceError {
    /// Whether this error describes a page count or current page outside the valid range
    pub fn is_invalid_range(&self) -> bool {
        matches!(
            self,
            Self::NegativePageCount(_) | Self::CurrentPageOutOfRange { .. }
        )
    }
}

pub type SequenceResult<T> = Result<T, SequenceError>;
