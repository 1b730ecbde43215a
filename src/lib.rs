//! Compact pagination sequences and an interactive terminal pagination bar.
//!
//! [`sequence::generate`] computes which page numbers to show, e.g.
//! `[1,2,…,4,5,6,…,9,10]` for page 5 of 10. The [`tui`] module turns such a
//! sequence into pagination entries (arrows, links, current page, gaps) and
//! draws them in the terminal.

pub mod config;
pub mod sequence;
pub mod tui;
