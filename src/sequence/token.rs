//! Tokens making up a pagination sequence.

use serde::{Serialize, Serializer};
use std::fmt;

use super::PageNumber;

/// Marker shown in place of a collapsed run of pages
pub const ELLIPSIS: &str = "…";

/// One element of a generated pagination sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A page number that should be shown
    Page(PageNumber),
    /// A gap of one or more hidden pages
    Ellipsis,
}

impl Token {
    /// The page number, if this token is a page
    pub fn page(&self) -> Option<PageNumber> {
        match self {
            Token::Page(page) => Some(*page),
            Token::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Token::Ellipsis)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Page(page) => write!(f, "{}", page),
            Token::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

/// Pages serialize as plain numbers and gaps as the `"…"` string, so a
/// sequence reads `[1,2,"…",9,10]` in JSON.
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Token::Page(page) => serializer.serialize_i64(*page),
            Token::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Format a sequence the compact way: `[1,2,…,9,10]`
pub fn format_sequence(sequence: &[Token]) -> String {
    let parts: Vec<String> = sequence.iter().map(Token::to_string).collect();
    format!("[{}]", parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Token::Page(42).to_string(), "42");
        assert_eq!(Token::Ellipsis.to_string(), "…");
    }

    #[test]
    fn test_format_sequence() {
        let sequence = vec![
            Token::Page(1),
            Token::Page(2),
            Token::Ellipsis,
            Token::Page(9),
            Token::Page(10),
        ];
        assert_eq!(format_sequence(&sequence), "[1,2,…,9,10]");
        assert_eq!(format_sequence(&[]), "[]");
    }

    #[test]
    fn test_json_serialization() {
        let sequence = vec![Token::Page(1), Token::Ellipsis, Token::Page(5)];
        let json = serde_json::to_string(&sequence).unwrap();
        assert_eq!(json, r#"[1,"…",5]"#);
    }

    #[test]
    fn test_page_accessor() {
        assert_eq!(Token::Page(3).page(), Some(3));
        assert_eq!(Token::Ellipsis.page(), None);
        assert!(Token::Ellipsis.is_ellipsis());
        assert!(!Token::Page(1).is_ellipsis());
    }
}
