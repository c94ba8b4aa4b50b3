//! Token model tying a `TokenKind` to the text it covers.
//!
//! Tokens borrow from the line they were scanned from; they are rebuilt on
//! every highlight pass and never stored.
use crate::sql::token_kind::TokenKind;

/// A classified slice of one line.
///
/// Invariants:
/// - `text` is exactly `line[start..start + text.len()]`
/// - the tokens of a line are contiguous and cover it completely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` within its line.
    pub start: usize,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self { kind, text, start }
    }

    /// Exclusive end offset within the line.
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub const fn len(&self) -> usize {
        self.text.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_accessors() {
        let t = Token::new(TokenKind::PrimaryKeyword, "FROM", 9);
        assert_eq!(t.len(), 4);
        assert_eq!(t.end(), 13);
        assert!(!t.is_empty());
    }
}
