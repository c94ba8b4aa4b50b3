//! Lexical classes assigned by the highlighting tokenizer.
//!
//! The set is closed: every character of a line ends up in a token of exactly
//! one of these kinds, with `Plain` as the catch-all.

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenKind {
    /// `--` line comment, up to the end of the line.
    #[display("comment")]
    Comment,
    /// Single- or double-quoted string.
    #[display("string")]
    String,
    #[display("null-literal")]
    Null,
    #[display("boolean-literal")]
    Boolean,
    #[display("ddl-keyword")]
    DdlKeyword,
    #[display("dml-keyword")]
    DmlKeyword,
    #[display("transaction-keyword")]
    TransactionKeyword,
    /// SELECT, FROM, WHERE, JOIN and the other clause openers.
    #[display("primary-keyword")]
    PrimaryKeyword,
    /// DISTINCT, LIMIT, CASE and the other secondary keywords.
    #[display("clause-keyword")]
    ClauseKeyword,
    /// A known function name directly followed by `(`.
    #[display("function-name")]
    Function,
    #[display("datatype")]
    DataType,
    #[display("number")]
    Number,
    #[display("operator")]
    Operator,
    #[display("punctuation")]
    Punctuation,
    /// A single character no other rule claimed.
    #[display("plain-text")]
    Plain,
}

impl TokenKind {
    /// True for the five keyword classes.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::DdlKeyword
                | TokenKind::DmlKeyword
                | TokenKind::TransactionKeyword
                | TokenKind::PrimaryKeyword
                | TokenKind::ClauseKeyword
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_classes() {
        assert!(TokenKind::PrimaryKeyword.is_keyword());
        assert!(TokenKind::TransactionKeyword.is_keyword());
        assert!(!TokenKind::Function.is_keyword());
        assert!(!TokenKind::Plain.is_keyword());
    }

    #[test]
    fn display_uses_category_names() {
        assert_eq!(TokenKind::PrimaryKeyword.to_string(), "primary-keyword");
        assert_eq!(TokenKind::Plain.to_string(), "plain-text");
        assert_eq!(TokenKind::Null.to_string(), "null-literal");
    }
}
