//! Lenient, line-oriented SQL tokenization for syntax highlighting.
//!
//! Modules:
//! - `keyword`    : Vocabulary tables per token class, plus the completion list.
//! - `token_kind` : The fifteen lexical classes a token can carry.
//! - `token`      : Token struct pairing a `TokenKind` with the text it covers.
//! - `tokenizer`  : Priority-ordered rule scanner producing `Vec<Token>` per line.
//!
//! Design Principles:
//! 1. Accept incomplete / syntactically invalid SQL (robust for live editing).
//! 2. Total coverage: every character of the input lands in exactly one token.
//! 3. One line at a time; nothing spans a newline, so `/* ... */` across lines
//!    is not recognized as a comment.
//!
//! Example:
//! ```rust
//! use sqlpad::prelude::*;
//!
//! let tokens = tokenize_line("SELECT a FROM t");
//! assert_eq!(tokens[0].kind, TokenKind::PrimaryKeyword);
//! ```
//!
//! NOTE: This is **not** a SQL parser; no structure beyond single tokens is
//! recovered.

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::SQL_KEYWORDS;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::{tokenize, tokenize_line};

/// Convenience prelude re-exporting the most commonly used items.
///
/// Import with:
/// `use sqlpad::prelude::*;`
pub mod prelude {
    pub use super::{Token, TokenKind, tokenize, tokenize_line};
}
