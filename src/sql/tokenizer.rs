use crate::sql::{keyword::*, token::Token, token_kind::TokenKind};

/// How a rule recognizes the text at the scan position.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// `--` up to the end of the line.
    LineComment,
    /// Quote-delimited with `\` escaping the next character.
    Quoted(u8),
    /// Any entry of the table, on word boundaries, longest match wins.
    Words(&'static [&'static str]),
    /// Like `Words`, but only when directly followed by `(`, which is left
    /// for the next token.
    Call(&'static [&'static str]),
    /// Digits with an optional fractional part, on word boundaries.
    Number,
    /// The first entry of the table the text starts with.
    Symbols(&'static [&'static str]),
}

/// Rules in priority order. Categories overlap (`REPLACE` vs `REPLACE(`,
/// `DATE` vs a column called date), so the order is part of the contract.
const RULES: [(TokenKind, Pattern); 16] = [
    (TokenKind::Comment, Pattern::LineComment),
    (TokenKind::String, Pattern::Quoted(b'\'')),
    (TokenKind::String, Pattern::Quoted(b'"')),
    (TokenKind::Null, Pattern::Words(NULL_LITERAL)),
    (TokenKind::Boolean, Pattern::Words(BOOLEAN_LITERALS)),
    (TokenKind::DdlKeyword, Pattern::Words(DDL_KEYWORDS)),
    (TokenKind::DmlKeyword, Pattern::Words(DML_KEYWORDS)),
    (TokenKind::TransactionKeyword, Pattern::Words(TRANSACTION_KEYWORDS)),
    (TokenKind::PrimaryKeyword, Pattern::Words(PRIMARY_KEYWORDS)),
    (TokenKind::ClauseKeyword, Pattern::Words(CLAUSE_KEYWORDS)),
    (TokenKind::Function, Pattern::Call(FUNCTION_NAMES)),
    (TokenKind::DataType, Pattern::Words(DATA_TYPES)),
    (TokenKind::Number, Pattern::Number),
    (TokenKind::Operator, Pattern::Symbols(MULTI_CHAR_OPERATORS)),
    (TokenKind::Operator, Pattern::Symbols(SINGLE_CHAR_OPERATORS)),
    (TokenKind::Punctuation, Pattern::Symbols(PUNCTUATION)),
];

pub(crate) const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl Pattern {
    /// Length in bytes of the match at `pos`, if any.
    fn matches(self, line: &str, pos: usize) -> Option<usize> {
        let rest = &line[pos..];
        match self {
            Pattern::LineComment => rest.starts_with("--").then_some(rest.len()),
            Pattern::Quoted(quote) => quoted(rest, quote),
            Pattern::Words(words) => {
                starts_word(line, pos).then(|| longest_phrase(rest, words))?
            }
            Pattern::Call(names) => starts_word(line, pos)
                .then(|| longest_phrase(rest, names))?
                .filter(|&len| rest[len..].starts_with('(')),
            Pattern::Number => starts_word(line, pos).then(|| number(rest))?,
            Pattern::Symbols(symbols) => symbols
                .iter()
                .find(|symbol| rest.starts_with(**symbol))
                .map(|symbol| symbol.len()),
        }
    }
}

fn starts_word(line: &str, pos: usize) -> bool {
    !line.as_bytes()[..pos].last().copied().is_some_and(is_word_byte)
}

fn ends_word(rest: &str, len: usize) -> bool {
    !rest.as_bytes().get(len).copied().is_some_and(is_word_byte)
}

fn longest_phrase(rest: &str, phrases: &[&str]) -> Option<usize> {
    phrases
        .iter()
        .filter_map(|phrase| match_phrase(rest, phrase))
        .max()
}

/// Case-insensitive match of `phrase` at the start of `rest`, where each space
/// in the phrase stands for one or more whitespace characters.
pub(crate) fn match_phrase(rest: &str, phrase: &str) -> Option<usize> {
    let mut len = 0;
    for (i, word) in phrase.split(' ').enumerate() {
        if i > 0 {
            let tail = &rest[len..];
            let gap = tail.len() - tail.trim_start().len();
            if gap == 0 {
                return None;
            }
            len += gap;
        }
        let candidate = rest[len..].get(..word.len())?;
        if !candidate.eq_ignore_ascii_case(word) {
            return None;
        }
        len += word.len();
    }
    ends_word(rest, len).then_some(len)
}

fn quoted(rest: &str, quote: u8) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&quote) {
        return None;
    }
    let mut i = 1;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None // unterminated
}

fn number(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();
    let mut len = digits(0);
    if len == 0 {
        return None;
    }
    if bytes.get(len) == Some(&b'.') {
        let fraction = digits(len + 1);
        if fraction > 0 {
            len += 1 + fraction;
        }
    }
    ends_word(rest, len).then_some(len)
}

/// Tokenize a single line for highlighting.
///
/// At every position the rules are tried in priority order; the first that
/// matches produces the token. When none does, exactly one character becomes
/// a `Plain` token, so scanning always advances and never fails on malformed
/// or half-typed SQL.
///
/// Guarantees:
/// - Concatenating the returned token texts reproduces `line` exactly.
/// - Patterns never look past the line; a `\n` in the input is plain text.
///
/// Complexity:
/// - O(n · k) where `k` is the size of the vocabulary tables.
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let (kind, len) = RULES
            .iter()
            .find_map(|&(kind, pattern)| pattern.matches(line, pos).map(|len| (kind, len)))
            .unwrap_or_else(|| {
                let len = line[pos..].chars().next().map_or(1, char::len_utf8);
                (TokenKind::Plain, len)
            });
        out.push(Token::new(kind, &line[pos..pos + len], pos));
        pos += len;
    }

    out
}

/// Tokenize every line of a buffer independently.
pub fn tokenize(buffer: &str) -> Vec<Vec<Token<'_>>> {
    buffer.split('\n').map(tokenize_line).collect()
}
