use super::*;

/// How a token class is painted.
///
/// Styles are fixed per [`TokenKind`]; hosts that paint through CSS only need
/// [`Style::css_class`], terminal or canvas hosts can use the color and
/// weight directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub kind: TokenKind,
    /// `#rrggbb`
    pub color: &'static str,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub const fn for_kind(kind: TokenKind) -> Self {
        let color = match kind {
            TokenKind::Comment => "#6a9955",
            TokenKind::String => "#ce9178",
            TokenKind::Null | TokenKind::Boolean => "#569cd6",
            TokenKind::DdlKeyword => "#c586c0",
            TokenKind::DmlKeyword => "#d16969",
            TokenKind::TransactionKeyword => "#d7ba7d",
            TokenKind::PrimaryKeyword => "#569cd6",
            TokenKind::ClauseKeyword => "#4fc1ff",
            TokenKind::Function => "#dcdcaa",
            TokenKind::DataType => "#4ec9b0",
            TokenKind::Number => "#b5cea8",
            TokenKind::Operator | TokenKind::Plain => "#d4d4d4",
            TokenKind::Punctuation => "#808080",
        };
        Self {
            kind,
            color,
            bold: kind.is_keyword(),
            italic: matches!(kind, TokenKind::Comment | TokenKind::Null | TokenKind::Boolean),
        }
    }

    /// `sql-<kind>`, e.g. `sql-primary-keyword`.
    pub fn css_class(&self) -> String {
        format!("sql-{}", self.kind)
    }
}

impl From<TokenKind> for Style {
    fn from(kind: TokenKind) -> Self {
        Self::for_kind(kind)
    }
}
