//! Syntax highlighting: the buffer is tokenized line by line and every token is
//! mapped to a fixed [`Style`]. The result is a flat list of segments with an
//! explicit break between lines, plus a mapping from logical caret offsets
//! into that list.
crate::reexport!(style);
crate::reexport!(segments);

use crate::*;

/// Tokenize and style the whole buffer.
///
/// Pure: rendering the same text twice yields equal segments. Segment text is
/// the unescaped buffer text; hosts that do not go through
/// [`DisplaySegments::to_html`] must escape it themselves.
pub fn render(buffer: &str) -> DisplaySegments {
    let mut segments = DisplaySegments::default();
    for (i, line) in tokenize(buffer).iter().enumerate() {
        if i > 0 {
            segments.push_break();
        }
        for token in line {
            segments.push_text(Style::for_kind(token.kind), token.text);
        }
    }
    trace!("Rendered {} byte(s) into {} segment(s)", buffer.len(), segments.len());
    segments
}
