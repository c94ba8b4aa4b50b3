use super::*;
use std::fmt::Write as _;

/// One piece of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySegment {
    /// Logical (unescaped) text painted with one style.
    Text { style: Style, text: String },
    /// End of a line.
    Break,
}

impl DisplaySegment {
    pub fn text(style: Style, text: impl Into<String>) -> Self {
        DisplaySegment::Text {
            style,
            text: text.into(),
        }
    }

    /// Bytes of the buffer this segment stands for; a break is the `\n`.
    pub fn logical_len(&self) -> usize {
        match self {
            DisplaySegment::Text { text, .. } => text.len(),
            DisplaySegment::Break => 1,
        }
    }
}

/// Caret location inside [`DisplaySegments`]: `offset` bytes into segment
/// `segment`. A caret at the end of a line sits at offset 0 of its break, and
/// a caret at the end of the buffer has `segment == len()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaretPosition {
    pub segment: usize,
    pub offset: usize,
}

/// Rendered buffer, in order. Adjacent tokens sharing a style are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::Deref)]
pub struct DisplaySegments(Vec<DisplaySegment>);

impl DisplaySegments {
    pub(crate) fn push_text(&mut self, style: Style, text: &str) {
        if let Some(DisplaySegment::Text {
            style: last,
            text: last_text,
        }) = self.0.last_mut()
            && *last == style
        {
            last_text.push_str(text);
            return;
        }
        self.0.push(DisplaySegment::text(style, text));
    }

    pub(crate) fn push_break(&mut self) {
        self.0.push(DisplaySegment::Break);
    }

    /// The buffer the segments were rendered from.
    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .map(|segment| match segment {
                DisplaySegment::Text { text, .. } => text.as_str(),
                DisplaySegment::Break => "\n",
            })
            .collect()
    }

    /// Map a logical byte offset of the buffer onto the segments. Offsets past
    /// the end land at the end.
    pub fn caret_at(&self, offset: usize) -> CaretPosition {
        let mut start = 0;
        for (segment, item) in self.0.iter().enumerate() {
            let end = start + item.logical_len();
            if offset < end {
                return CaretPosition {
                    segment,
                    offset: offset - start,
                };
            }
            start = end;
        }
        CaretPosition {
            segment: self.0.len(),
            offset: 0,
        }
    }

    /// HTML markup: one `<span class="sql-…">` per text segment with `&`, `<`
    /// and `>` escaped, `<br>` per break.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for segment in &self.0 {
            match segment {
                DisplaySegment::Text { style, text } => {
                    let _ = write!(html, "<span class=\"{}\">", style.css_class());
                    escape_into(&mut html, text);
                    html.push_str("</span>");
                }
                DisplaySegment::Break => html.push_str("<br>"),
            }
        }
        html
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn caret(segment: usize, offset: usize) -> CaretPosition {
        CaretPosition { segment, offset }
    }

    #[test]
    fn html_escapes_markup_characters() {
        let html = render("a<b -- x & y").to_html();
        assert_eq!(
            html,
            "<span class=\"sql-plain-text\">a</span>\
             <span class=\"sql-operator\">&lt;</span>\
             <span class=\"sql-plain-text\">b </span>\
             <span class=\"sql-comment\">-- x &amp; y</span>"
        );
    }

    #[test]
    fn html_breaks_lines() {
        assert_eq!(
            render("1\n2").to_html(),
            "<span class=\"sql-number\">1</span><br><span class=\"sql-number\">2</span>"
        );
    }

    // segments of "SELECT a\nFROM t": [SELECT][ a][\n][FROM][ t]
    #[rstest]
    #[case(0, caret(0, 0))]
    #[case(3, caret(0, 3))]
    #[case(6, caret(1, 0))]
    #[case(8, caret(2, 0))]
    #[case(9, caret(3, 0))]
    #[case(11, caret(3, 2))]
    #[case(15, caret(5, 0))]
    #[case(99, caret(5, 0))]
    fn caret_maps_logical_offsets(#[case] offset: usize, #[case] expected: CaretPosition) {
        let segments = render("SELECT a\nFROM t");
        assert_eq!(segments.len(), 5);
        assert_eq!(segments.caret_at(offset), expected);
    }

    #[test]
    fn caret_survives_multiple_spans_per_line() {
        let buffer = "SELECT count(id) FROM t";
        let segments = render(buffer);
        let position = segments.caret_at(13);
        let DisplaySegment::Text { text, .. } = &segments[position.segment] else {
            panic!("caret landed on a break");
        };
        assert_eq!(&text[position.offset..position.offset + 1], &buffer[13..14]);
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn caret_lands_inside_segments(buffer in any::<String>(), offset in any::<usize>()) {
            let segments = render(&buffer);
            prop_assert_eq!(segments.plain_text(), buffer.as_str());
            let caret = segments.caret_at(offset);
            match segments.get(caret.segment) {
                Some(segment) => prop_assert!(caret.offset < segment.logical_len()),
                None => {
                    prop_assert_eq!(caret.segment, segments.len());
                    prop_assert_eq!(caret.offset, 0);
                }
            }
        }
    }
}
