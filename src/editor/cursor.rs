use crate::sql::tokenizer::is_word_byte;

/// Clamp `offset` into `text` and move it down onto a character boundary.
pub fn clamp_offset(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// The identifier being typed at the cursor.
///
/// Only the part left of the cursor counts: `end` is always the cursor itself,
/// so accepting a completion replaces `[start, end)` and leaves whatever sits
/// right of the cursor untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Scan backward from `cursor` over `[A-Za-z0-9_]` to find the current word.
pub fn current_word(buffer: &str, cursor: usize) -> WordSpan {
    let end = clamp_offset(buffer, cursor);
    let start = end
        - buffer.as_bytes()[..end]
            .iter()
            .rev()
            .take_while(|b| is_word_byte(**b))
            .count();
    WordSpan {
        text: buffer[start..end].to_string(),
        start,
        end,
    }
}

/// Start of the dotted identifier chain (`db.schema.ta`) ending at `cursor`.
pub(crate) fn chain_start(buffer: &str, cursor: usize) -> usize {
    cursor
        - buffer.as_bytes()[..cursor]
            .iter()
            .rev()
            .take_while(|b| is_word_byte(**b) || **b == b'.')
            .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("SELECT", 6, "SELECT", 0)]
    #[case("SELECT na", 9, "na", 7)]
    #[case("SELECT name FROM t", 9, "na", 7)]
    #[case("FROM db.sch", 11, "sch", 8)]
    #[case("FROM db.", 8, "", 8)]
    #[case("x = y", 4, "", 4)]
    #[case("", 0, "", 0)]
    #[case("a_b1", 4, "a_b1", 0)]
    fn finds_typed_prefix(
        #[case] buffer: &str,
        #[case] cursor: usize,
        #[case] text: &str,
        #[case] start: usize,
    ) {
        let word = current_word(buffer, cursor);
        assert_eq!(word.text, text);
        assert_eq!(word.start, start);
        assert_eq!(word.end, cursor);
    }

    #[test]
    fn never_extends_right_of_cursor() {
        let word = current_word("SELECT", 3);
        assert_eq!(word, WordSpan { text: "SEL".into(), start: 0, end: 3 });
        assert_eq!(word.range(), 0..3);
    }

    #[test]
    fn out_of_range_cursor_is_clamped() {
        let word = current_word("abc", 99);
        assert_eq!(word.text, "abc");
        assert_eq!(word.end, 3);
    }

    #[test]
    fn offsets_snap_to_char_boundaries() {
        // 'é' occupies bytes 1..3
        assert_eq!(clamp_offset("héllo", 2), 1);
        assert_eq!(current_word("héllo", 2).text, "h");
        assert_eq!(current_word("é1", 3).text, "1");
    }

    #[rstest]
    #[case("FROM db.sch.ta", 14, 5)]
    #[case("FROM db.", 8, 5)]
    #[case("FROM ", 5, 5)]
    #[case("x,y.z", 5, 2)]
    fn chain_start_includes_dots(#[case] buffer: &str, #[case] cursor: usize, #[case] start: usize) {
        assert_eq!(chain_start(buffer, cursor), start);
    }
}
