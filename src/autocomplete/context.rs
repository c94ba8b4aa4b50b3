use super::*;
use crate::sql::tokenizer::{is_word_byte, match_phrase};

/// Keywords after which a relation name (`db.schema.table`) is expected.
const RELATION_KEYWORDS: &[&str] = &["FROM", "JOIN", "UPDATE", "INTO"];

/// Keywords after which a column of the query's relation is expected.
const PROJECTION_KEYWORDS: &[&str] = &["SELECT", "WHERE", "ORDER BY", "GROUP BY"];

/// The kind of name being completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContextKind {
    #[default]
    #[display("keyword")]
    Keyword,
    #[display("database")]
    Database,
    #[display("schema")]
    Schema,
    #[display("table")]
    Table,
    #[display("column")]
    Column,
}

/// What is being completed, plus the qualifiers already typed in front of it.
///
/// Qualifiers keep the case they were typed in; catalog lookups deal with
/// case differences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionContext {
    pub kind: ContextKind,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub table: Option<String>,
}

impl SuggestionContext {
    pub fn new(kind: ContextKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn in_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn in_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }
}

/// The keyword right before the identifier at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    Relation,
    Projection,
}

/// Classify the completion context at `cursor`.
///
/// Rules, first match wins:
/// 1. `FROM|JOIN|UPDATE|INTO` + whitespace + a chain of 0-3 segments selects
///    table (bare), database, schema or table.
/// 2. `SELECT|WHERE|ORDER BY|GROUP BY` + whitespace + an undotted word selects
///    columns of the last `FROM <relation>` anywhere in the buffer, or keywords
///    when there is none.
/// 3. A chain of 2-4 segments selects schema, table or column.
/// 4. Keywords.
///
/// A `.` right before the cursor leaves an empty last segment, so the chain in
/// front of the dot alone decides (rule 1 or 3) and suggestions show up as
/// soon as the dot is typed.
pub fn classify(buffer: &str, cursor: usize) -> SuggestionContext {
    let cursor = clamp_offset(buffer, cursor);
    let start = chain_start(buffer, cursor);
    let chain = &buffer[start..cursor];
    let segments: Vec<&str> = if chain.is_empty() {
        Vec::new()
    } else {
        chain.split('.').collect()
    };
    let lead = lead_keyword(&buffer[..start]);

    let context = relation_context(lead, &segments)
        .or_else(|| projection_context(lead, &segments, buffer))
        .or_else(|| qualified_context(&segments))
        .unwrap_or_default();
    trace!("Cursor {cursor} chain {chain:?} lead {lead:?} classified as {context:?}");
    context
}

fn lead_keyword(head: &str) -> Option<Lead> {
    let trimmed = head.trim_end();
    if trimmed.len() == head.len() {
        return None; // no whitespace between keyword and identifier
    }
    if RELATION_KEYWORDS
        .iter()
        .any(|kw| ends_with_phrase(trimmed, kw))
    {
        Some(Lead::Relation)
    } else if PROJECTION_KEYWORDS
        .iter()
        .any(|kw| ends_with_phrase(trimmed, kw))
    {
        Some(Lead::Projection)
    } else {
        None
    }
}

/// Case-insensitive, word-bounded suffix match; a space in `phrase` matches
/// one or more whitespace characters.
fn ends_with_phrase(text: &str, phrase: &str) -> bool {
    let mut rest = text;
    for (i, word) in phrase.rsplit(' ').enumerate() {
        if i > 0 {
            let trimmed = rest.trim_end();
            if trimmed.len() == rest.len() {
                return false;
            }
            rest = trimmed;
        }
        let Some(split) = rest.len().checked_sub(word.len()) else {
            return false;
        };
        match rest.get(split..) {
            Some(tail) if tail.eq_ignore_ascii_case(word) => rest = &rest[..split],
            _ => return false,
        }
    }
    !rest.bytes().next_back().is_some_and(is_word_byte)
}

fn relation_context(lead: Option<Lead>, segments: &[&str]) -> Option<SuggestionContext> {
    if lead != Some(Lead::Relation) {
        return None;
    }
    let context = match *segments {
        [] => SuggestionContext::new(ContextKind::Table),
        [_] => SuggestionContext::new(ContextKind::Database),
        [database, _] => SuggestionContext::new(ContextKind::Schema).in_database(database),
        [database, schema, _] => SuggestionContext::new(ContextKind::Table)
            .in_database(database)
            .in_schema(schema),
        _ => return None,
    };
    Some(context)
}

fn projection_context(
    lead: Option<Lead>,
    segments: &[&str],
    buffer: &str,
) -> Option<SuggestionContext> {
    if lead != Some(Lead::Projection) || segments.len() > 1 {
        return None;
    }
    let context = match last_relation(buffer).as_deref() {
        Some([.., database, schema, table]) => SuggestionContext::new(ContextKind::Column)
            .in_database(*database)
            .in_schema(*schema)
            .in_table(*table),
        Some([schema, table]) => SuggestionContext::new(ContextKind::Column)
            .in_schema(*schema)
            .in_table(*table),
        Some([table]) => SuggestionContext::new(ContextKind::Column).in_table(*table),
        _ => SuggestionContext::new(ContextKind::Keyword),
    };
    Some(context)
}

fn qualified_context(segments: &[&str]) -> Option<SuggestionContext> {
    let context = match *segments {
        [database, _] => SuggestionContext::new(ContextKind::Schema).in_database(database),
        [database, schema, _] => SuggestionContext::new(ContextKind::Table)
            .in_database(database)
            .in_schema(schema),
        [database, schema, table, _] => SuggestionContext::new(ContextKind::Column)
            .in_database(database)
            .in_schema(schema)
            .in_table(table),
        _ => return None,
    };
    Some(context)
}

/// Segments of the relation named by the last `FROM <a[.b[.c]]>` in `buffer`.
fn last_relation(buffer: &str) -> Option<Vec<&str>> {
    let bytes = buffer.as_bytes();
    let mut last = None;
    for (i, _) in buffer.match_indices(['F', 'f']) {
        if i > 0 && is_word_byte(bytes[i - 1]) {
            continue;
        }
        let Some(len) = match_phrase(&buffer[i..], "FROM") else {
            continue;
        };
        let after = &buffer[i + len..];
        let relation = after.trim_start();
        if relation.len() == after.len() {
            continue;
        }
        let end = relation
            .bytes()
            .take_while(|&b| is_word_byte(b) || b == b'.')
            .count();
        let segments: Vec<&str> = relation[..end]
            .split('.')
            .take_while(|segment| !segment.is_empty())
            .collect();
        if !segments.is_empty() {
            last = Some(segments);
        }
    }
    last
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn qualifier_count(context: &SuggestionContext) -> usize {
        [&context.database, &context.schema, &context.table]
            .into_iter()
            .filter(|q| q.is_some())
            .count()
    }

    proptest! {
        #[test]
        fn any_buffer_and_offset_classify(buffer in any::<String>(), cursor in any::<usize>()) {
            let context = classify(&buffer, cursor);
            if matches!(context.kind, ContextKind::Keyword | ContextKind::Database) {
                prop_assert_eq!(qualifier_count(&context), 0);
            }
        }

        #[test]
        fn query_fragments_classify(
            buffer in "(SELECT|FROM|WHERE|JOIN|ORDER BY|[a-z_]{1,5}|\\.| |\n){0,16}",
            cursor in 0usize..128,
        ) {
            let context = classify(&buffer, cursor);
            prop_assert!(qualifier_count(&context) <= 3);
            if context.kind == ContextKind::Schema {
                prop_assert!(context.database.is_some());
            }
        }
    }
}
