use super::*;

/// Turns a [`SuggestionContext`] and the partially typed word into the list of
/// candidates shown in the panel.
///
/// Candidates keep the order of their source (catalog insertion order, or the
/// declaration order of the keyword list); nothing is sorted.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'a> {
    catalog: &'a Catalog,
    config: &'a EditorConfig,
    keywords: &'a [&'a str],
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a EditorConfig) -> Self {
        Self {
            catalog,
            config,
            keywords: SQL_KEYWORDS,
        }
    }

    /// Use a different keyword list, e.g. for another SQL dialect.
    pub fn with_keywords(mut self, keywords: &'a [&'a str]) -> Self {
        self.keywords = keywords;
        self
    }

    /// Candidates for `partial`, matched case-insensitively by prefix and
    /// capped at the configured suggestion limit.
    pub fn suggest(&self, context: &SuggestionContext, partial: &str) -> Vec<String> {
        let catalog = self.catalog;
        let suggestions = match (
            context.kind,
            context.database.as_deref(),
            context.schema.as_deref(),
            context.table.as_deref(),
        ) {
            (ContextKind::Keyword, ..) => {
                if partial.chars().count() < self.config.min_keyword_prefix {
                    Vec::new()
                } else {
                    self.filter(self.keywords.iter().copied(), partial)
                }
            }
            (ContextKind::Database, ..) => self.filter(catalog.list_databases(), partial),
            (ContextKind::Schema, Some(database), ..) => {
                self.filter(catalog.list_schemas(database), partial)
            }
            (ContextKind::Schema, None, ..) => Vec::new(),
            (ContextKind::Table, Some(database), Some(schema), _) => {
                self.filter(catalog.list_tables(database, schema), partial)
            }
            (ContextKind::Table, ..) => {
                let tables = catalog.all_tables();
                self.filter(tables.iter().map(String::as_str), partial)
            }
            (ContextKind::Column, Some(database), Some(schema), Some(table)) => {
                self.filter(catalog.list_columns(database, schema, table), partial)
            }
            (ContextKind::Column, ..) => {
                let columns = catalog.all_columns();
                let pool = columns
                    .iter()
                    .take(self.config.column_pool_limit)
                    .map(String::as_str);
                self.filter(pool, partial)
            }
        };
        debug!(
            "{} suggestion(s) for {} context with prefix {partial:?}",
            suggestions.len(),
            context.kind
        );
        suggestions
    }

    fn filter<'s>(&self, candidates: impl Iterator<Item = &'s str>, partial: &str) -> Vec<String> {
        candidates
            .filter(|candidate| has_prefix_ignore_case(candidate, partial))
            .take(self.config.suggestion_limit)
            .map(str::to_string)
            .collect()
    }
}

fn has_prefix_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
