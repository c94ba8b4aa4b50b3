use crate::*;
use confique::Config as _;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 15;
pub const DEFAULT_COLUMN_POOL_LIMIT: usize = 20;
pub const DEFAULT_MIN_KEYWORD_PREFIX: usize = 0;

/// Tunables for an editing session.
///
/// Every field has a default, so loading never fails for a missing variable;
/// it only fails when a variable is present but does not parse.
#[derive(Debug, Clone, PartialEq, Eq, confique::Config)]
pub struct EditorConfig {
    /// Maximum number of candidates shown in the suggestion panel.
    #[config(env = "SQLPAD_SUGGESTION_LIMIT", default = 15)]
    pub suggestion_limit: usize,
    /// Size of the whole-catalog column pool used when the table is unresolved.
    #[config(env = "SQLPAD_COLUMN_POOL_LIMIT", default = 20)]
    pub column_pool_limit: usize,
    /// Characters that must be typed before keywords are offered. Zero offers
    /// the whole keyword list on an empty word.
    #[config(env = "SQLPAD_MIN_KEYWORD_PREFIX", default = 0)]
    pub min_keyword_prefix: usize,
}

impl EditorConfig {
    /// Load the configuration from the current environment.
    pub fn load() -> Result<Self> {
        let config = Self::builder().env().load()?;
        debug!("Loaded editor config {config:?}");
        Ok(config)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            column_pool_limit: DEFAULT_COLUMN_POOL_LIMIT,
            min_keyword_prefix: DEFAULT_MIN_KEYWORD_PREFIX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_declared_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.suggestion_limit, 15);
        assert_eq!(config.column_pool_limit, 20);
        assert_eq!(config.min_keyword_prefix, 0);
    }

    #[test]
    fn builder_without_sources_uses_defaults() {
        let config = EditorConfig::builder()
            .load()
            .expect("every field has a default");
        assert_eq!(config, EditorConfig::default());
    }
}
