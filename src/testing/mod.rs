#![cfg(test)]
crate::reexport!(context);
use crate::*;
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Two databases, one of which repeats table and column names across schemas
/// so de-duplication and ordering can be observed.
#[fixture]
pub fn sample_catalog() -> Catalog {
    common_init();
    Catalog::new()
        .with_database(
            Database::new("DBT_CORE_PROD_DATABASE")
                .with_schema(
                    Schema::new("CORE")
                        .with_table(Table::new_with("USERS", ["ID", "EMAIL", "CREATED_AT"]))
                        .with_table(Table::new_with(
                            "ORDERS",
                            ["ORDER_ID", "USER_ID", "AMOUNT", "CREATED_AT"],
                        )),
                )
                .with_schema(
                    Schema::new("MARTS")
                        .with_table(Table::new_with("DAILY_REVENUE", ["DAY", "REVENUE"]))
                        .with_table(Table::new_with("USERS", ["ID", "LIFETIME_VALUE"])),
                )
                .with_schema(Schema::new("STAGING").with_table(Table::new_with(
                    "STG_EVENTS",
                    ["EVENT_ID", "USER_ID", "EVENT_TYPE"],
                ))),
        )
        .with_database(
            Database::new("ANALYTICS").with_schema(
                Schema::new("PUBLIC")
                    .with_table(Table::new_with("EVENTS", ["ID", "NAME", "USER_ID"]))
                    .with_table(Table::new_with(
                        "SESSIONS",
                        ["SESSION_ID", "USER_ID", "STARTED_AT"],
                    )),
            ),
        )
}

mod fixture_tests {
    use super::*;

    #[rstest]
    fn sample_catalog_has_both_databases(sample_catalog: Catalog) {
        assert_eq!(sample_catalog.list_databases().count(), 2);
    }

    #[test_context(EditorSession)]
    #[test]
    fn session_starts_empty_and_closed(ctx: &mut EditorSession) {
        assert_eq!(ctx.editor.text(), "");
        assert_eq!(ctx.editor.cursor(), 0);
        assert!(!ctx.editor.suggestions().is_open());
    }
}
