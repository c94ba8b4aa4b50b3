#![cfg(test)]
use crate::testing::*;
use crate::*;

fn suggest(catalog: &Catalog, context: SuggestionContext, partial: &str) -> Vec<String> {
    let config = EditorConfig::default();
    SuggestionEngine::new(catalog, &config).suggest(&context, partial)
}

fn context(kind: ContextKind) -> SuggestionContext {
    SuggestionContext::new(kind)
}

#[rstest]
fn keyword_cap_keeps_declared_order() {
    let owned: Vec<String> = (0..40).map(|i| format!("KW_{i:02}")).collect();
    let keywords: Vec<&str> = owned.iter().map(String::as_str).collect();
    let catalog = Catalog::new();
    let config = EditorConfig::default();

    let got = SuggestionEngine::new(&catalog, &config)
        .with_keywords(&keywords)
        .suggest(&context(ContextKind::Keyword), "kw");

    assert_eq!(got, owned[..15].to_vec());
}

#[rstest]
#[case("NUL", &["NULL", "NULLS FIRST", "NULLS LAST", "NULLIF"])]
#[case("co", &["COMMIT", "COUNT", "COALESCE", "CONCAT"])]
#[case("sel", &["SELECT"])]
#[case("zzz", &[])]
fn keywords_filter_by_prefix(#[case] partial: &str, #[case] expected: &[&str]) {
    assert_eq!(
        suggest(&Catalog::new(), context(ContextKind::Keyword), partial),
        expected
    );
}

#[rstest]
fn empty_word_offers_leading_keywords(sample_catalog: Catalog) {
    let got = suggest(&sample_catalog, context(ContextKind::Keyword), "");
    assert_eq!(got, SQL_KEYWORDS[..15].to_vec());
}

#[rstest]
#[case("", true)]
#[case("s", true)]
#[case("se", false)]
fn keyword_prefix_minimum_is_opt_in(
    sample_catalog: Catalog,
    #[case] partial: &str,
    #[case] hidden: bool,
) {
    let config = EditorConfig {
        min_keyword_prefix: 2,
        ..Default::default()
    };
    let got = SuggestionEngine::new(&sample_catalog, &config)
        .suggest(&context(ContextKind::Keyword), partial);
    assert_eq!(got.is_empty(), hidden);
}

#[rstest]
fn empty_catalog_has_no_databases() {
    assert!(suggest(&Catalog::new(), context(ContextKind::Database), "").is_empty());
    assert!(suggest(&Catalog::new(), context(ContextKind::Table), "").is_empty());
    assert!(suggest(&Catalog::new(), context(ContextKind::Column), "a").is_empty());
}

#[rstest]
#[case("", &["DBT_CORE_PROD_DATABASE", "ANALYTICS"])]
#[case("an", &["ANALYTICS"])]
#[case("x", &[])]
fn databases(sample_catalog: Catalog, #[case] partial: &str, #[case] expected: &[&str]) {
    assert_eq!(
        suggest(&sample_catalog, context(ContextKind::Database), partial),
        expected
    );
}

#[rstest]
fn schemas_in_catalog_order(sample_catalog: Catalog) {
    let ctx = context(ContextKind::Schema).in_database("DBT_CORE_PROD_DATABASE");
    assert_eq!(
        suggest(&sample_catalog, ctx.clone(), ""),
        ["CORE", "MARTS", "STAGING"]
    );
    assert_eq!(suggest(&sample_catalog, ctx, "m"), ["MARTS"]);
}

#[rstest]
fn schema_lookup_tolerates_typed_case(sample_catalog: Catalog) {
    let ctx = context(ContextKind::Schema).in_database("analytics");
    assert_eq!(suggest(&sample_catalog, ctx, ""), ["PUBLIC"]);
}

#[rstest]
#[case::no_database(context(ContextKind::Schema))]
#[case::unknown_database(context(ContextKind::Schema).in_database("NOPE"))]
#[case::unknown_schema(
    context(ContextKind::Table).in_database("ANALYTICS").in_schema("NOPE")
)]
#[case::unknown_table(
    context(ContextKind::Column)
        .in_database("ANALYTICS")
        .in_schema("PUBLIC")
        .in_table("NOPE")
)]
fn unknown_qualifiers_yield_nothing(sample_catalog: Catalog, #[case] ctx: SuggestionContext) {
    assert!(suggest(&sample_catalog, ctx, "").is_empty());
}

#[rstest]
fn qualified_tables(sample_catalog: Catalog) {
    let ctx = context(ContextKind::Table)
        .in_database("DBT_CORE_PROD_DATABASE")
        .in_schema("CORE");
    assert_eq!(suggest(&sample_catalog, ctx.clone(), ""), ["USERS", "ORDERS"]);
    assert_eq!(suggest(&sample_catalog, ctx, "o"), ["ORDERS"]);
}

#[rstest]
#[case("", &["USERS", "ORDERS", "DAILY_REVENUE", "STG_EVENTS", "EVENTS", "SESSIONS"])]
#[case("u", &["USERS"])]
#[case("s", &["STG_EVENTS", "SESSIONS"])]
fn unqualified_tables_are_flattened(
    sample_catalog: Catalog,
    #[case] partial: &str,
    #[case] expected: &[&str],
) {
    let ctx = context(ContextKind::Table).in_database("DBT_CORE_PROD_DATABASE");
    assert_eq!(suggest(&sample_catalog, ctx, partial), expected);
}

#[rstest]
fn qualified_columns(sample_catalog: Catalog) {
    let ctx = context(ContextKind::Column)
        .in_database("DBT_CORE_PROD_DATABASE")
        .in_schema("CORE")
        .in_table("ORDERS");
    assert_eq!(
        suggest(&sample_catalog, ctx.clone(), ""),
        ["ORDER_ID", "USER_ID", "AMOUNT", "CREATED_AT"]
    );
    assert_eq!(suggest(&sample_catalog, ctx, "cr"), ["CREATED_AT"]);
}

#[rstest]
fn unqualified_columns_are_flattened(sample_catalog: Catalog) {
    let ctx = context(ContextKind::Column).in_table("USERS");
    assert_eq!(
        suggest(&sample_catalog, ctx.clone(), "e"),
        ["EMAIL", "EVENT_ID", "EVENT_TYPE"]
    );
    assert_eq!(suggest(&sample_catalog, ctx, "").len(), 14);
}

#[rstest]
fn column_pool_is_capped_before_filtering(sample_catalog: Catalog) {
    let config = EditorConfig {
        column_pool_limit: 3,
        ..Default::default()
    };
    let engine = SuggestionEngine::new(&sample_catalog, &config);
    let ctx = context(ContextKind::Column);

    assert_eq!(engine.suggest(&ctx, ""), ["ID", "EMAIL", "CREATED_AT"]);
    // ORDER_ID is the fourth distinct column, outside the pool
    assert!(engine.suggest(&ctx, "order").is_empty());
}

#[rstest]
fn suggestion_limit_applies_to_catalog_names() {
    let catalog = Catalog::new().with_database(
        (0..30).fold(Database::new("DB"), |db, i| db.with_schema(Schema::new(format!("S{i}")))),
    );
    let ctx = context(ContextKind::Schema).in_database("DB");
    let got = suggest(&catalog, ctx, "s");
    assert_eq!(got.len(), 15);
    assert_eq!(got.first().map(String::as_str), Some("S0"));
    assert_eq!(got.last().map(String::as_str), Some("S14"));
}
