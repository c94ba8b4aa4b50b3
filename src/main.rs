use sqlpad::{Catalog, Editor, EditorConfig, Key, Result};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEMO_COLUMNS: &[&str] = &[
    "DBT_CORE_PROD_DATABASE.CORE.USERS.ID",
    "DBT_CORE_PROD_DATABASE.CORE.USERS.EMAIL",
    "DBT_CORE_PROD_DATABASE.CORE.USERS.CREATED_AT",
    "DBT_CORE_PROD_DATABASE.CORE.ORDERS.ORDER_ID",
    "DBT_CORE_PROD_DATABASE.CORE.ORDERS.USER_ID",
    "DBT_CORE_PROD_DATABASE.CORE.ORDERS.AMOUNT",
    "DBT_CORE_PROD_DATABASE.MARTS.DAILY_REVENUE.DAY",
    "DBT_CORE_PROD_DATABASE.MARTS.DAILY_REVENUE.REVENUE",
    "ANALYTICS.PUBLIC.EVENTS.ID",
    "ANALYTICS.PUBLIC.EVENTS.NAME",
    "ANALYTICS.PUBLIC.EVENTS.USER_ID",
];

/// Types every stdin line into a fresh editor and prints what the panel and
/// the highlighter would show at the end of the line.
fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = EditorConfig::load()?;
    let catalog = Arc::new(Catalog::from_qualified_columns(DEMO_COLUMNS)?);
    info!("Demo catalog ready with {} databases", catalog.list_databases().count());

    let mut stdout = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut editor = Editor::new(Arc::clone(&catalog)).with_config(config.clone());
        for c in line.chars() {
            editor.handle_key(Key::Char(c));
        }
        debug!("Context at end of line: {:?}", editor.context());

        match editor.suggestions().list() {
            Some(list) => writeln!(stdout, "suggestions: {}", list.items().join(", "))?,
            None => writeln!(stdout, "suggestions: (none)")?,
        }
        writeln!(stdout, "{}", editor.render().to_html())?;
    }
    Ok(())
}
