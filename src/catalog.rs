//! Schema catalog: the database → schema → table → column hierarchy used for
//! autocomplete.
//!
//! Every level is an insertion-ordered map so suggestions come back in the
//! order the metadata collaborator supplied them. Lookups never fail: an
//! unknown key simply yields an empty sequence.
crate::reexport!(table);
crate::reexport!(schema);
crate::reexport!(database);

use crate::*;
use indexmap::IndexMap;
use itertools::Itertools as _;
use moka::sync::Cache;
use std::{fmt, sync::Arc};

pub type Data<T> = IndexMap<String, T>;

/// Exact key first, then the first ASCII case-insensitive match in order.
fn lookup<'a, T>(data: &'a Data<T>, name: &str) -> Option<&'a T> {
    data.get(name).or_else(|| {
        data.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Flattened {
    Tables,
    Columns,
}

pub struct Catalog {
    databases: Data<Database>,
    flattened: Cache<Flattened, Arc<[String]>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            databases: Data::new(),
            flattened: Cache::new(2),
        }
    }

    /// Build a catalog from `database.schema.table.column` paths, creating
    /// intermediate levels as they first appear.
    pub fn from_qualified_columns<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for path in paths {
            let path = path.as_ref();
            let Some((database, schema, table, column)) = path
                .split('.')
                .filter(|segment| !segment.is_empty())
                .collect_tuple()
            else {
                return Err(Error::InvalidCatalogPath(path.to_string()));
            };
            catalog.insert_column(database, schema, table, column);
        }
        Ok(catalog)
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.insert_database(database);
        self
    }

    /// Insert (or overwrite) a database.
    pub fn insert_database(&mut self, database: Database) {
        self.databases.insert(database.name.clone(), database);
        self.flattened.invalidate_all();
    }

    /// Add (or create) database/schema/table and insert the column.
    pub fn insert_column(&mut self, database: &str, schema: &str, table: &str, column: &str) {
        self.databases
            .entry(database.to_string())
            .or_insert_with(|| Database::new(database))
            .insert_column(schema, table, column);
        self.flattened.invalidate_all();
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }

    pub fn database(&self, name: &str) -> Option<&Database> {
        lookup(&self.databases, name)
    }

    pub fn databases(&self) -> impl Iterator<Item = &Database> {
        self.databases.values()
    }

    pub fn list_databases(&self) -> impl Iterator<Item = &str> {
        self.databases.keys().map(String::as_str)
    }

    pub fn list_schemas<'a>(&'a self, database: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.database(database)
            .into_iter()
            .flat_map(|db| db.schemas.keys())
            .map(String::as_str)
    }

    pub fn list_tables<'a>(
        &'a self,
        database: &str,
        schema: &str,
    ) -> impl Iterator<Item = &'a str> + use<'a> {
        self.database(database)
            .and_then(|db| db.schema(schema))
            .into_iter()
            .flat_map(|schema| schema.tables.keys())
            .map(String::as_str)
    }

    pub fn list_columns<'a>(
        &'a self,
        database: &str,
        schema: &str,
        table: &str,
    ) -> impl Iterator<Item = &'a str> + use<'a> {
        self.database(database)
            .and_then(|db| db.schema(schema))
            .and_then(|schema| schema.table(table))
            .into_iter()
            .flat_map(|table| table.columns.iter())
            .map(String::as_str)
    }

    /// Every table name in the catalog, first occurrence wins.
    pub fn all_tables(&self) -> Arc<[String]> {
        self.flattened.get_with(Flattened::Tables, || {
            trace!("Flattening tables across {} databases", self.databases.len());
            self.databases
                .values()
                .flat_map(|db| db.schemas.values())
                .flat_map(|schema| schema.tables.keys())
                .unique()
                .cloned()
                .collect()
        })
    }

    /// Every column name in the catalog, first occurrence wins.
    pub fn all_columns(&self) -> Arc<[String]> {
        self.flattened.get_with(Flattened::Columns, || {
            trace!("Flattening columns across {} databases", self.databases.len());
            self.databases
                .values()
                .flat_map(|db| db.schemas.values())
                .flat_map(|schema| schema.tables.values())
                .flat_map(|table| table.columns.iter())
                .unique()
                .cloned()
                .collect()
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// A clone gets its own memo so the two catalogs can diverge afterwards.
impl Clone for Catalog {
    fn clone(&self) -> Self {
        Self {
            databases: self.databases.clone(),
            flattened: Cache::new(2),
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("databases", &self.databases)
            .finish_non_exhaustive()
    }
}

impl FromIterator<Database> for Catalog {
    fn from_iter<T: IntoIterator<Item = Database>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for database in iter {
            catalog.insert_database(database);
        }
        catalog
    }
}
