use super::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    pub name: String,
    pub schemas: Data<Schema>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schemas: Data::new(),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.insert_schema(schema);
        self
    }

    /// Insert (or overwrite) a schema.
    pub fn insert_schema(&mut self, schema: Schema) {
        self.schemas.insert(schema.name.clone(), schema);
    }

    /// Add (or create) schema and insert the table.
    pub fn insert_table(&mut self, schema_name: &str, table: Table) {
        self.schemas
            .entry(schema_name.to_string())
            .or_insert_with(|| Schema::new(schema_name)) // Create/return schema
            .insert_table(table);
    }

    /// Add (or create) schema/table and insert the column.
    pub fn insert_column(&mut self, schema_name: &str, table_name: &str, column: &str) {
        self.schemas
            .entry(schema_name.to_string())
            .or_insert_with(|| Schema::new(schema_name)) // Create/return schema
            .tables
            .entry(table_name.to_string())
            .or_insert_with(|| Table::new(table_name)) // Create/return table
            .insert_column(column);
    }

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        lookup(&self.schemas, name)
    }
}
