use super::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub name: String,
    pub tables: Data<Table>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Data::new(),
        }
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.insert_table(table);
        self
    }

    /// Insert (or overwrite) a table, keeping the position of an overwritten one.
    pub fn insert_table(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        lookup(&self.tables, name)
    }
}
