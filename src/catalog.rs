//! Schema introspection seam.
//!
//! The workflow only talks to the database through [`SchemaCatalog`], which
//! keeps it testable against an in-memory catalog.

use crate::builder::IndexSpec;
use crate::errors::AuditError;

/// One row per base table in the schema: is the column there, and does some
/// index start with it. Views are left out since they cannot be indexed.
///
/// Arguments in order: column name, schema name, column name, schema name.
pub const TABLE_INDEX_STATES_SQL: &str = r#"
    SELECT CAST(t.table_name AS CHAR) AS table_name,
           CAST(MAX(CASE WHEN t.column_name = ? THEN 1 ELSE 0 END) AS SIGNED) AS has_column,
           CAST(MAX(CASE WHEN x.table_name IS NOT NULL THEN 1 ELSE 0 END) AS SIGNED) AS has_index
    FROM information_schema.columns t
    JOIN information_schema.tables b
      ON b.table_schema = t.table_schema
     AND b.table_name = t.table_name
     AND b.table_type = 'BASE TABLE'
    LEFT JOIN (
        SELECT DISTINCT table_name
        FROM information_schema.statistics
        WHERE table_schema = ? AND column_name = ? AND seq_in_index = 1
    ) x ON t.table_name = x.table_name
    WHERE t.table_schema = ?
    GROUP BY t.table_name
"#;

/// Classification input for a single table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIndexState {
    pub table: String,
    /// The table has a column named exactly the audited column.
    pub has_column: bool,
    /// Some index on the table has the audited column as its first key part.
    pub has_index: bool,
}

impl TableIndexState {
    pub fn new(table: impl Into<String>, has_column: bool, has_index: bool) -> Self {
        Self {
            table: table.into(),
            has_column,
            has_index,
        }
    }

    /// Builds a record from the raw `(table_name, has_column, has_index)` row.
    pub fn from_row((table, has_column, has_index): (String, i64, i64)) -> Self {
        Self::new(table, has_column != 0, has_index != 0)
    }
}

/// Read and alter access to one schema.
#[allow(async_fn_in_trait)]
pub trait SchemaCatalog {
    /// Returns one record per table in `schema`, in the server's order.
    async fn table_index_states(
        &self,
        schema: &str,
        column: &str,
    ) -> Result<Vec<TableIndexState>, AuditError>;

    /// Creates the index described by `spec`.
    async fn add_index(&self, spec: &IndexSpec) -> Result<(), AuditError>;
}
