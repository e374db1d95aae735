use std::io::Write;

use crate::catalog::SchemaCatalog;
use crate::errors::AuditError;

/// Human-readable form of the index naming scheme, used in the report.
pub const INDEX_NAME_TEMPLATE: &str = "index_<table>_on_{column}";

/// Name given to the index added on `table`.
pub fn index_name(table: &str, column: &str) -> String {
    format!("index_{}_on_{}", table, column)
}

/// Quotes a MySQL identifier, doubling any embedded backtick.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// A single-column index to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub table: String,
    pub column: String,
    pub name: String,
}

impl IndexSpec {
    pub fn new(table: &str, column: &str) -> Self {
        Self {
            table: table.to_string(),
            column: column.to_string(),
            name: index_name(table, column),
        }
    }

    pub fn alter_statement(&self) -> String {
        format!(
            "ALTER TABLE {} ADD KEY {} ({})",
            quote_identifier(&self.table),
            quote_identifier(&self.name),
            quote_identifier(&self.column)
        )
    }
}

/// Adds an index on `column` to each of `tables`, one at a time and in order.
///
/// Stops at the first failure. Indexes already created stay; a rerun skips
/// them because they then count as indexed.
pub async fn build_indexes<C, W>(
    catalog: &C,
    column: &str,
    tables: &[String],
    out: &mut W,
) -> Result<usize, AuditError>
where
    C: SchemaCatalog,
    W: Write,
{
    for (built, table) in tables.iter().enumerate() {
        writeln!(out, "Adding index to {}", table)?;
        out.flush()?;

        let spec = IndexSpec::new(table, column);
        if let Err(e) = catalog.add_index(&spec).await {
            tracing::error!(
                "Index creation stopped at {} after {} of {} tables",
                table,
                built,
                tables.len()
            );
            return Err(e);
        }
        tracing::info!("Created index {} on {}", spec.name, spec.table);
    }

    Ok(tables.len())
}
