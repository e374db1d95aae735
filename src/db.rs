use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::builder::IndexSpec;
use crate::catalog::{SchemaCatalog, TableIndexState, TABLE_INDEX_STATES_SQL};
use crate::config::ConnectionParams;
use crate::errors::AuditError;

/// The single connection used for a run.
pub struct Database {
    pub pool: MySqlPool,
}

impl Database {
    pub async fn connect(params: &ConnectionParams) -> Result<Self, AuditError> {
        let options = MySqlConnectOptions::new()
            .host(&params.host)
            .port(params.port)
            .username(&params.username)
            .password(&params.password)
            .database(&params.database);
        Self::connect_with(options).await
    }

    /// Opens the connection and checks it answers.
    pub async fn connect_with(options: MySqlConnectOptions) -> Result<Self, AuditError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(AuditError::Connection)?;

        if let Err(e) = sqlx::query("SELECT 1").execute(&pool).await {
            pool.close().await;
            return Err(AuditError::Probe(e));
        }

        tracing::info!("Database connection established");
        Ok(Self { pool })
    }

    pub async fn close(self) {
        self.pool.close().await;
        tracing::debug!("Database connection closed");
    }
}

impl SchemaCatalog for Database {
    async fn table_index_states(
        &self,
        schema: &str,
        column: &str,
    ) -> Result<Vec<TableIndexState>, AuditError> {
        let rows: Vec<(String, i64, i64)> = sqlx::query_as(TABLE_INDEX_STATES_SQL)
            .bind(column)
            .bind(schema)
            .bind(column)
            .bind(schema)
            .fetch_all(&self.pool)
            .await
            .map_err(AuditError::Metadata)?;

        tracing::debug!("Read metadata for {} tables in {}", rows.len(), schema);
        Ok(rows.into_iter().map(TableIndexState::from_row).collect())
    }

    async fn add_index(&self, spec: &IndexSpec) -> Result<(), AuditError> {
        let statement = spec.alter_statement();
        tracing::debug!("Executing: {}", statement);

        sqlx::raw_sql(&statement)
            .execute(&self.pool)
            .await
            .map_err(|source| AuditError::CreateIndex {
                table: spec.table.clone(),
                source,
            })?;
        Ok(())
    }
}
