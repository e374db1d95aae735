/// End-to-end workflow tests against an in-memory catalog
/// Covers reporting, confirmation and partial index creation
use std::io::Cursor;
use std::sync::Mutex;

use build_mysql_indexes::builder::IndexSpec;
use build_mysql_indexes::catalog::{SchemaCatalog, TableIndexState};
use build_mysql_indexes::config::{Config, ConnectionParams};
use build_mysql_indexes::errors::AuditError;
use build_mysql_indexes::workflow::{run, Outcome};

/// Catalog double that records every index it is asked to create.
#[derive(Default)]
struct FakeCatalog {
    states: Vec<TableIndexState>,
    fail_metadata: bool,
    fail_on_table: Option<String>,
    attempted: Mutex<Vec<IndexSpec>>,
    created: Mutex<Vec<String>>,
}

impl FakeCatalog {
    fn with_tables(states: Vec<TableIndexState>) -> Self {
        Self {
            states,
            ..Default::default()
        }
    }

    fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    fn attempted(&self) -> Vec<IndexSpec> {
        self.attempted.lock().unwrap().clone()
    }
}

impl SchemaCatalog for FakeCatalog {
    async fn table_index_states(
        &self,
        _schema: &str,
        _column: &str,
    ) -> Result<Vec<TableIndexState>, AuditError> {
        if self.fail_metadata {
            return Err(AuditError::Metadata(sqlx::Error::Protocol(
                "information_schema unavailable".to_string(),
            )));
        }
        Ok(self.states.clone())
    }

    async fn add_index(&self, spec: &IndexSpec) -> Result<(), AuditError> {
        self.attempted.lock().unwrap().push(spec.clone());
        if self.fail_on_table.as_deref() == Some(spec.table.as_str()) {
            return Err(AuditError::CreateIndex {
                table: spec.table.clone(),
                source: sqlx::Error::Protocol("Lock wait timeout exceeded".to_string()),
            });
        }
        self.created.lock().unwrap().push(spec.name.clone());
        Ok(())
    }
}

fn config() -> Config {
    Config {
        connection: ConnectionParams {
            username: "root".to_string(),
            password: "pass".to_string(),
            host: "localhost".to_string(),
            port: 3306,
            database: "shop".to_string(),
        },
        column: "updated".to_string(),
        assume_yes: false,
    }
}

async fn run_with_input(
    catalog: &FakeCatalog,
    config: &Config,
    input: &str,
) -> (Result<Outcome, AuditError>, String, u64) {
    let mut input = Cursor::new(input.to_string());
    let mut out = Vec::new();
    let result = run(catalog, config, &mut input, &mut out).await;
    (result, String::from_utf8(out).unwrap(), input.position())
}

fn scenario_a() -> FakeCatalog {
    FakeCatalog::with_tables(vec![
        TableIndexState::new("users", true, true),
        TableIndexState::new("orders", true, false),
        TableIndexState::new("logs", false, false),
    ])
}

#[tokio::test]
async fn test_scenario_a_report_and_single_index() {
    let catalog = scenario_a();
    let (result, out, _) = run_with_input(&catalog, &config(), "y\n").await;

    assert_eq!(result.unwrap(), Outcome::Indexed(1));
    assert!(out.contains("The following tables have the 'updated' column indexed:\nusers\n"));
    assert!(out.contains("The following tables don't have the 'updated' column:\nlogs\n"));
    assert!(out.contains(
        "An index on the 'updated' column named 'index_<table>_on_updated' will be added to the following tables:\norders\n"
    ));
    assert!(out.contains("Build these indexes now? [Y/n]: "));
    assert!(out.ends_with("Adding index to orders\n"));

    let attempted = catalog.attempted();
    assert_eq!(attempted.len(), 1);
    assert_eq!(attempted[0].name, "index_orders_on_updated");
    assert_eq!(
        attempted[0].alter_statement(),
        "ALTER TABLE `orders` ADD KEY `index_orders_on_updated` (`updated`)"
    );
}

#[tokio::test]
async fn test_scenario_b_nothing_to_index_never_prompts() {
    let catalog = FakeCatalog::with_tables(vec![
        TableIndexState::new("users", true, true),
        TableIndexState::new("logs", false, false),
    ]);
    let (result, out, consumed) = run_with_input(&catalog, &config(), "n\n").await;

    assert_eq!(result.unwrap(), Outcome::NothingToIndex);
    assert!(out.ends_with("\nNo indexes to add\n"));
    assert!(!out.contains("[Y/n]"));
    assert_eq!(consumed, 0);
    assert!(catalog.attempted().is_empty());
}

#[tokio::test]
async fn test_scenario_c_abort_keeps_earlier_indexes() {
    let mut catalog = FakeCatalog::with_tables(vec![
        TableIndexState::new("accounts", true, false),
        TableIndexState::new("invoices", true, false),
        TableIndexState::new("payments", true, false),
    ]);
    catalog.fail_on_table = Some("invoices".to_string());

    let (result, out, _) = run_with_input(&catalog, &config(), "\n").await;

    match result {
        Err(AuditError::CreateIndex { table, .. }) => assert_eq!(table, "invoices"),
        other => panic!("Expected index creation failure, got {:?}", other),
    }
    assert_eq!(catalog.created(), vec!["index_accounts_on_updated"]);
    assert_eq!(catalog.attempted().len(), 2);
    assert!(out.contains("Adding index to accounts\nAdding index to invoices\n"));
    assert!(!out.contains("Adding index to payments"));
}

#[tokio::test]
async fn test_decline_builds_nothing() {
    let catalog = scenario_a();
    let (result, out, _) = run_with_input(&catalog, &config(), "sure\nN\n").await;

    assert_eq!(result.unwrap(), Outcome::Declined);
    assert_eq!(out.matches("Build these indexes now? [Y/n]: ").count(), 2);
    assert!(catalog.attempted().is_empty());
}

#[tokio::test]
async fn test_closed_input_builds_nothing() {
    let catalog = scenario_a();
    let (result, _, _) = run_with_input(&catalog, &config(), "").await;

    assert_eq!(result.unwrap(), Outcome::Declined);
    assert!(catalog.attempted().is_empty());
}

#[tokio::test]
async fn test_assume_yes_skips_prompt() {
    let catalog = FakeCatalog::with_tables(vec![
        TableIndexState::new("orders", true, false),
        TableIndexState::new("carts", true, false),
    ]);
    let mut config = config();
    config.assume_yes = true;

    let (result, out, consumed) = run_with_input(&catalog, &config, "n\n").await;

    assert_eq!(result.unwrap(), Outcome::Indexed(2));
    assert!(!out.contains("[Y/n]"));
    assert_eq!(consumed, 0);
    assert_eq!(
        catalog.created(),
        vec!["index_orders_on_updated", "index_carts_on_updated"]
    );
}

#[tokio::test]
async fn test_metadata_failure_prints_no_report() {
    let catalog = FakeCatalog {
        fail_metadata: true,
        ..scenario_a()
    };
    let (result, out, _) = run_with_input(&catalog, &config(), "y\n").await;

    let err = result.unwrap_err();
    assert!(matches!(err, AuditError::Metadata(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(out.is_empty());
    assert!(catalog.attempted().is_empty());
}

#[tokio::test]
async fn test_custom_column_names_indexes() {
    let catalog = FakeCatalog::with_tables(vec![TableIndexState::new("events", true, false)]);
    let mut config = config();
    config.column = "created_at".to_string();

    let (result, out, _) = run_with_input(&catalog, &config, "Y\n").await;

    assert_eq!(result.unwrap(), Outcome::Indexed(1));
    assert!(out.contains("\nAll tables have the 'created_at' column.\n"));
    assert_eq!(catalog.created(), vec!["index_events_on_created_at"]);
}
