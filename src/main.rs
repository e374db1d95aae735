use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use build_mysql_indexes::config::{normalize_args, Cli, Config};
use build_mysql_indexes::db::Database;
use build_mysql_indexes::errors::EXIT_FAILURE;
use build_mysql_indexes::workflow;

/// Main entry point.
///
/// Parses flags, connects, runs the audit and closes the connection before
/// choosing the exit code.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "build_mysql_indexes=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid arguments: {:#}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let db = match Database::connect(&config.connection).await {
        Ok(db) => db,
        Err(e) => {
            println!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    let result = {
        let mut input = io::stdin().lock();
        let mut out = io::stdout().lock();
        workflow::run(&db, &config, &mut input, &mut out).await
    };
    db.close().await;

    match result {
        Ok(outcome) => {
            tracing::info!("Finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Aborted: {:?}", e);
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
