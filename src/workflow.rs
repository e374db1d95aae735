use std::io::{BufRead, Write};

use crate::builder::build_indexes;
use crate::catalog::SchemaCatalog;
use crate::classify::classify;
use crate::config::Config;
use crate::errors::AuditError;
use crate::prompt::confirm;
use crate::report::write_report;

/// How a run that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every table either has the index or lacks the column.
    NothingToIndex,
    /// Indexes were needed but the user said no.
    Declined,
    /// This many indexes were created.
    Indexed(usize),
}

/// Runs the audit: introspect, classify, report, confirm, apply.
///
/// `input` is only read when there is something to index and
/// `config.assume_yes` is off.
pub async fn run<C, R, W>(
    catalog: &C,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome, AuditError>
where
    C: SchemaCatalog,
    R: BufRead,
    W: Write,
{
    let states = catalog
        .table_index_states(&config.connection.database, &config.column)
        .await?;
    let buckets = classify(states);

    write_report(out, &config.column, &buckets)?;

    if buckets.need_index.is_empty() {
        return Ok(Outcome::NothingToIndex);
    }

    if config.assume_yes {
        tracing::info!("Confirmation skipped (--yes)");
    } else if !confirm(input, out)? {
        tracing::info!("Index creation declined");
        return Ok(Outcome::Declined);
    }

    let built = build_indexes(catalog, &config.column, &buckets.need_index, out).await?;
    Ok(Outcome::Indexed(built))
}
