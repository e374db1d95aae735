use std::fmt;
use std::io;

/// Exit code for connection, argument and terminal failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for a fatal abort while querying or altering the schema.
pub const EXIT_ABORT: u8 = 2;

/// Errors that terminate an audit run.
///
/// None of these are recovered locally. Each one ends the process with the
/// code returned by [`AuditError::exit_code`].
#[derive(Debug)]
pub enum AuditError {
    /// The connection to the server could not be opened.
    Connection(sqlx::Error),
    /// The connection opened but the liveness probe failed.
    Probe(sqlx::Error),
    /// The metadata catalog query failed.
    Metadata(sqlx::Error),
    /// An index creation statement failed. Indexes built on earlier tables
    /// are left in place.
    CreateIndex {
        /// Table whose statement failed.
        table: String,
        /// The underlying driver error.
        source: sqlx::Error,
    },
    /// Writing the report or reading the confirmation failed.
    Io(io::Error),
}

impl AuditError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AuditError::Connection(_) | AuditError::Probe(_) | AuditError::Io(_) => EXIT_FAILURE,
            AuditError::Metadata(_) | AuditError::CreateIndex { .. } => EXIT_ABORT,
        }
    }
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditError::Connection(e) => write!(f, "Failed to connect to the database: {}", e),
            AuditError::Probe(e) => write!(f, "Failed to connect to the database: {}", e),
            AuditError::Metadata(e) => write!(f, "Failed to read schema metadata: {}", e),
            AuditError::CreateIndex { table, source } => {
                write!(f, "Failed to add index to {}: {}", table, source)
            }
            AuditError::Io(e) => write!(f, "Terminal I/O error: {}", e),
        }
    }
}

impl std::error::Error for AuditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuditError::Connection(e) | AuditError::Probe(e) | AuditError::Metadata(e) => Some(e),
            AuditError::CreateIndex { source, .. } => Some(source),
            AuditError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for AuditError {
    fn from(err: io::Error) -> Self {
        AuditError::Io(err)
    }
}
