use clap::Parser;
use std::ffi::OsString;
use std::fmt;

/// Command line flags.
///
/// `-h` names the host, so the built-in help flag is disabled and help is
/// only reachable as `--help`.
#[derive(Parser, Debug)]
#[command(name = "build-mysql-indexes")]
#[command(about = "Audit tables for a column and add a leading index on it where missing")]
#[command(version, disable_help_flag = true)]
pub struct Cli {
    /// Username
    #[arg(short = 'u', long = "user", default_value = "root")]
    pub username: String,

    /// Password
    #[arg(short = 'p', long = "password", default_value = "pass")]
    pub password: String,

    /// Hostname
    #[arg(short = 'h', long = "host", default_value = "localhost")]
    pub host: String,

    /// Port
    #[arg(short = 'P', long = "port", default_value_t = 3306)]
    pub port: u16,

    /// Database
    #[arg(short = 'D', long = "database", default_value = "mysql")]
    pub database: String,

    /// Column to be indexed
    #[arg(long = "column", default_value = "updated")]
    pub column: String,

    /// Build the indexes without asking for confirmation
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// Print help
    #[arg(long = "help", action = clap::ArgAction::Help)]
    help: Option<bool>,
}

/// Rewrites the single-dash `-column` spelling into `--column` so clap can
/// parse it. Every other argument passes through untouched.
///
/// The rewrite does not know which arguments are flag values, so a value
/// spelled exactly `-column` (say, a password) is rewritten too.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            match arg.to_str() {
                Some("-column") => OsString::from("--column"),
                Some(s) if s.starts_with("-column=") => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

/// Where and as whom to connect.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

/// Immutable settings for one audit run.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionParams,
    /// Column audited on every table and indexed where missing.
    pub column: String,
    /// Skip the confirmation prompt and build straight away.
    pub assume_yes: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let config = Self {
            connection: ConnectionParams {
                username: cli.username,
                password: cli.password,
                host: non_empty("host (-h)", cli.host)?,
                port: cli.port,
                database: non_empty("database (-D)", cli.database)?,
            },
            column: non_empty("column (-column)", cli.column)?,
            assume_yes: cli.assume_yes,
        };

        // Never log the password
        tracing::debug!(
            "Target: {}@{}:{}/{}",
            config.connection.username,
            config.connection.host,
            config.connection.port,
            config.connection.database
        );
        tracing::debug!("Audited column: {}", config.column);

        Ok(config)
    }
}

fn non_empty(name: &str, value: String) -> anyhow::Result<String> {
    if value.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", name);
    }
    Ok(value)
}
