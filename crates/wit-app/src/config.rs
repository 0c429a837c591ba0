//! Command-line parsing with environment fallbacks.

use clap::{Parser, Subcommand};
use wit_telemetry::{DEFAULT_LOG_LEVEL, LogFormat};

use crate::error::{AppError, AppResult};

/// Default pool size for the bootstrap connection.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Raw command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "wit", about = "Migrate and seed the WIT database", version)]
pub struct Cli {
    /// Postgres connection string.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
    /// Log level used when `RUST_LOG` is unset.
    #[arg(long, env = "WIT_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
    /// Log output format (`pretty` or `json`); inferred from the build when unset.
    #[arg(long, env = "WIT_LOG_FORMAT")]
    pub log_format: Option<String>,
    /// Maximum pool connections.
    #[arg(long, env = "WIT_DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
    /// Command to run; defaults to `seed`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Bootstrap commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Apply pending migrations only.
    Migrate,
    /// Apply migrations, then seed the system taxonomies.
    Seed,
}

impl Command {
    /// Span and log name of the command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Migrate => "migrate",
            Self::Seed => "seed",
        }
    }
}

/// Validated bootstrap configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string.
    pub database_url: String,
    /// Default log level.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Maximum pool connections, at least one.
    pub max_connections: u32,
    /// Command to run.
    pub command: Command,
}

impl AppConfig {
    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] for an empty database URL, a zero pool
    /// size, or an unknown log format.
    pub fn from_cli(cli: Cli) -> AppResult<Self> {
        let database_url = cli.database_url.trim().to_string();
        if database_url.is_empty() {
            return Err(AppError::InvalidConfig {
                field: "database_url",
                reason: "empty",
                value: None,
            });
        }
        if cli.max_connections == 0 {
            return Err(AppError::InvalidConfig {
                field: "max_connections",
                reason: "zero",
                value: Some(cli.max_connections.to_string()),
            });
        }
        let log_format = match cli.log_format.as_deref() {
            Some(raw) => raw.parse().map_err(|_| AppError::InvalidConfig {
                field: "log_format",
                reason: "unknown",
                value: Some(raw.to_string()),
            })?,
            None => LogFormat::infer(),
        };

        Ok(Self {
            database_url,
            log_level: cli.log_level,
            log_format,
            max_connections: cli.max_connections,
            command: cli.command.unwrap_or(Command::Seed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppResult<AppConfig> {
        let mut argv = vec!["wit", "--database-url", "postgres://localhost/wit"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).expect("arguments parse");
        AppConfig::from_cli(cli)
    }

    #[test]
    fn seed_is_the_default_command() -> AppResult<()> {
        let config = parse(&["--max-connections", "2"])?;
        assert_eq!(config.command, Command::Seed);
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.command.name(), "seed");
        Ok(())
    }

    #[test]
    fn explicit_subcommand_and_format_are_respected() -> AppResult<()> {
        let config = parse(&["--log-format", "json", "migrate"])?;
        assert_eq!(config.command, Command::Migrate);
        assert_eq!(config.log_format, LogFormat::Json);
        Ok(())
    }

    #[test]
    fn zero_connections_are_rejected() {
        assert!(matches!(
            parse(&["--max-connections", "0"]),
            Err(AppError::InvalidConfig {
                field: "max_connections",
                ..
            })
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(matches!(
            parse(&["--log-format", "xml"]),
            Err(AppError::InvalidConfig {
                field: "log_format",
                reason: "unknown",
                ..
            })
        ));
    }

    #[test]
    fn blank_database_url_is_rejected() {
        let cli = Cli::try_parse_from(["wit", "--database-url", "  "]).expect("arguments parse");
        assert!(matches!(
            AppConfig::from_cli(cli),
            Err(AppError::InvalidConfig {
                field: "database_url",
                ..
            })
        ));
    }
}
