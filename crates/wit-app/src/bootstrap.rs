use sqlx::postgres::PgPoolOptions;
use tracing::{Instrument, info};
use wit_data::PgSeedStore;
use wit_telemetry::LoggingConfig;

use clap::Parser;

use crate::config::{AppConfig, Cli, Command};
use crate::error::{AppError, AppResult};

/// Entry point for the WIT bootstrap sequence.
///
/// # Errors
///
/// Returns an error if configuration is invalid, logging cannot be installed,
/// or the database step fails.
pub async fn run_app() -> AppResult<()> {
    let config = AppConfig::from_cli(Cli::parse())?;
    run_app_with(config).await
}

/// Boot sequence driven entirely by an already validated configuration.
///
/// # Errors
///
/// Returns an error if logging cannot be installed, the pool cannot connect,
/// or migrating or seeding fails.
pub async fn run_app_with(config: AppConfig) -> AppResult<()> {
    let logging = LoggingConfig {
        level: &config.log_level,
        format: config.log_format,
        ..LoggingConfig::default()
    };
    wit_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;

    let span = wit_telemetry::app_span(config.command.name());
    execute(&config).instrument(span).await
}

async fn execute(config: &AppConfig) -> AppResult<()> {
    info!(
        max_connections = config.max_connections,
        "WIT bootstrap starting"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|err| AppError::database("pool.connect", err))?;
    let store = PgSeedStore::new(pool);

    let result = run_command(&store, config.command).await;
    store.pool().close().await;
    result
}

async fn run_command(store: &PgSeedStore, command: Command) -> AppResult<()> {
    store
        .migrate()
        .await
        .map_err(|err| AppError::data("data.migrate", err))?;
    info!("migrations applied");

    if command == Command::Seed {
        let report = store
            .seed()
            .await
            .map_err(|err| AppError::data("data.seed", err))?;
        info!(
            categories_inserted = report.categories.inserted(),
            location_types_inserted = report.location_types.inserted(),
            "taxonomy seed complete"
        );
    }
    Ok(())
}
