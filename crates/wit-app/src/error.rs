//! # Design
//!
//! - Centralize application-level errors for the bootstrap sequence.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration values were invalid.
    #[error("invalid configuration")]
    InvalidConfig {
        /// Field name that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Optional value associated with the failure.
        value: Option<String>,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: wit_telemetry::TelemetryError,
    },
    /// Connecting to the database failed.
    #[error("database connection failed")]
    Database {
        /// Operation identifier.
        operation: &'static str,
        /// Source SQL error.
        source: sqlx::Error,
    },
    /// Migration or seeding failed.
    #[error("data operation failed")]
    Data {
        /// Operation identifier.
        operation: &'static str,
        /// Source data error.
        source: wit_data::DataError,
    },
}

impl AppError {
    pub(crate) const fn telemetry(
        operation: &'static str,
        source: wit_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn database(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database { operation, source }
    }

    pub(crate) const fn data(operation: &'static str, source: wit_data::DataError) -> Self {
        Self::Data { operation, source }
    }
}
