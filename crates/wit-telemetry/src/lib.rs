#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Logging primitives shared across the WIT workspace.
//!
//! Layout: `init.rs` (subscriber installation and build metadata), `context.rs`
//! (application-level spans), `error.rs` (telemetry errors).

pub mod context;
pub mod error;
pub mod init;

pub use context::app_span;
pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
