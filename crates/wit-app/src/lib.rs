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

//! WIT bootstrap wiring.
//!
//! Layout: `config.rs` (CLI and environment), `bootstrap.rs` (logging, pool,
//! migrations, seeding), `error.rs`.

/// Boot sequence.
pub mod bootstrap;
/// Command-line and environment configuration.
pub mod config;
/// Application error types.
pub mod error;

pub use bootstrap::run_app;
pub use error::{AppError, AppResult};
