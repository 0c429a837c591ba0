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

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (environment probes), postgres.rs (docker-backed databases).

pub mod fixtures;
pub mod postgres;

pub use fixtures::docker_available;
pub use postgres::{EphemeralPostgres, start_postgres};
