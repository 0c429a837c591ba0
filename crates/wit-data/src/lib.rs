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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Taxonomy seed data and the first-run database bootstrap for WIT.
//!
//! Layout: `categories.rs` and `location_types.rs` (static taxonomies),
//! `seed.rs` (idempotent seeding over the `SeedTarget` seam), `postgres.rs`
//! (migrations and the Postgres-backed target), `error.rs`.

pub mod categories;
pub mod error;
pub mod location_types;
pub mod postgres;
pub mod seed;

pub use error::{DataError, Result as DataResult};
pub use location_types::{LocationKind, is_container_type};
pub use postgres::PgSeedStore;
pub use seed::{SeedReport, SeedTarget, TaxonomyOutcome};
