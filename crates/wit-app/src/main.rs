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

//! Binary entrypoint that migrates the WIT database and seeds the system
//! taxonomies.

use wit_app::{AppResult, run_app};

/// Runs the requested bootstrap command and exits.
#[tokio::main]
async fn main() -> AppResult<()> {
    run_app().await
}
