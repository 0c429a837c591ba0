//! Label printing feature.
//!
//! # Design
//! - One dialog serves single item, single location and batch printing.
//! - The fetch phase is an explicit state machine; stale responses are
//!   dropped by request token instead of being cancelled.
//! - Print documents are plain strings so composition is tested natively; the
//!   browser host only opens, writes, prints and closes.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod logic;
pub mod print;
pub mod provider;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
