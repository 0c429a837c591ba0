//! Password reset feature.
//!
//! # Design
//! - Validate locally before any network call.
//! - An invalid or expired token ends the flow; other failures keep the form.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
