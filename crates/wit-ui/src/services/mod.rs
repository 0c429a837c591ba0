//! Browser-facing services shared by the feature slices.

pub mod base_url;
pub mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod print_host;
