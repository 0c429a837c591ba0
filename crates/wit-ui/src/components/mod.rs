//! Shared presentational components.

pub(crate) mod modal;
