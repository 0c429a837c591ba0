//! Label dialog actions.
//!
//! # Design
//! - Capture user intent and fetch completions separate from rendering.
//! - Actions are UI-only and never perform side effects.

use wit_api_models::LabelRecord;

use crate::features::labels::state::{Columns, LabelSizePreset};

/// Events that move the label dialog between states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelDialogAction {
    /// Start (or retry) fetching labels.
    Fetch,
    /// The fetch identified by `token` succeeded.
    Loaded {
        /// Token issued when the fetch started.
        token: u64,
        /// Labels in provider order.
        labels: Vec<LabelRecord>,
    },
    /// The fetch identified by `token` failed.
    Failed {
        /// Token issued when the fetch started.
        token: u64,
        /// Message to display.
        message: String,
    },
    /// The dialog was closed.
    Close,
    /// The target no longer names anything to fetch; drop shown labels.
    Clear,
    /// Change the grid column count.
    SetColumns(Columns),
    /// Change the label stock preset.
    SetLabelSize(LabelSizePreset),
    /// Show or hide everything but the QR codes.
    SetQrOnly(bool),
}
