//! Password reset form state.

/// Form inputs, kept as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetForm {
    /// New password.
    pub password: String,
    /// Confirmation of the new password.
    pub confirm: String,
}

/// Class of a failed reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetFailureKind {
    /// The emailed link is invalid or expired; a new link is required.
    TokenInvalid,
    /// Anything else; the same form may be retried.
    Generic,
}

/// Submission lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResetPhase {
    /// The user is editing the form.
    #[default]
    Editing,
    /// The request is in flight.
    Submitting,
    /// The password was changed.
    Succeeded {
        /// Confirmation shown to the user.
        message: String,
    },
    /// The request failed.
    Failed {
        /// Failure class driving the follow-up UI.
        kind: ResetFailureKind,
        /// Message to display.
        message: String,
    },
}

impl ResetPhase {
    /// Whether the form accepts input and submission.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(
            self,
            Self::Editing
                | Self::Failed {
                    kind: ResetFailureKind::Generic,
                    ..
                }
        )
    }
}
