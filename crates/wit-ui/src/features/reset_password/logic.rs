//! Password reset validation and failure classification.

use std::fmt::{self, Display, Formatter};

use wit_api_models::{ResetPasswordRequest, ResetPasswordResponse};

use crate::features::reset_password::state::{ResetFailureKind, ResetForm, ResetPhase};
use crate::services::errors::ApiError;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Message shown when the token is rejected.
pub const TOKEN_INVALID_MESSAGE: &str =
    "This reset link is invalid or has expired. Request a new one to continue.";
/// Message shown for other failures without a provider message.
pub const RESET_FALLBACK_MESSAGE: &str = "Failed to reset password";
/// Confirmation shown when the provider sends none.
pub const RESET_SUCCESS_MESSAGE: &str = "Your password has been reset. You can now sign in.";

/// Local validation failures, checked before any call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The route carried no token.
    MissingToken,
    /// The password is shorter than [`MIN_PASSWORD_LENGTH`].
    TooShort,
    /// Password and confirmation differ.
    Mismatch,
}

impl ValidationError {
    /// Whether the error ends the flow rather than asking for new input.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::MissingToken)
    }
}

impl Display for ValidationError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => formatter.write_str("Reset link is invalid"),
            Self::TooShort => write!(
                formatter,
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            ),
            Self::Mismatch => formatter.write_str("Passwords do not match"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that the route carried a usable token.
///
/// # Errors
///
/// Returns [`ValidationError::MissingToken`] for a blank token.
pub fn check_token(token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        Err(ValidationError::MissingToken)
    } else {
        Ok(())
    }
}

/// Validate the form and build the request body.
///
/// # Errors
///
/// Returns the first failing check: token, length, confirmation.
pub fn validate(token: &str, form: &ResetForm) -> Result<ResetPasswordRequest, ValidationError> {
    check_token(token)?;
    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort);
    }
    if form.password != form.confirm {
        return Err(ValidationError::Mismatch);
    }
    Ok(ResetPasswordRequest {
        password: form.password.clone(),
    })
}

/// Phase a local validation failure moves the page to, if it ends the flow.
///
/// Non-terminal failures keep the form and are shown inline instead.
#[must_use]
pub fn rejected_phase(error: ValidationError) -> Option<ResetPhase> {
    error.is_terminal().then(|| ResetPhase::Failed {
        kind: ResetFailureKind::TokenInvalid,
        message: error.to_string(),
    })
}

/// Decode the provider's success body; an empty body is a bare success.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when a non-empty body is not a reset response.
pub fn parse_reset_response(body: &str) -> Result<ResetPasswordResponse, ApiError> {
    if body.trim().is_empty() {
        return Ok(ResetPasswordResponse::default());
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode {
        detail: err.to_string(),
    })
}

/// Phase reached after the provider accepted the reset.
#[must_use]
pub fn success_phase(response: ResetPasswordResponse) -> ResetPhase {
    ResetPhase::Succeeded {
        message: response
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| RESET_SUCCESS_MESSAGE.to_string()),
    }
}

/// Phase reached after the provider rejected the reset.
#[must_use]
pub fn failure_phase(error: &ApiError) -> ResetPhase {
    if error.is_reset_token_invalid() {
        ResetPhase::Failed {
            kind: ResetFailureKind::TokenInvalid,
            message: TOKEN_INVALID_MESSAGE.to_string(),
        }
    } else {
        ResetPhase::Failed {
            kind: ResetFailureKind::Generic,
            message: error.message_or(RESET_FALLBACK_MESSAGE),
        }
    }
}

/// Provider path for a reset token, percent-encoded.
#[must_use]
pub fn reset_path(token: &str) -> String {
    format!("/api/auth/reset-password/{}", urlencoding::encode(token.trim()))
}
