//! Errors surfaced by provider calls.
//!
//! # Design
//! - One error type for every HTTP provider so components share recovery code.
//! - Provider problem documents are kept whole; callers pick the message.
//! - Errors are recovered at the component boundary and never re-thrown.

use std::fmt::{self, Display, Formatter};

use wit_api_models::ProblemDetails;

/// Failure of a provider call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Transport {
        /// Diagnostic detail from the HTTP stack.
        detail: String,
    },
    /// The provider answered with a problem document.
    Problem(ProblemDetails),
    /// The provider answered with a non-success status and no problem document.
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// A success response could not be decoded.
    Decode {
        /// Diagnostic detail from the decoder.
        detail: String,
    },
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        serde_json::from_str::<ProblemDetails>(body)
            .map_or(Self::Status { status }, Self::Problem)
    }

    /// Human-readable message supplied by the provider, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Problem(problem) => problem.message(),
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. } => None,
        }
    }

    /// Provider message, or `fallback` when the provider supplied none.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.message().unwrap_or(fallback).to_string()
    }

    /// Whether the provider rejected a password reset token.
    #[must_use]
    pub fn is_reset_token_invalid(&self) -> bool {
        matches!(self, Self::Problem(problem) if problem.is_reset_token_invalid())
    }
}

impl Display for ApiError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { .. } => formatter.write_str("request failed"),
            Self::Problem(_) => formatter.write_str("provider reported a problem"),
            Self::Status { status } => write!(formatter, "unexpected status {status}"),
            Self::Decode { .. } => formatter.write_str("response could not be decoded"),
        }
    }
}

impl std::error::Error for ApiError {}
