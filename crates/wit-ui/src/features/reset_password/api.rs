//! API helpers for password reset.

use wit_api_models::{ResetPasswordRequest, ResetPasswordResponse};

use crate::features::reset_password::logic::reset_path;
use crate::services::api::ApiClient;
use crate::services::errors::ApiError;

/// Complete a password reset for `token`.
pub(crate) async fn reset_password(
    client: &ApiClient,
    token: &str,
    request: &ResetPasswordRequest,
) -> Result<ResetPasswordResponse, ApiError> {
    client.reset_password(&reset_path(token), request).await
}
