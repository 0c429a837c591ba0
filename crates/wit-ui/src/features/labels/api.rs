//! API helpers for label printing.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for transport and error mapping.

use wit_api_models::LabelRecord;

use crate::features::labels::provider::{FetchError, fetch_labels};
use crate::features::labels::state::LabelRequest;
use crate::services::api::ApiClient;

/// Fetch and validate the labels for one dialog request.
pub(crate) async fn load_labels(
    client: &ApiClient,
    request: &LabelRequest,
) -> Result<Vec<LabelRecord>, FetchError> {
    fetch_labels(client, request).await
}
