//! HTTP client for the label and auth providers.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wit_api_models::{
    BatchItemLabelsRequest, BatchLocationLabelsRequest, LabelBatch, LabelEnvelope, LabelRecord,
    ResetPasswordRequest, ResetPasswordResponse,
};

use crate::features::labels::provider::LabelProvider;
use crate::features::reset_password::logic::parse_reset_response;
use crate::services::errors::ApiError;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(transport)?;
        decode_json(ensure_success(response).await?).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.post(path, body).await?;
        decode_json(response).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await
    }

    pub(crate) async fn reset_password(
        &self,
        path: &str,
        request: &ResetPasswordRequest,
    ) -> Result<ResetPasswordResponse, ApiError> {
        let response = self.post(path, request).await?;
        let body = response.text().await.map_err(transport)?;
        parse_reset_response(&body)
    }
}

#[async_trait(?Send)]
impl LabelProvider for ApiClient {
    async fn item_label(&self, item_id: &str) -> Result<LabelRecord, ApiError> {
        let path = format!("/api/labels/items/{}", urlencoding::encode(item_id));
        self.get_json::<LabelEnvelope>(&path)
            .await
            .map(|envelope| envelope.label)
    }

    async fn location_label(&self, location_id: &str) -> Result<LabelRecord, ApiError> {
        let path = format!("/api/labels/locations/{}", urlencoding::encode(location_id));
        self.get_json::<LabelEnvelope>(&path)
            .await
            .map(|envelope| envelope.label)
    }

    async fn batch_item_labels(&self, item_ids: &[String]) -> Result<Vec<LabelRecord>, ApiError> {
        let body = BatchItemLabelsRequest {
            item_ids: item_ids.to_vec(),
        };
        self.post_json::<_, LabelBatch>("/api/labels/items/batch", &body)
            .await
            .map(|batch| batch.labels)
    }

    async fn batch_location_labels(
        &self,
        location_ids: &[String],
    ) -> Result<Vec<LabelRecord>, ApiError> {
        let body = BatchLocationLabelsRequest {
            location_ids: location_ids.to_vec(),
        };
        self.post_json::<_, LabelBatch>("/api/labels/locations/batch", &body)
            .await
            .map(|batch| batch.labels)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|err| ApiError::Decode {
        detail: err.to_string(),
    })
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport {
        detail: err.to_string(),
    }
}
