//! Label Data Provider seam and the fetch algorithm.
//!
//! # Design
//! - One provider call per request; batches are never fanned out.
//! - Records are validated before they reach the dialog, so a record without a
//!   QR code fails the fetch instead of rendering half a label.

use async_trait::async_trait;
use wit_api_models::{LabelKind, LabelRecord, LabelRecordError};

use crate::features::labels::state::LabelRequest;
use crate::services::errors::ApiError;

/// Message shown when a fetch fails without a provider message.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to load labels";

/// Source of normalized label records.
#[async_trait(?Send)]
pub trait LabelProvider {
    /// Label for one item.
    async fn item_label(&self, item_id: &str) -> Result<LabelRecord, ApiError>;
    /// Label for one location.
    async fn location_label(&self, location_id: &str) -> Result<LabelRecord, ApiError>;
    /// Labels for several items, in provider order.
    async fn batch_item_labels(&self, item_ids: &[String]) -> Result<Vec<LabelRecord>, ApiError>;
    /// Labels for several locations, in provider order.
    async fn batch_location_labels(
        &self,
        location_ids: &[String],
    ) -> Result<Vec<LabelRecord>, ApiError>;
}

/// Why a fetch produced no labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The provider call failed.
    Provider(ApiError),
    /// The provider returned a record that breaks the label contract.
    InvalidRecord(LabelRecordError),
    /// The provider answered with a label of the other kind.
    UnexpectedKind {
        /// Offending record identifier.
        id: String,
        /// Kind the request asked for.
        expected: LabelKind,
    },
}

impl FetchError {
    /// Message displayed in the dialog.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Provider(error) => error.message_or(FETCH_FALLBACK_MESSAGE),
            Self::InvalidRecord(_) | Self::UnexpectedKind { .. } => {
                FETCH_FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

/// Run `request` against `provider` and validate every returned record.
///
/// # Errors
///
/// Returns [`FetchError::Provider`] when the call fails and
/// [`FetchError::InvalidRecord`] when any record breaks the label contract, or
/// [`FetchError::UnexpectedKind`] when a record is not of the requested kind.
pub async fn fetch_labels<P>(provider: &P, request: &LabelRequest) -> Result<Vec<LabelRecord>, FetchError>
where
    P: LabelProvider + ?Sized,
{
    let labels = match request {
        LabelRequest::Item(id) => provider.item_label(id).await.map(|label| vec![label]),
        LabelRequest::Location(id) => provider.location_label(id).await.map(|label| vec![label]),
        LabelRequest::BatchItems(ids) => provider.batch_item_labels(ids).await,
        LabelRequest::BatchLocations(ids) => provider.batch_location_labels(ids).await,
    }
    .map_err(FetchError::Provider)?;

    let expected = request.kind();
    for label in &labels {
        label.validate().map_err(FetchError::InvalidRecord)?;
        if label.kind != expected {
            return Err(FetchError::UnexpectedKind {
                id: label.id.clone(),
                expected,
            });
        }
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use wit_api_models::{LabelKind, PROBLEM_INTERNAL, ProblemDetails};

    #[derive(Default)]
    struct FakeProvider {
        calls: RefCell<Vec<String>>,
        failure: Option<ApiError>,
        drop_qr: bool,
        swap_kind: bool,
    }

    impl FakeProvider {
        fn record(&self, id: &str, kind: LabelKind) -> LabelRecord {
            let kind = match (self.swap_kind, kind) {
                (true, LabelKind::Item) => LabelKind::Location,
                (true, LabelKind::Location) => LabelKind::Item,
                (false, kind) => kind,
            };
            LabelRecord {
                id: id.to_string(),
                kind,
                name: format!("Entity {id}"),
                icon: None,
                qr_code: if self.drop_qr {
                    String::new()
                } else {
                    format!("data:image/png;base64,{id}")
                },
                barcode: None,
                location: None,
                item_count: None,
                expiration_date: None,
            }
        }

        fn respond(&self, call: String, records: Vec<LabelRecord>) -> Result<Vec<LabelRecord>, ApiError> {
            self.calls.borrow_mut().push(call);
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(records),
            }
        }
    }

    #[async_trait(?Send)]
    impl LabelProvider for FakeProvider {
        async fn item_label(&self, item_id: &str) -> Result<LabelRecord, ApiError> {
            let records = vec![self.record(item_id, LabelKind::Item)];
            self.respond(format!("item:{item_id}"), records)
                .map(|mut records| records.remove(0))
        }

        async fn location_label(&self, location_id: &str) -> Result<LabelRecord, ApiError> {
            let records = vec![self.record(location_id, LabelKind::Location)];
            self.respond(format!("location:{location_id}"), records)
                .map(|mut records| records.remove(0))
        }

        async fn batch_item_labels(&self, item_ids: &[String]) -> Result<Vec<LabelRecord>, ApiError> {
            let records = item_ids
                .iter()
                .map(|id| self.record(id, LabelKind::Item))
                .collect();
            self.respond(format!("items:{}", item_ids.join(",")), records)
        }

        async fn batch_location_labels(
            &self,
            location_ids: &[String],
        ) -> Result<Vec<LabelRecord>, ApiError> {
            let records = location_ids
                .iter()
                .map(|id| self.record(id, LabelKind::Location))
                .collect();
            self.respond(format!("locations:{}", location_ids.join(",")), records)
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn each_request_maps_to_one_provider_call() {
        let provider = FakeProvider::default();
        let requests = [
            LabelRequest::Item("abc".to_string()),
            LabelRequest::Location("loc".to_string()),
            LabelRequest::BatchItems(ids(&["1", "2"])),
            LabelRequest::BatchLocations(ids(&["a", "b", "c"])),
        ];
        for request in &requests {
            let labels = fetch_labels(&provider, request).await.expect("fetch succeeds");
            assert_eq!(labels.len(), request.expected_count());
            assert!(labels.iter().all(|label| label.kind == request.kind()));
        }
        assert_eq!(
            *provider.calls.borrow(),
            ["item:abc", "location:loc", "items:1,2", "locations:a,b,c"]
        );
    }

    #[tokio::test]
    async fn batch_preserves_provider_order() {
        let provider = FakeProvider::default();
        let labels = fetch_labels(&provider, &LabelRequest::BatchItems(ids(&["2", "1"])))
            .await
            .expect("fetch succeeds");
        let order: Vec<_> = labels.iter().map(|label| label.id.as_str()).collect();
        assert_eq!(order, ["2", "1"]);
    }

    #[tokio::test]
    async fn provider_message_is_surfaced_verbatim() {
        let provider = FakeProvider {
            failure: Some(ApiError::Problem(ProblemDetails {
                kind: PROBLEM_INTERNAL.to_string(),
                title: "upstream failure".to_string(),
                status: 504,
                detail: Some("Network timeout".to_string()),
                invalid_params: None,
            })),
            ..FakeProvider::default()
        };
        let error = fetch_labels(&provider, &LabelRequest::Item("abc".to_string()))
            .await
            .expect_err("fetch fails");
        assert_eq!(error.message(), "Network timeout");
    }

    #[tokio::test]
    async fn transport_failure_uses_generic_message() {
        let provider = FakeProvider {
            failure: Some(ApiError::Transport {
                detail: "offline".to_string(),
            }),
            ..FakeProvider::default()
        };
        let error = fetch_labels(&provider, &LabelRequest::BatchItems(ids(&["1"])))
            .await
            .expect_err("fetch fails");
        assert_eq!(error.message(), FETCH_FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn record_without_qr_code_fails_the_fetch() {
        let provider = FakeProvider {
            drop_qr: true,
            ..FakeProvider::default()
        };
        let error = fetch_labels(&provider, &LabelRequest::Item("abc".to_string()))
            .await
            .expect_err("fetch fails");
        assert!(matches!(
            error,
            FetchError::InvalidRecord(LabelRecordError::MissingQrCode { .. })
        ));
    }

    #[tokio::test]
    async fn record_of_the_wrong_kind_fails_the_fetch() {
        let provider = FakeProvider {
            swap_kind: true,
            ..FakeProvider::default()
        };
        let error = fetch_labels(&provider, &LabelRequest::Location("loc".to_string()))
            .await
            .expect_err("fetch fails");
        assert_eq!(
            error,
            FetchError::UnexpectedKind {
                id: "loc".to_string(),
                expected: LabelKind::Location,
            }
        );
        assert_eq!(error.message(), FETCH_FALLBACK_MESSAGE);
    }
}
