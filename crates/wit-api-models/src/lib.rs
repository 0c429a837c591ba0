#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the WIT label and auth providers.
//!
//! The web UI decodes provider responses with these types, so the wire contract
//! (camelCase field names, the `type` discriminator) lives in exactly one place.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Problem type returned when a password reset token is unknown, used or expired.
pub const PROBLEM_RESET_TOKEN_INVALID: &str = "https://wit.app/problems/reset-token-invalid";
/// Problem type returned for unexpected provider failures.
pub const PROBLEM_INTERNAL: &str = "https://wit.app/problems/internal";

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Parameters that failed validation, if applicable.
    pub invalid_params: Option<Vec<ProblemInvalidParam>>,
}

impl ProblemDetails {
    /// Most specific human-readable message carried by the problem.
    ///
    /// Prefers `detail`, then `title`; blank strings count as absent.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .map(str::trim)
            .filter(|detail| !detail.is_empty())
            .or_else(|| Some(self.title.trim()).filter(|title| !title.is_empty()))
    }

    /// Whether this problem reports an invalid or expired reset token.
    #[must_use]
    pub fn is_reset_token_invalid(&self) -> bool {
        self.kind == PROBLEM_RESET_TOKEN_INVALID
    }
}

/// Invalid parameter pointer surfaced alongside a [`ProblemDetails`] payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemInvalidParam {
    /// JSON Pointer to the offending field.
    pub pointer: String,
    /// Human-readable description of the validation failure.
    pub message: String,
}

/// Entity kind a label describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    /// A tracked item.
    Item,
    /// A storage location.
    Location,
}

impl LabelKind {
    /// Wire value for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Location => "location",
        }
    }
}

/// Normalized, print-ready description of one item or location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    /// Identifier, unique within the current batch.
    pub id: String,
    /// Discriminates which optional fields may be present.
    #[serde(rename = "type")]
    pub kind: LabelKind,
    /// Display name.
    pub name: String,
    /// Emoji or glyph shown before location names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Pre-rendered QR image source (data URI or URL).
    #[serde(default)]
    pub qr_code: String,
    /// Textual code printed under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Human-readable containing location (items only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Number of contained items (locations only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u32>,
    /// Expiration date as supplied by the provider (items only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

impl LabelRecord {
    /// Check the per-kind field invariants of a fetched record.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: a missing QR code, or a field that is
    /// not allowed for the record's kind.
    pub fn validate(&self) -> Result<(), LabelRecordError> {
        if self.qr_code.trim().is_empty() {
            return Err(LabelRecordError::MissingQrCode {
                id: self.id.clone(),
            });
        }
        let misplaced = match self.kind {
            LabelKind::Item if self.item_count.is_some() => Some("itemCount"),
            LabelKind::Location if self.location.is_some() => Some("location"),
            LabelKind::Location if self.expiration_date.is_some() => Some("expirationDate"),
            LabelKind::Item | LabelKind::Location => None,
        };
        match misplaced {
            Some(field) => Err(LabelRecordError::FieldNotAllowed {
                id: self.id.clone(),
                kind: self.kind,
                field,
            }),
            None => Ok(()),
        }
    }
}

/// Invariant violations detected on a fetched [`LabelRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelRecordError {
    /// The record carried no QR image source.
    MissingQrCode {
        /// Offending record identifier.
        id: String,
    },
    /// The record carried a field reserved for the other kind.
    FieldNotAllowed {
        /// Offending record identifier.
        id: String,
        /// Kind declared by the record.
        kind: LabelKind,
        /// Wire name of the misplaced field.
        field: &'static str,
    },
}

impl Display for LabelRecordError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingQrCode { id } => write!(formatter, "label {id} has no QR code"),
            Self::FieldNotAllowed { id, kind, field } => write!(
                formatter,
                "label {id} ({}) carries {field}",
                kind.as_str()
            ),
        }
    }
}

impl Error for LabelRecordError {}

/// Single-label provider payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelEnvelope {
    /// The requested label.
    pub label: LabelRecord,
}

/// Batch provider payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelBatch {
    /// Labels in provider order.
    pub labels: Vec<LabelRecord>,
}

/// Request body for batch item labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemLabelsRequest {
    /// Item identifiers, in the order labels should be returned.
    pub item_ids: Vec<String>,
}

/// Request body for batch location labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchLocationLabelsRequest {
    /// Location identifiers, in the order labels should be returned.
    pub location_ids: Vec<String>,
}

/// Request body for completing a password reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    /// New password in plaintext; transported over TLS only.
    pub password: String,
}

/// Acknowledgement returned after a successful password reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResetPasswordResponse {
    /// Optional confirmation message from the auth provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hammer() -> LabelRecord {
        LabelRecord {
            id: "abc".to_string(),
            kind: LabelKind::Item,
            name: "Hammer".to_string(),
            icon: None,
            qr_code: "data:image/png;base64,AAAA".to_string(),
            barcode: Some("000123".to_string()),
            location: Some("Garage/Shelf 2".to_string()),
            item_count: None,
            expiration_date: None,
        }
    }

    #[test]
    fn label_record_decodes_provider_payload() -> Result<(), serde_json::Error> {
        let payload = json!({
            "label": {
                "id": "abc",
                "type": "item",
                "name": "Hammer",
                "qrCode": "data:image/png;base64,AAAA",
                "location": "Garage/Shelf 2",
                "barcode": "000123"
            }
        });
        let envelope: LabelEnvelope = serde_json::from_value(payload)?;
        assert_eq!(envelope.label, hammer());
        assert!(envelope.label.validate().is_ok());
        Ok(())
    }

    #[test]
    fn location_record_uses_camel_case_item_count() -> Result<(), serde_json::Error> {
        let payload = json!({
            "id": "loc-1",
            "type": "location",
            "name": "Garage",
            "icon": "🚗",
            "qrCode": "https://labels.example/qr/loc-1.png",
            "itemCount": 12
        });
        let record: LabelRecord = serde_json::from_value(payload)?;
        assert_eq!(record.kind, LabelKind::Location);
        assert_eq!(record.item_count, Some(12));
        assert_eq!(record.icon.as_deref(), Some("🚗"));
        Ok(())
    }

    #[test]
    fn missing_qr_code_is_rejected() -> Result<(), serde_json::Error> {
        let record: LabelRecord = serde_json::from_value(json!({
            "id": "abc",
            "type": "item",
            "name": "Hammer"
        }))?;
        assert_eq!(
            record.validate(),
            Err(LabelRecordError::MissingQrCode {
                id: "abc".to_string()
            })
        );
        Ok(())
    }

    #[test]
    fn kind_specific_fields_are_exclusive() {
        let mut item = hammer();
        item.item_count = Some(3);
        let err = item.validate().expect_err("item count on item");
        assert_eq!(err.to_string(), "label abc (item) carries itemCount");

        let location = LabelRecord {
            kind: LabelKind::Location,
            ..hammer()
        };
        assert!(matches!(
            location.validate(),
            Err(LabelRecordError::FieldNotAllowed {
                field: "location",
                ..
            })
        ));
    }

    #[test]
    fn batch_requests_use_camel_case_ids() -> Result<(), serde_json::Error> {
        let items = serde_json::to_value(BatchItemLabelsRequest {
            item_ids: vec!["1".to_string(), "2".to_string()],
        })?;
        assert_eq!(items, json!({ "itemIds": ["1", "2"] }));
        let locations = serde_json::to_value(BatchLocationLabelsRequest {
            location_ids: vec!["a".to_string()],
        })?;
        assert_eq!(locations, json!({ "locationIds": ["a"] }));
        Ok(())
    }

    #[test]
    fn problem_message_prefers_detail_then_title() {
        let mut problem = ProblemDetails {
            kind: PROBLEM_INTERNAL.to_string(),
            title: "internal server error".to_string(),
            status: 500,
            detail: Some("Network timeout".to_string()),
            invalid_params: None,
        };
        assert_eq!(problem.message(), Some("Network timeout"));
        problem.detail = Some("   ".to_string());
        assert_eq!(problem.message(), Some("internal server error"));
        problem.title = String::new();
        assert_eq!(problem.message(), None);
    }

    #[test]
    fn reset_token_problem_is_distinguished() {
        let problem = ProblemDetails {
            kind: PROBLEM_RESET_TOKEN_INVALID.to_string(),
            title: "reset token invalid".to_string(),
            status: 400,
            detail: None,
            invalid_params: None,
        };
        assert!(problem.is_reset_token_invalid());
        let other = ProblemDetails {
            kind: PROBLEM_INTERNAL.to_string(),
            ..problem
        };
        assert!(!other.is_reset_token_invalid());
    }
}
