//! Pure helpers for the label dialog.
//!
//! # Design
//! - Title, card content and print guards are derived, never stored.
//! - Preview and print render from the same card model.

use serde::Deserialize;
use wit_api_models::{LabelKind, LabelRecord};

use crate::features::labels::actions::LabelDialogAction;
use crate::features::labels::state::{LabelDialogState, LabelMode, LabelTarget};

/// QR edge length in millimetres for normal cards.
pub const QR_SIZE_MM: u8 = 14;
/// QR edge length in millimetres in QR-only mode.
pub const QR_ONLY_SIZE_MM: u8 = 20;

/// Apply an action to the dialog state.
#[must_use]
pub fn reduce(state: &LabelDialogState, action: LabelDialogAction) -> LabelDialogState {
    let mut next = state.clone();
    match action {
        LabelDialogAction::Fetch => {
            next.begin_fetch();
        }
        LabelDialogAction::Loaded { token, labels } => {
            next.complete_fetch(token, Ok(labels));
        }
        LabelDialogAction::Failed { token, message } => {
            next.complete_fetch(token, Err(message));
        }
        LabelDialogAction::Close => next.close(),
        LabelDialogAction::Clear => next.clear(),
        LabelDialogAction::SetColumns(columns) => next.columns = columns,
        LabelDialogAction::SetLabelSize(size) => next.label_size = size,
        LabelDialogAction::SetQrOnly(enabled) => next.show_qr_only = enabled,
    }
    next
}

/// Dialog heading for the current mode and label count.
#[must_use]
pub fn dialog_title(mode: LabelMode, label_count: usize) -> String {
    match mode {
        LabelMode::Batch => format!(
            "Print {label_count} {}",
            pluralize(label_count == 1, "Label", "Labels")
        ),
        LabelMode::Item => "Print Item Label".to_string(),
        LabelMode::Location => "Print Location Label".to_string(),
    }
}

/// `"{n} item"` for one, `"{n} items"` otherwise.
#[must_use]
pub fn item_count_text(count: u32) -> String {
    format!("{count} {}", pluralize(count == 1, "item", "items"))
}

const fn pluralize<'a>(one: bool, singular: &'a str, plural: &'a str) -> &'a str {
    if one { singular } else { plural }
}

/// QR edge length for the current display mode.
#[must_use]
pub const fn qr_size_mm(show_qr_only: bool) -> u8 {
    if show_qr_only {
        QR_ONLY_SIZE_MM
    } else {
        QR_SIZE_MM
    }
}

/// Text content of one rendered label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelCard {
    /// Record identifier, used as the render key.
    pub id: String,
    /// QR image source.
    pub qr_src: String,
    /// QR edge length in millimetres.
    pub qr_size_mm: u8,
    /// Name line; `None` in QR-only mode.
    pub name: Option<String>,
    /// Location or item-count line.
    pub detail: Option<String>,
    /// Barcode line, rendered monospace.
    pub barcode: Option<String>,
    /// Expiration line (items only).
    pub expiration: Option<String>,
}

/// Build the card shown for `record`.
#[must_use]
pub fn label_card(record: &LabelRecord, show_qr_only: bool) -> LabelCard {
    let mut card = LabelCard {
        id: record.id.clone(),
        qr_src: record.qr_code.clone(),
        qr_size_mm: qr_size_mm(show_qr_only),
        name: None,
        detail: None,
        barcode: None,
        expiration: None,
    };
    if show_qr_only {
        return card;
    }
    card.name = Some(name_line(record));
    card.detail = detail_line(record);
    card.barcode = record.barcode.clone();
    card.expiration = match record.kind {
        LabelKind::Item => record.expiration_date.clone(),
        LabelKind::Location => None,
    };
    card
}

/// Name prefixed with the icon for location labels that carry one.
#[must_use]
pub fn name_line(record: &LabelRecord) -> String {
    match (record.kind, record.icon.as_deref()) {
        (LabelKind::Location, Some(icon)) if !icon.is_empty() => {
            format!("{icon} {}", record.name)
        }
        _ => record.name.clone(),
    }
}

/// Location for items, item count for locations.
#[must_use]
pub fn detail_line(record: &LabelRecord) -> Option<String> {
    match record.kind {
        LabelKind::Item => record.location.clone(),
        LabelKind::Location => record.item_count.map(item_count_text),
    }
}

/// Whether the print action is available.
#[must_use]
pub fn can_print(state: &LabelDialogState, preview_present: bool) -> bool {
    preview_present && !state.is_loading() && !state.labels().is_empty()
}

/// Action that brings the dialog in line with its visibility and target.
///
/// Closed dialogs reset; an open dialog with something to fetch starts a fetch;
/// an open dialog whose target is empty or invalid drops whatever it showed.
#[must_use]
pub const fn sync_action(open: bool, has_request: bool) -> LabelDialogAction {
    if !open {
        LabelDialogAction::Close
    } else if has_request {
        LabelDialogAction::Fetch
    } else {
        LabelDialogAction::Clear
    }
}

/// Whether a key press dismisses the dialog.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Reasons a `/labels/print` query cannot be turned into a dialog target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintQueryError {
    /// The query string could not be decoded.
    Malformed,
    /// No `mode` parameter.
    MissingMode,
    /// A `mode` value other than `item`, `location` or `batch`.
    UnknownMode(String),
}

impl PrintQueryError {
    /// Inline message for the print page.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Malformed => "Invalid print link".to_string(),
            Self::MissingMode => "Missing print mode".to_string(),
            Self::UnknownMode(mode) => format!("Unknown print mode \"{mode}\""),
        }
    }
}

/// Decoded `/labels/print` query parameters.
///
/// `mode=item&id=…`, `mode=location&id=…`, `mode=batch&items=1,2` or
/// `mode=batch&locations=a,b`. Batch lists are comma separated.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PrintQuery {
    /// `item`, `location` or `batch`.
    pub mode: Option<String>,
    /// Single entity identifier.
    pub id: Option<String>,
    /// Comma-separated item identifiers.
    pub items: Option<String>,
    /// Comma-separated location identifiers.
    pub locations: Option<String>,
}

/// Turn decoded query parameters into a dialog mode and target.
///
/// Empty identifiers are dropped. Target validation is left to
/// [`crate::features::labels::state::LabelRequest::from_target`].
///
/// # Errors
///
/// Returns [`PrintQueryError`] when the mode is missing or unknown.
pub fn print_target(query: PrintQuery) -> Result<(LabelMode, LabelTarget), PrintQueryError> {
    let raw_mode = query
        .mode
        .map(|mode| mode.trim().to_string())
        .filter(|mode| !mode.is_empty())
        .ok_or(PrintQueryError::MissingMode)?;
    let mode = LabelMode::parse(&raw_mode).ok_or(PrintQueryError::UnknownMode(raw_mode))?;
    let id = query
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());

    let mut target = LabelTarget {
        items: split_ids(query.items.as_deref()),
        locations: split_ids(query.locations.as_deref()),
        ..LabelTarget::default()
    };
    match mode {
        LabelMode::Item => target.item = id,
        LabelMode::Location => target.location = id,
        LabelMode::Batch => {}
    }
    Ok((mode, target))
}

fn split_ids(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::labels::state::{Columns, FetchPhase};

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

    fn garage(item_count: u32) -> LabelRecord {
        LabelRecord {
            id: "loc-1".to_string(),
            kind: LabelKind::Location,
            name: "Garage".to_string(),
            icon: Some("🚗".to_string()),
            qr_code: "https://labels.example/qr/loc-1.png".to_string(),
            barcode: None,
            location: None,
            item_count: Some(item_count),
            expiration_date: None,
        }
    }

    fn ready(labels: Vec<LabelRecord>) -> LabelDialogState {
        LabelDialogState {
            phase: FetchPhase::Ready(labels),
            ..LabelDialogState::default()
        }
    }

    #[test]
    fn batch_titles_pluralize_on_count() {
        assert_eq!(dialog_title(LabelMode::Batch, 0), "Print 0 Labels");
        assert_eq!(dialog_title(LabelMode::Batch, 1), "Print 1 Label");
        assert_eq!(dialog_title(LabelMode::Batch, 2), "Print 2 Labels");
    }

    #[test]
    fn single_titles_name_the_kind() {
        assert_eq!(dialog_title(LabelMode::Item, 1), "Print Item Label");
        assert_eq!(dialog_title(LabelMode::Location, 0), "Print Location Label");
    }

    #[test]
    fn item_card_shows_location_and_barcode() {
        let card = label_card(&hammer(), false);
        assert_eq!(card.name.as_deref(), Some("Hammer"));
        assert_eq!(card.detail.as_deref(), Some("Garage/Shelf 2"));
        assert_eq!(card.barcode.as_deref(), Some("000123"));
        assert_eq!(card.expiration, None);
        assert_eq!(card.qr_size_mm, QR_SIZE_MM);
    }

    #[test]
    fn location_detail_pluralizes_item_count() {
        assert_eq!(detail_line(&garage(1)).as_deref(), Some("1 item"));
        assert_eq!(detail_line(&garage(0)).as_deref(), Some("0 items"));
        assert_eq!(detail_line(&garage(12)).as_deref(), Some("12 items"));
        assert_eq!(name_line(&garage(3)), "🚗 Garage");
    }

    #[test]
    fn expiration_only_renders_for_items() {
        let mut item = hammer();
        item.expiration_date = Some("2026-12-31".to_string());
        assert_eq!(
            label_card(&item, false).expiration.as_deref(),
            Some("2026-12-31")
        );

        let mut location = garage(2);
        location.expiration_date = Some("2026-12-31".to_string());
        assert_eq!(label_card(&location, false).expiration, None);
    }

    #[test]
    fn qr_only_hides_text_and_enlarges_code() {
        let card = label_card(&hammer(), true);
        assert_eq!(card.qr_size_mm, QR_ONLY_SIZE_MM);
        assert_eq!(card.name, None);
        assert_eq!(card.detail, None);
        assert_eq!(card.barcode, None);
        assert_eq!(card.qr_src, hammer().qr_code);
    }

    #[test]
    fn toggling_qr_only_leaves_labels_untouched() {
        let state = ready(vec![hammer(), garage(4)]);
        let toggled = reduce(&state, LabelDialogAction::SetQrOnly(true));
        assert!(toggled.show_qr_only);
        assert_eq!(toggled.labels(), state.labels());
        let back = reduce(&toggled, LabelDialogAction::SetQrOnly(false));
        assert_eq!(back.labels(), state.labels());
    }

    #[test]
    fn changing_columns_keeps_phase() {
        let state = ready(vec![hammer()]);
        let next = reduce(&state, LabelDialogAction::SetColumns(Columns::new(3)));
        assert_eq!(next.columns.get(), 3);
        assert_eq!(next.phase, state.phase);
        assert_eq!(next.request_token, state.request_token);
    }

    #[test]
    fn reduce_drives_fetch_lifecycle() {
        let loading = reduce(&LabelDialogState::default(), LabelDialogAction::Fetch);
        assert!(loading.is_loading());
        let token = loading.request_token;

        let failed = reduce(
            &loading,
            LabelDialogAction::Failed {
                token,
                message: "Network timeout".to_string(),
            },
        );
        assert_eq!(failed.error(), Some("Network timeout"));
        assert!(failed.labels().is_empty());

        let retry = reduce(&failed, LabelDialogAction::Fetch);
        let loaded = reduce(
            &retry,
            LabelDialogAction::Loaded {
                token: retry.request_token,
                labels: vec![hammer()],
            },
        );
        assert_eq!(loaded.labels().len(), 1);

        let stale = reduce(
            &loaded,
            LabelDialogAction::Failed {
                token,
                message: "late".to_string(),
            },
        );
        assert_eq!(stale, loaded);
    }

    #[test]
    fn print_requires_preview_and_ready_labels() {
        assert!(can_print(&ready(vec![hammer()]), true));
        assert!(!can_print(&ready(vec![hammer()]), false));
        assert!(!can_print(&ready(Vec::new()), true));

        let mut loading = ready(vec![hammer()]);
        loading.begin_fetch();
        assert!(!can_print(&loading, true));
    }

    #[test]
    fn open_dialog_without_a_request_clears_stale_labels() {
        assert_eq!(sync_action(false, true), LabelDialogAction::Close);
        assert_eq!(sync_action(true, true), LabelDialogAction::Fetch);
        assert_eq!(sync_action(true, false), LabelDialogAction::Clear);

        let state = ready(vec![hammer(), garage(2)]);
        let cleared = reduce(&state, sync_action(true, false));
        assert_eq!(cleared.phase, FetchPhase::Idle);
        assert!(cleared.labels().is_empty());
        assert!(cleared.request_token > state.request_token);
        assert_eq!(dialog_title(LabelMode::Batch, cleared.labels().len()), "Print 0 Labels");
        assert!(!can_print(&cleared, true));
    }

    #[test]
    fn escape_dismisses_the_dialog() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("escape"));
    }

    fn query(mode: &str) -> PrintQuery {
        PrintQuery {
            mode: Some(mode.to_string()),
            ..PrintQuery::default()
        }
    }

    #[test]
    fn print_target_reads_single_modes() {
        let (mode, target) = print_target(PrintQuery {
            id: Some("abc".to_string()),
            ..query("item")
        })
        .expect("item query");
        assert_eq!(mode, LabelMode::Item);
        assert_eq!(target, LabelTarget::item("abc"));

        let (mode, target) = print_target(PrintQuery {
            id: Some(" shelf 2 ".to_string()),
            ..query("location")
        })
        .expect("location query");
        assert_eq!(mode, LabelMode::Location);
        assert_eq!(target.location.as_deref(), Some("shelf 2"));
    }

    #[test]
    fn print_target_splits_batches_and_drops_empty_ids() {
        let (mode, target) = print_target(PrintQuery {
            items: Some("1,,2, 3, ".to_string()),
            ..query("batch")
        })
        .expect("batch");
        assert_eq!(mode, LabelMode::Batch);
        assert_eq!(target.items, ["1", "2", "3"]);
        assert!(target.locations.is_empty());

        let (_, target) = print_target(PrintQuery {
            locations: Some("a,c".to_string()),
            ..query("batch")
        })
        .expect("batch");
        assert_eq!(target.locations, ["a", "c"]);
        assert!(target.items.is_empty());
    }

    #[test]
    fn print_target_rejects_missing_or_unknown_mode() {
        assert_eq!(
            print_target(PrintQuery {
                id: Some("abc".to_string()),
                ..PrintQuery::default()
            }),
            Err(PrintQueryError::MissingMode)
        );
        assert_eq!(print_target(query(" ")), Err(PrintQueryError::MissingMode));
        assert_eq!(
            print_target(query("pallet")),
            Err(PrintQueryError::UnknownMode("pallet".to_string()))
        );
        assert_eq!(
            PrintQueryError::UnknownMode("pallet".to_string()).message(),
            "Unknown print mode \"pallet\""
        );
    }

    #[test]
    fn print_query_deserializes_from_router_parameters() {
        let parsed: PrintQuery = serde_json::from_value(serde_json::json!({
            "mode": "batch",
            "items": "1,2",
            "utm_source": "email",
        }))
        .expect("query decodes");
        assert_eq!(parsed.items.as_deref(), Some("1,2"));
        assert_eq!(parsed.id, None);
    }
}
