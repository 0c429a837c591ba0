//! Label dialog state.
//!
//! # Design
//! - The fetch lifecycle is a single enum, so an error never coexists with labels.
//! - Layout options live beside the fetch phase but never trigger a refetch.
//! - Every fetch carries a token; completions for any other token are ignored.

use std::fmt::{self, Display, Formatter};

use wit_api_models::{LabelKind, LabelRecord};

/// How the dialog was opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelMode {
    /// One item.
    Item,
    /// One location.
    Location,
    /// Several items or several locations.
    Batch,
}

impl LabelMode {
    /// Query-string value for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Location => "location",
            Self::Batch => "batch",
        }
    }

    /// Parse a query-string value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "item" => Some(Self::Item),
            "location" => Some(Self::Location),
            "batch" => Some(Self::Batch),
            _ => None,
        }
    }
}

/// Entities the dialog prints labels for.
///
/// Which fields matter depends on the [`LabelMode`]: `item`/`location` for the
/// single modes, `items`/`locations` for batch mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelTarget {
    /// Single item identifier.
    pub item: Option<String>,
    /// Single location identifier.
    pub location: Option<String>,
    /// Item identifiers for batch mode.
    pub items: Vec<String>,
    /// Location identifiers for batch mode.
    pub locations: Vec<String>,
}

impl LabelTarget {
    /// Target a single item.
    #[must_use]
    pub fn item(id: impl Into<String>) -> Self {
        Self {
            item: Some(id.into()),
            ..Self::default()
        }
    }

    /// Target a single location.
    #[must_use]
    pub fn location(id: impl Into<String>) -> Self {
        Self {
            location: Some(id.into()),
            ..Self::default()
        }
    }

    /// Target several items.
    #[must_use]
    pub fn items(ids: Vec<String>) -> Self {
        Self {
            items: ids,
            ..Self::default()
        }
    }

    /// Target several locations.
    #[must_use]
    pub fn locations(ids: Vec<String>) -> Self {
        Self {
            locations: ids,
            ..Self::default()
        }
    }
}

/// Provider request derived from a mode and target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelRequest {
    /// Single item label.
    Item(String),
    /// Single location label.
    Location(String),
    /// Labels for several items, in the given order.
    BatchItems(Vec<String>),
    /// Labels for several locations, in the given order.
    BatchLocations(Vec<String>),
}

impl LabelRequest {
    /// Map a mode and target to exactly one provider request.
    ///
    /// Returns `Ok(None)` for a batch with no entities, which renders the empty
    /// state rather than an error.
    ///
    /// # Errors
    ///
    /// Returns a [`TargetError`] when a single mode has no identifier or a batch
    /// names both items and locations.
    pub fn from_target(mode: LabelMode, target: &LabelTarget) -> Result<Option<Self>, TargetError> {
        match mode {
            LabelMode::Item => non_blank(target.item.as_deref())
                .map(|id| Some(Self::Item(id.to_string())))
                .ok_or(TargetError::MissingItem),
            LabelMode::Location => non_blank(target.location.as_deref())
                .map(|id| Some(Self::Location(id.to_string())))
                .ok_or(TargetError::MissingLocation),
            LabelMode::Batch => match (target.items.is_empty(), target.locations.is_empty()) {
                (false, false) => Err(TargetError::MixedBatch),
                (false, true) => Ok(Some(Self::BatchItems(target.items.clone()))),
                (true, false) => Ok(Some(Self::BatchLocations(target.locations.clone()))),
                (true, true) => Ok(None),
            },
        }
    }

    /// Kind of entity the request asks for.
    #[must_use]
    pub const fn kind(&self) -> LabelKind {
        match self {
            Self::Item(_) | Self::BatchItems(_) => LabelKind::Item,
            Self::Location(_) | Self::BatchLocations(_) => LabelKind::Location,
        }
    }

    /// Number of labels a successful response carries.
    #[must_use]
    pub fn expected_count(&self) -> usize {
        match self {
            Self::Item(_) | Self::Location(_) => 1,
            Self::BatchItems(ids) | Self::BatchLocations(ids) => ids.len(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Invalid combination of mode and target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetError {
    /// Item mode without an item identifier.
    MissingItem,
    /// Location mode without a location identifier.
    MissingLocation,
    /// Batch mode naming both items and locations.
    MixedBatch,
}

impl Display for TargetError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::MissingItem => "No item selected",
            Self::MissingLocation => "No location selected",
            Self::MixedBatch => "Batch printing needs either items or locations, not both",
        })
    }
}

impl std::error::Error for TargetError {}

/// Fetch lifecycle of the dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchPhase {
    /// Nothing requested yet (closed, or an empty batch).
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// Labels arrived, in provider order.
    Ready(Vec<LabelRecord>),
    /// The request failed with a displayable message.
    Failed(String),
}

/// Physical label stock the operator is printing on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelSizePreset {
    /// 25 × 25 mm.
    Small,
    /// 50 × 25 mm.
    #[default]
    Medium,
    /// 100 × 50 mm.
    Large,
    /// 75 × 25 mm shelf edge strip.
    Shelf,
}

impl LabelSizePreset {
    /// Every preset in picker order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Small, Self::Medium, Self::Large, Self::Shelf]
    }

    /// Width and height in millimetres.
    #[must_use]
    pub const fn dimensions_mm(self) -> (u16, u16) {
        match self {
            Self::Small => (25, 25),
            Self::Medium => (50, 25),
            Self::Large => (100, 50),
            Self::Shelf => (75, 25),
        }
    }

    /// Select control value.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Shelf => "shelf",
        }
    }

    /// Parse a select control value, falling back to the default preset.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "small" => Self::Small,
            "large" => Self::Large,
            "shelf" => Self::Shelf,
            _ => Self::Medium,
        }
    }

    /// Picker caption, e.g. `Medium (50 × 25 mm)`.
    #[must_use]
    pub fn caption(self) -> String {
        let (width, height) = self.dimensions_mm();
        let name = match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Shelf => "Shelf",
        };
        format!("{name} ({width} × {height} mm)")
    }
}

/// Grid column count, always within `[MIN, MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Columns(u8);

impl Columns {
    /// Fewest columns.
    pub const MIN: u8 = 1;
    /// Most columns.
    pub const MAX: u8 = 4;

    /// Build a column count, clamping out-of-range values.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Parse a select control value; unparseable input keeps the default.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        value.trim().parse::<u8>().map_or_else(|_| Self::default(), Self::new)
    }

    /// Column count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every allowed column count, ascending.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self(2)
    }
}

/// Everything the label dialog owns for one show/close cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelDialogState {
    /// Fetch lifecycle.
    pub phase: FetchPhase,
    /// Selected label stock (guidance only).
    pub label_size: LabelSizePreset,
    /// Grid column count.
    pub columns: Columns,
    /// Whether only QR codes are shown.
    pub show_qr_only: bool,
    /// Token of the fetch whose result is currently awaited.
    pub request_token: u64,
}

impl LabelDialogState {
    /// Start a fetch: discard labels and errors and issue a new token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_token = self.request_token.wrapping_add(1);
        self.phase = FetchPhase::Loading;
        self.request_token
    }

    /// Settle the fetch identified by `token`.
    ///
    /// Returns `false` and leaves the state untouched when the token is stale
    /// or no fetch is in flight.
    pub fn complete_fetch(&mut self, token: u64, outcome: Result<Vec<LabelRecord>, String>) -> bool {
        if token != self.request_token || self.phase != FetchPhase::Loading {
            return false;
        }
        self.phase = match outcome {
            Ok(labels) => FetchPhase::Ready(labels),
            Err(message) => FetchPhase::Failed(message),
        };
        true
    }

    /// Reset for the next opening; in-flight fetches become stale.
    pub fn close(&mut self) {
        let token = self.request_token.wrapping_add(1);
        *self = Self {
            request_token: token,
            ..Self::default()
        };
    }

    /// Drop fetched labels and any in-flight fetch, keeping layout options.
    pub fn clear(&mut self) {
        self.request_token = self.request_token.wrapping_add(1);
        self.phase = FetchPhase::Idle;
    }

    /// Labels currently shown (empty unless ready).
    #[must_use]
    pub fn labels(&self) -> &[LabelRecord] {
        match &self.phase {
            FetchPhase::Ready(labels) => labels,
            FetchPhase::Idle | FetchPhase::Loading | FetchPhase::Failed(_) => &[],
        }
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// Failure message of the last fetch, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FetchPhase::Failed(message) => Some(message),
            FetchPhase::Idle | FetchPhase::Loading | FetchPhase::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> LabelRecord {
        LabelRecord {
            id: id.to_string(),
            kind: LabelKind::Item,
            name: format!("Item {id}"),
            icon: None,
            qr_code: "data:image/png;base64,AAAA".to_string(),
            barcode: None,
            location: None,
            item_count: None,
            expiration_date: None,
        }
    }

    #[test]
    fn request_mapping_covers_every_mode() {
        assert_eq!(
            LabelRequest::from_target(LabelMode::Item, &LabelTarget::item("abc")),
            Ok(Some(LabelRequest::Item("abc".to_string())))
        );
        assert_eq!(
            LabelRequest::from_target(LabelMode::Location, &LabelTarget::location("loc")),
            Ok(Some(LabelRequest::Location("loc".to_string())))
        );
        let ids = vec!["1".to_string(), "2".to_string()];
        let batch = LabelRequest::from_target(LabelMode::Batch, &LabelTarget::items(ids.clone()));
        assert_eq!(batch, Ok(Some(LabelRequest::BatchItems(ids.clone()))));
        assert_eq!(
            LabelRequest::from_target(LabelMode::Batch, &LabelTarget::locations(ids.clone())),
            Ok(Some(LabelRequest::BatchLocations(ids)))
        );
    }

    #[test]
    fn empty_batch_is_not_an_error() {
        assert_eq!(
            LabelRequest::from_target(LabelMode::Batch, &LabelTarget::default()),
            Ok(None)
        );
    }

    #[test]
    fn invalid_targets_are_rejected() {
        assert_eq!(
            LabelRequest::from_target(LabelMode::Item, &LabelTarget::location("loc")),
            Err(TargetError::MissingItem)
        );
        assert_eq!(
            LabelRequest::from_target(LabelMode::Location, &LabelTarget::location("  ")),
            Err(TargetError::MissingLocation)
        );
        let mixed = LabelTarget {
            items: vec!["1".to_string()],
            locations: vec!["a".to_string()],
            ..LabelTarget::default()
        };
        assert_eq!(
            LabelRequest::from_target(LabelMode::Batch, &mixed),
            Err(TargetError::MixedBatch)
        );
    }

    #[test]
    fn expected_count_matches_requested_entities() {
        assert_eq!(LabelRequest::Item("a".to_string()).expected_count(), 1);
        let batch = LabelRequest::BatchLocations(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(batch.expected_count(), 3);
        assert_eq!(batch.kind(), LabelKind::Location);
    }

    #[test]
    fn columns_clamp_to_supported_range() {
        assert_eq!(Columns::new(0).get(), 1);
        assert_eq!(Columns::new(9).get(), 4);
        assert_eq!(Columns::from_value("3").get(), 3);
        assert_eq!(Columns::from_value("many"), Columns::default());
        assert_eq!(Columns::all().map(Columns::get).collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[test]
    fn size_presets_have_fixed_dimensions() {
        assert_eq!(LabelSizePreset::Small.dimensions_mm(), (25, 25));
        assert_eq!(LabelSizePreset::Large.dimensions_mm(), (100, 50));
        assert_eq!(LabelSizePreset::Shelf.caption(), "Shelf (75 × 25 mm)");
        for preset in LabelSizePreset::all() {
            assert_eq!(LabelSizePreset::from_value(preset.as_value()), preset);
        }
    }

    #[test]
    fn begin_fetch_discards_previous_outcome() {
        let mut state = LabelDialogState::default();
        let first = state.begin_fetch();
        assert!(state.complete_fetch(first, Err("Network timeout".to_string())));
        assert_eq!(state.error(), Some("Network timeout"));

        let second = state.begin_fetch();
        assert!(second > first);
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert!(state.labels().is_empty());
    }

    #[test]
    fn stale_completions_are_ignored() {
        let mut state = LabelDialogState::default();
        let stale = state.begin_fetch();
        let current = state.begin_fetch();
        assert!(!state.complete_fetch(stale, Ok(vec![record("old")])));
        assert!(state.is_loading());
        assert!(state.complete_fetch(current, Ok(vec![record("new")])));
        assert_eq!(state.labels()[0].id, "new");
    }

    #[test]
    fn clear_keeps_options_and_invalidates_in_flight_fetch() {
        let mut state = LabelDialogState {
            columns: Columns::new(3),
            ..LabelDialogState::default()
        };
        let token = state.begin_fetch();
        state.clear();
        assert!(!state.complete_fetch(token, Ok(vec![record("late")])));
        assert_eq!(state.phase, FetchPhase::Idle);
        assert_eq!(state.columns.get(), 3);
    }

    #[test]
    fn close_resets_options_and_invalidates_in_flight_fetch() {
        let mut state = LabelDialogState {
            columns: Columns::new(4),
            show_qr_only: true,
            ..LabelDialogState::default()
        };
        let token = state.begin_fetch();
        state.close();
        assert!(!state.complete_fetch(token, Ok(vec![record("late")])));
        assert_eq!(state.phase, FetchPhase::Idle);
        assert_eq!(state.columns, Columns::default());
        assert!(!state.show_qr_only);
        assert!(state.request_token > token);
    }
}
