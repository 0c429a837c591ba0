//! System location-type taxonomy seeded on first run.

/// The fixed set of location kinds a location type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    /// A whole site (house, apartment, storage facility).
    Property,
    /// A room inside a property.
    Room,
    /// An area within a room.
    Zone,
    /// Something that physically holds items.
    Container,
    /// Anything that does not fit the other kinds.
    Other,
}

impl LocationKind {
    /// Every kind, in display order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Property,
            Self::Room,
            Self::Zone,
            Self::Container,
            Self::Other,
        ]
    }

    /// Stored representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Room => "room",
            Self::Zone => "zone",
            Self::Container => "container",
            Self::Other => "other",
        }
    }

    /// Ordered location types for this kind.
    #[must_use]
    pub const fn types(self) -> &'static [LocationTypeSeed] {
        match self {
            Self::Property => PROPERTY_TYPES,
            Self::Room => ROOM_TYPES,
            Self::Zone => ZONE_TYPES,
            Self::Container => CONTAINER_TYPES,
            Self::Other => OTHER_TYPES,
        }
    }
}

/// A seeded location type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationTypeSeed {
    /// Stored value, unique across all kinds.
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Emoji shown on location labels.
    pub icon: &'static str,
    /// Hex color used for chips and badges.
    pub color: &'static str,
}

const fn entry(
    value: &'static str,
    label: &'static str,
    icon: &'static str,
    color: &'static str,
) -> LocationTypeSeed {
    LocationTypeSeed {
        value,
        label,
        icon,
        color,
    }
}

/// Value accepted as a container even though it is not part of the container list.
///
/// Older records used it for rented units before `storage_facility` existed.
pub const LEGACY_STORAGE_UNIT: &str = "storage_unit";

const PROPERTY_TYPES: &[LocationTypeSeed] = &[
    entry("house", "House", "🏠", "#3B82F6"),
    entry("apartment", "Apartment", "🏢", "#6366F1"),
    entry("storage_facility", "Storage Facility", "🏬", "#0EA5E9"),
    entry("office", "Office", "🏛️", "#64748B"),
    entry("vacation_home", "Vacation Home", "🏖️", "#F59E0B"),
];

const ROOM_TYPES: &[LocationTypeSeed] = &[
    entry("living_room", "Living Room", "🛋️", "#F97316"),
    entry("kitchen", "Kitchen", "🍳", "#EF4444"),
    entry("bedroom", "Bedroom", "🛏️", "#A855F7"),
    entry("bathroom", "Bathroom", "🛁", "#06B6D4"),
    entry("dining_room", "Dining Room", "🍽️", "#EAB308"),
    entry("home_office", "Home Office", "💻", "#64748B"),
    entry("garage", "Garage", "🚗", "#78716C"),
    entry("basement", "Basement", "🧱", "#57534E"),
    entry("attic", "Attic", "🏚️", "#A16207"),
    entry("laundry_room", "Laundry Room", "🧺", "#14B8A6"),
    entry("workshop", "Workshop", "🛠️", "#EA580C"),
];

const ZONE_TYPES: &[LocationTypeSeed] = &[
    entry("closet", "Closet", "🚪", "#8B5CF6"),
    entry("pantry", "Pantry", "🥫", "#84CC16"),
    entry("wall", "Wall", "🧱", "#94A3B8"),
    entry("corner", "Corner", "📐", "#CBD5E1"),
    entry("area", "Area", "🗺️", "#22C55E"),
];

const CONTAINER_TYPES: &[LocationTypeSeed] = &[
    entry("box", "Box", "📦", "#D97706"),
    entry("bin", "Bin", "🗑️", "#0891B2"),
    entry("drawer", "Drawer", "🗄️", "#7C3AED"),
    entry("shelf", "Shelf", "📚", "#92400E"),
    entry("cabinet", "Cabinet", "🚪", "#B45309"),
    entry("bag", "Bag", "👜", "#DB2777"),
    entry("basket", "Basket", "🧺", "#CA8A04"),
    entry("crate", "Crate", "🪵", "#A16207"),
    entry("tote", "Tote", "🛍️", "#2563EB"),
    entry("suitcase", "Suitcase", "🧳", "#475569"),
    entry("toolbox", "Toolbox", "🧰", "#DC2626"),
    entry("jar", "Jar", "🫙", "#16A34A"),
];

const OTHER_TYPES: &[LocationTypeSeed] = &[
    entry("vehicle", "Vehicle", "🚙", "#0EA5E9"),
    entry("outdoor", "Outdoor", "🌳", "#22C55E"),
    entry("other", "Other", "📍", "#6B7280"),
];

/// Whether locations of this type can hold items directly.
///
/// True for every container type plus [`LEGACY_STORAGE_UNIT`].
#[must_use]
pub fn is_container_type(value: &str) -> bool {
    value == LEGACY_STORAGE_UNIT || CONTAINER_TYPES.iter().any(|entry| entry.value == value)
}

/// Number of rows the location-type taxonomy occupies once seeded.
#[must_use]
pub fn seeded_row_count() -> usize {
    LocationKind::all()
        .into_iter()
        .map(|kind| kind.types().len())
        .sum()
}
