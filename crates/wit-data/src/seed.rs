//! Idempotent first-run seeding of the system taxonomies.
//!
//! # Design
//! - Storage is reached through [`SeedTarget`], so the seeding rules run the
//!   same against Postgres and the in-memory target used in tests.
//! - Each taxonomy is all-or-nothing: any existing system row skips the whole
//!   taxonomy, and the caller wraps the inserts in one transaction.
//! - Categories are inserted parent-first so children can reference the new id.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::categories::{CATEGORIES, CategorySeed};
use crate::error::Result;
use crate::location_types::{LocationKind, LocationTypeSeed};

/// Category row to be written by a [`SeedTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCategory {
    /// Parent category, `None` for top-level rows.
    pub parent_id: Option<Uuid>,
    /// Display name.
    pub name: &'static str,
    /// Unique slug.
    pub slug: &'static str,
    /// Emoji icon.
    pub icon: &'static str,
    /// Hex color.
    pub color: &'static str,
    /// Sort order among siblings.
    pub position: i32,
}

impl NewCategory {
    const fn parent(seed: &CategorySeed, position: i32) -> Self {
        Self {
            parent_id: None,
            name: seed.name,
            slug: seed.slug,
            icon: seed.icon,
            color: seed.color,
            position,
        }
    }
}

/// Storage operations required to seed the taxonomies.
#[async_trait]
pub trait SeedTarget: Send {
    /// Count categories flagged as system rows.
    async fn count_system_categories(&mut self) -> Result<u64>;

    /// Insert a system category and return its identifier.
    async fn insert_category(&mut self, category: NewCategory) -> Result<Uuid>;

    /// Count location types flagged as system rows.
    async fn count_system_location_types(&mut self) -> Result<u64>;

    /// Insert a system location type.
    async fn insert_location_type(
        &mut self,
        kind: LocationKind,
        entry: &'static LocationTypeSeed,
        position: i32,
    ) -> Result<()>;
}

/// What happened to one taxonomy during a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyOutcome {
    /// System rows were already present; nothing was written.
    Skipped {
        /// Number of system rows found.
        existing: u64,
    },
    /// The taxonomy was written from scratch.
    Inserted {
        /// Number of rows written.
        count: u64,
    },
}

impl TaxonomyOutcome {
    /// Rows written by this run.
    #[must_use]
    pub const fn inserted(self) -> u64 {
        match self {
            Self::Skipped { .. } => 0,
            Self::Inserted { count } => count,
        }
    }
}

/// Outcome of seeding both taxonomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Category taxonomy outcome.
    pub categories: TaxonomyOutcome,
    /// Location-type taxonomy outcome.
    pub location_types: TaxonomyOutcome,
}

/// Insert the category taxonomy unless system categories already exist.
///
/// # Errors
///
/// Returns an error if counting or any insert fails.
pub async fn seed_categories<T>(target: &mut T) -> Result<TaxonomyOutcome>
where
    T: SeedTarget + ?Sized,
{
    let existing = target.count_system_categories().await?;
    if existing > 0 {
        info!(existing, "system categories present; skipping category seed");
        return Ok(TaxonomyOutcome::Skipped { existing });
    }

    let mut count = 0_u64;
    for (position, seed) in (0_i32..).zip(CATEGORIES) {
        let parent_id = target
            .insert_category(NewCategory::parent(seed, position))
            .await?;
        count += 1;
        for (child_position, child) in (0_i32..).zip(seed.subcategories) {
            target
                .insert_category(NewCategory {
                    parent_id: Some(parent_id),
                    name: child.name,
                    slug: child.slug,
                    icon: seed.icon,
                    color: seed.color,
                    position: child_position,
                })
                .await?;
            count += 1;
        }
    }

    info!(inserted = count, "seeded system categories");
    Ok(TaxonomyOutcome::Inserted { count })
}

/// Insert the location-type taxonomy unless system location types already exist.
///
/// # Errors
///
/// Returns an error if counting or any insert fails.
pub async fn seed_location_types<T>(target: &mut T) -> Result<TaxonomyOutcome>
where
    T: SeedTarget + ?Sized,
{
    let existing = target.count_system_location_types().await?;
    if existing > 0 {
        info!(
            existing,
            "system location types present; skipping location type seed"
        );
        return Ok(TaxonomyOutcome::Skipped { existing });
    }

    let mut count = 0_u64;
    for kind in LocationKind::all() {
        for (position, entry) in (0_i32..).zip(kind.types()) {
            target.insert_location_type(kind, entry, position).await?;
            count += 1;
        }
    }

    info!(inserted = count, "seeded system location types");
    Ok(TaxonomyOutcome::Inserted { count })
}

/// Seed both taxonomies against a single target.
///
/// # Errors
///
/// Returns the first error raised while seeding either taxonomy.
pub async fn seed_all<T>(target: &mut T) -> Result<SeedReport>
where
    T: SeedTarget + ?Sized,
{
    let categories = seed_categories(target).await?;
    let location_types = seed_location_types(target).await?;
    Ok(SeedReport {
        categories,
        location_types,
    })
}
