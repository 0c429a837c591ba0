//! Postgres-backed migrations and taxonomy seeding.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{DataError, Result};
use crate::location_types::{LocationKind, LocationTypeSeed};
use crate::seed::{self, NewCategory, SeedReport, SeedTarget};

const COUNT_SYSTEM_CATEGORIES: &str = r"
    SELECT COUNT(*) FROM categories WHERE is_system
";

const INSERT_CATEGORY: &str = r"
    INSERT INTO categories (id, parent_id, name, slug, icon, color, position, is_system)
    VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
";

const COUNT_SYSTEM_LOCATION_TYPES: &str = r"
    SELECT COUNT(*) FROM location_types WHERE is_system
";

const INSERT_LOCATION_TYPE: &str = r"
    INSERT INTO location_types (id, kind, value, label, icon, color, position, is_system)
    VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
";

/// Taxonomy store over a Postgres pool.
#[derive(Clone)]
pub struct PgSeedStore {
    pool: PgPool,
}

impl PgSeedStore {
    /// Wrap an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MigrationFailed`] if any migration cannot be applied.
    #[instrument(name = "data.migrate", skip(self))]
    pub async fn migrate(&self) -> Result<()> {
        let mut migrator = sqlx::migrate!("./migrations");
        migrator.set_ignore_missing(true);
        migrator
            .run(&self.pool)
            .await
            .map_err(|source| DataError::MigrationFailed { source })
    }

    /// Seed both system taxonomies, one transaction per taxonomy.
    ///
    /// # Errors
    ///
    /// Returns an error if a transaction cannot be opened or committed, or if
    /// any count or insert fails. A failed taxonomy leaves no partial rows.
    #[instrument(name = "data.seed", skip(self))]
    pub async fn seed(&self) -> Result<SeedReport> {
        let mut categories_tx = self.begin().await?;
        let categories = seed::seed_categories(&mut categories_tx).await?;
        categories_tx.commit().await?;

        let mut location_tx = self.begin().await?;
        let location_types = seed::seed_location_types(&mut location_tx).await?;
        location_tx.commit().await?;

        Ok(SeedReport {
            categories,
            location_types,
        })
    }

    async fn begin(&self) -> Result<PgSeedTransaction> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|source| DataError::query("seed.begin", source))?;
        Ok(PgSeedTransaction { tx })
    }
}

/// [`SeedTarget`] writing inside an open Postgres transaction.
pub struct PgSeedTransaction {
    tx: Transaction<'static, Postgres>,
}

impl PgSeedTransaction {
    /// Commit all rows written through this target.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails.
    pub async fn commit(self) -> Result<()> {
        self.tx
            .commit()
            .await
            .map_err(|source| DataError::query("seed.commit", source))
    }
}

fn to_count(operation: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| DataError::CountOutOfRange { operation, value })
}

#[async_trait]
impl SeedTarget for PgSeedTransaction {
    async fn count_system_categories(&mut self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(COUNT_SYSTEM_CATEGORIES)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(|source| DataError::query("categories.count_system", source))?;
        to_count("categories.count_system", count)
    }

    async fn insert_category(&mut self, category: NewCategory) -> Result<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(INSERT_CATEGORY)
            .bind(id)
            .bind(category.parent_id)
            .bind(category.name)
            .bind(category.slug)
            .bind(category.icon)
            .bind(category.color)
            .bind(category.position)
            .execute(&mut *self.tx)
            .await
            .map_err(|source| DataError::query("categories.insert", source))?;
        Ok(id)
    }

    async fn count_system_location_types(&mut self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(COUNT_SYSTEM_LOCATION_TYPES)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(|source| DataError::query("location_types.count_system", source))?;
        to_count("location_types.count_system", count)
    }

    async fn insert_location_type(
        &mut self,
        kind: LocationKind,
        entry: &'static LocationTypeSeed,
        position: i32,
    ) -> Result<()> {
        sqlx::query(INSERT_LOCATION_TYPE)
            .bind(Uuid::new_v4())
            .bind(kind.as_str())
            .bind(entry.value)
            .bind(entry.label)
            .bind(entry.icon)
            .bind(entry.color)
            .bind(position)
            .execute(&mut *self.tx)
            .await
            .map_err(|source| DataError::query("location_types.insert", source))?;
        Ok(())
    }
}
