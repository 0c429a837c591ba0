use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tokio::time::sleep;
use wit_data::{PgSeedStore, TaxonomyOutcome, categories, location_types};
use wit_test_support::{docker_available, start_postgres};

async fn connect(url: &str) -> Result<PgPool> {
    let mut attempts = 0;
    loop {
        match PgPoolOptions::new().max_connections(5).connect(url).await {
            Ok(pool) => break Ok(pool),
            Err(err) => {
                attempts += 1;
                if attempts >= 10 {
                    return Err(err).context("failed to connect to ephemeral postgres");
                }
                sleep(Duration::from_millis(200)).await;
            }
        }
    }
}

async fn count(pool: &PgPool, table: &str) -> Result<i64> {
    let row = sqlx::query(&format!("SELECT COUNT(*) AS total FROM {table}"))
        .fetch_one(pool)
        .await
        .with_context(|| format!("failed to count {table}"))?;
    Ok(row.try_get("total")?)
}

#[tokio::test]
async fn seeding_is_idempotent_against_postgres() -> Result<()> {
    if !docker_available() {
        eprintln!("skipping seed tests: docker socket missing");
        return Ok(());
    }

    let postgres = start_postgres().await?;
    let pool = connect(postgres.connection_string()).await?;
    let store = PgSeedStore::new(pool.clone());
    store.migrate().await.context("failed to migrate")?;

    let first = store.seed().await.context("first seed failed")?;
    assert_eq!(
        first.categories,
        TaxonomyOutcome::Inserted {
            count: categories::seeded_row_count() as u64
        }
    );
    let categories_after_first = count(&pool, "categories").await?;
    let location_types_after_first = count(&pool, "location_types").await?;
    assert_eq!(
        location_types_after_first,
        i64::try_from(location_types::seeded_row_count())?
    );

    store.migrate().await.context("re-running migrations failed")?;
    let second = store.seed().await.context("second seed failed")?;
    assert_eq!(second.categories.inserted(), 0);
    assert_eq!(second.location_types.inserted(), 0);
    assert_eq!(count(&pool, "categories").await?, categories_after_first);
    assert_eq!(
        count(&pool, "location_types").await?,
        location_types_after_first
    );

    let orphaned: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM categories child \
         LEFT JOIN categories parent ON parent.id = child.parent_id \
         WHERE child.parent_id IS NOT NULL AND parent.id IS NULL",
    )
    .fetch_one(&pool)
    .await?;
    assert_eq!(orphaned, 0);

    pool.close().await;
    Ok(())
}
