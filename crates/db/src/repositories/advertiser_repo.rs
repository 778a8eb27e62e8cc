//! Repository for the `advertisers` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::advertiser::{Advertiser, UpsertAdvertiser};

const COLUMNS: &str = "id, name";

/// Provides lookup and bulk-upsert operations for advertisers.
pub struct AdvertiserRepo;

impl AdvertiserRepo {
    /// Find an advertiser by its id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Advertiser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advertisers WHERE id = $1");
        sqlx::query_as::<_, Advertiser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all advertisers.
    pub async fn list(pool: &PgPool) -> Result<Vec<Advertiser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advertisers ORDER BY name");
        sqlx::query_as::<_, Advertiser>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert or overwrite the given advertisers in one transaction,
    /// returning the stored records in input order.
    pub async fn upsert_many(
        pool: &PgPool,
        inputs: &[UpsertAdvertiser],
    ) -> Result<Vec<Advertiser>, sqlx::Error> {
        let query = format!(
            "INSERT INTO advertisers (id, name)
             VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut stored = Vec::with_capacity(inputs.len());
        for input in inputs {
            let advertiser = sqlx::query_as::<_, Advertiser>(&query)
                .bind(input.advertiser_id)
                .bind(&input.name)
                .fetch_one(&mut *tx)
                .await?;
            stored.push(advertiser);
        }
        tx.commit().await?;
        Ok(stored)
    }
}
