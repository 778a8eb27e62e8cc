//! Repository for the `ml_scores` relevance table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ml_score::{MlScore, UpsertMlScore};

const COLUMNS: &str = "client_id, advertiser_id, score";

/// Sparse (client, advertiser) → relevance score table. A missing row
/// is score 0.
pub struct MlScoreRepo;

impl MlScoreRepo {
    /// Insert or overwrite the score for a (client, advertiser) pair.
    pub async fn upsert(pool: &PgPool, input: &UpsertMlScore) -> Result<MlScore, sqlx::Error> {
        let query = format!(
            "INSERT INTO ml_scores (client_id, advertiser_id, score)
             VALUES ($1, $2, $3)
             ON CONFLICT (client_id, advertiser_id) DO UPDATE SET score = EXCLUDED.score
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MlScore>(&query)
            .bind(input.client_id)
            .bind(input.advertiser_id)
            .bind(input.score)
            .fetch_one(pool)
            .await
    }

    /// Stored score for a pair, if any.
    pub async fn find(
        pool: &PgPool,
        client_id: Uuid,
        advertiser_id: Uuid,
    ) -> Result<Option<MlScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ml_scores WHERE client_id = $1 AND advertiser_id = $2"
        );
        sqlx::query_as::<_, MlScore>(&query)
            .bind(client_id)
            .bind(advertiser_id)
            .fetch_optional(pool)
            .await
    }

    /// The maximum score across the whole table; 0 when it is empty.
    /// This is the global normalizer for the selection ranking.
    pub async fn max_score(pool: &PgPool) -> Result<f64, sqlx::Error> {
        let (max,): (f64,) = sqlx::query_as("SELECT COALESCE(MAX(score), 0) FROM ml_scores")
            .fetch_one(pool)
            .await?;
        Ok(max)
    }
}
