//! Repository for the `clients` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::client::{Client, UpsertClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, login, age, location, gender";

/// Provides lookup and bulk-upsert operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Find a client by its id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY login");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Insert or overwrite the given clients in one transaction,
    /// returning the stored records in input order.
    pub async fn upsert_many(
        pool: &PgPool,
        inputs: &[UpsertClient],
    ) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (id, login, age, location, gender)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                login = EXCLUDED.login,
                age = EXCLUDED.age,
                location = EXCLUDED.location,
                gender = EXCLUDED.gender
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut stored = Vec::with_capacity(inputs.len());
        for input in inputs {
            let client = sqlx::query_as::<_, Client>(&query)
                .bind(input.client_id)
                .bind(&input.login)
                .bind(input.age)
                .bind(&input.location)
                .bind(input.gender)
                .fetch_one(&mut *tx)
                .await?;
            stored.push(client);
        }
        tx.commit().await?;
        Ok(stored)
    }
}
