//! Repository for the single-row simulated-day clock.

use adserve_core::types::Day;
use sqlx::PgPool;

/// Store-backed current-day counter. There is no in-process cache:
/// every reader and writer goes through these queries so concurrent
/// requests always agree on the day.
pub struct ClockRepo;

impl ClockRepo {
    /// The current day, or `None` if the clock was never set.
    pub async fn current_day(pool: &PgPool) -> Result<Option<Day>, sqlx::Error> {
        let row: Option<(Day,)> = sqlx::query_as("SELECT current_day FROM clock")
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(day,)| day))
    }

    /// Set (or initialize) the current day, returning the stored value.
    pub async fn set_day(pool: &PgPool, day: Day) -> Result<Day, sqlx::Error> {
        let (stored,): (Day,) = sqlx::query_as(
            "INSERT INTO clock (onerow, current_day) VALUES (TRUE, $1)
             ON CONFLICT (onerow) DO UPDATE SET current_day = EXCLUDED.current_day
             RETURNING current_day",
        )
        .bind(day)
        .fetch_one(pool)
        .await?;
        Ok(stored)
    }
}
