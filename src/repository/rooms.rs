//! Rooms repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::room::Room};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Postgres>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all rooms, including unavailable ones (admin view)
    pub async fn get_all_for_admin(&self) -> AppResult<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, price_per_night, is_available
            FROM rooms
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }
}
