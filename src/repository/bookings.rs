//! Bookings repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::booking::{Booking, PaymentStatus},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all bookings, most recent first
    pub async fn get_all(&self) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, room_id, guest_name, guest_email, payment_status, total_price, created_at
            FROM bookings
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Get a booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, room_id, guest_name, guest_email, payment_status, total_price, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Overwrite the payment status of a booking
    pub async fn update_status(&self, id: i32, status: PaymentStatus) -> AppResult<()> {
        sqlx::query("UPDATE bookings SET payment_status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a booking, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
