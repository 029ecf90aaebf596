//! Booking moderation service

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, PaymentStatus},
    repository::Repository,
};

/// Validate a booking identifier from a client request
fn validate_booking_id(id: i32) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::BadRequest("Invalid request".to_string()));
    }
    Ok(())
}

/// Parse a requested status against the fixed allow-list
fn parse_status(raw: &str) -> AppResult<PaymentStatus> {
    raw.parse()
        .map_err(|_| AppError::Validation("Invalid status".to_string()))
}

/// Check that a booking is in the terminal state required for deletion
fn ensure_deletable(booking: &Booking) -> AppResult<()> {
    if booking.payment_status != PaymentStatus::Cancelled {
        return Err(AppError::BusinessRule(
            "Only cancelled bookings can be deleted".to_string(),
        ));
    }
    Ok(())
}

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get all bookings, most recent first
    pub async fn get_all(&self) -> AppResult<Vec<Booking>> {
        self.repository.bookings.get_all().await
    }

    /// Overwrite the payment status of a booking.
    ///
    /// The id and status are validated before any storage call: an invalid
    /// status never reaches the repository.
    pub async fn update_status(&self, booking_id: i32, status: &str) -> AppResult<()> {
        validate_booking_id(booking_id)?;
        let status = parse_status(status)?;

        self.repository
            .bookings
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        self.repository.bookings.update_status(booking_id, status).await
    }

    /// Delete a booking, allowed only when its status is Cancelled
    pub async fn delete(&self, booking_id: i32) -> AppResult<()> {
        validate_booking_id(booking_id)?;

        let booking = self
            .repository
            .bookings
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        ensure_deletable(&booking)?;

        let deleted = self.repository.bookings.delete(booking_id).await?;
        if !deleted {
            return Err(AppError::BusinessRule(
                "Failed to delete booking".to_string(),
            ));
        }

        Ok(())
    }
}
