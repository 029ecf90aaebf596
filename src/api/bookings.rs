//! Booking moderation endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::booking::Booking};

use super::AuthenticatedAdmin;

/// Generic action result envelope
#[derive(Serialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn rejected(err: &crate::error::AppError) -> Self {
        Self {
            success: false,
            message: err.client_message(),
        }
    }
}

/// Booking status update request.
///
/// Accepts camelCase, PascalCase and snake_case keys for compatibility with
/// older admin clients.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatusRequest {
    #[serde(rename = "bookingId", alias = "BookingId", alias = "booking_id")]
    pub booking_id: i32,
    #[serde(rename = "status", alias = "Status")]
    pub status: String,
}

/// Booking deletion request
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteBookingRequest {
    #[serde(rename = "bookingId", alias = "BookingId", alias = "booking_id")]
    pub booking_id: i32,
}

/// List all bookings, most recent first
#[utoipa::path(
    get,
    path = "/admin/bookings",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All bookings, newest first", body = [Booking]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.get_all().await?;
    Ok(Json(bookings))
}

/// Update the payment status of a booking
#[utoipa::path(
    post,
    path = "/admin/bookings/status",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Action result", body = ActionResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn update_booking_status(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> AppResult<Json<ActionResponse>> {
    match state
        .services
        .bookings
        .update_status(request.booking_id, &request.status)
        .await
    {
        Ok(()) => Ok(Json(ActionResponse::ok("Status updated successfully"))),
        Err(err) => Ok(Json(ActionResponse::rejected(&err))),
    }
}

/// Delete a cancelled booking
#[utoipa::path(
    post,
    path = "/admin/bookings/delete",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = DeleteBookingRequest,
    responses(
        (status = 200, description = "Action result", body = ActionResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Json(request): Json<DeleteBookingRequest>,
) -> AppResult<Json<ActionResponse>> {
    match state.services.bookings.delete(request.booking_id).await {
        Ok(()) => Ok(Json(ActionResponse::ok("Booking deleted successfully"))),
        Err(err) => Ok(Json(ActionResponse::rejected(&err))),
    }
}
