//! Room listing endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::room::Room};

use super::AuthenticatedAdmin;

/// List all rooms for the admin view
#[utoipa::path(
    get,
    path = "/admin/rooms",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All rooms, including unavailable ones", body = [Room]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_rooms(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
) -> AppResult<Json<Vec<Room>>> {
    let rooms = state.services.rooms.get_all_for_admin().await?;
    Ok(Json(rooms))
}
