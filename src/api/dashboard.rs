//! Admin dashboard endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, services::dashboard::DashboardView};

use super::AuthenticatedAdmin;

/// Get the admin dashboard view model
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard metrics and booking views", body = DashboardView),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(claims): AuthenticatedAdmin,
) -> AppResult<Json<DashboardView>> {
    let view = state.services.dashboard.get_dashboard(claims.user_id).await?;
    Ok(Json(view))
}
