//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admins, auth, bookings, dashboard, health, rooms};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookify Admin API",
        version = "0.1.0",
        description = "Room Booking Administration REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Dashboard
        dashboard::get_dashboard,
        // Admin accounts
        admins::list_admins,
        admins::new_admin_form,
        admins::create_admin,
        // Bookings
        bookings::list_bookings,
        bookings::update_booking_status,
        bookings::delete_booking,
        // Rooms
        rooms::list_rooms,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Admin accounts
            admins::AdminListResponse,
            admins::CreateAdminResponse,
            crate::models::user::AdminInfo,
            crate::models::user::AdminUser,
            crate::models::user::CreateAdminForm,
            crate::models::user::Role,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::PaymentStatus,
            bookings::ActionResponse,
            bookings::UpdateBookingStatusRequest,
            bookings::DeleteBookingRequest,
            // Rooms
            crate::models::room::Room,
            // Dashboard
            crate::services::dashboard::DashboardView,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "admin", description = "Administration endpoints")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
