//! Admin dashboard assembly

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    identity::UserStore,
    models::{
        booking::{Booking, PaymentStatus},
        room::Room,
    },
    repository::Repository,
};

/// Number of bookings shown in the "recent" dashboard section
const RECENT_BOOKINGS_LIMIT: usize = 5;

/// Name shown when the authenticated principal cannot be resolved
const DEFAULT_ADMIN_NAME: &str = "Admin";

/// Dashboard view model, assembled per request
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardView {
    /// Full name of the signed-in administrator
    pub admin_name: String,
    /// Count of all bookings
    pub total_bookings: i64,
    /// Count of bookings with status Confirmed
    pub confirmed_bookings: i64,
    /// Count of rooms currently available
    pub available_rooms: i64,
    /// Sum of total price over Confirmed and Completed bookings
    pub total_revenue: Decimal,
    /// The five most recently created bookings, newest first
    pub recent_bookings: Vec<Booking>,
    /// All bookings, newest first
    pub all_bookings: Vec<Booking>,
    /// All rooms, including unavailable ones
    pub rooms: Vec<Room>,
}

impl DashboardView {
    /// Assemble the dashboard from in-memory collections.
    ///
    /// Pure aggregation: counting, summing and sorting only.
    pub fn assemble(admin_name: String, mut bookings: Vec<Booking>, rooms: Vec<Room>) -> Self {
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total_bookings = bookings.len() as i64;
        let confirmed_bookings = bookings
            .iter()
            .filter(|b| b.payment_status == PaymentStatus::Confirmed)
            .count() as i64;
        let available_rooms = rooms.iter().filter(|r| r.is_available).count() as i64;
        let total_revenue = bookings
            .iter()
            .filter(|b| {
                matches!(
                    b.payment_status,
                    PaymentStatus::Confirmed | PaymentStatus::Completed
                )
            })
            .fold(Decimal::ZERO, |acc, b| acc + b.total_price);
        let recent_bookings = bookings
            .iter()
            .take(RECENT_BOOKINGS_LIMIT)
            .cloned()
            .collect();

        Self {
            admin_name,
            total_bookings,
            confirmed_bookings,
            available_rooms,
            total_revenue,
            recent_bookings,
            all_bookings: bookings,
            rooms,
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
    users: Arc<dyn UserStore>,
}

impl DashboardService {
    pub fn new(repository: Repository, users: Arc<dyn UserStore>) -> Self {
        Self { repository, users }
    }

    /// Build the dashboard view for the given admin.
    ///
    /// Falls back to a default admin name when the principal cannot be
    /// resolved, rather than failing the whole dashboard.
    pub async fn get_dashboard(&self, admin_id: Uuid) -> AppResult<DashboardView> {
        let bookings = self.repository.bookings.get_all().await?;
        let rooms = self.repository.rooms.get_all_for_admin().await?;

        let admin_name = match self.users.find_by_id(admin_id).await {
            Ok(Some(user)) => user.full_name,
            Ok(None) => DEFAULT_ADMIN_NAME.to_string(),
            Err(err) => {
                tracing::warn!("Failed to resolve admin principal: {}", err);
                DEFAULT_ADMIN_NAME.to_string()
            }
        };

        Ok(DashboardView::assemble(admin_name, bookings, rooms))
    }
}
