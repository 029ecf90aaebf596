//! Business logic services

pub mod admins;
pub mod bookings;
pub mod dashboard;
pub mod rooms;

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    identity::{RoleStore, UserStore},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub dashboard: dashboard::DashboardService,
    pub bookings: bookings::BookingsService,
    pub rooms: rooms::RoomsService,
    pub admins: admins::AdminsService,
}

impl Services {
    /// Create all services with the given repository and identity stores
    pub fn new(
        repository: Repository,
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            dashboard: dashboard::DashboardService::new(repository.clone(), users.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            rooms: rooms::RoomsService::new(repository),
            admins: admins::AdminsService::new(users, roles, auth_config),
        }
    }
}
