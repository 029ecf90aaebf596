//! Room listing service

use crate::{error::AppResult, models::room::Room, repository::Repository};

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
}

impl RoomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get all rooms for the admin view, including unavailable ones
    pub async fn get_all_for_admin(&self) -> AppResult<Vec<Room>> {
        self.repository.rooms.get_all_for_admin().await
    }
}
