//! Repository layer for database operations

pub mod bookings;
pub mod rooms;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub bookings: bookings::BookingsRepository,
    pub rooms: rooms::RoomsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            bookings: bookings::BookingsRepository::new(pool.clone()),
            rooms: rooms::RoomsRepository::new(pool.clone()),
            pool,
        }
    }
}
