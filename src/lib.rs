//! Bookify Administration Server
//!
//! A Rust REST API backend for administering the Bookify room-booking
//! application: dashboard metrics, booking moderation and admin accounts.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
