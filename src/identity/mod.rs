//! Identity stores
//!
//! User and role persistence sit behind capability traits so the admin
//! service can be exercised against substituted stores in tests. Production
//! uses the sqlx-backed implementations in [`postgres`].

pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::user::{AdminUser, NewAdminUser, Role},
};

/// User account persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminUser>>;

    /// Create a new user record
    async fn create(&self, user: NewAdminUser) -> AppResult<AdminUser>;

    /// Delete a user record
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Role membership persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Find a role by name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// Add a user to a role
    async fn assign(&self, user_id: Uuid, role: &str) -> AppResult<()>;

    /// Check whether a user holds a role
    async fn user_has_role(&self, user_id: Uuid, role: &str) -> AppResult<bool>;

    /// List all members of a role
    async fn members(&self, role: &str) -> AppResult<Vec<AdminUser>>;
}
