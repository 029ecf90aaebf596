//! Admin user model, roles and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Name of the role gating the administration API
pub const ADMIN_ROLE: &str = "Admin";

/// Admin user model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AdminUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub email_confirmed: bool,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New user record passed to the user store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdminUser {
    pub full_name: String,
    pub email: String,
    pub email_confirmed: bool,
    pub password_hash: String,
}

/// Named permission group
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Role {
    pub id: i32,
    pub name: String,
}

/// Public admin representation for rosters and login responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminInfo {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub email_confirmed: bool,
}

impl From<AdminUser> for AdminInfo {
    fn from(user: AdminUser) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            email_confirmed: user.email_confirmed,
        }
    }
}

/// Admin account creation form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAdminForm {
    #[validate(length(min = 2, message = "Full name must be at least 2 characters"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// JWT Claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: Uuid,
    pub full_name: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    /// Check if the token carries the Admin role
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Require admin privileges
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Administrator privileges required".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: &str) -> UserClaims {
        let now = Utc::now().timestamp();
        UserClaims {
            sub: "admin@bookify.test".to_string(),
            user_id: Uuid::new_v4(),
            full_name: "Test Admin".to_string(),
            role: role.to_string(),
            exp: now + 3600,
            iat: now,
        }
    }

    #[test]
    fn token_round_trip() {
        let claims = claims(ADMIN_ROLE);
        let token = claims.create_token("secret").expect("token");
        let decoded = UserClaims::from_token(&token, "secret").expect("decode");
        assert_eq!(decoded.user_id, claims.user_id);
        assert!(decoded.is_admin());
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let token = claims(ADMIN_ROLE).create_token("secret").expect("token");
        assert!(UserClaims::from_token(&token, "other").is_err());
    }

    #[test]
    fn require_admin_rejects_other_roles() {
        assert!(claims("Guest").require_admin().is_err());
        assert!(claims(ADMIN_ROLE).require_admin().is_ok());
    }
}
