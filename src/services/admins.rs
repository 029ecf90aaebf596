//! Admin account management and authentication service

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    identity::{RoleStore, UserStore},
    models::user::{AdminInfo, AdminUser, CreateAdminForm, NewAdminUser, UserClaims, ADMIN_ROLE},
};

#[derive(Clone)]
pub struct AdminsService {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
    config: AuthConfig,
}

impl AdminsService {
    pub fn new(users: Arc<dyn UserStore>, roles: Arc<dyn RoleStore>, config: AuthConfig) -> Self {
        Self {
            users,
            roles,
            config,
        }
    }

    /// Authenticate an admin by email and return a JWT token
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, AdminUser)> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !self.verify_password(&user, password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        // Only members of the Admin role can sign in to this backend
        if !self.roles.user_has_role(user.id, ADMIN_ROLE).await? {
            return Err(AppError::Authorization(
                "Administrator privileges required".to_string(),
            ));
        }

        let token = self.create_token_for_user(&user)?;
        Ok((token, user))
    }

    /// Create JWT token for an admin user
    fn create_token_for_user(&self, user: &AdminUser) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.email.clone(),
            user_id: user.id,
            full_name: user.full_name.clone(),
            role: ADMIN_ROLE.to_string(),
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Get an admin user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<AdminUser> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// List all members of the Admin role.
    ///
    /// Fails with NotFound when the role itself is missing, which the API
    /// layer reports as a structured failure.
    pub async fn list_admins(&self) -> AppResult<Vec<AdminInfo>> {
        self.roles
            .find_by_name(ADMIN_ROLE)
            .await?
            .ok_or_else(|| AppError::NotFound("Admin role not found".to_string()))?;

        let members = self.roles.members(ADMIN_ROLE).await?;
        Ok(members.into_iter().map(AdminInfo::from).collect())
    }

    /// Create a new admin account.
    ///
    /// Two-phase operation: the user record is created first, then the Admin
    /// role is assigned. When role assignment fails, the just-created user is
    /// deleted again so no orphaned account without a role is left behind.
    pub async fn create_admin(&self, form: CreateAdminForm) -> AppResult<AdminUser> {
        if self.users.find_by_email(&form.email).await?.is_some() {
            return Err(AppError::Conflict(
                "A user with this email already exists".to_string(),
            ));
        }

        let password_hash = self.hash_password(&form.password)?;

        // Phase one: create the account, email pre-confirmed
        let user = self
            .users
            .create(NewAdminUser {
                full_name: form.full_name,
                email: form.email,
                email_confirmed: true,
                password_hash,
            })
            .await?;

        // Phase two: assign the Admin role, compensating delete on failure
        if let Err(err) = self.roles.assign(user.id, ADMIN_ROLE).await {
            tracing::error!("Failed to assign admin role to {}: {}", user.id, err);
            if let Err(del_err) = self.users.delete(user.id).await {
                tracing::error!(
                    "Failed to roll back user {} after role assignment failure: {}",
                    user.id,
                    del_err
                );
            }
            return Err(AppError::BusinessRule(
                "Failed to assign admin role".to_string(),
            ));
        }

        Ok(user)
    }

    /// Verify a user's password against its stored hash
    fn verify_password(&self, user: &AdminUser, password: &str) -> AppResult<bool> {
        if let Some(ref hash) = user.password_hash {
            let parsed_hash = PasswordHash::new(hash)
                .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
            return Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok());
        }

        Ok(false)
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{MockRoleStore, MockUserStore};
    use mockall::predicate::eq;

    fn sample_user() -> AdminUser {
        AdminUser {
            id: Uuid::new_v4(),
            full_name: "Jane Admin".to_string(),
            email: "jane@bookify.test".to_string(),
            email_confirmed: true,
            password_hash: None,
            created_at: Utc::now(),
        }
    }

    fn valid_form() -> CreateAdminForm {
        CreateAdminForm {
            full_name: "Jane Admin".to_string(),
            email: "jane@bookify.test".to_string(),
            password: "s3cretpass".to_string(),
        }
    }

    fn service(users: MockUserStore, roles: MockRoleStore) -> AdminsService {
        AdminsService::new(Arc::new(users), Arc::new(roles), AuthConfig::default())
    }

    #[tokio::test]
    async fn duplicate_email_creates_no_account() {
        let mut users = MockUserStore::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(sample_user())));
        users.expect_create().never();

        let svc = service(users, MockRoleStore::new());
        let err = svc.create_admin(valid_form()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn role_assignment_failure_rolls_back_created_user() {
        let created = sample_user();
        let created_id = created.id;

        let mut users = MockUserStore::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_create()
            .times(1)
            .returning(move |_| Ok(created.clone()));
        users
            .expect_delete()
            .with(eq(created_id))
            .times(1)
            .returning(|_| Ok(()));

        let mut roles = MockRoleStore::new();
        roles
            .expect_assign()
            .with(eq(created_id), eq(ADMIN_ROLE))
            .times(1)
            .returning(|_, _| Err(AppError::Internal("store unavailable".to_string())));

        let svc = service(users, roles);
        let err = svc.create_admin(valid_form()).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::BusinessRule(msg) if msg == "Failed to assign admin role"
        ));
    }

    #[tokio::test]
    async fn create_admin_assigns_role_and_confirms_email() {
        let created = sample_user();
        let created_id = created.id;

        let mut users = MockUserStore::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|new_user| new_user.email_confirmed && !new_user.password_hash.is_empty())
            .times(1)
            .returning(move |_| Ok(created.clone()));
        users.expect_delete().never();

        let mut roles = MockRoleStore::new();
        roles
            .expect_assign()
            .with(eq(created_id), eq(ADMIN_ROLE))
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = service(users, roles);
        let user = svc.create_admin(valid_form()).await.expect("create admin");

        assert_eq!(user.id, created_id);
    }

    #[tokio::test]
    async fn list_admins_without_role_is_not_found() {
        let mut roles = MockRoleStore::new();
        roles.expect_find_by_name().returning(|_| Ok(None));

        let svc = service(MockUserStore::new(), roles);
        let err = svc.list_admins().await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg == "Admin role not found"));
    }

    #[tokio::test]
    async fn authenticate_rejects_non_admin_users() {
        let svc_for_hash = service(MockUserStore::new(), MockRoleStore::new());
        let hash = svc_for_hash.hash_password("s3cretpass").expect("hash");

        let mut user = sample_user();
        user.password_hash = Some(hash);
        let user_id = user.id;

        let mut users = MockUserStore::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut roles = MockRoleStore::new();
        roles
            .expect_user_has_role()
            .with(eq(user_id), eq(ADMIN_ROLE))
            .returning(|_, _| Ok(false));

        let svc = service(users, roles);
        let err = svc
            .authenticate("jane@bookify.test", "s3cretpass")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[tokio::test]
    async fn authenticate_returns_token_for_admin() {
        let svc_for_hash = service(MockUserStore::new(), MockRoleStore::new());
        let hash = svc_for_hash.hash_password("s3cretpass").expect("hash");

        let mut user = sample_user();
        user.password_hash = Some(hash);
        let user_id = user.id;

        let mut users = MockUserStore::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut roles = MockRoleStore::new();
        roles
            .expect_user_has_role()
            .returning(|_, _| Ok(true));

        let svc = service(users, roles);
        let (token, user) = svc
            .authenticate("jane@bookify.test", "s3cretpass")
            .await
            .expect("authenticate");

        let claims =
            UserClaims::from_token(&token, &AuthConfig::default().jwt_secret).expect("claims");
        assert_eq!(claims.user_id, user_id);
        assert!(claims.is_admin());
        assert_eq!(user.id, user_id);
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password() {
        let svc_for_hash = service(MockUserStore::new(), MockRoleStore::new());
        let hash = svc_for_hash.hash_password("s3cretpass").expect("hash");

        let mut user = sample_user();
        user.password_hash = Some(hash);

        let mut users = MockUserStore::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let svc = service(users, MockRoleStore::new());
        let err = svc
            .authenticate("jane@bookify.test", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Authentication(_)));
    }
}
