//! Postgres-backed identity stores

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::user::{AdminUser, NewAdminUser, Role},
};

use super::{RoleStore, UserStore};

#[derive(Clone)]
pub struct PgUserStore {
    pool: Pool<Postgres>,
}

impl PgUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>> {
        let user = sqlx::query_as::<_, AdminUser>(
            r#"
            SELECT id, full_name, email, email_confirmed, password_hash, created_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminUser>> {
        let user = sqlx::query_as::<_, AdminUser>(
            r#"
            SELECT id, full_name, email, email_confirmed, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, user: NewAdminUser) -> AppResult<AdminUser> {
        let created = sqlx::query_as::<_, AdminUser>(
            r#"
            INSERT INTO users (id, full_name, email, email_confirmed, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, full_name, email, email_confirmed, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(user.email_confirmed)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        Ok(())
    }
}

#[derive(Clone)]
pub struct PgRoleStore {
    pool: Pool<Postgres>,
}

impl PgRoleStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let role = sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role)
    }

    async fn assign(&self, user_id: Uuid, role: &str) -> AppResult<()> {
        let role = self
            .find_by_name(role)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", role)))?;

        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, role_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(role.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn user_has_role(&self, user_id: Uuid, role: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM user_roles ur
                JOIN roles r ON r.id = ur.role_id
                WHERE ur.user_id = $1 AND r.name = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn members(&self, role: &str) -> AppResult<Vec<AdminUser>> {
        let users = sqlx::query_as::<_, AdminUser>(
            r#"
            SELECT u.id, u.full_name, u.email, u.email_confirmed, u.password_hash, u.created_at
            FROM users u
            JOIN user_roles ur ON ur.user_id = u.id
            JOIN roles r ON r.id = ur.role_id
            WHERE r.name = $1
            ORDER BY u.created_at
            "#,
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
