//! Admin account endpoints

use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{AdminInfo, CreateAdminForm},
};

use super::AuthenticatedAdmin;

/// Admin roster response
#[derive(Serialize, ToSchema)]
pub struct AdminListResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admins: Option<Vec<AdminInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Admin creation response with optional field-level errors
#[derive(Serialize, ToSchema)]
pub struct CreateAdminResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub errors: HashMap<String, Vec<String>>,
}

impl CreateAdminResponse {
    fn success(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            errors: HashMap::new(),
        }
    }

    fn field_error(field: &str, message: String) -> Self {
        let mut errors = HashMap::new();
        errors.insert(field.to_string(), vec![message]);
        Self {
            success: false,
            message: None,
            errors,
        }
    }

    fn form_error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            errors: HashMap::new(),
        }
    }
}

fn validation_errors_to_map(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
                .collect();
            ((*field).to_string(), messages)
        })
        .collect()
}

/// List all members of the Admin role
#[utoipa::path(
    get,
    path = "/admin/admins",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin roster, or a structured failure when the role is missing", body = AdminListResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_admins(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
) -> AppResult<Json<AdminListResponse>> {
    match state.services.admins.list_admins().await {
        Ok(admins) => Ok(Json(AdminListResponse {
            success: true,
            admins: Some(admins),
            message: None,
        })),
        Err(AppError::NotFound(msg)) => Ok(Json(AdminListResponse {
            success: false,
            admins: None,
            message: Some(msg),
        })),
        Err(err) => Err(err),
    }
}

/// Get an empty admin creation form model
#[utoipa::path(
    get,
    path = "/admin/admins/new",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Empty form model", body = CreateAdminForm)
    )
)]
pub async fn new_admin_form(
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
) -> Json<CreateAdminForm> {
    Json(CreateAdminForm::default())
}

/// Create a new admin account
#[utoipa::path(
    post,
    path = "/admin/admins",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateAdminForm,
    responses(
        (status = 201, description = "Admin account created", body = CreateAdminResponse),
        (status = 400, description = "Validation failed", body = CreateAdminResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_admin(
    State(state): State<crate::AppState>,
    AuthenticatedAdmin(_claims): AuthenticatedAdmin,
    Json(form): Json<CreateAdminForm>,
) -> AppResult<(StatusCode, Json<CreateAdminResponse>)> {
    if let Err(errors) = form.validate() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(CreateAdminResponse {
                success: false,
                message: None,
                errors: validation_errors_to_map(&errors),
            }),
        ));
    }

    let full_name = form.full_name.clone();
    match state.services.admins.create_admin(form).await {
        Ok(_user) => Ok((
            StatusCode::CREATED,
            Json(CreateAdminResponse::success(format!(
                "Admin account for {} created successfully!",
                full_name
            ))),
        )),
        // Duplicate email is reported as a field-level error
        Err(AppError::Conflict(msg)) => Ok((
            StatusCode::BAD_REQUEST,
            Json(CreateAdminResponse::field_error("email", msg)),
        )),
        // Identity-store failures surface as non-field-specific form errors
        Err(err) => Ok((
            StatusCode::BAD_REQUEST,
            Json(CreateAdminResponse::form_error(err.client_message())),
        )),
    }
}
