//! Room model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Room model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub price_per_night: Decimal,
    pub is_available: bool,
}
