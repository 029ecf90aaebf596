//! Booking model and payment status

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;

/// Payment status of a booking
///
/// The set of values is closed: anything outside these four is rejected at
/// the API boundary and by the database check constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Confirmed => "Confirmed",
            PaymentStatus::Cancelled => "Cancelled",
            PaymentStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(PaymentStatus::Pending),
            "Confirmed" => Ok(PaymentStatus::Confirmed),
            "Cancelled" => Ok(PaymentStatus::Cancelled),
            "Completed" => Ok(PaymentStatus::Completed),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

// SQLx conversion for PaymentStatus (stored as text)
impl sqlx::Type<Postgres> for PaymentStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for PaymentStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for PaymentStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Booking model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i32,
    pub room_id: i32,
    pub guest_name: String,
    pub guest_email: String,
    pub payment_status: PaymentStatus,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_statuses() {
        assert_eq!("Pending".parse::<PaymentStatus>(), Ok(PaymentStatus::Pending));
        assert_eq!("Confirmed".parse::<PaymentStatus>(), Ok(PaymentStatus::Confirmed));
        assert_eq!("Cancelled".parse::<PaymentStatus>(), Ok(PaymentStatus::Cancelled));
        assert_eq!("Completed".parse::<PaymentStatus>(), Ok(PaymentStatus::Completed));
    }

    #[test]
    fn parse_rejects_unknown_status() {
        assert!("Shipped".parse::<PaymentStatus>().is_err());
        assert!("confirmed".parse::<PaymentStatus>().is_err());
        assert!("".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Confirmed,
            PaymentStatus::Cancelled,
            PaymentStatus::Completed,
        ] {
            assert_eq!(status.to_string().parse::<PaymentStatus>(), Ok(status));
        }
    }
}
