//! Payment entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::payable::{PayableKind, PayableRef};
use super::status::PaymentStatus;

db_enum! {
    /// What the payment is for.
    pub enum PaymentType as "payment_type" {
        Subscription => "subscription",
        Booking => "booking",
        Other => "other",
    }
}

impl From<PayableKind> for PaymentType {
    fn from(kind: PayableKind) -> Self {
        match kind {
            PayableKind::Subscription => Self::Subscription,
            PayableKind::Booking => Self::Booking,
        }
    }
}

db_enum! {
    /// How the member pays.
    pub enum PaymentMethod as "payment_method" {
        Paystack => "paystack",
        Flutterwave => "flutterwave",
        Card => "card",
        BankTransfer => "bank_transfer",
    }
}

/// A payment row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub payable_type: PayableKind,
    pub payable_id: Uuid,
    pub payment_type: PaymentType,
    pub amount: Decimal,
    pub currency: String,
    pub payment_method: PaymentMethod,
    pub gateway_reference: Option<String>,
    pub transaction_id: Option<String>,
    pub status: PaymentStatus,
    pub gateway_response: Option<Json<Value>>,
    pub description: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub failure_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// The entity this payment settles.
    pub fn payable(&self) -> PayableRef {
        PayableRef {
            kind: self.payable_type,
            id: self.payable_id,
        }
    }
}

/// Data required to record a payment.
#[derive(Debug, Clone)]
pub struct CreatePayment {
    pub user_id: Uuid,
    pub payable: PayableRef,
    pub amount: Decimal,
    pub currency: String,
    pub payment_method: PaymentMethod,
    pub gateway_reference: String,
    pub description: Option<String>,
}
