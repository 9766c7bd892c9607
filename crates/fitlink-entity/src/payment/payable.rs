//! Tagged reference to the thing a payment settles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

db_enum! {
    /// Kind of entity a payment can settle.
    pub enum PayableKind as "payable_type" {
        Subscription => "subscription",
        Booking => "booking",
    }
}

/// A payment target, stored as `payable_type` + `payable_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayableRef {
    #[serde(rename = "payable_type")]
    pub kind: PayableKind,
    #[serde(rename = "payable_id")]
    pub id: Uuid,
}

impl PayableRef {
    /// Reference a subscription.
    pub fn subscription(id: Uuid) -> Self {
        Self {
            kind: PayableKind::Subscription,
            id,
        }
    }

    /// Reference a booking.
    pub fn booking(id: Uuid) -> Self {
        Self {
            kind: PayableKind::Booking,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_column_pair() {
        let id = Uuid::nil();
        let value = serde_json::to_value(PayableRef::booking(id)).unwrap();
        assert_eq!(value["payable_type"], "booking");
        assert_eq!(value["payable_id"], id.to_string());
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!("gym".parse::<PayableKind>().is_err());
        assert_eq!(
            "subscription".parse::<PayableKind>().unwrap(),
            PayableKind::Subscription
        );
    }
}
