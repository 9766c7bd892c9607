//! Tagged reference to the subject of a fraud report.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

db_enum! {
    /// Kind of entity that can be reported.
    pub enum ReportableKind as "reportable_type" {
        User => "user",
        Gym => "gym",
        Instructor => "instructor",
        Payment => "payment",
        Booking => "booking",
    }
}

/// A report subject, stored as `reportable_type` + `reportable_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportableRef {
    #[serde(rename = "reportable_type")]
    pub kind: ReportableKind,
    #[serde(rename = "reportable_id")]
    pub id: Uuid,
}

impl ReportableRef {
    pub fn new(kind: ReportableKind, id: Uuid) -> Self {
        Self { kind, id }
    }
}
