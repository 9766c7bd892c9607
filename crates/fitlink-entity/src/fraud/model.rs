//! Fraud report model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::reportable::{ReportableKind, ReportableRef};
use super::status::FraudStatus;

db_enum! {
    /// Reporter's classification of the problem.
    pub enum ReportType as "fraud_report_type" {
        User => "user",
        Gym => "gym",
        Instructor => "instructor",
        Payment => "payment",
        Other => "other",
    }
}

db_enum! {
    /// How serious the report is. Independent of status.
    pub enum Severity as "fraud_severity" {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FraudReport {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub reportable_type: ReportableKind,
    pub reportable_id: Uuid,
    pub report_type: ReportType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub evidence: Json<Vec<String>>,
    pub status: FraudStatus,
    pub investigation_notes: Option<String>,
    pub resolution_notes: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub resolved_by: Option<Uuid>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub investigation_started_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FraudReport {
    pub fn reportable(&self) -> ReportableRef {
        ReportableRef::new(self.reportable_type, self.reportable_id)
    }
}

/// Data required to file a report.
#[derive(Debug, Clone)]
pub struct CreateFraudReport {
    pub reporter_id: Uuid,
    pub reportable: ReportableRef,
    pub report_type: ReportType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub evidence: Vec<String>,
}
