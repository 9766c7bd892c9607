//! Fraud report intake and investigation workflow.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::traits::Lifecycle;
use fitlink_core::types::{PageRequest, PageResponse};
use fitlink_database::repositories::{
    BookingRepository, FraudReportFilter, FraudReportRepository, GymRepository,
    InstructorRepository, PaymentRepository, UserRepository,
};
use fitlink_entity::fraud::{
    CreateFraudReport, FraudReport, FraudStatus, ReportType, ReportableKind, ReportableRef,
    Severity,
};
use fitlink_entity::user::UserRole;

use crate::context::RequestContext;

#[derive(Debug, Clone)]
pub struct NewFraudReport {
    pub reportable: ReportableRef,
    pub report_type: ReportType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FraudReportService {
    report_repo: Arc<FraudReportRepository>,
    user_repo: Arc<UserRepository>,
    gym_repo: Arc<GymRepository>,
    instructor_repo: Arc<InstructorRepository>,
    payment_repo: Arc<PaymentRepository>,
    booking_repo: Arc<BookingRepository>,
}

impl FraudReportService {
    pub fn new(
        report_repo: Arc<FraudReportRepository>,
        user_repo: Arc<UserRepository>,
        gym_repo: Arc<GymRepository>,
        instructor_repo: Arc<InstructorRepository>,
        payment_repo: Arc<PaymentRepository>,
        booking_repo: Arc<BookingRepository>,
    ) -> Self {
        Self {
            report_repo,
            user_repo,
            gym_repo,
            instructor_repo,
            payment_repo,
            booking_repo,
        }
    }

    pub async fn submit(
        &self,
        ctx: &RequestContext,
        input: NewFraudReport,
    ) -> Result<FraudReport, AppError> {
        self.ensure_exists(input.reportable).await?;

        let report = self
            .report_repo
            .create(&CreateFraudReport {
                reporter_id: ctx.user_id,
                reportable: input.reportable,
                report_type: input.report_type,
                severity: input.severity,
                title: input.title,
                description: input.description,
                evidence: input.evidence,
            })
            .await?;

        info!(
            report_id = %report.id,
            reporter_id = %ctx.user_id,
            reportable_type = %input.reportable.kind,
            reportable_id = %input.reportable.id,
            severity = %report.severity,
            "Fraud report submitted"
        );
        Ok(report)
    }

    pub async fn my_reports(&self, ctx: &RequestContext) -> Result<Vec<FraudReport>, AppError> {
        self.report_repo.list_by_reporter(ctx.user_id).await
    }

    pub async fn list(
        &self,
        filter: FraudReportFilter,
        page: PageRequest,
    ) -> Result<PageResponse<FraudReport>, AppError> {
        self.report_repo.list(filter, &page).await
    }

    pub async fn get(&self, id: Uuid) -> Result<FraudReport, AppError> {
        self.report_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Fraud report not found"))
    }

    /// Assign to an admin; the caller when `admin_id` is absent.
    pub async fn assign(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        admin_id: Option<Uuid>,
    ) -> Result<FraudReport, AppError> {
        let report = self.get(id).await?;
        if report.status.is_terminal() {
            return Err(AppError::business_rule(format!(
                "Cannot assign a fraud report that is already {}",
                report.status
            )));
        }

        let assignee = admin_id.unwrap_or(ctx.user_id);
        let is_admin = self
            .user_repo
            .find_by_id(assignee)
            .await?
            .is_some_and(|u| u.role == UserRole::Admin);
        if !is_admin {
            return Err(AppError::field(
                "admin_id",
                "Fraud reports can only be assigned to administrators.",
            ));
        }

        let assigned = self.report_repo.assign(id, assignee).await?;
        info!(report_id = %id, assigned_to = %assignee, by = %ctx.user_id, "Fraud report assigned");
        Ok(assigned)
    }

    pub async fn investigate(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        notes: Option<String>,
    ) -> Result<FraudReport, AppError> {
        let report = self.get(id).await?;
        let status = report
            .status
            .transition_to(FraudStatus::UnderInvestigation)?;
        let updated = self
            .report_repo
            .start_investigation(id, status, notes.as_deref())
            .await?;
        info!(report_id = %id, admin_id = %ctx.user_id, "Fraud investigation started");
        Ok(updated)
    }

    /// Resolve, dismiss, or escalate. All three are terminal.
    pub async fn close(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        outcome: FraudStatus,
        notes: Option<String>,
    ) -> Result<FraudReport, AppError> {
        if !matches!(
            outcome,
            FraudStatus::Resolved | FraudStatus::Dismissed | FraudStatus::Escalated
        ) {
            return Err(AppError::internal(format!(
                "'{outcome}' is not a closing fraud status"
            )));
        }

        let report = self.get(id).await?;
        let status = report.status.transition_to(outcome)?;
        let closed = self
            .report_repo
            .close(id, status, ctx.user_id, notes.as_deref())
            .await?;
        info!(
            report_id = %id,
            admin_id = %ctx.user_id,
            from = %report.status,
            to = %status,
            "Fraud report closed"
        );
        Ok(closed)
    }

    /// Per-kind existence check for the reported entity.
    async fn ensure_exists(&self, target: ReportableRef) -> Result<(), AppError> {
        let found = match target.kind {
            ReportableKind::User => self.user_repo.find_by_id(target.id).await?.is_some(),
            ReportableKind::Gym => self.gym_repo.find_by_id(target.id).await?.is_some(),
            ReportableKind::Instructor => {
                self.instructor_repo.find_by_id(target.id).await?.is_some()
            }
            ReportableKind::Payment => self.payment_repo.find_by_id(target.id).await?.is_some(),
            ReportableKind::Booking => self.booking_repo.find_by_id(target.id).await?.is_some(),
        };

        if found {
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "Reported {} not found",
                target.kind
            )))
        }
    }
}
