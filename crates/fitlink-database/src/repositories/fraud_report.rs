//! Fraud report repository.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_core::types::pagination::{PageRequest, PageResponse};
use fitlink_entity::fraud::{CreateFraudReport, FraudReport, FraudStatus, ReportType, Severity};

use super::db_err;

/// Admin list filters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FraudReportFilter {
    pub status: Option<FraudStatus>,
    pub severity: Option<Severity>,
    pub report_type: Option<ReportType>,
}

impl FraudReportFilter {
    fn push(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        qb.push(" WHERE TRUE");
        if let Some(status) = self.status {
            qb.push(" AND status = ").push_bind(status);
        }
        if let Some(severity) = self.severity {
            qb.push(" AND severity = ").push_bind(severity);
        }
        if let Some(report_type) = self.report_type {
            qb.push(" AND report_type = ").push_bind(report_type);
        }
    }
}

#[derive(Debug, Clone)]
pub struct FraudReportRepository {
    pool: PgPool,
}

impl FraudReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FraudReport>> {
        sqlx::query_as::<_, FraudReport>("SELECT * FROM fraud_reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find fraud report"))
    }

    pub async fn list_by_reporter(&self, reporter_id: Uuid) -> AppResult<Vec<FraudReport>> {
        sqlx::query_as::<_, FraudReport>(
            "SELECT * FROM fraud_reports WHERE reporter_id = $1 ORDER BY created_at DESC",
        )
        .bind(reporter_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list fraud reports"))
    }

    pub async fn list(
        &self,
        filter: FraudReportFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<FraudReport>> {
        let mut count = QueryBuilder::new("SELECT COUNT(*) FROM fraud_reports");
        filter.push(&mut count);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to count fraud reports"))?;

        let mut select = QueryBuilder::new("SELECT * FROM fraud_reports");
        filter.push(&mut select);
        select
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);
        let items = select
            .build_query_as::<FraudReport>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list fraud reports"))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    pub async fn create(&self, data: &CreateFraudReport) -> AppResult<FraudReport> {
        sqlx::query_as::<_, FraudReport>(
            "INSERT INTO fraud_reports (reporter_id, reportable_type, reportable_id, \
                report_type, severity, title, description, evidence) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.reporter_id)
        .bind(data.reportable.kind)
        .bind(data.reportable.id)
        .bind(data.report_type)
        .bind(data.severity)
        .bind(&data.title)
        .bind(&data.description)
        .bind(sqlx::types::Json(&data.evidence))
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create fraud report"))
    }

    pub async fn assign(&self, id: Uuid, admin_id: Uuid) -> AppResult<FraudReport> {
        sqlx::query_as::<_, FraudReport>(
            "UPDATE fraud_reports SET assigned_to = $2, assigned_at = NOW(), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to assign fraud report"))
    }

    pub async fn start_investigation(
        &self,
        id: Uuid,
        status: FraudStatus,
        notes: Option<&str>,
    ) -> AppResult<FraudReport> {
        sqlx::query_as::<_, FraudReport>(
            "UPDATE fraud_reports SET status = $2, \
                investigation_notes = COALESCE($3, investigation_notes), \
                investigation_started_at = NOW(), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to start investigation"))
    }

    /// Close a report with one of the terminal outcomes.
    pub async fn close(
        &self,
        id: Uuid,
        status: FraudStatus,
        resolved_by: Uuid,
        notes: Option<&str>,
    ) -> AppResult<FraudReport> {
        sqlx::query_as::<_, FraudReport>(
            "UPDATE fraud_reports SET status = $2, resolved_by = $3, \
                resolution_notes = COALESCE($4, resolution_notes), \
                resolved_at = NOW(), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(resolved_by)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to close fraud report"))
    }
}
