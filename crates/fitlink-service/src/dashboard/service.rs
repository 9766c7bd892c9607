//! Dashboard reads for members, trainers, gym owners, and admins.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use fitlink_core::error::AppError;
use fitlink_database::repositories::dashboard::{
    AdminOverview, FraudTrends, GymMember, MemberProgress, MonthlyRevenue, TrainerClient,
};
use fitlink_database::repositories::{DashboardRepository, GymRepository, InstructorRepository};
use fitlink_entity::gym::Gym;

use crate::context::RequestContext;

/// Subscription revenue of one gym over the trailing twelve months.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueReport {
    pub months: Vec<MonthlyRevenue>,
    pub total: Decimal,
}

impl RevenueReport {
    pub fn from_months(months: Vec<MonthlyRevenue>) -> Self {
        let total = months.iter().map(|m| m.revenue).sum();
        Self { months, total }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardService {
    dashboard_repo: Arc<DashboardRepository>,
    gym_repo: Arc<GymRepository>,
    instructor_repo: Arc<InstructorRepository>,
}

impl DashboardService {
    pub fn new(
        dashboard_repo: Arc<DashboardRepository>,
        gym_repo: Arc<GymRepository>,
        instructor_repo: Arc<InstructorRepository>,
    ) -> Self {
        Self {
            dashboard_repo,
            gym_repo,
            instructor_repo,
        }
    }

    pub async fn member_progress(&self, ctx: &RequestContext) -> Result<MemberProgress, AppError> {
        self.dashboard_repo
            .member_progress(ctx.user_id, ctx.today())
            .await
    }

    pub async fn trainer_clients(&self, ctx: &RequestContext) -> Result<Vec<TrainerClient>, AppError> {
        let instructor = self
            .instructor_repo
            .find_by_user(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Instructor profile not found"))?;
        self.dashboard_repo.trainer_clients(instructor.id).await
    }

    pub async fn gym_members(&self, ctx: &RequestContext) -> Result<Vec<GymMember>, AppError> {
        let gym = self.owned_gym(ctx).await?;
        self.dashboard_repo.gym_members(gym.id).await
    }

    pub async fn gym_revenue(&self, ctx: &RequestContext) -> Result<RevenueReport, AppError> {
        let gym = self.owned_gym(ctx).await?;
        let months = self.dashboard_repo.monthly_revenue(gym.id).await?;
        Ok(RevenueReport::from_months(months))
    }

    pub async fn admin_overview(&self) -> Result<AdminOverview, AppError> {
        self.dashboard_repo.admin_overview().await
    }

    pub async fn fraud_trends(&self) -> Result<FraudTrends, AppError> {
        self.dashboard_repo.fraud_trends().await
    }

    /// The gym owned by the caller.
    pub async fn owned_gym(&self, ctx: &RequestContext) -> Result<Gym, AppError> {
        self.gym_repo
            .list_by_owner(ctx.user_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::business_rule("You do not have a gym registered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_total_sums_months() {
        let months = vec![
            MonthlyRevenue {
                month: "2026-01".into(),
                revenue: Decimal::new(800000, 2),
                subscriptions: 1,
            },
            MonthlyRevenue {
                month: "2026-02".into(),
                revenue: Decimal::new(3050000, 2),
                subscriptions: 3,
            },
        ];
        let report = RevenueReport::from_months(months);
        assert_eq!(report.total, Decimal::new(3850000, 2));
        assert_eq!(report.months.len(), 2);
    }

    #[test]
    fn test_empty_revenue_is_zero() {
        assert_eq!(RevenueReport::from_months(vec![]).total, Decimal::ZERO);
    }
}
