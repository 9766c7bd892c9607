//! Read-only aggregate queries behind the role dashboards.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_entity::subscription::{PlanType, SubscriptionStatus};

use super::db_err;

/// A `(label, count)` pair from a `GROUP BY`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CountBy {
    pub key: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SubscriptionStats {
    pub total: i64,
    pub active: i64,
    pub expired: i64,
    pub expiring_soon: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookingStats {
    pub total: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub completed: i64,
    pub cancelled: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RevenueStats {
    pub last_30_days: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InstructorStats {
    pub total: i64,
    pub active: i64,
    pub available: i64,
}

/// Owner analytics for one gym.
#[derive(Debug, Clone, Serialize)]
pub struct GymAnalytics {
    pub subscriptions: SubscriptionStats,
    pub bookings: BookingStats,
    pub revenue: RevenueStats,
    pub instructors: InstructorStats,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MemberProgress {
    pub completed_bookings: i64,
    pub upcoming_bookings: i64,
    pub cancelled_bookings: i64,
    /// Sum over current subscriptions of days left until their end date.
    pub active_days_remaining: i64,
    pub member_since: DateTime<Utc>,
}

/// A member who has booked a trainer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainerClient {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub booking_count: i64,
    pub last_booking_date: NaiveDate,
}

/// A subscriber of a gym.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GymMember {
    pub subscription_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub plan_type: PlanType,
    pub status: SubscriptionStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MonthlyRevenue {
    /// `YYYY-MM`.
    pub month: String,
    pub revenue: Decimal,
    pub subscriptions: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub users_by_role: Vec<CountBy>,
    pub gyms_by_status: Vec<CountBy>,
    pub pending_applications: i64,
    pub open_fraud_reports: i64,
    pub completed_payment_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct FraudTrends {
    pub by_status: Vec<CountBy>,
    pub by_severity: Vec<CountBy>,
    pub by_report_type: Vec<CountBy>,
    /// Reports filed per day over the last 30 days.
    pub daily: Vec<DailyCount>,
}

#[derive(Debug, Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn gym_analytics(&self, gym_id: Uuid, today: NaiveDate) -> AppResult<GymAnalytics> {
        let subscriptions = sqlx::query_as::<_, SubscriptionStats>(
            "SELECT COUNT(*) AS total, \
                COUNT(*) FILTER (WHERE status = 'active' AND end_date > $2) AS active, \
                COUNT(*) FILTER (WHERE status = 'expired') AS expired, \
                COUNT(*) FILTER (WHERE status = 'active' AND end_date - $2 <= 7) \
                    AS expiring_soon \
             FROM subscriptions WHERE gym_id = $1",
        )
        .bind(gym_id)
        .bind(today)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to aggregate subscriptions"))?;

        let bookings = sqlx::query_as::<_, BookingStats>(
            "SELECT COUNT(*) AS total, \
                COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
                COUNT(*) FILTER (WHERE status = 'confirmed') AS confirmed, \
                COUNT(*) FILTER (WHERE status = 'completed') AS completed, \
                COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled \
             FROM bookings WHERE gym_id = $1",
        )
        .bind(gym_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to aggregate bookings"))?;

        let revenue = sqlx::query_as::<_, RevenueStats>(
            "SELECT \
                COALESCE(SUM(amount) FILTER (WHERE created_at >= NOW() - INTERVAL '30 days'), 0) \
                    AS last_30_days, \
                COALESCE(SUM(amount), 0) AS total \
             FROM subscriptions WHERE gym_id = $1",
        )
        .bind(gym_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to aggregate revenue"))?;

        let instructors = sqlx::query_as::<_, InstructorStats>(
            "SELECT COUNT(*) AS total, \
                COUNT(*) FILTER (WHERE status = 'active') AS active, \
                COUNT(*) FILTER (WHERE status = 'active' AND is_available) AS available \
             FROM instructors WHERE gym_id = $1",
        )
        .bind(gym_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to aggregate instructors"))?;

        Ok(GymAnalytics {
            subscriptions,
            bookings,
            revenue,
            instructors,
        })
    }

    pub async fn member_progress(&self, user_id: Uuid, today: NaiveDate) -> AppResult<MemberProgress> {
        sqlx::query_as::<_, MemberProgress>(
            "SELECT \
                (SELECT COUNT(*) FROM bookings WHERE user_id = $1 AND status = 'completed') \
                    AS completed_bookings, \
                (SELECT COUNT(*) FROM bookings WHERE user_id = $1 \
                    AND status IN ('pending', 'confirmed') AND booking_date >= $2) \
                    AS upcoming_bookings, \
                (SELECT COUNT(*) FROM bookings WHERE user_id = $1 AND status = 'cancelled') \
                    AS cancelled_bookings, \
                (SELECT COALESCE(SUM(end_date - $2), 0)::BIGINT FROM subscriptions \
                    WHERE user_id = $1 AND status = 'active' AND end_date > $2) \
                    AS active_days_remaining, \
                u.created_at AS member_since \
             FROM users u WHERE u.id = $1",
        )
        .bind(user_id)
        .bind(today)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to aggregate member progress"))
    }

    pub async fn trainer_clients(&self, instructor_id: Uuid) -> AppResult<Vec<TrainerClient>> {
        sqlx::query_as::<_, TrainerClient>(
            "SELECT u.id AS user_id, u.name, u.email, \
                COUNT(b.id) AS booking_count, MAX(b.booking_date) AS last_booking_date \
             FROM bookings b JOIN users u ON u.id = b.user_id \
             WHERE b.instructor_id = $1 \
             GROUP BY u.id, u.name, u.email \
             ORDER BY last_booking_date DESC",
        )
        .bind(instructor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list trainer clients"))
    }

    pub async fn gym_members(&self, gym_id: Uuid) -> AppResult<Vec<GymMember>> {
        sqlx::query_as::<_, GymMember>(
            "SELECT s.id AS subscription_id, u.id AS user_id, u.name, u.email, u.phone, \
                s.plan_type, s.status, s.start_date, s.end_date \
             FROM subscriptions s JOIN users u ON u.id = s.user_id \
             WHERE s.gym_id = $1 \
             ORDER BY s.created_at DESC",
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list gym members"))
    }

    /// Subscription revenue per calendar month over the last twelve months.
    pub async fn monthly_revenue(&self, gym_id: Uuid) -> AppResult<Vec<MonthlyRevenue>> {
        sqlx::query_as::<_, MonthlyRevenue>(
            "SELECT to_char(date_trunc('month', created_at), 'YYYY-MM') AS month, \
                COALESCE(SUM(amount), 0) AS revenue, COUNT(*) AS subscriptions \
             FROM subscriptions \
             WHERE gym_id = $1 \
                AND created_at >= date_trunc('month', NOW()) - INTERVAL '11 months' \
             GROUP BY 1 ORDER BY 1",
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to aggregate monthly revenue"))
    }

    pub async fn admin_overview(&self) -> AppResult<AdminOverview> {
        let users_by_role = self
            .count_by("SELECT role::TEXT AS key, COUNT(*) AS count FROM users GROUP BY 1 ORDER BY 1")
            .await?;
        let gyms_by_status = self
            .count_by("SELECT status::TEXT AS key, COUNT(*) AS count FROM gyms GROUP BY 1 ORDER BY 1")
            .await?;

        let (pending_applications, open_fraud_reports, completed_payment_revenue) =
            sqlx::query_as::<_, (i64, i64, Decimal)>(
                "SELECT \
                    (SELECT COUNT(*) FROM gym_applications \
                        WHERE status IN ('pending', 'under_review')), \
                    (SELECT COUNT(*) FROM fraud_reports \
                        WHERE status IN ('pending', 'under_investigation')), \
                    (SELECT COALESCE(SUM(amount), 0) FROM payments WHERE status = 'completed')",
            )
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to aggregate admin overview"))?;

        Ok(AdminOverview {
            users_by_role,
            gyms_by_status,
            pending_applications,
            open_fraud_reports,
            completed_payment_revenue,
        })
    }

    pub async fn fraud_trends(&self) -> AppResult<FraudTrends> {
        let by_status = self
            .count_by(
                "SELECT status::TEXT AS key, COUNT(*) AS count FROM fraud_reports \
                 GROUP BY 1 ORDER BY 1",
            )
            .await?;
        let by_severity = self
            .count_by(
                "SELECT severity::TEXT AS key, COUNT(*) AS count FROM fraud_reports \
                 GROUP BY 1 ORDER BY 1",
            )
            .await?;
        let by_report_type = self
            .count_by(
                "SELECT report_type::TEXT AS key, COUNT(*) AS count FROM fraud_reports \
                 GROUP BY 1 ORDER BY 1",
            )
            .await?;

        let daily = sqlx::query_as::<_, DailyCount>(
            "SELECT created_at::DATE AS day, COUNT(*) AS count FROM fraud_reports \
             WHERE created_at >= NOW() - INTERVAL '30 days' \
             GROUP BY 1 ORDER BY 1",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to aggregate fraud trends"))?;

        Ok(FraudTrends {
            by_status,
            by_severity,
            by_report_type,
            daily,
        })
    }

    async fn count_by(&self, sql: &'static str) -> AppResult<Vec<CountBy>> {
        sqlx::query_as::<_, CountBy>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to aggregate counts"))
    }
}
