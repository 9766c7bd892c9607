//! Subscription repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_core::types::pagination::{PageRequest, PageResponse};
use fitlink_entity::subscription::{
    CreateSubscription, PlanType, Subscription, SubscriptionStatus,
};

use super::db_err;

#[derive(Debug, Clone)]
pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subscription>> {
        sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find subscription"))
    }

    /// A subscription only if `user_id` owns it.
    pub async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<Subscription>> {
        sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to find subscription"))
    }

    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        status: Option<SubscriptionStatus>,
    ) -> AppResult<Vec<Subscription>> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM subscriptions WHERE user_id = ");
        qb.push_bind(user_id);
        if let Some(status) = status {
            qb.push(" AND status = ").push_bind(status);
        }
        qb.push(" ORDER BY created_at DESC");
        qb.build_query_as::<Subscription>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list subscriptions"))
    }

    /// Subscriptions that are active and have not yet reached their end date.
    pub async fn list_current_by_user(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<Vec<Subscription>> {
        sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions \
             WHERE user_id = $1 AND status = 'active' AND end_date > $2 \
             ORDER BY end_date",
        )
        .bind(user_id)
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list current subscriptions"))
    }

    pub async fn list_by_gym(
        &self,
        gym_id: Uuid,
        status: Option<SubscriptionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Subscription>> {
        let filter = |qb: &mut QueryBuilder<'static, Postgres>| {
            qb.push(" WHERE gym_id = ").push_bind(gym_id);
            if let Some(status) = status {
                qb.push(" AND status = ").push_bind(status);
            }
        };

        let mut count = QueryBuilder::new("SELECT COUNT(*) FROM subscriptions");
        filter(&mut count);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to count gym subscriptions"))?;

        let mut select = QueryBuilder::new("SELECT * FROM subscriptions");
        filter(&mut select);
        select
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);
        let items = select
            .build_query_as::<Subscription>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list gym subscriptions"))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    /// Whether the user holds a stored-active subscription at the gym.
    pub async fn has_active(&self, user_id: Uuid, gym_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM subscriptions \
             WHERE user_id = $1 AND gym_id = $2 AND status = 'active')",
        )
        .bind(user_id)
        .bind(gym_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to check active subscription"))
    }

    pub async fn count_active_for_gym(&self, gym_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM subscriptions WHERE gym_id = $1 AND status = 'active'",
        )
        .bind(gym_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to count active subscriptions"))
    }

    /// Active rows whose end date is on or before `today`.
    pub async fn list_overdue(&self, today: NaiveDate) -> AppResult<Vec<Subscription>> {
        sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE status = 'active' AND end_date <= $1 \
             ORDER BY end_date",
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list overdue subscriptions"))
    }

    pub async fn create(&self, data: &CreateSubscription) -> AppResult<Subscription> {
        sqlx::query_as::<_, Subscription>(
            "INSERT INTO subscriptions (user_id, gym_id, plan_type, amount, currency, \
                start_date, end_date, status, auto_renew, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'active', $8, $9) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.gym_id)
        .bind(data.plan_type)
        .bind(data.amount)
        .bind(&data.currency)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.auto_renew)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create subscription"))
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: SubscriptionStatus,
    ) -> AppResult<Subscription> {
        sqlx::query_as::<_, Subscription>(
            "UPDATE subscriptions SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to update subscription status"))
    }

    /// Start a new period on an existing subscription.
    pub async fn renew(
        &self,
        id: Uuid,
        plan_type: PlanType,
        amount: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: SubscriptionStatus,
    ) -> AppResult<Subscription> {
        sqlx::query_as::<_, Subscription>(
            "UPDATE subscriptions SET plan_type = $2, amount = $3, start_date = $4, \
                end_date = $5, status = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(plan_type)
        .bind(amount)
        .bind(start_date)
        .bind(end_date)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to renew subscription"))
    }

    /// Stamp a completed payment.
    pub async fn mark_paid(&self, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE subscriptions SET last_payment_at = NOW(), updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to record subscription payment"))?;
        Ok(())
    }
}
