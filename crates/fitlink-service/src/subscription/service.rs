//! Subscription operations.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use fitlink_core::config::{PlanTerms, PlansConfig};
use fitlink_core::error::AppError;
use fitlink_core::traits::Lifecycle;
use fitlink_core::types::{PageRequest, PageResponse};
use fitlink_database::repositories::{GymRepository, SubscriptionRepository};
use fitlink_entity::subscription::{
    CreateSubscription, PlanType, Subscription, SubscriptionStatus,
};

use crate::context::RequestContext;

/// A subscription with the flags derived from today's date.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionView {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub is_active: bool,
    pub expires_soon: bool,
    pub days_remaining: i64,
}

impl SubscriptionView {
    pub fn on(subscription: Subscription, today: NaiveDate) -> Self {
        Self {
            is_active: subscription.is_active_on(today),
            expires_soon: subscription.expires_soon_on(today),
            days_remaining: subscription.days_until_end(today).max(0),
            subscription,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub gym_id: Uuid,
    pub plan_type: PlanType,
    /// Defaults to today.
    pub start_date: Option<NaiveDate>,
    pub auto_renew: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SubscriptionService {
    subscription_repo: Arc<SubscriptionRepository>,
    gym_repo: Arc<GymRepository>,
    plans: PlansConfig,
}

impl SubscriptionService {
    pub fn new(
        subscription_repo: Arc<SubscriptionRepository>,
        gym_repo: Arc<GymRepository>,
        plans: PlansConfig,
    ) -> Self {
        Self {
            subscription_repo,
            gym_repo,
            plans,
        }
    }

    fn terms(&self, plan: PlanType) -> Result<PlanTerms, AppError> {
        self.plans.terms(plan.as_str()).ok_or_else(|| {
            AppError::configuration(format!("No price configured for plan '{plan}'"))
        })
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        status: Option<SubscriptionStatus>,
    ) -> Result<Vec<SubscriptionView>, AppError> {
        let today = ctx.today();
        Ok(self
            .subscription_repo
            .list_by_user(ctx.user_id, status)
            .await?
            .into_iter()
            .map(|s| SubscriptionView::on(s, today))
            .collect())
    }

    /// Subscriptions of the caller that are active today.
    pub async fn current(&self, ctx: &RequestContext) -> Result<Vec<SubscriptionView>, AppError> {
        let today = ctx.today();
        Ok(self
            .subscription_repo
            .list_current_by_user(ctx.user_id, today)
            .await?
            .into_iter()
            .map(|s| SubscriptionView::on(s, today))
            .collect())
    }

    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<SubscriptionView, AppError> {
        Ok(SubscriptionView::on(self.find_own(ctx, id).await?, ctx.today()))
    }

    /// Subscriptions to a gym, for its owner's dashboard.
    pub async fn list_for_gym(
        &self,
        gym_id: Uuid,
        status: Option<SubscriptionStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<Subscription>, AppError> {
        self.subscription_repo.list_by_gym(gym_id, status, &page).await
    }

    pub async fn subscribe(
        &self,
        ctx: &RequestContext,
        input: NewSubscription,
    ) -> Result<SubscriptionView, AppError> {
        let today = ctx.today();
        let start_date = input.start_date.unwrap_or(today);
        if start_date < today {
            return Err(AppError::field(
                "start_date",
                "The start date must be a date after or equal to today.",
            ));
        }

        let gym = self
            .gym_repo
            .find_visible_by_id(input.gym_id)
            .await?
            .ok_or_else(|| AppError::not_found("Gym not found"))?;

        if self.subscription_repo.has_active(ctx.user_id, gym.id).await? {
            return Err(AppError::business_rule(
                "You already have an active subscription to this gym",
            ));
        }

        let terms = self.terms(input.plan_type)?;
        let subscription = self
            .subscription_repo
            .create(&CreateSubscription {
                user_id: ctx.user_id,
                gym_id: gym.id,
                plan_type: input.plan_type,
                amount: Decimal::from(terms.price),
                currency: self.plans.currency.clone(),
                start_date,
                end_date: PlanType::period_end(start_date, terms.days),
                auto_renew: input.auto_renew,
                notes: input.notes,
            })
            .await?;

        info!(
            subscription_id = %subscription.id,
            user_id = %ctx.user_id,
            gym_id = %gym.id,
            plan = %subscription.plan_type,
            "Subscription created"
        );
        Ok(SubscriptionView::on(subscription, today))
    }

    pub async fn cancel(&self, ctx: &RequestContext, id: Uuid) -> Result<SubscriptionView, AppError> {
        let subscription = self.find_own(ctx, id).await?;
        let status = subscription
            .status
            .transition_to(SubscriptionStatus::Cancelled)?;
        let cancelled = self.subscription_repo.set_status(id, status).await?;
        info!(subscription_id = %id, user_id = %ctx.user_id, "Subscription cancelled");
        Ok(SubscriptionView::on(cancelled, ctx.today()))
    }

    /// Start a new period. An active subscription extends from its end date;
    /// anything else restarts today.
    pub async fn renew(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        plan_type: Option<PlanType>,
    ) -> Result<SubscriptionView, AppError> {
        let subscription = self.find_own(ctx, id).await?;
        let today = ctx.today();

        let status = match subscription.status {
            SubscriptionStatus::Active => SubscriptionStatus::Active,
            SubscriptionStatus::Suspended => {
                return Err(AppError::business_rule(
                    "A suspended subscription cannot be renewed",
                ));
            }
            other => {
                let status = other.transition_to(SubscriptionStatus::Active)?;
                // This row is not active, so any hit is a different subscription.
                if self
                    .subscription_repo
                    .has_active(subscription.user_id, subscription.gym_id)
                    .await?
                {
                    return Err(AppError::business_rule(
                        "You already have an active subscription to this gym",
                    ));
                }
                status
            }
        };

        let plan = plan_type.unwrap_or(subscription.plan_type);
        let terms = self.terms(plan)?;
        let start_date = subscription.renewal_start(today);
        let end_date = PlanType::period_end(start_date, terms.days);

        let renewed = self
            .subscription_repo
            .renew(id, plan, Decimal::from(terms.price), start_date, end_date, status)
            .await?;

        info!(
            subscription_id = %id,
            user_id = %ctx.user_id,
            plan = %plan,
            %start_date,
            %end_date,
            "Subscription renewed"
        );
        Ok(SubscriptionView::on(renewed, today))
    }

    /// Move every overdue active subscription to expired.
    ///
    /// Returns how many rows were expired. Used by the operator CLI.
    pub async fn expire_overdue(&self, today: NaiveDate) -> Result<u64, AppError> {
        let mut expired = 0;
        for subscription in self.subscription_repo.list_overdue(today).await? {
            match subscription.status.transition_to(SubscriptionStatus::Expired) {
                Ok(status) => {
                    self.subscription_repo
                        .set_status(subscription.id, status)
                        .await?;
                    expired += 1;
                }
                Err(e) => warn!(
                    subscription_id = %subscription.id,
                    error = %e,
                    "Skipping subscription during expiry sweep"
                ),
            }
        }
        info!(expired, %today, "Expiry sweep finished");
        Ok(expired)
    }

    async fn find_own(&self, ctx: &RequestContext, id: Uuid) -> Result<Subscription, AppError> {
        self.subscription_repo
            .find_for_user(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Subscription not found"))
    }
}
