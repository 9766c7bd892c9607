//! Payment creation, cancellation, and admin reconciliation.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::traits::Lifecycle;
use fitlink_database::repositories::{BookingRepository, PaymentRepository, SubscriptionRepository};
use fitlink_entity::booking::BookingPaymentStatus;
use fitlink_entity::notification::{CreateNotification, NotificationType};
use fitlink_entity::payment::{
    CreatePayment, PayableKind, PayableRef, Payment, PaymentMethod, PaymentStatus,
};

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// Admin reconciliation input.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub failure_reason: Option<String>,
}

/// What a payable resolves to: the amount owed and a line for the receipt.
struct Charge {
    amount: Decimal,
    currency: String,
    description: String,
}

fn gateway_reference() -> String {
    format!("FL-{}", Uuid::now_v7().simple()).to_uppercase()
}

#[derive(Debug, Clone)]
pub struct PaymentService {
    payment_repo: Arc<PaymentRepository>,
    subscription_repo: Arc<SubscriptionRepository>,
    booking_repo: Arc<BookingRepository>,
    notifications: Arc<NotificationService>,
}

impl PaymentService {
    pub fn new(
        payment_repo: Arc<PaymentRepository>,
        subscription_repo: Arc<SubscriptionRepository>,
        booking_repo: Arc<BookingRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            payment_repo,
            subscription_repo,
            booking_repo,
            notifications,
        }
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        status: Option<PaymentStatus>,
    ) -> Result<Vec<Payment>, AppError> {
        self.payment_repo.list_by_user(ctx.user_id, status).await
    }

    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Payment, AppError> {
        self.payment_repo
            .find_by_id(id)
            .await?
            .filter(|p| p.user_id == ctx.user_id)
            .ok_or_else(|| AppError::not_found("Payment not found"))
    }

    /// Open a pending payment for something the caller owns.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        payable: PayableRef,
        payment_method: PaymentMethod,
    ) -> Result<Payment, AppError> {
        let charge = self.resolve(ctx, payable).await?;

        let payment = self
            .payment_repo
            .create(&CreatePayment {
                user_id: ctx.user_id,
                payable,
                amount: charge.amount,
                currency: charge.currency,
                payment_method,
                gateway_reference: gateway_reference(),
                description: Some(charge.description),
            })
            .await?;

        info!(
            payment_id = %payment.id,
            user_id = %ctx.user_id,
            payable_type = %payable.kind,
            payable_id = %payable.id,
            amount = %payment.amount,
            "Payment created"
        );
        Ok(payment)
    }

    pub async fn cancel(&self, ctx: &RequestContext, id: Uuid) -> Result<Payment, AppError> {
        let payment = self.get(ctx, id).await?;
        let status = payment.status.transition_to(PaymentStatus::Cancelled)?;
        let cancelled = self.payment_repo.set_status(id, status, None, None).await?;
        info!(payment_id = %id, user_id = %ctx.user_id, "Payment cancelled");
        Ok(cancelled)
    }

    /// Admin reconciliation: move a payment through its lifecycle and carry
    /// the result onto the payable.
    pub async fn reconcile(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: StatusUpdate,
    ) -> Result<Payment, AppError> {
        let payment = self
            .payment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Payment not found"))?;

        let status = payment.status.transition_to(update.status)?;
        let updated = self
            .payment_repo
            .set_status(
                id,
                status,
                update.transaction_id.as_deref(),
                update.failure_reason.as_deref(),
            )
            .await?;

        info!(
            payment_id = %id,
            admin_id = %ctx.user_id,
            from = %payment.status,
            to = %status,
            "Payment status reconciled"
        );

        self.apply_to_payable(&updated).await?;
        self.notify_outcome(&updated).await;
        Ok(updated)
    }

    async fn resolve(&self, ctx: &RequestContext, payable: PayableRef) -> Result<Charge, AppError> {
        match payable.kind {
            PayableKind::Subscription => {
                let subscription = self
                    .subscription_repo
                    .find_for_user(payable.id, ctx.user_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Subscription not found"))?;
                Ok(Charge {
                    amount: subscription.amount,
                    currency: subscription.currency,
                    description: format!("{} subscription", subscription.plan_type),
                })
            }
            PayableKind::Booking => {
                let booking = self
                    .booking_repo
                    .find_by_id(payable.id)
                    .await?
                    .filter(|b| b.user_id == ctx.user_id)
                    .ok_or_else(|| AppError::not_found("Booking not found"))?;
                if booking.payment_status == BookingPaymentStatus::Paid {
                    return Err(AppError::business_rule("This booking has already been paid"));
                }
                Ok(Charge {
                    amount: booking.amount,
                    currency: booking.currency,
                    description: format!(
                        "{}-minute session on {}",
                        booking.duration_minutes, booking.booking_date
                    ),
                })
            }
        }
    }

    async fn apply_to_payable(&self, payment: &Payment) -> Result<(), AppError> {
        let payable = payment.payable();
        match (payable.kind, payment.status) {
            (PayableKind::Subscription, PaymentStatus::Completed) => {
                self.subscription_repo.mark_paid(payable.id).await
            }
            (PayableKind::Booking, PaymentStatus::Completed) => {
                self.booking_repo
                    .set_payment_status(payable.id, BookingPaymentStatus::Paid)
                    .await
            }
            (PayableKind::Booking, PaymentStatus::Refunded) => {
                self.booking_repo
                    .set_payment_status(payable.id, BookingPaymentStatus::Refunded)
                    .await
            }
            (PayableKind::Booking, PaymentStatus::Failed) => {
                self.booking_repo
                    .set_payment_status(payable.id, BookingPaymentStatus::Failed)
                    .await
            }
            _ => Ok(()),
        }
    }

    async fn notify_outcome(&self, payment: &Payment) {
        let (kind, title, body) = match payment.status {
            PaymentStatus::Completed => (
                NotificationType::PaymentSuccess,
                "Payment successful",
                format!("Your payment of {} {} was received.", payment.currency, payment.amount),
            ),
            PaymentStatus::Failed => (
                NotificationType::PaymentFailed,
                "Payment failed",
                payment
                    .failure_reason
                    .clone()
                    .unwrap_or_else(|| "Your payment could not be completed.".to_string()),
            ),
            _ => return,
        };
        self.notifications
            .notify(
                CreateNotification::in_app(payment.user_id, kind, title, body)
                    .with_data(json!({ "payment_id": payment.id })),
            )
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_reference_is_unique_and_prefixed() {
        let a = gateway_reference();
        let b = gateway_reference();
        assert!(a.starts_with("FL-"));
        assert_eq!(a.len(), 3 + 32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_reconcile_paths() {
        assert!(PaymentStatus::Pending
            .transition_to(PaymentStatus::Completed)
            .is_ok());
        assert!(PaymentStatus::Completed
            .transition_to(PaymentStatus::Refunded)
            .is_ok());
        assert!(PaymentStatus::Failed
            .transition_to(PaymentStatus::Completed)
            .is_err());
    }
}
