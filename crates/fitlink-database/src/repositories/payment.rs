//! Payment repository.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use fitlink_core::result::AppResult;
use fitlink_entity::payment::{CreatePayment, Payment, PaymentStatus, PaymentType};

use super::db_err;

#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payment>> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find payment"))
    }

    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        status: Option<PaymentStatus>,
    ) -> AppResult<Vec<Payment>> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM payments WHERE user_id = ");
        qb.push_bind(user_id);
        if let Some(status) = status {
            qb.push(" AND status = ").push_bind(status);
        }
        qb.push(" ORDER BY created_at DESC");
        qb.build_query_as::<Payment>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list payments"))
    }

    pub async fn create(&self, data: &CreatePayment) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (user_id, payable_type, payable_id, payment_type, amount, \
                currency, payment_method, gateway_reference, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.payable.kind)
        .bind(data.payable.id)
        .bind(PaymentType::from(data.payable.kind))
        .bind(data.amount)
        .bind(&data.currency)
        .bind(data.payment_method)
        .bind(&data.gateway_reference)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create payment"))
    }

    /// Store a new status, stamping `paid_at` or `failed_at` to match.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
        transaction_id: Option<&str>,
        failure_reason: Option<&str>,
    ) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "UPDATE payments SET \
                status = $2, \
                transaction_id = COALESCE($3, transaction_id), \
                failure_reason = COALESCE($4, failure_reason), \
                paid_at = CASE WHEN $2 = 'completed'::payment_status \
                    THEN NOW() ELSE paid_at END, \
                failed_at = CASE WHEN $2 = 'failed'::payment_status \
                    THEN NOW() ELSE failed_at END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(transaction_id)
        .bind(failure_reason)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to update payment status"))
    }
}
