//! Payment handlers for the caller's own payments.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use fitlink_core::error::AppError;

use crate::dto::request::{CreatePaymentRequest, PaymentQuery};
use crate::dto::response::{ApiResult, CreatedResult, created, envelope};
use crate::error::ApiError;
use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /v1/payments
pub async fn list_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<PaymentQuery>,
) -> ApiResult {
    let payments = state.payment_service.list(&auth, query.status).await?;
    Ok(envelope(
        "Payments retrieved successfully",
        json!({ "payments": payments }),
    ))
}

/// GET /v1/payments/{id}
pub async fn get_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let payment = state.payment_service.get(&auth, id).await?;
    Ok(envelope("Payment retrieved successfully", json!({ "payment": payment })))
}

/// POST /v1/payments
pub async fn create_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePaymentRequest>,
) -> CreatedResult {
    let payment = state
        .payment_service
        .create(&auth, req.payable(), req.payment_method)
        .await?;
    Ok(created("Payment initiated successfully", json!({ "payment": payment })))
}

/// PUT /v1/payments/{id}/cancel
pub async fn cancel_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let payment = state.payment_service.cancel(&auth, id).await?;
    Ok(envelope("Payment cancelled successfully", json!({ "payment": payment })))
}

/// POST /v1/payments/verify
///
/// No payment gateway is integrated; reconciliation goes through the
/// admin status endpoint instead.
pub async fn verify_payment(_auth: AuthUser) -> Result<(), ApiError> {
    Err(AppError::not_implemented(
        "Gateway payment verification is not available. Payments are reconciled by an administrator.",
    )
    .into())
}
