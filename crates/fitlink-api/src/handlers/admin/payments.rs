//! Manual payment reconciliation.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::PaymentStatusRequest;
use crate::dto::response::{ApiResult, envelope};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// PUT /v1/admin/payments/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<PaymentStatusRequest>,
) -> ApiResult {
    let payment = state
        .payment_service
        .reconcile(&auth, id, req.into())
        .await?;
    Ok(envelope(
        "Payment status updated successfully",
        json!({ "payment": payment }),
    ))
}
