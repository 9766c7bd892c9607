//! Booking handlers for members.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::dto::request::{BookingQuery, CancelBookingRequest, CreateBookingRequest};
use crate::dto::response::{ApiResult, CreatedResult, created, envelope};
use crate::extractors::{AuthUser, OptionalJson, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /v1/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<BookingQuery>,
) -> ApiResult {
    let bookings = state.booking_service.list(&auth, query.status).await?;
    Ok(envelope(
        "Bookings retrieved successfully",
        json!({ "bookings": bookings }),
    ))
}

/// GET /v1/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    let booking = state.booking_service.get(&auth, id).await?;
    Ok(envelope("Booking retrieved successfully", json!({ "booking": booking })))
}

/// POST /v1/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> CreatedResult {
    let booking = state.booking_service.create(&auth, req.into_input()?).await?;
    Ok(created("Booking created successfully", json!({ "booking": booking })))
}

/// PUT /v1/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    OptionalJson(req): OptionalJson<CancelBookingRequest>,
) -> ApiResult {
    let booking = state.booking_service.cancel(&auth, id, req.reason).await?;
    Ok(envelope("Booking cancelled successfully", json!({ "booking": booking })))
}
