//! Instructor handlers for gym owners and for trainers themselves.

use axum::extract::{Path, State};
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use fitlink_service::booking::TrainerAction;

use crate::dto::request::{
    BookingQuery, CreateInstructorRequest, TrainerProfileRequest, UpdateInstructorRequest,
};
use crate::dto::response::{ApiResult, CreatedResult, created, envelope, message};
use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::state::AppState;

/// POST /v1/instructors
pub async fn create_instructor(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateInstructorRequest>,
) -> CreatedResult {
    let default_rate = Decimal::from(state.config.bookings.default_hourly_rate);
    let instructor = state
        .instructor_service
        .create(&auth, req.into_create(default_rate)?)
        .await?;
    Ok(created(
        "Instructor created successfully",
        json!({ "instructor": instructor }),
    ))
}

/// PUT /v1/instructors/{id}
pub async fn update_instructor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateInstructorRequest>,
) -> ApiResult {
    let instructor = state.instructor_service.update(&auth, id, req.into()).await?;
    Ok(envelope(
        "Instructor updated successfully",
        json!({ "instructor": instructor }),
    ))
}

/// DELETE /v1/instructors/{id}
pub async fn delete_instructor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    state.instructor_service.delete(&auth, id).await?;
    Ok(message("Instructor deleted successfully"))
}

/// GET /v1/my-instructors
pub async fn my_instructors(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let instructors = state.instructor_service.list_mine(&auth).await?;
    Ok(envelope(
        "Instructors retrieved successfully",
        json!({ "instructors": instructors }),
    ))
}

/// GET /v1/instructor/profile
pub async fn trainer_profile(State(state): State<AppState>, auth: AuthUser) -> ApiResult {
    let instructor = state.instructor_service.trainer_profile(&auth).await?;
    Ok(envelope(
        "Profile retrieved successfully",
        json!({ "instructor": instructor }),
    ))
}

/// PUT /v1/instructor/profile
pub async fn update_trainer_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<TrainerProfileRequest>,
) -> ApiResult {
    let instructor = state
        .instructor_service
        .update_trainer_profile(&auth, req.into())
        .await?;
    Ok(envelope(
        "Profile updated successfully",
        json!({ "instructor": instructor }),
    ))
}

/// GET /v1/instructor/bookings
pub async fn trainer_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<BookingQuery>,
) -> ApiResult {
    let bookings = state
        .booking_service
        .list_for_trainer(&auth, query.status)
        .await?;
    Ok(envelope(
        "Bookings retrieved successfully",
        json!({ "bookings": bookings }),
    ))
}

async fn act_on_booking(
    state: AppState,
    auth: AuthUser,
    id: Uuid,
    action: TrainerAction,
    done: &str,
) -> ApiResult {
    let booking = state.booking_service.trainer_action(&auth, id, action).await?;
    Ok(envelope(done, json!({ "booking": booking })))
}

/// PUT /v1/instructor/bookings/{id}/confirm
pub async fn confirm_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    act_on_booking(state, auth, id, TrainerAction::Confirm, "Booking confirmed successfully").await
}

/// PUT /v1/instructor/bookings/{id}/complete
pub async fn complete_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    act_on_booking(state, auth, id, TrainerAction::Complete, "Booking marked as completed").await
}

/// PUT /v1/instructor/bookings/{id}/no-show
pub async fn no_show_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult {
    act_on_booking(state, auth, id, TrainerAction::NoShow, "Booking marked as no-show").await
}
