//! Route definitions for the Fitlink HTTP API.
//!
//! All routes are organized by audience and mounted under `/v1`. Role
//! groups carry a [`require_role`] route layer; the remaining
//! authenticated routes rely on the `AuthUser` extractor alone.

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};

use fitlink_entity::user::UserRole;

use crate::handlers;
use crate::middleware::role::{RoleGate, require_role};
use crate::state::AppState;

/// Build the complete Axum router with all routes and request logging.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_routes())
        .merge(authenticated_routes())
        .merge(gated(&state, UserRole::Member, member_routes()))
        .merge(gated(&state, UserRole::Trainer, trainer_routes()))
        .merge(gated(&state, UserRole::GymOwner, gym_owner_routes()))
        .nest(
            "/admin",
            gated(&state, UserRole::Admin, admin_routes()),
        );

    Router::new()
        .nest("/v1", api_routes)
        .fallback(not_found)
        .layer(axum_middleware::from_fn(
            crate::middleware::logging::request_logging,
        ))
        .with_state(state)
}

async fn not_found() -> (StatusCode, axum::Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({ "message": "Route not found" })),
    )
}

fn gated(state: &AppState, role: UserRole, routes: Router<AppState>) -> Router<AppState> {
    routes.route_layer(axum_middleware::from_fn_with_state(
        RoleGate::new(state, role),
        require_role,
    ))
}

/// No token required.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/forgot-password", post(handlers::auth::forgot_password))
        .route("/auth/reset-password", post(handlers::auth::reset_password))
        .route("/gyms", get(handlers::gym::list_gyms))
        .route("/gyms/{id}", get(handlers::gym::get_gym))
        .route("/gyms/{id}/instructors", get(handlers::gym::gym_instructors))
        .route("/routines", get(handlers::routine::list_routines))
        .route("/routines/{id}", get(handlers::routine::get_routine))
}

/// Any authenticated user.
fn authenticated_routes() -> Router<AppState> {
    Router::new()
        // Account
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route(
            "/auth/profile",
            get(handlers::auth::profile).put(handlers::auth::update_profile),
        )
        .route("/auth/change-password", put(handlers::auth::change_password))
        .route("/auth/device-token", post(handlers::auth::register_device))
        .route(
            "/auth/device-token/{token}",
            delete(handlers::auth::remove_device),
        )
        // Subscriptions
        .route(
            "/subscriptions",
            get(handlers::subscription::list_subscriptions)
                .post(handlers::subscription::subscribe),
        )
        .route(
            "/subscriptions/{id}",
            get(handlers::subscription::get_subscription),
        )
        .route(
            "/subscriptions/{id}/cancel",
            put(handlers::subscription::cancel_subscription),
        )
        .route(
            "/subscriptions/{id}/renew",
            put(handlers::subscription::renew_subscription),
        )
        // Bookings
        .route(
            "/bookings",
            get(handlers::booking::list_bookings).post(handlers::booking::create_booking),
        )
        .route("/bookings/{id}", get(handlers::booking::get_booking))
        .route("/bookings/{id}/cancel", put(handlers::booking::cancel_booking))
        // Payments
        .route(
            "/payments",
            get(handlers::payment::list_payments).post(handlers::payment::create_payment),
        )
        .route("/payments/verify", post(handlers::payment::verify_payment))
        .route("/payments/{id}", get(handlers::payment::get_payment))
        .route("/payments/{id}/cancel", put(handlers::payment::cancel_payment))
        // Chat
        .route(
            "/chats",
            get(handlers::chat::list_chats).post(handlers::chat::create_chat),
        )
        .route("/chats/{id}", get(handlers::chat::get_chat))
        .route(
            "/chats/{id}/messages",
            get(handlers::chat::list_messages).post(handlers::chat::send_message),
        )
        .route("/chats/{id}/read", put(handlers::chat::mark_chat_read))
        // Notifications
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}",
            get(handlers::notification::get_notification),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        // Gym applications
        .route(
            "/gym-applications",
            post(handlers::application::submit_application),
        )
        .route(
            "/gym-applications/my-application",
            get(handlers::application::my_application),
        )
        .route(
            "/gym-applications/{id}/resubmit",
            put(handlers::application::resubmit_application),
        )
        // Fraud reports
        .route("/fraud-reports", post(handlers::fraud::submit_report))
        .route("/fraud-reports/my-reports", get(handlers::fraud::my_reports))
}

/// Member dashboard.
fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/member/subscription",
            get(handlers::dashboard::member_subscription),
        )
        .route("/member/workouts", get(handlers::dashboard::member_workouts))
        .route("/member/progress", get(handlers::dashboard::member_progress))
}

/// Trainer dashboard and the trainer's own instructor profile.
fn trainer_routes() -> Router<AppState> {
    Router::new()
        .route("/trainer/clients", get(handlers::dashboard::trainer_clients))
        .route(
            "/trainer/routines",
            get(handlers::routine::my_routines).post(handlers::routine::create_routine),
        )
        .route(
            "/instructor/profile",
            get(handlers::instructor::trainer_profile)
                .put(handlers::instructor::update_trainer_profile),
        )
        .route(
            "/instructor/bookings",
            get(handlers::instructor::trainer_bookings),
        )
        .route(
            "/instructor/bookings/{id}/confirm",
            put(handlers::instructor::confirm_booking),
        )
        .route(
            "/instructor/bookings/{id}/complete",
            put(handlers::instructor::complete_booking),
        )
        .route(
            "/instructor/bookings/{id}/no-show",
            put(handlers::instructor::no_show_booking),
        )
}

/// Gym owner management and dashboard.
fn gym_owner_routes() -> Router<AppState> {
    Router::new()
        .route("/gyms", post(handlers::gym::create_gym))
        .route(
            "/gyms/{id}",
            put(handlers::gym::update_gym).delete(handlers::gym::delete_gym),
        )
        .route("/my-gyms", get(handlers::gym::my_gyms))
        .route("/my-gyms/{id}/analytics", get(handlers::gym::gym_analytics))
        .route("/instructors", post(handlers::instructor::create_instructor))
        .route(
            "/instructors/{id}",
            put(handlers::instructor::update_instructor)
                .delete(handlers::instructor::delete_instructor),
        )
        .route("/my-instructors", get(handlers::instructor::my_instructors))
        .route("/gym-owner/members", get(handlers::dashboard::gym_members))
        .route("/gym-owner/revenue", get(handlers::dashboard::gym_revenue))
        .route(
            "/gym-owner/subscriptions",
            get(handlers::dashboard::gym_subscriptions),
        )
}

/// Admin moderation and analytics, mounted under `/v1/admin`.
fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/gyms/{id}/status", put(admin::gyms::set_status))
        .route("/gyms/{id}/verify", put(admin::gyms::verify))
        .route("/gym-applications", get(admin::applications::list))
        .route("/gym-applications/{id}", get(admin::applications::show))
        .route(
            "/gym-applications/{id}/review",
            put(admin::applications::review),
        )
        .route(
            "/gym-applications/{id}/approve",
            put(admin::applications::approve),
        )
        .route(
            "/gym-applications/{id}/reject",
            put(admin::applications::reject),
        )
        .route(
            "/gym-applications/{id}/require-changes",
            put(admin::applications::require_changes),
        )
        .route("/fraud-reports", get(admin::fraud::list))
        .route("/fraud-reports/{id}", get(admin::fraud::show))
        .route("/fraud-reports/{id}/assign", put(admin::fraud::assign))
        .route(
            "/fraud-reports/{id}/investigate",
            put(admin::fraud::investigate),
        )
        .route("/fraud-reports/{id}/resolve", put(admin::fraud::resolve))
        .route("/fraud-reports/{id}/dismiss", put(admin::fraud::dismiss))
        .route("/fraud-reports/{id}/escalate", put(admin::fraud::escalate))
        .route("/payments/{id}/status", put(admin::payments::set_status))
        .route("/analytics/overview", get(admin::analytics::overview))
        .route(
            "/analytics/fraud-trends",
            get(admin::analytics::fraud_trends),
        )
}
