//! Application builder: wires repositories, auth and services into
//! `AppState`, then router plus middleware into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use fitlink_auth::{PasswordHasher, PasswordValidator, SessionManager, SessionStore};
use fitlink_core::config::AppConfig;
use fitlink_core::error::AppError;
use fitlink_database::repositories::{
    BookingRepository, ChatRepository, DashboardRepository, DeviceTokenRepository,
    FraudReportRepository, GymApplicationRepository, GymRepository, InstructorRepository,
    NotificationRepository, PaymentRepository, RoutineRepository, SessionRepository,
    SubscriptionRepository, UserRepository,
};
use fitlink_service::{
    AuthService, BookingService, ChatService, DashboardService, DiscoveryService,
    FraudReportService, GymApplicationService, GymService, InstructorService,
    NotificationService, PaymentService, RoutineService, SubscriptionService,
};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    build_router(state)
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout_seconds),
        ))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http())
}

/// Construct every repository and service over one pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let device_repo = Arc::new(DeviceTokenRepository::new(db_pool.clone()));
    let gym_repo = Arc::new(GymRepository::new(db_pool.clone()));
    let instructor_repo = Arc::new(InstructorRepository::new(db_pool.clone()));
    let subscription_repo = Arc::new(SubscriptionRepository::new(db_pool.clone()));
    let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));
    let payment_repo = Arc::new(PaymentRepository::new(db_pool.clone()));
    let chat_repo = Arc::new(ChatRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
    let application_repo = Arc::new(GymApplicationRepository::new(db_pool.clone()));
    let fraud_repo = Arc::new(FraudReportRepository::new(db_pool.clone()));
    let routine_repo = Arc::new(RoutineRepository::new(db_pool.clone()));
    let dashboard_repo = Arc::new(DashboardRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let session_store = SessionStore::new(SessionRepository::new(db_pool.clone()));
    let session_manager = Arc::new(SessionManager::new(&config.auth, session_store));
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let notification_service = Arc::new(NotificationService::new(Arc::clone(
        &notification_repo,
    )));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        device_repo,
        Arc::clone(&session_manager),
        password_hasher,
        password_validator,
    ));
    let discovery_service = Arc::new(DiscoveryService::new(
        Arc::clone(&gym_repo),
        Arc::clone(&instructor_repo),
        config.discovery.clone(),
    ));
    let gym_service = Arc::new(GymService::new(
        Arc::clone(&gym_repo),
        Arc::clone(&instructor_repo),
        Arc::clone(&subscription_repo),
        Arc::clone(&dashboard_repo),
    ));
    let instructor_service = Arc::new(InstructorService::new(
        Arc::clone(&instructor_repo),
        Arc::clone(&gym_repo),
        Arc::clone(&user_repo),
    ));
    let subscription_service = Arc::new(SubscriptionService::new(
        Arc::clone(&subscription_repo),
        Arc::clone(&gym_repo),
        config.plans.clone(),
    ));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&instructor_repo),
        Arc::clone(&gym_repo),
        Arc::clone(&notification_service),
        config.bookings.clone(),
        config.plans.currency.clone(),
    ));
    let payment_service = Arc::new(PaymentService::new(
        Arc::clone(&payment_repo),
        Arc::clone(&subscription_repo),
        Arc::clone(&booking_repo),
        Arc::clone(&notification_service),
    ));
    let chat_service = Arc::new(ChatService::new(chat_repo, Arc::clone(&user_repo)));
    let application_service = Arc::new(GymApplicationService::new(
        application_repo,
        Arc::clone(&gym_repo),
        Arc::clone(&notification_service),
    ));
    let fraud_service = Arc::new(FraudReportService::new(
        fraud_repo,
        Arc::clone(&user_repo),
        Arc::clone(&gym_repo),
        Arc::clone(&instructor_repo),
        payment_repo,
        booking_repo,
    ));
    let routine_service = Arc::new(RoutineService::new(routine_repo));
    let dashboard_service = Arc::new(DashboardService::new(
        dashboard_repo,
        gym_repo,
        instructor_repo,
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        session_manager,
        auth_service,
        discovery_service,
        gym_service,
        instructor_service,
        subscription_service,
        booking_service,
        payment_service,
        chat_service,
        notification_service,
        application_service,
        fraud_service,
        routine_service,
        dashboard_service,
    }
}

/// Runs the Fitlink server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let app = build_app(build_state(config, db_pool));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "Fitlink server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Fitlink server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
