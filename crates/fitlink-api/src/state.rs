//! Shared application state passed to every handler via Axum's `State`.

use std::sync::Arc;

use sqlx::PgPool;

use fitlink_auth::SessionManager;
use fitlink_core::config::AppConfig;
use fitlink_service::{
    AuthService, BookingService, ChatService, DashboardService, DiscoveryService,
    FraudReportService, GymApplicationService, GymService, InstructorService,
    NotificationService, PaymentService, RoutineService, SubscriptionService,
};

/// Cheaply cloneable handle to configuration, the pool, and all services.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db_pool: PgPool,

    // ── Auth ───────────────────────────────────────────────────
    pub session_manager: Arc<SessionManager>,

    // ── Services ───────────────────────────────────────────────
    pub auth_service: Arc<AuthService>,
    pub discovery_service: Arc<DiscoveryService>,
    pub gym_service: Arc<GymService>,
    pub instructor_service: Arc<InstructorService>,
    pub subscription_service: Arc<SubscriptionService>,
    pub booking_service: Arc<BookingService>,
    pub payment_service: Arc<PaymentService>,
    pub chat_service: Arc<ChatService>,
    pub notification_service: Arc<NotificationService>,
    pub application_service: Arc<GymApplicationService>,
    pub fraud_service: Arc<FraudReportService>,
    pub routine_service: Arc<RoutineService>,
    pub dashboard_service: Arc<DashboardService>,
}
