//! Shared test helpers for integration tests.
//!
//! Tests run against the PostgreSQL database named by
//! `FITLINK_TEST_DATABASE_URL` and are skipped when it is unset. Every
//! account uses a fresh email, so tests share one database and run in
//! parallel without cleanup.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use fitlink_core::config::AppConfig;

/// Password accepted by the default password policy.
pub const PASSWORD: &str = "Kettlebell-Swing-42";

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

/// A registered account and its bearer token.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

impl TestApp {
    /// Build the app over the test database, or `None` when it is not configured.
    pub async fn try_new() -> Option<Self> {
        let Ok(url) = std::env::var("FITLINK_TEST_DATABASE_URL") else {
            eprintln!("FITLINK_TEST_DATABASE_URL not set; skipping");
            return None;
        };

        let mut config = AppConfig::default();
        config.database.url = url;
        config.database.max_connections = 5;
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let db = fitlink_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        fitlink_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");
        let db_pool = db.into_pool();

        let state = fitlink_api::build_state(config.clone(), db_pool.clone());
        let router = fitlink_api::build_app(state);

        Some(Self {
            router,
            db_pool,
            config,
        })
    }

    /// Register an account with the given role through the API.
    pub async fn register(&self, role: &str) -> TestUser {
        let email = unique_email(role);
        let response = self
            .request(
                "POST",
                "/v1/auth/register",
                Some(json!({
                    "name": format!("Test {role}"),
                    "email": email,
                    "password": PASSWORD,
                    "password_confirmation": PASSWORD,
                    "role": role,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        TestUser {
            id: response.uuid("/user/id"),
            email,
            token: response.str("/token").to_string(),
        }
    }

    /// Create an admin. Admins cannot self-register, so the role is set in SQL;
    /// roles are read live on every request, so the token stays valid.
    pub async fn admin(&self) -> TestUser {
        let user = self.register("member").await;
        sqlx::query("UPDATE users SET role = 'admin' WHERE id = $1")
            .bind(user.id)
            .execute(&self.db_pool)
            .await
            .expect("Failed to promote admin");
        user
    }

    /// Log in and return the bearer token
    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/v1/auth/login",
            Some(json!({ "email": email, "password": password })),
            None,
        )
        .await
    }

    /// Create a gym for `owner` and return its id.
    pub async fn create_gym(&self, owner: &TestUser, name: &str) -> Uuid {
        self.create_gym_from(owner, gym_payload(name)).await
    }

    /// Create a gym for `owner` from a full request body.
    pub async fn create_gym_from(&self, owner: &TestUser, payload: Value) -> Uuid {
        let response = self
            .request("POST", "/v1/gyms", Some(payload), Some(&owner.token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Gym creation failed: {:?}",
            response.body
        );
        response.uuid("/gym/id")
    }

    /// Approve and verify a gym so discovery shows it.
    pub async fn publish_gym(&self, admin: &TestUser, gym_id: Uuid) {
        let response = self
            .request(
                "PUT",
                &format!("/v1/admin/gyms/{gym_id}/status"),
                Some(json!({ "status": "approved" })),
                Some(&admin.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

        let response = self
            .request(
                "PUT",
                &format!("/v1/admin/gyms/{gym_id}/verify"),
                None,
                Some(&admin.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    /// An owner with a published gym: `(owner, gym_id)`.
    pub async fn published_gym(&self, admin: &TestUser) -> (TestUser, Uuid) {
        let owner = self.register("gym_owner").await;
        let gym_id = self.create_gym(&owner, &unique_name("Iron Temple")).await;
        self.publish_gym(admin, gym_id).await;
        (owner, gym_id)
    }

    /// Add an instructor to the owner's gym, optionally linked to a trainer account.
    pub async fn create_instructor(&self, owner: &TestUser, trainer: Option<&TestUser>) -> Uuid {
        let mut body = json!({
            "name": "Coach Ada",
            "specialization": "Strength",
            "years_experience": 6,
            "hourly_rate": 6000,
        });
        if let Some(trainer) = trainer {
            body["user_id"] = json!(trainer.id);
        }
        let response = self
            .request("POST", "/v1/instructors", Some(body), Some(&owner.token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Instructor creation failed: {:?}",
            response.body
        );
        response.uuid("/instructor/id")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = match body {
            Some(body) => req
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// String at a JSON pointer, panicking with the body when absent.
    pub fn str(&self, pointer: &str) -> &str {
        self.body
            .pointer(pointer)
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("No string at {pointer} in {:?}", self.body))
    }

    pub fn uuid(&self, pointer: &str) -> Uuid {
        self.str(pointer).parse().expect("Not a UUID")
    }
}

pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@fitlink.test", Uuid::new_v4().simple())
}

pub fn unique_name(prefix: &str) -> String {
    format!("{prefix} {}", &Uuid::new_v4().simple().to_string()[..8])
}

pub fn gym_payload(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Free weights, rigs and a sauna",
        "phone": "+2348030000000",
        "address": "12 Nnebisi Road",
        "city": "Asaba",
        "state": "Delta",
        "country": "Nigeria",
        "latitude": 6.2,
        "longitude": 6.73,
        "amenities": ["sauna", "parking"],
    })
}

/// `YYYY-MM-DD`, `days` from today.
pub fn date_in(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).to_string()
}
