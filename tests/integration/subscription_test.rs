//! Integration tests for gym subscriptions.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, date_in};

#[tokio::test]
async fn test_subscribe_prices_and_dates_from_plan_table() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let (_, gym_id) = app.published_gym(&admin).await;
    let member = app.register("member").await;

    let response = app
        .request(
            "POST",
            "/v1/subscriptions",
            Some(json!({ "gym_id": gym_id, "plan_type": "monthly" })),
            Some(&member.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let sub = &response.body["subscription"];
    assert_eq!(sub["status"], "active");
    assert_eq!(sub["amount"].as_f64(), Some(8000.0));
    assert_eq!(sub["currency"], "NGN");
    assert_eq!(sub["start_date"], json!(date_in(0)));
    assert_eq!(sub["end_date"], json!(date_in(30)));
    assert_eq!(sub["is_active"], json!(true));
    assert_eq!(sub["days_remaining"], json!(30));
}

#[tokio::test]
async fn test_second_active_subscription_to_same_gym_is_refused() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let (_, gym_id) = app.published_gym(&admin).await;
    let member = app.register("member").await;
    let body = json!({ "gym_id": gym_id, "plan_type": "weekly" });

    let first = app
        .request("POST", "/v1/subscriptions", Some(body.clone()), Some(&member.token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/v1/subscriptions", Some(body), Some(&member.token))
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        second.str("/message"),
        "You already have an active subscription to this gym"
    );
}

#[tokio::test]
async fn test_subscribe_validation_and_hidden_gym() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let owner = app.register("gym_owner").await;
    let hidden = app
        .create_gym(&owner, &helpers::unique_name("Draft Gym"))
        .await;
    let member = app.register("member").await;

    let unknown_plan = app
        .request(
            "POST",
            "/v1/subscriptions",
            Some(json!({ "gym_id": hidden, "plan_type": "fortnightly" })),
            Some(&member.token),
        )
        .await;
    assert_eq!(unknown_plan.status, StatusCode::UNPROCESSABLE_ENTITY);

    let not_listed = app
        .request(
            "POST",
            "/v1/subscriptions",
            Some(json!({ "gym_id": hidden, "plan_type": "daily" })),
            Some(&member.token),
        )
        .await;
    assert_eq!(not_listed.status, StatusCode::NOT_FOUND);

    let past = app
        .request(
            "POST",
            "/v1/subscriptions",
            Some(json!({
                "gym_id": hidden,
                "plan_type": "daily",
                "start_date": date_in(-3),
            })),
            Some(&member.token),
        )
        .await;
    assert_eq!(past.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(past.body["errors"].get("start_date").is_some());
}

#[tokio::test]
async fn test_cancel_then_renew_restarts_today() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let (_, gym_id) = app.published_gym(&admin).await;
    let member = app.register("member").await;

    let created = app
        .request(
            "POST",
            "/v1/subscriptions",
            Some(json!({ "gym_id": gym_id, "plan_type": "monthly" })),
            Some(&member.token),
        )
        .await;
    let id = created.str("/subscription/id").to_string();

    let cancelled = app
        .request(
            "PUT",
            &format!("/v1/subscriptions/{id}/cancel"),
            None,
            Some(&member.token),
        )
        .await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(cancelled.str("/subscription/status"), "cancelled");
    assert_eq!(cancelled.body["subscription"]["is_active"], json!(false));

    let again = app
        .request(
            "PUT",
            &format!("/v1/subscriptions/{id}/cancel"),
            None,
            Some(&member.token),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);

    let renewed = app
        .request(
            "PUT",
            &format!("/v1/subscriptions/{id}/renew"),
            Some(json!({ "plan_type": "weekly" })),
            Some(&member.token),
        )
        .await;
    assert_eq!(renewed.status, StatusCode::OK, "{:?}", renewed.body);
    let sub = &renewed.body["subscription"];
    assert_eq!(sub["status"], "active");
    assert_eq!(sub["plan_type"], "weekly");
    assert_eq!(sub["start_date"], json!(date_in(0)));
    assert_eq!(sub["end_date"], json!(date_in(7)));
}

#[tokio::test]
async fn test_renewing_old_subscription_beside_active_one_is_refused() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let (_, gym_id) = app.published_gym(&admin).await;
    let member = app.register("member").await;
    let subscribe = json!({ "gym_id": gym_id, "plan_type": "monthly" });

    let first = app
        .request("POST", "/v1/subscriptions", Some(subscribe.clone()), Some(&member.token))
        .await;
    let first_id = first.str("/subscription/id").to_string();
    app.request(
        "PUT",
        &format!("/v1/subscriptions/{first_id}/cancel"),
        None,
        Some(&member.token),
    )
    .await;

    let second = app
        .request("POST", "/v1/subscriptions", Some(subscribe), Some(&member.token))
        .await;
    assert_eq!(second.status, StatusCode::CREATED, "{:?}", second.body);

    let renewed = app
        .request(
            "PUT",
            &format!("/v1/subscriptions/{first_id}/renew"),
            None,
            Some(&member.token),
        )
        .await;
    assert_eq!(renewed.status, StatusCode::BAD_REQUEST, "{:?}", renewed.body);
    assert_eq!(
        renewed.str("/message"),
        "You already have an active subscription to this gym"
    );

    let active: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM subscriptions WHERE user_id = $1 AND gym_id = $2 AND status = 'active'",
    )
    .bind(member.id)
    .bind(gym_id)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(active, 1);
}

#[tokio::test]
async fn test_renewing_active_subscription_extends_from_end_date() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let (_, gym_id) = app.published_gym(&admin).await;
    let member = app.register("member").await;

    let created = app
        .request(
            "POST",
            "/v1/subscriptions",
            Some(json!({ "gym_id": gym_id, "plan_type": "weekly" })),
            Some(&member.token),
        )
        .await;
    let id = created.str("/subscription/id").to_string();

    let renewed = app
        .request(
            "PUT",
            &format!("/v1/subscriptions/{id}/renew"),
            None,
            Some(&member.token),
        )
        .await;
    assert_eq!(renewed.status, StatusCode::OK, "{:?}", renewed.body);
    assert_eq!(renewed.body["subscription"]["start_date"], json!(date_in(7)));
    assert_eq!(renewed.body["subscription"]["end_date"], json!(date_in(14)));
}

#[tokio::test]
async fn test_subscriptions_are_private_and_listed_on_dashboards() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let (owner, gym_id) = app.published_gym(&admin).await;
    let member = app.register("member").await;
    let stranger = app.register("member").await;

    let created = app
        .request(
            "POST",
            "/v1/subscriptions",
            Some(json!({ "gym_id": gym_id, "plan_type": "quarterly" })),
            Some(&member.token),
        )
        .await;
    let path = format!("/v1/subscriptions/{}", created.str("/subscription/id"));

    assert_eq!(
        app.request("GET", &path, None, Some(&stranger.token))
            .await
            .status,
        StatusCode::NOT_FOUND
    );

    let current = app
        .request("GET", "/v1/member/subscription", None, Some(&member.token))
        .await;
    assert_eq!(current.status, StatusCode::OK);
    assert_eq!(current.body["subscriptions"].as_array().map(Vec::len), Some(1));

    let for_gym = app
        .request(
            "GET",
            "/v1/gym-owner/subscriptions",
            None,
            Some(&owner.token),
        )
        .await;
    assert_eq!(for_gym.status, StatusCode::OK, "{:?}", for_gym.body);
    assert_eq!(for_gym.body["pagination"]["total"], json!(1));

    let deletion = app
        .request(
            "DELETE",
            &format!("/v1/gyms/{gym_id}"),
            None,
            Some(&owner.token),
        )
        .await;
    assert_eq!(deletion.status, StatusCode::BAD_REQUEST);
}
