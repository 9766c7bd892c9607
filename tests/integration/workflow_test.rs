//! End-to-end flows across several roles.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, unique_email, unique_name};

#[tokio::test]
async fn test_owner_onboarding_through_application_approval() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let owner = app.register("gym_owner").await;

    let payload = json!({
        "business_name": unique_name("Pulse Fitness"),
        "business_address": "4 Okpanam Road",
        "business_city": "Asaba",
        "business_state": "Delta",
        "business_country": "Nigeria",
        "business_phone": "+2348031111111",
        "business_email": unique_email("pulse"),
        "amenities": ["showers"],
    });
    let application = app
        .request(
            "POST",
            "/v1/gym-applications",
            Some(payload.clone()),
            Some(&owner.token),
        )
        .await;
    assert_eq!(application.status, StatusCode::CREATED, "{:?}", application.body);
    assert_eq!(application.str("/application/status"), "pending");
    let application_id = application.str("/application/id").to_string();

    let duplicate = app
        .request(
            "POST",
            "/v1/gym-applications",
            Some(payload),
            Some(&owner.token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

    let gym_id = app.create_gym(&owner, &unique_name("Pulse Fitness")).await;

    let pending = app
        .request(
            "GET",
            "/v1/admin/gym-applications?status=pending&per_page=100",
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(pending.status, StatusCode::OK);
    assert!(
        pending.body["applications"]
            .as_array()
            .is_some_and(|apps| apps.iter().any(|a| a["id"] == json!(application_id)))
    );

    let review = app
        .request(
            "PUT",
            &format!("/v1/admin/gym-applications/{application_id}/review"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(review.status, StatusCode::OK);
    assert_eq!(review.str("/application/status"), "under_review");

    let approve = app
        .request(
            "PUT",
            &format!("/v1/admin/gym-applications/{application_id}/approve"),
            Some(json!({ "admin_notes": "Documents check out" })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(approve.status, StatusCode::OK, "{:?}", approve.body);
    assert_eq!(approve.str("/application/status"), "approved");

    let mine = app
        .request("GET", "/v1/my-gyms", None, Some(&owner.token))
        .await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body["gyms"][0]["status"], "approved");

    // Approved but unverified gyms stay out of discovery.
    let path = format!("/v1/gyms/{gym_id}");
    assert_eq!(
        app.request("GET", &path, None, None).await.status,
        StatusCode::NOT_FOUND
    );
    app.request(
        "PUT",
        &format!("/v1/admin/gyms/{gym_id}/verify"),
        None,
        Some(&admin.token),
    )
    .await;
    assert_eq!(
        app.request("GET", &path, None, None).await.status,
        StatusCode::OK
    );

    let unread = app
        .request(
            "GET",
            "/v1/notifications/unread-count",
            None,
            Some(&owner.token),
        )
        .await;
    assert_eq!(unread.status, StatusCode::OK);
    assert!(unread.body["unread_count"].as_i64().unwrap_or(0) >= 1);
}

#[tokio::test]
async fn test_member_pays_for_subscription_and_is_notified() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let (_, gym_id) = app.published_gym(&admin).await;
    let member = app.register("member").await;

    let subscription = app
        .request(
            "POST",
            "/v1/subscriptions",
            Some(json!({ "gym_id": gym_id, "plan_type": "monthly" })),
            Some(&member.token),
        )
        .await;
    let subscription_id = subscription.str("/subscription/id").to_string();

    let payment = app
        .request(
            "POST",
            "/v1/payments",
            Some(json!({
                "payable_type": "subscription",
                "payable_id": subscription_id,
                "payment_method": "card",
            })),
            Some(&member.token),
        )
        .await;
    assert_eq!(payment.status, StatusCode::CREATED, "{:?}", payment.body);
    assert_eq!(payment.str("/payment/status"), "pending");
    assert_eq!(payment.body["payment"]["amount"].as_f64(), Some(8000.0));
    let payment_id = payment.str("/payment/id").to_string();

    let member_cannot_settle = app
        .request(
            "PUT",
            &format!("/v1/admin/payments/{payment_id}/status"),
            Some(json!({ "status": "completed" })),
            Some(&member.token),
        )
        .await;
    assert_eq!(member_cannot_settle.status, StatusCode::FORBIDDEN);

    let settled = app
        .request(
            "PUT",
            &format!("/v1/admin/payments/{payment_id}/status"),
            Some(json!({ "status": "completed", "transaction_id": "TXN-0001" })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(settled.status, StatusCode::OK, "{:?}", settled.body);
    assert_eq!(settled.str("/payment/status"), "completed");

    let refresh = app
        .request(
            "GET",
            &format!("/v1/subscriptions/{subscription_id}"),
            None,
            Some(&member.token),
        )
        .await;
    assert!(!refresh.body["subscription"]["last_payment_at"].is_null());

    let notifications = app
        .request(
            "GET",
            "/v1/notifications?type=payment_success",
            None,
            Some(&member.token),
        )
        .await;
    assert_eq!(notifications.status, StatusCode::OK, "{:?}", notifications.body);
    let items = notifications.body["notifications"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    let notification_id = items[0]["id"].as_str().unwrap().to_string();

    let read = app
        .request(
            "PUT",
            &format!("/v1/notifications/{notification_id}/read"),
            None,
            Some(&member.token),
        )
        .await;
    assert_eq!(read.status, StatusCode::OK);

    let cancel_settled = app
        .request(
            "PUT",
            &format!("/v1/payments/{payment_id}/cancel"),
            None,
            Some(&member.token),
        )
        .await;
    assert_eq!(cancel_settled.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fraud_report_is_investigated_and_resolved() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let (_, gym_id) = app.published_gym(&admin).await;
    let member = app.register("member").await;

    let report = app
        .request(
            "POST",
            "/v1/fraud-reports",
            Some(json!({
                "reportable_type": "gym",
                "reportable_id": gym_id,
                "report_type": "gym",
                "title": "Charged twice at the front desk",
                "description": "I paid the monthly fee in cash and again by card.",
            })),
            Some(&member.token),
        )
        .await;
    assert_eq!(report.status, StatusCode::CREATED, "{:?}", report.body);
    assert_eq!(report.str("/report/status"), "pending");
    assert_eq!(report.str("/report/severity"), "medium");
    let report_id = report.str("/report/id").to_string();

    let missing_target = app
        .request(
            "POST",
            "/v1/fraud-reports",
            Some(json!({
                "reportable_type": "gym",
                "reportable_id": uuid::Uuid::new_v4(),
                "report_type": "gym",
                "title": "Ghost gym",
                "description": "This gym does not seem to exist anywhere.",
            })),
            Some(&member.token),
        )
        .await;
    assert_eq!(missing_target.status, StatusCode::NOT_FOUND);

    for (step, body, status) in [
        ("assign", None, "pending"),
        (
            "investigate",
            Some(json!({ "notes": "Pulled the card statement" })),
            "under_investigation",
        ),
        (
            "resolve",
            Some(json!({ "notes": "Refund issued by the gym" })),
            "resolved",
        ),
    ] {
        let response = app
            .request(
                "PUT",
                &format!("/v1/admin/fraud-reports/{report_id}/{step}"),
                body,
                Some(&admin.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{step}: {:?}", response.body);
        assert_eq!(response.str("/report/status"), status);
    }

    let reopen = app
        .request(
            "PUT",
            &format!("/v1/admin/fraud-reports/{report_id}/escalate"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(reopen.status, StatusCode::BAD_REQUEST);

    let mine = app
        .request("GET", "/v1/fraud-reports/my-reports", None, Some(&member.token))
        .await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body["reports"][0]["status"], "resolved");
}

#[tokio::test]
async fn test_member_and_trainer_chat() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let member = app.register("member").await;
    let trainer = app.register("trainer").await;
    let outsider = app.register("member").await;

    let chat = app
        .request(
            "POST",
            "/v1/chats",
            Some(json!({
                "type": "user_instructor",
                "title": "Programming questions",
                "participant_ids": [trainer.id],
            })),
            Some(&member.token),
        )
        .await;
    assert_eq!(chat.status, StatusCode::CREATED, "{:?}", chat.body);
    assert_eq!(chat.body["chat"]["participants"].as_array().map(Vec::len), Some(2));
    let chat_id = chat.str("/chat/id").to_string();

    let sent = app
        .request(
            "POST",
            &format!("/v1/chats/{chat_id}/messages"),
            Some(json!({ "content": "How many sets for squats this week?" })),
            Some(&member.token),
        )
        .await;
    assert_eq!(sent.status, StatusCode::CREATED, "{:?}", sent.body);
    assert_eq!(sent.str("/chat_message/type"), "text");

    let snooping = app
        .request(
            "GET",
            &format!("/v1/chats/{chat_id}/messages"),
            None,
            Some(&outsider.token),
        )
        .await;
    assert_eq!(snooping.status, StatusCode::FORBIDDEN);

    let inbox = app
        .request(
            "GET",
            &format!("/v1/chats/{chat_id}/messages"),
            None,
            Some(&trainer.token),
        )
        .await;
    assert_eq!(inbox.status, StatusCode::OK);
    assert_eq!(inbox.body["pagination"]["total"], json!(1));

    let read = app
        .request(
            "PUT",
            &format!("/v1/chats/{chat_id}/read"),
            None,
            Some(&trainer.token),
        )
        .await;
    assert_eq!(read.status, StatusCode::OK);
    assert_eq!(read.body["marked"], json!(1));
}

#[tokio::test]
async fn test_health_reports_database() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app.request("GET", "/v1/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}
