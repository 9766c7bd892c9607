//! Integration tests for instructor bookings.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use helpers::{TestApp, TestUser, date_in};

fn slot(instructor_id: Uuid, date: &str, start: &str, end: &str) -> Value {
    json!({
        "instructor_id": instructor_id,
        "booking_date": date,
        "start_time": start,
        "end_time": end,
    })
}

/// A published gym with a bookable instructor linked to a trainer account.
async fn bookable_instructor(app: &TestApp) -> (TestUser, Uuid) {
    let admin = app.admin().await;
    let (owner, _) = app.published_gym(&admin).await;
    let trainer = app.register("trainer").await;
    let instructor_id = app.create_instructor(&owner, Some(&trainer)).await;
    (trainer, instructor_id)
}

#[tokio::test]
async fn test_booking_prices_session_from_hourly_rate() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let (_, instructor_id) = bookable_instructor(&app).await;
    let member = app.register("member").await;

    let response = app
        .request(
            "POST",
            "/v1/bookings",
            Some(slot(instructor_id, &date_in(2), "10:00", "11:30")),
            Some(&member.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.str("/booking/status"), "pending");
    assert_eq!(response.body["booking"]["duration_minutes"], json!(90));
    assert_eq!(response.body["booking"]["amount"].as_f64(), Some(9000.0));
}

#[tokio::test]
async fn test_double_booking_same_slot_conflicts() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let (_, instructor_id) = bookable_instructor(&app).await;
    let first = app.register("member").await;
    let second = app.register("member").await;
    let date = date_in(3);

    let booked = app
        .request(
            "POST",
            "/v1/bookings",
            Some(slot(instructor_id, &date, "07:00", "08:00")),
            Some(&first.token),
        )
        .await;
    assert_eq!(booked.status, StatusCode::CREATED);

    let clash = app
        .request(
            "POST",
            "/v1/bookings",
            Some(slot(instructor_id, &date, "07:00", "08:00")),
            Some(&second.token),
        )
        .await;
    assert_eq!(clash.status, StatusCode::CONFLICT);
    assert_eq!(clash.str("/message"), "This time slot is already booked");

    let cancel = app
        .request(
            "PUT",
            &format!("/v1/bookings/{}/cancel", booked.str("/booking/id")),
            Some(json!({ "reason": "Travelling" })),
            Some(&first.token),
        )
        .await;
    assert_eq!(cancel.status, StatusCode::OK);
    assert_eq!(cancel.str("/booking/status"), "cancelled");

    let retry = app
        .request(
            "POST",
            "/v1/bookings",
            Some(slot(instructor_id, &date, "07:00", "08:00")),
            Some(&second.token),
        )
        .await;
    assert_eq!(retry.status, StatusCode::CREATED, "{:?}", retry.body);
}

#[tokio::test]
async fn test_booking_input_validation() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let (_, instructor_id) = bookable_instructor(&app).await;
    let member = app.register("member").await;

    let cases = [
        (slot(instructor_id, &date_in(-1), "10:00", "11:00"), "booking_date"),
        (slot(instructor_id, &date_in(1), "11:00", "10:00"), "end_time"),
        (slot(instructor_id, &date_in(1), "10:00", "10:45"), "end_time"),
        (slot(instructor_id, &date_in(1), "25:00", "26:00"), "start_time"),
    ];
    for (body, field) in cases {
        let response = app
            .request("POST", "/v1/bookings", Some(body), Some(&member.token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "{field}: {:?}",
            response.body
        );
        assert!(response.body["errors"].get(field).is_some(), "{field}");
    }
}

#[tokio::test]
async fn test_instructor_of_hidden_gym_is_not_bookable() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let owner = app.register("gym_owner").await;
    app.create_gym(&owner, &helpers::unique_name("Unlisted Gym"))
        .await;
    let instructor_id = app.create_instructor(&owner, None).await;
    let member = app.register("member").await;

    let response = app
        .request(
            "POST",
            "/v1/bookings",
            Some(slot(instructor_id, &date_in(1), "09:00", "10:00")),
            Some(&member.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trainer_drives_booking_lifecycle() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let (trainer, instructor_id) = bookable_instructor(&app).await;
    let member = app.register("member").await;

    let booked = app
        .request(
            "POST",
            "/v1/bookings",
            Some(slot(instructor_id, &date_in(1), "18:00", "19:00")),
            Some(&member.token),
        )
        .await;
    let booking_id = booked.str("/booking/id").to_string();

    let denied = app
        .request(
            "PUT",
            &format!("/v1/instructor/bookings/{booking_id}/confirm"),
            None,
            Some(&member.token),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let listed = app
        .request("GET", "/v1/instructor/bookings", None, Some(&trainer.token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["bookings"].as_array().map(Vec::len), Some(1));

    let early_complete = app
        .request(
            "PUT",
            &format!("/v1/instructor/bookings/{booking_id}/complete"),
            None,
            Some(&trainer.token),
        )
        .await;
    assert_eq!(early_complete.status, StatusCode::BAD_REQUEST);

    for (action, status) in [("confirm", "confirmed"), ("complete", "completed")] {
        let response = app
            .request(
                "PUT",
                &format!("/v1/instructor/bookings/{booking_id}/{action}"),
                None,
                Some(&trainer.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        assert_eq!(response.str("/booking/status"), status);
    }

    let late_cancel = app
        .request(
            "PUT",
            &format!("/v1/bookings/{booking_id}/cancel"),
            None,
            Some(&member.token),
        )
        .await;
    assert_eq!(late_cancel.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bookings_are_private_to_their_member() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let (_, instructor_id) = bookable_instructor(&app).await;
    let member = app.register("member").await;
    let stranger = app.register("member").await;

    let booked = app
        .request(
            "POST",
            "/v1/bookings",
            Some(slot(instructor_id, &date_in(4), "12:00", "12:30")),
            Some(&member.token),
        )
        .await;
    let path = format!("/v1/bookings/{}", booked.str("/booking/id"));

    assert_eq!(
        app.request("GET", &path, None, Some(&stranger.token))
            .await
            .status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.request("GET", &path, None, Some(&member.token))
            .await
            .status,
        StatusCode::OK
    );
}
