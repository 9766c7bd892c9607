//! Integration tests for gym ownership, moderation and discovery.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, gym_payload, unique_name};

#[tokio::test]
async fn test_role_matrix_on_gym_creation() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let member = app.register("member").await;
    let trainer = app.register("trainer").await;
    let owner = app.register("gym_owner").await;
    let payload = gym_payload(&unique_name("Role Matrix Gym"));

    let anonymous = app
        .request("POST", "/v1/gyms", Some(payload.clone()), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    for user in [&member, &trainer] {
        let denied = app
            .request("POST", "/v1/gyms", Some(payload.clone()), Some(&user.token))
            .await;
        assert_eq!(denied.status, StatusCode::FORBIDDEN);
        assert_eq!(denied.str("/required_role"), "gym_owner");
    }

    let created = app
        .request("POST", "/v1/gyms", Some(payload), Some(&owner.token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.str("/gym/status"), "pending");
    assert_eq!(created.body["gym"]["is_verified"], json!(false));
}

#[tokio::test]
async fn test_admin_routes_deny_other_roles() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let owner = app.register("gym_owner").await;

    let response = app
        .request(
            "GET",
            "/v1/admin/analytics/overview",
            None,
            Some(&owner.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.str("/required_role"), "admin");
    assert_eq!(response.str("/user_role"), "gym_owner");

    let admin = app.admin().await;
    let response = app
        .request(
            "GET",
            "/v1/admin/analytics/overview",
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

#[tokio::test]
async fn test_owner_may_register_only_one_gym() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let owner = app.register("gym_owner").await;
    app.create_gym(&owner, &unique_name("First Gym")).await;

    let second = app
        .request(
            "POST",
            "/v1/gyms",
            Some(gym_payload(&unique_name("Second Gym"))),
            Some(&owner.token),
        )
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.str("/message"), "You already have a gym registered");
}

#[tokio::test]
async fn test_gym_hidden_until_approved_and_verified() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let owner = app.register("gym_owner").await;
    let gym_id = app.create_gym(&owner, &unique_name("Hidden Gym")).await;
    let path = format!("/v1/gyms/{gym_id}");

    assert_eq!(
        app.request("GET", &path, None, None).await.status,
        StatusCode::NOT_FOUND
    );

    let approved = app
        .request(
            "PUT",
            &format!("/v1/admin/gyms/{gym_id}/status"),
            Some(json!({ "status": "approved" })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(approved.status, StatusCode::OK);
    assert_eq!(
        app.request("GET", &path, None, None).await.status,
        StatusCode::NOT_FOUND
    );

    let verified = app
        .request(
            "PUT",
            &format!("/v1/admin/gyms/{gym_id}/verify"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(verified.status, StatusCode::OK);
    assert_eq!(verified.str("/message"), "Gym verified successfully");

    let visible = app.request("GET", &path, None, None).await;
    assert_eq!(visible.status, StatusCode::OK);
    assert_eq!(visible.str("/gym/id"), gym_id.to_string());
}

#[tokio::test]
async fn test_identity_edit_sends_gym_back_for_approval() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let (owner, gym_id) = app.published_gym(&admin).await;
    let path = format!("/v1/gyms/{gym_id}");

    let cosmetic = app
        .request(
            "PUT",
            &path,
            Some(json!({ "description": "Now with a cold plunge" })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(cosmetic.status, StatusCode::OK, "{:?}", cosmetic.body);
    assert_eq!(cosmetic.str("/gym/status"), "approved");

    let renamed = app
        .request(
            "PUT",
            &path,
            Some(json!({ "name": unique_name("Renamed Gym") })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.str("/gym/status"), "pending");

    assert_eq!(
        app.request("GET", &path, None, None).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_owner_cannot_edit_someone_elses_gym() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let owner = app.register("gym_owner").await;
    let rival = app.register("gym_owner").await;
    let gym_id = app.create_gym(&owner, &unique_name("Guarded Gym")).await;

    let response = app
        .request(
            "PUT",
            &format!("/v1/gyms/{gym_id}"),
            Some(json!({ "description": "hijacked" })),
            Some(&rival.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/v1/gyms/{gym_id}"),
            None,
            Some(&rival.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_illegal_moderation_transition_is_rejected() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let owner = app.register("gym_owner").await;
    let gym_id = app.create_gym(&owner, &unique_name("Pending Gym")).await;

    let response = app
        .request(
            "PUT",
            &format!("/v1/admin/gyms/{gym_id}/status"),
            Some(json!({ "status": "suspended" })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_discovery_search_and_pagination() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let owner = app.register("gym_owner").await;
    let name = unique_name("Searchable Gym");
    let gym_id = app.create_gym(&owner, &name).await;
    app.publish_gym(&admin, gym_id).await;

    let term = name.split_whitespace().last().unwrap_or_default();
    let response = app
        .request(
            "GET",
            &format!("/v1/gyms?search={term}&per_page=5"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let gyms = response.body["gyms"].as_array().unwrap();
    assert_eq!(gyms.len(), 1);
    assert_eq!(gyms[0]["id"], json!(gym_id));
    assert_eq!(response.body["pagination"]["per_page"], json!(5));
    assert_eq!(response.body["pagination"]["total"], json!(1));

    let bad_sort = app
        .request("GET", "/v1/gyms?sort_by=password", None, None)
        .await;
    assert_eq!(bad_sort.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_far_page_returns_empty_list() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    for page in [u64::MAX, 1_000_000_000_000_000_000] {
        let response = app
            .request("GET", &format!("/v1/gyms?page={page}"), None, None)
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        assert_eq!(response.body["gyms"], json!([]));
        assert_eq!(response.body["pagination"]["current_page"], json!(page));
    }
}

/// Publish a gym in `city` and return its id.
async fn publish_in(
    app: &TestApp,
    admin: &helpers::TestUser,
    city: &str,
    amenities: &[&str],
    (latitude, longitude): (f64, f64),
) -> uuid::Uuid {
    let owner = app.register("gym_owner").await;
    let mut payload = gym_payload(&unique_name("Filtered Gym"));
    payload["city"] = json!(city);
    payload["amenities"] = json!(amenities);
    payload["latitude"] = json!(latitude);
    payload["longitude"] = json!(longitude);
    let gym_id = app.create_gym_from(&owner, payload).await;
    app.publish_gym(admin, gym_id).await;
    gym_id
}

fn listed_ids(body: &serde_json::Value) -> Vec<String> {
    body["gyms"]
        .as_array()
        .map(|gyms| {
            gyms.iter()
                .filter_map(|g| g["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn test_discovery_city_and_amenity_filters() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let city = format!("Ogwashi-{}", &uuid::Uuid::new_v4().simple().to_string()[..8]);
    let full = publish_in(&app, &admin, &city, &["sauna", "pool"], (6.2, 6.73)).await;
    let partial = publish_in(&app, &admin, &city, &["sauna"], (6.5, 7.0)).await;
    let elsewhere = publish_in(
        &app,
        &admin,
        &format!("{city}-North"),
        &["sauna", "pool"],
        (6.2, 6.73),
    )
    .await;

    let by_city = app
        .request("GET", &format!("/v1/gyms?city={city}"), None, None)
        .await;
    assert_eq!(by_city.status, StatusCode::OK, "{:?}", by_city.body);
    let ids = listed_ids(&by_city.body);
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&full.to_string()));
    assert!(ids.contains(&partial.to_string()));
    assert!(!ids.contains(&elsewhere.to_string()));

    let both = app
        .request(
            "GET",
            &format!("/v1/gyms?city={city}&amenities=sauna,pool"),
            None,
            None,
        )
        .await;
    assert_eq!(listed_ids(&both.body), vec![full.to_string()]);

    let sauna = app
        .request(
            "GET",
            &format!("/v1/gyms?city={city}&amenities=sauna"),
            None,
            None,
        )
        .await;
    assert_eq!(listed_ids(&sauna.body).len(), 2);
}

#[tokio::test]
async fn test_discovery_sorts_by_distance() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let city = format!("Agbor-{}", &uuid::Uuid::new_v4().simple().to_string()[..8]);
    let far = publish_in(&app, &admin, &city, &["parking"], (6.2, 6.73)).await;
    let near = publish_in(&app, &admin, &city, &["parking"], (6.5, 7.0)).await;

    let response = app
        .request(
            "GET",
            &format!("/v1/gyms?city={city}&sort_by=distance&latitude=6.5&longitude=7.0"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        listed_ids(&response.body),
        vec![near.to_string(), far.to_string()]
    );

    let gyms = &response.body["gyms"];
    let nearest = gyms[0]["distance_km"].as_f64().unwrap();
    let farthest = gyms[1]["distance_km"].as_f64().unwrap();
    assert!(nearest < 0.01, "{nearest}");
    // About 45 km between the two points.
    assert!((40.0..50.0).contains(&farthest), "{farthest}");

    let without_origin = app
        .request("GET", &format!("/v1/gyms?city={city}"), None, None)
        .await;
    assert!(without_origin.body["gyms"][0]["distance_km"].is_null());
}

#[tokio::test]
async fn test_instructors_listed_only_for_visible_gym() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let admin = app.admin().await;
    let owner = app.register("gym_owner").await;
    let gym_id = app.create_gym(&owner, &unique_name("Coached Gym")).await;
    app.create_instructor(&owner, None).await;
    let path = format!("/v1/gyms/{gym_id}/instructors");

    assert_eq!(
        app.request("GET", &path, None, None).await.status,
        StatusCode::NOT_FOUND
    );

    app.publish_gym(&admin, gym_id).await;
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["instructors"].as_array().map(Vec::len), Some(1));
}
