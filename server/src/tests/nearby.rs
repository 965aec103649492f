use axum::http::StatusCode;
use serde_json::Value;

use super::{create, empty_request, json_body, send, test_state, unavailable_state};
use crate::build_app;

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("nearby response must be an array")
        .iter()
        .map(|record| record["name"].as_str().expect("name must be a string"))
        .collect()
}

#[tokio::test]
async fn nearby_uses_kilometers_not_degrees() {
    let app = build_app(test_state());
    create(&app, 0.0, 0.0, "A").await;
    create(&app, 0.0, 1.0, "B").await;
    create(&app, 10.0, 10.0, "C").await;

    let response = send(
        &app,
        empty_request("GET", "/address/nearby/?latitude=0&longitude=0&distance=1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&json_body(response).await), vec!["A"]);

    let response = send(
        &app,
        empty_request("GET", "/address/nearby/?latitude=0&longitude=0&distance=112"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&json_body(response).await), vec!["A", "B"]);
}

#[tokio::test]
async fn nearby_from_london_includes_paris() {
    let app = build_app(test_state());
    create(&app, 55.1, -0.1278, "North Sea").await;
    create(&app, 48.8566, 2.3522, "Paris").await;
    create(&app, 40.7128, -74.006, "New York").await;

    let response = send(
        &app,
        empty_request(
            "GET",
            "/address/nearby/?latitude=51.5074&longitude=-0.1278&distance=350",
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(names(&body), vec!["Paris"]);
    assert_eq!(body[0]["latitude"], 48.8566);
    assert_eq!(body[0]["longitude"], 2.3522);
    assert!(body[0]["id"].is_i64());
}

#[tokio::test]
async fn nearby_returns_storage_order() {
    let app = build_app(test_state());
    for name in ["third", "first", "second"] {
        create(&app, 1.0, 1.0, name).await;
    }

    let response = send(
        &app,
        empty_request("GET", "/address/nearby/?latitude=1&longitude=1&distance=0"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        names(&json_body(response).await),
        vec!["third", "first", "second"]
    );
}

#[tokio::test]
async fn nearby_with_no_matches_is_empty_array() {
    let app = build_app(test_state());
    create(&app, -33.8688, 151.2093, "Sydney").await;

    let response = send(
        &app,
        empty_request("GET", "/address/nearby/?latitude=64.1&longitude=-21.9&distance=100"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn nearby_with_half_circumference_radius_returns_everything() {
    let app = build_app(test_state());
    create(&app, -33.8688, 151.2093, "Sydney").await;
    create(&app, 64.1466, -21.9426, "Reykjavik").await;
    create(&app, -54.8019, -68.303, "Ushuaia").await;

    let response = send(
        &app,
        empty_request("GET", "/address/nearby/?latitude=0&longitude=0&distance=20016"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        names(&json_body(response).await),
        vec!["Sydney", "Reykjavik", "Ushuaia"]
    );
}

#[tokio::test]
async fn nearby_rejects_out_of_range_query() {
    let app = build_app(test_state());

    for uri in [
        "/address/nearby/?latitude=91&longitude=0&distance=1",
        "/address/nearby/?latitude=0&longitude=-181&distance=1",
        "/address/nearby/?latitude=0&longitude=0&distance=-5",
        "/address/nearby/?latitude=NaN&longitude=0&distance=1",
        "/address/nearby/?latitude=0&longitude=0&distance=inf",
    ] {
        let response = send(&app, empty_request("GET", uri)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json_body(response).await["code"], "invalid_argument");
    }
}

#[tokio::test]
async fn nearby_requires_all_query_parameters() {
    let app = build_app(test_state());

    for uri in [
        "/address/nearby/?latitude=0&longitude=0",
        "/address/nearby/?latitude=zero&longitude=0&distance=1",
        "/address/nearby/",
    ] {
        let response = send(&app, empty_request("GET", uri)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json_body(response).await["code"], "invalid_argument");
    }
}

#[tokio::test]
async fn nearby_store_failure_does_not_leak_detail() {
    let app = build_app(unavailable_state());

    let response = send(
        &app,
        empty_request("GET", "/address/nearby/?latitude=0&longitude=0&distance=10"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Internal server error");
    assert!(!body.to_string().contains("offline"));
}
