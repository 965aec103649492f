use axum::http::StatusCode;
use serde_json::json;

use super::{create, empty_request, json_body, json_request, send, test_state, unavailable_state};
use crate::build_app;

#[tokio::test]
async fn create_assigns_distinct_ids() {
    let app = build_app(test_state());

    let first = create(&app, 48.8566, 2.3522, "Paris").await;
    let second = create(&app, 52.52, 13.405, "Berlin").await;
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn update_replaces_coordinates_and_keeps_name() {
    let app = build_app(test_state());
    let created = create(&app, 0.0, 0.0, "Null Island").await;
    let id = created["id"].as_i64().expect("id must be an integer");

    let response = send(
        &app,
        json_request(
            "PUT",
            &format!("/address/update/{id}"),
            json!({"latitude": -33.8688, "longitude": 151.2093}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = json_body(response).await;
    assert_eq!(updated["latitude"], -33.8688);
    assert_eq!(updated["longitude"], 151.2093);
    assert_eq!(updated["name"], "Null Island");
}

#[tokio::test]
async fn empty_update_returns_record_unchanged() {
    let app = build_app(test_state());
    let created = create(&app, 10.0, 20.0, "steady").await;
    let id = created["id"].as_i64().expect("id must be an integer");

    let response = send(
        &app,
        json_request("PUT", &format!("/address/update/{id}"), json!({})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);
}

#[tokio::test]
async fn update_missing_address_is_not_found() {
    let app = build_app(test_state());

    let response = send(
        &app,
        json_request("PUT", "/address/update/999", json!({"name": "ghost"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "Address not found");
}

#[tokio::test]
async fn delete_missing_address_is_not_found() {
    let app = build_app(test_state());

    let response = send(&app, empty_request("DELETE", "/address/delete/999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["message"], "Address not found");
}

#[tokio::test]
async fn store_failure_on_create_is_generic_internal_error() {
    let app = build_app(unavailable_state());

    let response = send(
        &app,
        json_request(
            "POST",
            "/address/create/",
            json!({"latitude": 1.0, "longitude": 2.0, "name": "lost"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["code"], "internal");
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn non_integer_id_is_json_invalid_argument() {
    let app = build_app(test_state());

    for request in [
        empty_request("GET", "/address/abc"),
        empty_request("DELETE", "/address/delete/1.5"),
        json_request("PUT", "/address/update/xyz", json!({"name": "n"})),
    ] {
        let uri = request.uri().to_string();
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body = json_body(response).await;
        assert_eq!(body["code"], "invalid_argument", "{uri}");
        assert!(body["message"]
            .as_str()
            .is_some_and(|message| message.starts_with("address id must be an integer")));
    }
}
