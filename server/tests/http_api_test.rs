//! HTTP routing and response-shape tests driven through `oneshot`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use common::*;
use eticket_server::config::Config;
use eticket_server::routes::create_routes;
use eticket_server::state::AppState;

async fn app_with_ticket(zones: Vec<i32>) -> (Router, Uuid) {
    let store = seeded_store().await;
    let t = ticket(at(2024, 12, 31), zones);
    store.insert_ticket(t.clone()).await;

    let state = AppState::new(service(store, at(2024, 6, 1)));
    (create_routes(state, &Config::default()), t.id)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn verify(ticket_id: Uuid, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/tickets/{}/verify", ticket_id))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app_with_ticket(vec![ZONE_A]).await;
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_verify_returns_result_unwrapped() {
    let (app, ticket_id) = app_with_ticket(vec![ZONE_A]).await;
    let (lon, lat) = NEAR_ZONE_A;

    let (status, body) = send(
        &app,
        verify(
            ticket_id,
            json!({ "transport_id": BUS, "longitude": lon, "latitude": lat }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "is_valid": true, "error_message": null }));
}

#[tokio::test]
async fn test_verify_rejection_is_still_ok() {
    let (app, ticket_id) = app_with_ticket(vec![ZONE_A]).await;
    let (lon, lat) = NEAR_ZONE_C;

    let (status, body) = send(
        &app,
        verify(
            ticket_id,
            json!({ "transport_id": BUS, "longitude": lon, "latitude": lat }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["error_message"], "Ticket does not contain the zone");
}

#[tokio::test]
async fn test_verify_unknown_ticket() {
    let (app, _) = app_with_ticket(vec![ZONE_A]).await;

    let (status, body) = send(
        &app,
        verify(
            Uuid::new_v4(),
            json!({ "transport_id": BUS, "longitude": 1.0, "latitude": 1.0 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error_message"], "Ticket was not found");
}

#[tokio::test]
async fn test_verify_rejects_malformed_body() {
    let (app, ticket_id) = app_with_ticket(vec![ZONE_A]).await;
    let (status, body) = send(&app, verify(ticket_id, json!({ "transport_id": "bus" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_ticket_id_uses_error_envelope() {
    let (app, _) = app_with_ticket(vec![ZONE_A]).await;
    let (status, body) = send(&app, get("/api/tickets/not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_page_number_uses_error_envelope() {
    let (app, _) = app_with_ticket(vec![ZONE_A]).await;
    let (status, body) = send(&app, get("/api/verifications?page_number=first")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_camel_case_parameter_names() {
    let (app, ticket_id) = app_with_ticket(vec![ZONE_A]).await;
    let (lon, lat) = NEAR_ZONE_A;
    for _ in 0..3 {
        let (status, body) = send(
            &app,
            verify(
                ticket_id,
                json!({ "transportId": BUS, "longitude": lon, "latitude": lat }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_valid"], true);
    }

    let (status, body) = send(
        &app,
        get(&format!(
            "/api/tickets/{}/verification-history?pageNumber=2&pageSize=2",
            ticket_id
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page_number"], 2);
    assert_eq!(body["data"]["page_size"], 2);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_history_defaults_and_paging() {
    let (app, ticket_id) = app_with_ticket(vec![ZONE_A]).await;
    let (lon, lat) = NEAR_ZONE_A;
    for _ in 0..3 {
        send(
            &app,
            verify(
                ticket_id,
                json!({ "transport_id": BUS, "longitude": lon, "latitude": lat }),
            ),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        get(&format!("/api/tickets/{}/verification-history", ticket_id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page_number"], 1);
    assert_eq!(body["data"]["page_size"], 10);
    assert_eq!(body["data"]["total_count"], 3);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 3);

    let (_, body) = send(
        &app,
        get(&format!(
            "/api/tickets/{}/verification-history?page_number=2&page_size=2",
            ticket_id
        )),
    )
    .await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["total_pages"], 2);
}

#[tokio::test]
async fn test_get_and_activate_ticket() {
    let (app, ticket_id) = app_with_ticket(vec![ZONE_A, ZONE_B]).await;

    let (status, body) = send(&app, get(&format!("/api/tickets/{}", ticket_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["state"]["status"], "unactivated");
    assert_eq!(body["data"]["zones"], json!([ZONE_A, ZONE_B]));

    let activate = Request::builder()
        .method("PUT")
        .uri(format!("/api/tickets/{}/activate", ticket_id))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, activate).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, get(&format!("/api/tickets/{}", ticket_id))).await;
    assert_eq!(body["data"]["state"]["status"], "activated");
}

#[tokio::test]
async fn test_missing_resources_are_404() {
    let (app, _) = app_with_ticket(vec![ZONE_A]).await;

    let (status, body) = send(&app, get(&format!("/api/tickets/{}", Uuid::new_v4()))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = send(
        &app,
        get(&format!("/api/verifications/{}", Uuid::new_v4())),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_listing() {
    let (app, ticket_id) = app_with_ticket(vec![ZONE_A]).await;
    let (lon, lat) = NEAR_ZONE_A;
    send(
        &app,
        verify(
            ticket_id,
            json!({ "transport_id": BUS, "longitude": lon, "latitude": lat }),
        ),
    )
    .await;

    let (status, body) = send(&app, get("/api/verifications?page_size=0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page_size"], 10);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);

    let id = items[0]["id"].as_str().unwrap();
    let (status, body) = send(&app, get(&format!("/api/verifications/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["ticket_id"], ticket_id.to_string());
}
