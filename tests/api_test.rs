use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pizza_intake::api::{self, AppState, RealtimeProxy};
use pizza_intake::config::{Config, SchedulerConfig};
use pizza_intake::lifecycle::OrderSystem;
use pizza_intake::model::Menu;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> (OrderSystem, Router) {
    let system = OrderSystem::new(Arc::new(Menu::bundled().unwrap()), SchedulerConfig::default());
    let realtime = RealtimeProxy::new(&Config::default()).unwrap();
    let app = api::router(AppState::new(&system, realtime));
    (system, app)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn menu_is_served_as_a_json_array() {
    let (system, app) = app();

    let (status, body) = send(&app, Method::GET, "/menu", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), system.menu.items().len());
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["name"], "Margherita");

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn placed_order_can_be_queried() {
    let (system, app) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "id": 2, "size": "Large", "quantity": 3, "address": "7 Elm St" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "order_id": 1 }));

    let (status, body) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "order_id": 1,
            "pizza_type": "Pepperoni",
            "size": "large",
            "quantity": 3,
            "address": "7 Elm St",
            "status": "created",
        })
    );

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn client_supplied_pizza_type_is_ignored() {
    let (system, app) = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "id": 1, "pizza_type": "Anchovy Surprise", "address": "7 Elm St" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(body["pizza_type"], "Margherita");
    assert_eq!(body["size"], "regular");
    assert_eq!(body["quantity"], 1);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_pizza_is_a_bad_request() {
    let (system, app) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "id": 999, "address": "7 Elm St" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Pizza not available" }));

    // no id was spent on the rejected order
    let (_, body) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "id": 3, "address": "7 Elm St" })),
    )
    .await;
    assert_eq!(body, json!({ "order_id": 1 }));

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_order_is_not_found() {
    let (system, app) = app();

    let (status, body) = send(&app, Method::GET, "/orders/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Order not found" }));

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn realtime_session_without_key_is_a_server_error() {
    let (system, app) = app();

    let (status, body) = send(&app, Method::POST, "/realtime/ephemeral", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "OPENAI_API_KEY is not set on the server" }));

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn out_of_range_menu_ids_are_not_available() {
    let (system, app) = app();

    for id in [json!(-1), json!(0), json!(5_000_000_000_i64)] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/orders",
            Some(json!({ "id": id, "address": "7 Elm St" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {id}");
        assert_eq!(body, json!({ "detail": "Pizza not available" }));
    }

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn negative_order_id_is_not_found() {
    let (system, app) = app();

    let (status, body) = send(&app, Method::GET, "/orders/-1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Order not found" }));

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn malformed_requests_keep_the_detail_shape() {
    let (system, app) = app();

    // address is required
    let (status, body) = send(&app, Method::POST, "/orders", Some(json!({ "id": 1 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("address"));

    let (status, body) = send(&app, Method::GET, "/orders/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    drop(app);
    system.shutdown().await.unwrap();
}
