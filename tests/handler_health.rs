mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use shortly::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server(Duration::from_millis(1000));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["shortener"]["status"], "ok");
    assert_eq!(
        json["checks"]["shortener"]["message"],
        "Base URL: https://short.ly, delay: 1000ms"
    );
}

#[tokio::test]
async fn test_app_router_trims_trailing_slash() {
    let app = app_router(common::create_test_state(Duration::ZERO));

    let response = app
        .oneshot(Request::builder().uri("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_app_router_unknown_route() {
    let app = app_router(common::create_test_state(Duration::ZERO));

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
