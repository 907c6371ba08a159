#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use shortly::api::handlers::{health_handler, shorten_handler};
use shortly::application::services::ShortenService;
use shortly::state::AppState;

pub const BASE_URL: &str = "https://short.ly";

pub fn create_test_state(delay: Duration) -> AppState {
    AppState::new(Arc::new(ShortenService::new(BASE_URL, delay)))
}

pub fn create_test_server(delay: Duration) -> TestServer {
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .with_state(create_test_state(delay));

    TestServer::new(app).unwrap()
}

pub fn assert_short_url(short_url: &str, short_code: &str) {
    assert_eq!(short_url, format!("{}/{}", BASE_URL, short_code));
    assert_eq!(short_code.len(), 6);
    assert!(
        short_code
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );
}
