mod common;

use std::time::{Duration, Instant};

use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let server = common::create_test_server(Duration::ZERO);

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com/very/long/path" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_code = json["shortCode"].as_str().unwrap();
    let short_url = json["shortUrl"].as_str().unwrap();
    common::assert_short_url(short_url, short_code);
}

#[tokio::test]
async fn test_shorten_waits_for_simulated_delay() {
    let server = common::create_test_server(Duration::from_millis(50));

    let started = Instant::now();
    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_shorten_same_url_twice_is_independent() {
    let server = common::create_test_server(Duration::ZERO);
    let mut codes = std::collections::HashSet::new();

    for _ in 0..10 {
        let response = server
            .post("/shorten")
            .json(&json!({ "originalUrl": "https://example.com" }))
            .await;
        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        codes.insert(json["shortCode"].as_str().unwrap().to_string());
    }

    assert!(codes.len() > 1);
}

#[tokio::test]
async fn test_shorten_empty_input() {
    // Rejections must not wait for the simulated delay.
    let server = common::create_test_server(Duration::from_secs(30));

    let started = Instant::now();
    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "" }))
        .await;

    response.assert_status_bad_request();
    assert!(started.elapsed() < Duration::from_secs(5));

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "empty_input");
    assert_eq!(json["error"]["message"], "Please enter a URL to shorten");
}

#[tokio::test]
async fn test_shorten_missing_field_is_empty_input() {
    let server = common::create_test_server(Duration::ZERO);

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "empty_input");
}

#[tokio::test]
async fn test_shorten_invalid_urls() {
    let server = common::create_test_server(Duration::from_secs(30));

    for input in ["example.com", "not a url", "htp:/bad"] {
        let response = server
            .post("/shorten")
            .json(&json!({ "originalUrl": input }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "invalid_url", "input: {input}");
        assert_eq!(json["error"]["details"]["input"], input);
    }
}

#[tokio::test]
async fn test_shorten_url_too_long() {
    let server = common::create_test_server(Duration::ZERO);
    let url = format!("https://example.com/{}", "a".repeat(2048));

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": url }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["original_url"].is_array());
}

#[tokio::test]
async fn test_shorten_rejects_non_json_body() {
    let server = common::create_test_server(Duration::ZERO);

    let response = server.post("/shorten").text("https://example.com").await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_shorten_length_limit_counts_characters() {
    let server = common::create_test_server(Duration::ZERO);
    // 1520 characters, 3020 bytes.
    let url = format!("https://example.com/{}", "é".repeat(1500));

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": url }))
        .await;

    response.assert_status_ok();
}
