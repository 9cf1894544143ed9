//! Integration tests for the /api/convert endpoint.

mod common;

use axum::http::StatusCode;
use common::{assert_json_error, assert_ok, TestApp};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_convert_returns_all_representations() {
    let app = TestApp::new();

    let response = app.get("/api/convert?color=%235f3eff").await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["hex"], "#5F3EFF");
    assert_eq!(json["rgb"], serde_json::json!({"r": 95, "g": 62, "b": 255}));

    let lab = &json["lab"];
    assert!((lab["L"].as_f64().unwrap() - 42.9079).abs() < 0.001);
    assert!((lab["a"].as_f64().unwrap() - 64.2360).abs() < 0.001);
    assert!((lab["b"].as_f64().unwrap() + 90.0973).abs() < 0.001);

    let hsl = &json["hsl"];
    assert!((hsl["h"].as_f64().unwrap() - 250.26).abs() < 0.01);
    assert_eq!(hsl["s"], 100.0);
}

#[tokio::test]
async fn test_convert_shorthand_expands() {
    let app = TestApp::new();

    let response = app.get("/api/convert?color=abc").await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["hex"], "#AABBCC");
}

#[tokio::test]
async fn test_convert_black_and_white() {
    let app = TestApp::new();

    let json: serde_json::Value = app.get("/api/convert?color=000000").await.json();
    assert!(json["lab"]["L"].as_f64().unwrap().abs() < 0.001);
    assert_eq!(json["hsl"]["l"], 0.0);

    let json: serde_json::Value = app.get("/api/convert?color=FFFFFF").await.json();
    assert!((json["lab"]["L"].as_f64().unwrap() - 100.0).abs() < 0.001);
    assert_eq!(json["hsl"]["l"], 100.0);
}

#[tokio::test]
async fn test_convert_invalid_input() {
    let app = TestApp::new();

    assert_json_error(&app.get("/api/convert").await, StatusCode::BAD_REQUEST);
    assert_json_error(&app.get("/api/convert?color=").await, StatusCode::BAD_REQUEST);
    assert_json_error(&app.get("/api/convert?color=1234").await, StatusCode::BAD_REQUEST);
    assert_json_error(&app.get("/api/convert?color=%2B12345").await, StatusCode::BAD_REQUEST);
}
