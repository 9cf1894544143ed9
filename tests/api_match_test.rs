//! Integration tests for the /api/match endpoint.

mod common;

use axum::http::StatusCode;
use common::fixtures::{colors, GRAY_PALETTE, SMALL_PALETTE};
use common::{assert_json_error, assert_ok, assert_sorted_by_distance, TestApp};
use pretty_assertions::assert_eq;
use swatchmatch::models::AppConfig;
use swatch_color::DistanceMetric;

#[tokio::test]
async fn test_match_exact_color_in_embedded_palette() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/api/match?color={}&limit=3", colors::PANTONE_2097))
        .await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["metric"], "cie76");
    assert_eq!(json["query"]["hex"], "#5F3EFF");
    assert_eq!(json["query"]["rgb"]["r"], 95);

    let matches = json["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0]["code"], "2097 C");
    assert_eq!(matches[0]["hex"], "#5F3EFF");
    assert_eq!(matches[0]["quality"], "Perfect");
    assert_eq!(
        matches[0]["quality_description"],
        "Not perceptible by the human eye"
    );
    assert!(matches[0]["distance"].as_f64().unwrap() < 0.01);
    assert_sorted_by_distance(matches);
}

#[tokio::test]
async fn test_match_accepts_bare_and_shorthand_hex() {
    let app = TestApp::with_palette_json(SMALL_PALETTE);

    let response = app
        .get(&format!("/api/match?color={}", colors::PANTONE_2097_BARE))
        .await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["matches"][0]["code"], "2097 C");

    let response = app.get("/api/match?color=fff&limit=1").await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["query"]["hex"], "#FFFFFF");
    assert_eq!(json["matches"][0]["code"], "White");
    assert_eq!(json["matches"][0]["distance"], 0.0);
}

#[tokio::test]
async fn test_match_query_lab_and_hsl() {
    let app = TestApp::with_palette_json(SMALL_PALETTE);

    let response = app.get("/api/match?color=FF0000&limit=1").await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();

    let lab = &json["query"]["lab"];
    assert!((lab["L"].as_f64().unwrap() - 53.2408).abs() < 0.01);
    assert!((lab["a"].as_f64().unwrap() - 80.0925).abs() < 0.01);
    assert!((lab["b"].as_f64().unwrap() - 67.2032).abs() < 0.01);

    let hsl = &json["query"]["hsl"];
    assert_eq!(hsl["h"], 0.0);
    assert_eq!(hsl["s"], 100.0);
    assert_eq!(hsl["l"], 50.0);
}

#[tokio::test]
async fn test_match_limit_larger_than_palette() {
    let app = TestApp::with_palette_json(SMALL_PALETTE);

    let response = app.get("/api/match?color=123456&limit=50").await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();
    let matches = json["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 5);
    assert_sorted_by_distance(matches);
}

#[tokio::test]
async fn test_match_limit_is_capped() {
    let config = AppConfig {
        max_limit: 2,
        ..AppConfig::default()
    };
    let app = TestApp::with_palette_and_config(SMALL_PALETTE, config);

    let response = app.get("/api/match?color=123456&limit=50").await;
    let json: serde_json::Value = response.json();
    assert_eq!(json["matches"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_match_limit_zero_returns_empty() {
    let app = TestApp::with_palette_json(SMALL_PALETTE);

    let response = app.get("/api/match?color=123456&limit=0").await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert!(json["matches"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_match_metric_changes_ranking() {
    let app = TestApp::with_palette_json(GRAY_PALETTE);

    let response = app
        .get(&format!("/api/match?color={}&limit=1&metric=cie76", colors::MID_GRAY))
        .await;
    let json: serde_json::Value = response.json();
    assert_eq!(json["metric"], "cie76");
    assert_eq!(json["matches"][0]["code"], "SG");

    let response = app
        .get(&format!("/api/match?color={}&limit=1&metric=ciede2000", colors::MID_GRAY))
        .await;
    let json: serde_json::Value = response.json();
    assert_eq!(json["metric"], "ciede2000");
    assert_eq!(json["matches"][0]["code"], "LG");
}

#[tokio::test]
async fn test_match_uses_configured_default_metric() {
    let config = AppConfig {
        default_metric: DistanceMetric::Ciede2000,
        ..AppConfig::default()
    };
    let app = TestApp::with_palette_and_config(GRAY_PALETTE, config);

    let response = app
        .get(&format!("/api/match?color={}&limit=1", colors::MID_GRAY))
        .await;
    let json: serde_json::Value = response.json();
    assert_eq!(json["metric"], "ciede2000");
    assert_eq!(json["matches"][0]["code"], "LG");
}

#[tokio::test]
async fn test_match_empty_palette() {
    let app = TestApp::with_palette_json("[]");

    let response = app.get("/api/match?color=FFFFFF").await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert!(json["matches"].as_array().unwrap().is_empty());
    assert_eq!(json["query"]["hex"], "#FFFFFF");
}

#[tokio::test]
async fn test_match_invalid_color() {
    let app = TestApp::with_palette_json(SMALL_PALETTE);

    let error = assert_json_error(&app.get("/api/match?color=12").await, StatusCode::BAD_REQUEST);
    assert!(error.contains("length"), "got: {error}");

    let error = assert_json_error(
        &app.get("/api/match?color=GG0000").await,
        StatusCode::BAD_REQUEST,
    );
    assert!(error.contains("'G'"), "got: {error}");
}

#[tokio::test]
async fn test_match_missing_color() {
    let app = TestApp::with_palette_json(SMALL_PALETTE);
    let error = assert_json_error(&app.get("/api/match").await, StatusCode::BAD_REQUEST);
    assert!(error.contains("color"), "got: {error}");
}

#[tokio::test]
async fn test_match_invalid_metric_and_limit() {
    let app = TestApp::with_palette_json(SMALL_PALETTE);

    let error = assert_json_error(
        &app.get("/api/match?color=FFFFFF&metric=cmc").await,
        StatusCode::BAD_REQUEST,
    );
    assert!(error.contains("unknown distance metric"), "got: {error}");

    assert_json_error(
        &app.get("/api/match?color=FFFFFF&limit=many").await,
        StatusCode::BAD_REQUEST,
    );
}
