use super::*;
use crate::net::types::{DealStrategy, NextActions};

#[test]
fn default_config_points_at_local_backend() {
    assert_eq!(ApiConfig::default().url(endpoints::ALERTS), "http://127.0.0.1:8000/alerts");
}

#[test]
fn new_config_trims_trailing_slashes() {
    assert_eq!(ApiConfig::new("https://api.example.com//").url("/chat"), "https://api.example.com/chat");
}

#[test]
fn blank_config_falls_back_to_default() {
    assert_eq!(ApiConfig::new("   "), ApiConfig::default());
}

#[test]
fn url_joins_base_and_path_with_one_slash() {
    let config = ApiConfig::new("http://10.0.0.5:8000/");
    assert_eq!(config.url(endpoints::NEXT_ACTIONS), "http://10.0.0.5:8000/actions/next");
    assert_eq!(config.url("alerts"), "http://10.0.0.5:8000/alerts");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_without_browser_uses_default() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
}

#[test]
fn decode_body_rejects_non_success_status() {
    let result: Result<NextActions, ApiError> = decode_body(502, "{}");
    assert_eq!(result, Err(ApiError::Status(502)));
}

#[test]
fn decode_body_reports_malformed_json() {
    let result: Result<NextActions, ApiError> = decode_body(200, "<html>oops</html>");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn decode_body_parses_success() {
    let result: Result<NextActions, ApiError> = decode_body(200, r#"{"actions": []}"#);
    assert_eq!(result.unwrap().actions.len(), 0);
}

#[test]
fn unwrap_advisory_maps_refusal_to_backend_error() {
    let refused: Advisory<DealStrategy> = Advisory::Refused { error: "Lead ID 3 not found".to_owned() };
    assert_eq!(unwrap_advisory(refused), Err(ApiError::Backend("Lead ID 3 not found".to_owned())));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_outside_browser_are_unavailable() {
    let config = ApiConfig::default();
    let result = futures::executor::block_on(fetch_alerts(&config));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn advisory_outside_browser_is_unavailable() {
    let config = ApiConfig::default();
    let result = futures::executor::block_on(deal_assist(&config, 1));
    assert_eq!(result, Err(ApiError::Unavailable));
}
