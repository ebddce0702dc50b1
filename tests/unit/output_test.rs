//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use certview::config::CertviewConfig;
use certview::output::{ConfigResult, OperationResult, OutputMode, RenderResult, RenderedCard, ShowResult};

use crate::common::{backend_engineer, data_analyst, view_of};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn show_result_serializes_views_only() {
    let result = ShowResult {
        cards: vec![view_of(&backend_engineer())],
        color: true,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["cards"][0]["score_label"], "Score: 92%");
    assert!(json.get("color").is_none());
}

#[test]
fn render_result_hides_page_html() {
    let result = RenderResult {
        cards: vec![RenderedCard {
            id: Some("cert-42".to_string()),
            view: view_of(&data_analyst()),
            html: "<div></div>".to_string(),
        }],
        output: "<!DOCTYPE html>".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"id\":\"cert-42\""));
    assert!(json.contains("<div></div>"));
    assert!(!json.contains("DOCTYPE"));
}

#[test]
fn config_result_serialization() {
    let result = ConfigResult {
        path: "/tmp/config.toml".to_string(),
        exists: false,
        config: CertviewConfig::default(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["exists"], false);
    assert_eq!(json["config"]["card"]["brand"], "SkillForge");
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Wrote 2 card(s)".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
}
