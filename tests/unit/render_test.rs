//! Tests for the HTML and terminal renderers

use certview::render::{HtmlRenderer, STYLE_CSS, Stylesheet, TextRenderer};

use crate::common::{CertificateBuilder, backend_engineer, data_analyst, view_of};

// =============================================================================
// HTML
// =============================================================================

#[test]
fn html_card_for_minted_example() {
    let html = HtmlRenderer::new().render_card(&view_of(&backend_engineer()));

    assert!(html.starts_with(r#"<div class="card cert-card">"#));
    assert!(html.contains(r#"<h3 class="cert-brand">SkillForge</h3>"#));
    assert!(html.contains(r#"<p class="cert-title">Certificate of Achievement</p>"#));
    assert!(html.contains(r#"<p class="cert-role">Backend Engineer</p>"#));
    assert!(html.contains(r#"<span class="badge badge-secondary mt-2">Score: 92%</span>"#));
    assert!(html.contains("2024-03-01"));
    assert!(html.contains(r#"data-icon="calendar""#));
    assert!(html.contains(r#"data-icon="check-circle""#));
    assert!(html.contains("Minted on Blockchain"));
    assert!(!html.contains("Not Minted"));
    assert!(!html.contains("<a "));
    assert!(!html.contains("<button"));
}

#[test]
fn html_card_for_unminted_example() {
    let html = HtmlRenderer::new().render_card(&view_of(&data_analyst()));

    assert!(html.contains(r#"<span class="badge badge-outline">Not Minted</span>"#));
    assert!(!html.contains("Minted on Blockchain"));
    assert!(!html.contains(r#"data-icon="check-circle""#));
    assert!(html.contains(r#"href="/dashboard/certificates/view/cert-42""#));
    assert!(html.contains(r#"data-icon="eye""#));
    assert!(html.contains("View Certificate"));
}

#[test]
fn html_escapes_attribute_values() {
    let cert = CertificateBuilder::new().id(r#"a"b"#).build();
    let html = HtmlRenderer::new().render_card(&view_of(&cert));
    assert!(html.contains(r#"href="/dashboard/certificates/view/a&quot;b""#));
}

#[test]
fn html_page_inlines_stylesheet_by_default() {
    let page = HtmlRenderer::new().render_page("SkillForge", &[view_of(&backend_engineer())]);
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>SkillForge</title>"));
    assert!(page.contains(STYLE_CSS));
    assert!(page.contains("Backend Engineer"));
    assert!(page.trim_end().ends_with("</html>"));
}

#[test]
fn html_page_can_link_stylesheet() {
    let page = HtmlRenderer::new()
        .with_stylesheet(Stylesheet::Linked("/style.css"))
        .render_page("x", &[]);
    assert!(!page.contains(STYLE_CSS));
    assert!(page.contains(r#"href="/style.css""#));
}

#[test]
fn html_rendering_is_deterministic() {
    let view = view_of(&data_analyst());
    let renderer = HtmlRenderer::new();
    assert_eq!(renderer.render_card(&view), renderer.render_card(&view));
    assert_eq!(renderer.render_card(&view), renderer.render_card(&view_of(&data_analyst())));
}

// =============================================================================
// Terminal
// =============================================================================

#[test]
fn text_card_contains_every_field() {
    let out = TextRenderer::new(false).render(&view_of(&data_analyst()));
    for needle in [
        "SkillForge",
        "Certificate of Achievement",
        "Data Analyst",
        "Score: 78%",
        "2024-01-15",
        "Not Minted",
        "View Certificate",
        "/dashboard/certificates/view/cert-42",
    ] {
        assert!(out.contains(needle), "missing {needle} in\n{out}");
    }
    assert!(!out.contains("Minted on Blockchain"));
}

#[test]
fn text_cards_are_separated() {
    let views = vec![view_of(&backend_engineer()), view_of(&data_analyst())];
    let out = TextRenderer::new(false).render_all(&views);
    assert_eq!(out.matches('╭').count(), 2);
    assert!(out.contains("╯\n\n╭"));
}

#[test]
fn coloured_text_adds_escape_codes_only_when_enabled() {
    colored::control::set_override(true);
    let coloured = TextRenderer::new(true).render(&view_of(&backend_engineer()));
    assert!(coloured.contains('\u{1b}'));

    let plain = TextRenderer::new(false).render(&view_of(&backend_engineer()));
    assert!(!plain.contains('\u{1b}'));
}
