//! Pure API handlers
//!
//! These handlers contain the card logic and are HTTP-agnostic.
//! They take typed input and return data or `Result<T, ApiError>`.

use std::slice;

use crate::config::CardConfig;
use crate::loader;
use crate::models::Certificate;
use crate::render::HtmlRenderer;
use crate::view::CertificateView;

use super::error::ApiError;
use super::types::{CardData, CardsData, RenderCardRequest};

/// Render a certificate supplied in the request
///
/// Returns a standalone HTML document unless the request asks for the
/// bare fragment.
#[must_use]
pub fn render_card(req: &RenderCardRequest, config: &CardConfig) -> CardData {
    let mut data = card_data(&req.certificate, config);
    if !req.fragment {
        data.html = HtmlRenderer::new().render_page(&config.brand, slice::from_ref(&data.view));
    }
    data
}

/// Render every loaded certificate
#[must_use]
pub fn list_cards(certs: &[Certificate], config: &CardConfig) -> CardsData {
    let cards: Vec<CardData> = certs.iter().map(|c| card_data(c, config)).collect();
    CardsData {
        total: cards.len(),
        minted: certs.iter().filter(|c| c.minted).count(),
        cards,
    }
}

/// Render one loaded certificate by id
pub fn get_card(certs: &[Certificate], id: &str, config: &CardConfig) -> Result<CardData, ApiError> {
    if id.is_empty() {
        return Err(ApiError::EmptyId);
    }
    loader::find(certs, id)
        .map(|c| card_data(c, config))
        .ok_or_else(|| ApiError::CertificateNotFound(id.to_string()))
}

fn card_data(cert: &Certificate, config: &CardConfig) -> CardData {
    let view = CertificateView::new(cert, config);
    CardData {
        id: cert.detail_id().map(String::from),
        html: HtmlRenderer::new().render_card(&view),
        view,
    }
}
