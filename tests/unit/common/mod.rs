//! Test fixtures and builders
//!
//! Provides convenient builders for creating test certificates.

use certview::config::CardConfig;
use certview::models::{Certificate, Scalar, Score};
use certview::view::CertificateView;

/// Builder for creating test certificates
pub struct CertificateBuilder {
    id: Option<String>,
    role: String,
    score: Score,
    date: Scalar,
    minted: bool,
}

impl CertificateBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            role: "Backend Engineer".to_string(),
            score: Score::from(92),
            date: Scalar::from("2024-03-01"),
            minted: true,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    pub fn score(mut self, score: impl Into<Score>) -> Self {
        self.score = score.into();
        self
    }

    pub fn date(mut self, date: impl Into<Scalar>) -> Self {
        self.date = date.into();
        self
    }

    pub fn minted(mut self, minted: bool) -> Self {
        self.minted = minted;
        self
    }

    pub fn build(self) -> Certificate {
        Certificate {
            id: self.id,
            role: self.role,
            score: self.score,
            date: self.date,
            minted: self.minted,
        }
    }
}

impl Default for CertificateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The minted, id-less example certificate
pub fn backend_engineer() -> Certificate {
    CertificateBuilder::new().build()
}

/// The unminted example certificate with an id
pub fn data_analyst() -> Certificate {
    CertificateBuilder::new()
        .role("Data Analyst")
        .score(78)
        .date("2024-01-15")
        .minted(false)
        .id("cert-42")
        .build()
}

/// View with default card config
pub fn view_of(cert: &Certificate) -> CertificateView {
    CertificateView::new(cert, &CardConfig::default())
}
