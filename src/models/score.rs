//! Certificate score
//!
//! Scores are displayed exactly as supplied. Nothing here clamps, rounds
//! or validates the range; `0..=100` is only a convention of the producer.

use serde::{Deserialize, Serialize};

use super::Scalar;

/// A score percentage as it arrived from the certificate producer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(pub Scalar);

impl Score {
    /// Text shown on the score badge, e.g. `Score: 92%`
    #[must_use]
    pub fn badge_label(&self) -> String {
        format!("Score: {}%", self.0)
    }
}

macro_rules! score_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Score {
                fn from(value: $ty) -> Self {
                    Self(Scalar::from(value))
                }
            }
        )*
    };
}

score_from!(i64, i32, u8, f64, bool, &str, String);

impl From<Scalar> for Score {
    fn from(value: Scalar) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
