//! Display scalars
//!
//! Certificate producers do not always send the shape the card expects.
//! A [`Scalar`] accepts any JSON/TOML scalar and prints it the way string
//! interpolation would, so odd values reach the card instead of failing the
//! whole file.

use serde::{Deserialize, Serialize};

/// Any scalar value, displayed as given
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Integral number
    Int(i64),
    /// Fractional or out-of-`i64` number
    Float(f64),
    /// Boolean, printed as `true`/`false`
    Bool(bool),
    /// Text, printed verbatim
    Text(String),
    /// Explicit `null`, printed as nothing
    #[default]
    Null,
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for Scalar {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::fmt::Display for Scalar {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            // Whole floats print like numbers do in the browser: 100.0 -> "100"
            Self::Float(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            },
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::Null => Ok(()),
        }
    }
}
