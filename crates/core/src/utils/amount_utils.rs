use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};

/// A numeric field that clients may send either as a JSON number or as a
/// numeric string (form inputs usually arrive as strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// Coerces the input to `f64`, naming `field` in the error message.
    pub fn to_f64(&self, field: &str) -> Result<f64> {
        let value = match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::invalid_input(format!("{field} must be a number")))?,
        };
        if !value.is_finite() {
            return Err(Error::invalid_input(format!("{field} must be a number")));
        }
        Ok(value)
    }

    /// Blank strings are treated like an absent value.
    pub fn is_blank(&self) -> bool {
        matches!(self, NumberInput::Text(s) if s.trim().is_empty())
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

/// Parses a required amount and checks it is strictly positive.
pub fn positive_amount(input: &NumberInput, field: &str) -> Result<f64> {
    let value = input.to_f64(field)?;
    if value <= 0.0 {
        return Err(Error::invalid_input(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(value)
}

/// Rounds an amount to display precision.
pub fn round_amount(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(DISPLAY_DECIMAL_PRECISION))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
