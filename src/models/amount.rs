//! Monetary amount helpers
//!
//! Amounts are plain `f64` values. No rounding happens during computation;
//! only display formatting rounds to two decimals. Inputs coming from the
//! user or from disk are sanitized here before they reach the planner.

use std::fmt;

/// Replace non-finite values (NaN, ±infinity) with zero
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Sanitize and clamp to zero from below
pub fn non_negative(value: f64) -> f64 {
    sanitize(value).max(0.0)
}

/// Parse a monetary amount typed by the user
///
/// Accepts formats: "10.50", "-10.50", "$10.50", "1,250.75", "10"
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);

    // Only plain decimal digits; rejects "inf", "NaN" and exponents
    if !rest
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        || !rest.chars().any(|c| c.is_ascii_digit())
    {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

    Ok(if negative { -value } else { value })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount cannot be empty"),
            Self::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
