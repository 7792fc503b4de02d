//! Currency answer normalization
//!
//! Currency answers arrive as free text: `1000000`, `$1,000,000`,
//! `1,000,000.20`. Normalization strips the dollar sign and thousands
//! separators, parses the remainder as a decimal number, and reformats it as
//! a dollar amount with thousands grouping and no decimal places. Values that
//! do not parse are rejected so the caller can re-prompt for that one answer.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The value could not be parsed as a number after stripping `$` and `,`.
    InvalidAmount(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::InvalidAmount(raw) => {
                write!(f, "not a valid currency amount: '{raw}'")
            }
        }
    }
}

impl std::error::Error for CurrencyError {}

/// Normalize a raw currency answer to a `$1,234,567`-style string.
///
/// Idempotent over its own output: normalizing `"$1,000,000"` yields
/// `"$1,000,000"` again, so raw and already-normalized values are accepted
/// identically.
pub fn normalize_currency(raw: &str) -> Result<String, CurrencyError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| *ch != '$' && *ch != ',')
        .collect();
    let amount: f64 = cleaned
        .parse()
        .map_err(|_| CurrencyError::InvalidAmount(raw.to_string()))?;
    if !amount.is_finite() {
        return Err(CurrencyError::InvalidAmount(raw.to_string()));
    }
    Ok(format!("${}", group_thousands(amount.round() as i64)))
}

/// Render a whole-dollar amount with `,` between each group of three digits.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
