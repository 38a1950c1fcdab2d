use crate::error::RoiError;

/// Parse a property's stored target-return rate into a percentage value.
///
/// Accepts `"12.5%"`, `"12.5 %"` or a bare `"12.5"`. Anything else is a
/// `MalformedRate` error — a bad stored rate must never leak `NaN` into
/// downstream arithmetic.
pub fn parse_rate(raw: &str) -> Result<f64, RoiError> {
    let trimmed = raw.trim();
    let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    let value: f64 = numeric
        .parse()
        .map_err(|_| RoiError::MalformedRate(raw.to_string()))?;

    // "inf" and "NaN" parse successfully but are not usable rates.
    if !value.is_finite() {
        return Err(RoiError::MalformedRate(raw.to_string()));
    }

    Ok(value)
}
