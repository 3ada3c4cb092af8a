//! Value coercion for numeric ticket fields.

/// Coerces a raw estimate cell to a whole story-point value.
///
/// Trims, treats empty as 0, tolerates a comma decimal separator, and
/// falls back to rounding a decimal to the nearest integer. Anything
/// unparseable degrades to 0; this leniency is deliberate and coercion
/// never aborts a run.
pub fn parse_estimate(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    let normalized = trimmed.replace(',', ".");
    if let Ok(value) = normalized.parse::<i64>() {
        return value;
    }
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value.round() as i64,
        _ => 0,
    }
}
