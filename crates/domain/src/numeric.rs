/// Round `value` to the nearest multiple of `increment`.
///
/// Ties are rounded away from zero. A non-positive increment leaves the value unchanged.
#[must_use]
pub fn round_to_nearest(value: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}

/// Parse user-entered text as a number, falling back to `default` on failure.
#[must_use]
pub fn coerce_number(text: &str, default: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => default,
    }
}

/// Parse user-entered text as a non-negative integer, falling back to `default` on failure.
///
/// Decimal input is truncated towards zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_integer(text: &str, default: u32) -> u32 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > -1.0 && value < f64::from(u32::MAX) => {
            value.trunc().max(0.0) as u32
        }
        _ => default,
    }
}

/// Format a weight without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_weight(weight: f64) -> String {
    if (weight - weight.round()).abs() < f64::EPSILON {
        format!("{weight:.0}")
    } else {
        format!("{weight}")
    }
}
