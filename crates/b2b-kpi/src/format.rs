use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

use crate::error::KpiError;

pub const DEFAULT_MIN_DECIMALS: u32 = 2;
pub const DEFAULT_MAX_DECIMALS: u32 = 2;

const MAX_FRACTION_DIGITS: u32 = 20;

/// Render `value` with en-US digit grouping, rounded half away from zero to
/// `max_decimals` and padded to at least `min_decimals`.
pub fn format_amount(
    value: Decimal,
    min_decimals: u32,
    max_decimals: u32,
) -> Result<String, KpiError> {
    if min_decimals > max_decimals {
        return Err(KpiError::InvalidData(format!(
            "Minimum decimals ({min_decimals}) exceed maximum decimals ({max_decimals})"
        )));
    }
    if max_decimals > MAX_FRACTION_DIGITS {
        return Err(KpiError::InvalidData(format!(
            "At most {MAX_FRACTION_DIGITS} decimals are supported, got {max_decimals}"
        )));
    }

    let rounded = value.round_dp_with_strategy(max_decimals, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < min_decimals as usize {
        fraction.push('0');
    }

    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(&fraction);
    }

    Ok(formatted)
}

/// Same as [`format_amount`] for floats. Non-finite values render as zero.
pub fn format_float(value: f64, min_decimals: u32, max_decimals: u32) -> Result<String, KpiError> {
    let value = Decimal::from_f64(value).unwrap_or(Decimal::ZERO);
    format_amount(value, min_decimals, max_decimals)
}

pub fn format_percent(value: f64, min_decimals: u32, max_decimals: u32) -> Result<String, KpiError> {
    Ok(format!("{}%", format_float(value, min_decimals, max_decimals)?))
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
