// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Formats a number with thousands separators.
///
/// Values are rounded to two decimal places; values that are whole after
/// rounding render without a fractional part. Used for the
/// substituted-value strings inside calculation steps.
///
/// # Arguments
///
/// * `value` - The number to format.
///
/// # Returns
///
/// The formatted string, for example `1,000` or `9.75`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let negative: bool = value < 0.0;
    // Round to two decimals first so the whole part and the decimals are
    // always derived from the same value (9.999 renders as 10, not 9.00).
    let magnitude: f64 = (value.abs() * 100.0).round() / 100.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole: u64 = magnitude.trunc() as u64;
    let fraction: f64 = magnitude.fract();

    let mut grouped: String = String::new();
    let digits: String = whole.to_string();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut formatted: String = if negative {
        format!("-{grouped}")
    } else {
        grouped
    };
    if fraction > f64::EPSILON {
        let cents: String = format!("{magnitude:.2}");
        if let Some((_, decimals)) = cents.split_once('.') {
            formatted.push('.');
            formatted.push_str(decimals);
        }
    }
    formatted
}

/// Formats a monetary amount with a dollar sign and thousands separators.
///
/// # Arguments
///
/// * `value` - The amount to format.
///
/// # Returns
///
/// The formatted string, for example `$130,000,000`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number(value.abs()))
    } else {
        format!("${}", format_number(value))
    }
}

/// Formats a percentage with thousands separators and a percent sign.
///
/// # Arguments
///
/// * `value` - The percentage to format, in percentage points.
///
/// # Returns
///
/// The formatted string, for example `875%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}
