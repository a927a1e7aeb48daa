// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::format::{format_currency, format_number, format_percent};

#[test]
fn test_format_number_groups_thousands() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1_000.0), "1,000");
    assert_eq!(format_number(130_000_000.0), "130,000,000");
}

#[test]
fn test_format_number_keeps_fractional_values() {
    assert_eq!(format_number(9.75), "9.75");
    assert_eq!(format_number(0.5), "0.50");
    assert_eq!(format_number(1_234.5), "1,234.50");
}

#[test]
fn test_format_number_rounds_to_two_decimals() {
    // The whole part and the decimals must come from the same rounded
    // value, including when rounding carries past the decimal point.
    assert_eq!(format_number(9.999), "10");
    assert_eq!(format_number(1_000.999), "1,001");
    assert_eq!(format_number(9.994), "9.99");
    assert_eq!(format_number(0.996), "1");
    assert_eq!(format_number(-9.999), "-10");
}

#[test]
fn test_format_number_negative() {
    assert_eq!(format_number(-1_000.0), "-1,000");
    assert_eq!(format_number(-9.75), "-9.75");
}

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(130_000.0), "$130,000");
    assert_eq!(format_currency(2_000_000.0), "$2,000,000");
    assert_eq!(format_currency(-500.0), "-$500");
}

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(15.0), "15%");
    assert_eq!(format_percent(875.0), "875%");
    assert_eq!(format_percent(0.5), "0.50%");
}
