//! Numeric formatting and lenient parsing for FSC fields.

/// Distance from the nearest integer under which a value prints as that integer.
const INTEGER_TOLERANCE: f64 = 1e-10;

/// Fractional digits kept for non-integer values.
const DECIMALS: usize = 4;

/// Format a number the compact FSC way.
///
/// Values within `1e-10` of an integer print as that integer with no
/// decimal point. Anything else prints with up to four decimals, trailing
/// zeros and a bare trailing `.` removed.
///
/// ```
/// use pscreen::fsc::trim_num;
/// assert_eq!(trim_num(2.00000000001), "2");
/// assert_eq!(trim_num(0.70), "0.7");
/// assert_eq!(trim_num(-1.23456), "-1.2346");
/// ```
pub fn trim_num(n: f64) -> String {
    let rounded = n.round();
    if (n - rounded).abs() < INTEGER_TOLERANCE {
        // + 0.0 folds -0 into 0
        return format!("{}", rounded + 0.0);
    }
    let fixed = format!("{:.*}", DECIMALS, n);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Parse a numeric field, NaN when it is not a number.
///
/// Surrounding whitespace is ignored; an empty field reads as 0.
pub fn parse_number(field: &str) -> f64 {
    let field = field.trim();
    if field.is_empty() {
        return 0.0;
    }
    field.parse::<f64>().unwrap_or(f64::NAN)
}

/// `value` when finite, otherwise `fallback`.
#[inline]
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
