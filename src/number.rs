//! Number formatting and rounding.
//!
//! Rounding works on the decimal value a human reads, not the binary one:
//! the scaled value is first cut to 15 significant digits, so
//! `round(1.005, 2)` is `1.01` even though `1.005` is stored as
//! `1.00499999...`.

fn scaled(value: f64, decimals: i32) -> f64 {
    let raw = if decimals >= 0 {
        value * 10f64.powi(decimals)
    } else {
        value / 10f64.powi(-decimals)
    };
    if !raw.is_finite() {
        return raw;
    }
    format!("{raw:.14e}").parse().unwrap_or(raw)
}

fn unscale(value: f64, decimals: i32) -> f64 {
    if decimals >= 0 {
        value / 10f64.powi(decimals)
    } else {
        value * 10f64.powi(-decimals)
    }
}

/// Rounds half away from zero to `decimals` places. Negative `decimals`
/// round to tens, hundreds and so on.
pub fn round(value: f64, decimals: i32) -> f64 {
    unscale(scaled(value, decimals).round(), decimals)
}

/// Rounds half to even ("banker's rounding").
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    unscale(scaled(value, decimals).round_ties_even(), decimals)
}

/// Half-even to cents.
pub fn euro_round(value: f64) -> f64 {
    round_half_even(value, 2)
}

pub fn floor(value: f64) -> f64 {
    value.floor()
}

pub fn ceil(value: f64) -> f64 {
    value.ceil()
}

/// Formats `value` with `decimals` places, grouping the integer part by
/// thousands.
///
/// ```
/// use normkit::number::format_number;
/// assert_eq!(format_number(1234567.891, 2, " ", ","), "1 234 567,89");
/// ```
pub fn format_number(value: f64, decimals: usize, thousand_sep: &str, decimal_sep: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let places = i32::try_from(decimals).unwrap_or(i32::MAX);
    let rounded = round(value, places);
    let digits = format!("{:.*}", decimals, rounded.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 * thousand_sep.len() + 1);
    if rounded < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    let lead = int_part.len() % 3;
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push_str(thousand_sep);
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push_str(decimal_sep);
        out.push_str(frac_part);
    }
    out
}

/// Reads a number written with either `.` or `,` as decimal mark.
pub fn to_number(input: &str) -> Option<f64> {
    let dotted = text::replace_first(input.trim(), ",", ".", false);
    dotted.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_modes() {
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(-2.5, 0), -3.0);
        assert_eq!(round(1.005, 2), 1.01);
        assert_eq!(round(1234.5, -2), 1200.0);
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(3.5, 0), 4.0);
        assert_eq!(euro_round(0.125), 0.12);
        assert_eq!(euro_round(0.135), 0.14);
        assert_eq!(floor(-1.2), -2.0);
        assert_eq!(ceil(1.2), 2.0);
    }

    #[test]
    fn grouping_and_separators() {
        assert_eq!(format_number(1234567.891, 2, " ", "."), "1 234 567.89");
        assert_eq!(format_number(1234.5, 0, ",", "."), "1,235");
        assert_eq!(format_number(999.0, 2, ",", "."), "999.00");
        assert_eq!(format_number(-1000.0, 1, ".", ","), "-1.000,0");
        assert_eq!(format_number(-0.001, 2, " ", "."), "0.00");
        assert_eq!(format_number(100000.0, 0, "'", "."), "100'000");
    }

    #[test]
    fn comma_decimals_parse() {
        assert_eq!(to_number("3,14"), Some(3.14));
        assert_eq!(to_number(" 42 "), Some(42.0));
        assert_eq!(to_number("1,5,2"), None);
        assert_eq!(to_number("abc"), None);
        assert_eq!(to_number("inf"), None);
    }
}
