//! Number rendering for ratio displays and equation substitution text.

use rust_decimal::Decimal;

use crate::types::{RatioValue, ValueFormat};

/// Placeholder glyph shown for an undefined value. Never an empty string,
/// never zero.
pub const UNDEFINED_PLACEHOLDER: &str = "—";

/// Render a ratio value for display: percentages as the value times 100
/// with two decimals and a trailing `%`, plain values with thousands
/// separators and two decimals, undefined as the placeholder glyph.
pub fn format_ratio(value: RatioValue, format: ValueFormat) -> String {
    match value {
        RatioValue::Undefined => UNDEFINED_PLACEHOLDER.to_string(),
        RatioValue::Defined(v) => match format {
            ValueFormat::Percent => format!("{}%", group_thousands(v * Decimal::ONE_HUNDRED)),
            ValueFormat::Plain => group_thousands(v),
        },
    }
}

/// Format a raw statement figure for the substituted-equation line.
pub fn format_amount(value: Decimal) -> String {
    group_thousands(value)
}

/// As [`format_amount`], rendering an absent figure as the placeholder.
pub fn format_opt_amount(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format_amount(v),
        None => UNDEFINED_PLACEHOLDER.to_string(),
    }
}

/// Two decimal places, thousands separators, sign preserved.
fn group_thousands(value: Decimal) -> String {
    let rendered = format!("{:.2}", value.round_dp(2));
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}.{frac_part}")
}
