//! Arithmetic primitives shared by every ratio: division that degrades to
//! the undefined sentinel, and the two-point average for balance-sheet
//! items.

use rust_decimal::Decimal;

use crate::types::RatioValue;

/// Divide, yielding [`RatioValue::Undefined`] when the denominator is zero
/// or the quotient cannot be represented. Never panics, never errors.
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> RatioValue {
    if denominator.is_zero() {
        return RatioValue::Undefined;
    }
    match numerator.checked_div(denominator) {
        Some(q) => RatioValue::Defined(q),
        None => RatioValue::Undefined,
    }
}

/// As [`safe_div`], with an absent numerator or denominator treated as
/// undefined.
pub fn safe_div_opt(numerator: Option<Decimal>, denominator: Option<Decimal>) -> RatioValue {
    match (numerator, denominator) {
        (Some(n), Some(d)) => safe_div(n, d),
        _ => RatioValue::Undefined,
    }
}

/// Average of a balance-sheet figure across the current and prior period.
/// Without a usable prior value the current figure stands alone, turning
/// the consuming ratio into a point-in-time figure.
pub fn two_point_average(current: Decimal, prior: Option<Decimal>) -> Decimal {
    match prior {
        Some(p) if !p.is_zero() => (current + p) / Decimal::TWO,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_safe_div_basic() {
        assert_eq!(safe_div(dec!(10), dec!(4)), RatioValue::Defined(dec!(2.5)));
    }

    #[test]
    fn test_safe_div_zero_denominator_is_undefined() {
        assert_eq!(safe_div(dec!(10), Decimal::ZERO), RatioValue::Undefined);
        assert_eq!(safe_div(Decimal::ZERO, Decimal::ZERO), RatioValue::Undefined);
    }

    #[test]
    fn test_safe_div_zero_numerator_is_a_real_zero() {
        assert_eq!(
            safe_div(Decimal::ZERO, dec!(5)),
            RatioValue::Defined(Decimal::ZERO)
        );
    }

    #[test]
    fn test_safe_div_negative_values_propagate() {
        assert_eq!(safe_div(dec!(-50), dec!(100)), RatioValue::Defined(dec!(-0.5)));
        assert_eq!(safe_div(dec!(50), dec!(-100)), RatioValue::Defined(dec!(-0.5)));
    }

    #[test]
    fn test_safe_div_overflow_degrades_to_undefined() {
        assert_eq!(safe_div(Decimal::MAX, dec!(0.0000000001)), RatioValue::Undefined);
    }

    #[test]
    fn test_safe_div_opt_missing_operands() {
        assert_eq!(safe_div_opt(Some(dec!(1)), None), RatioValue::Undefined);
        assert_eq!(safe_div_opt(None, Some(dec!(1))), RatioValue::Undefined);
        assert_eq!(safe_div_opt(None, None), RatioValue::Undefined);
        assert_eq!(
            safe_div_opt(Some(dec!(1)), Some(dec!(2))),
            RatioValue::Defined(dec!(0.5))
        );
    }

    #[test]
    fn test_two_point_average_with_prior() {
        assert_eq!(two_point_average(dec!(100), Some(dec!(50))), dec!(75));
    }

    #[test]
    fn test_two_point_average_without_prior() {
        assert_eq!(two_point_average(dec!(100), None), dec!(100));
    }

    #[test]
    fn test_two_point_average_zero_prior_falls_back() {
        assert_eq!(two_point_average(dec!(100), Some(Decimal::ZERO)), dec!(100));
    }
}
