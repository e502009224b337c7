//! Threshold bucket classifiers. Each cataloged ratio carries one
//! interpreter; an undefined value always classifies to the same
//! "not enough data" text, whatever the interpreter.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{BilingualText, RatioValue, Text};

const NOT_ENOUGH_DATA: Text = Text::new("لا يمكن تقييم النسبة.", "Not enough data.");
const HIGHER_IS_BETTER: Text = Text::new("أعلى أفضل", "Higher is better");

/// Margin-family label used by the shared three-bucket margin classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginFamily {
    Gross,
    Operating,
    Net,
}

impl MarginFamily {
    fn label(&self) -> Text {
        match self {
            Self::Gross => Text::new("هامش إجمالي", "Gross margin"),
            Self::Operating => Text::new("هامش التشغيل", "Operating margin"),
            Self::Net => Text::new("هامش صافي", "Net margin"),
        }
    }
}

/// Qualitative classifier attached to a catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpreter {
    CurrentRatio,
    QuickRatio,
    CashRatio,
    DebtRatio,
    DebtToEquity,
    InterestCoverage,
    Margin(MarginFamily),
    HigherIsBetter,
    PayoutBand,
}

impl Interpreter {
    /// Classify a computed value into its bilingual qualitative bucket.
    pub fn interpret(&self, value: RatioValue) -> BilingualText {
        let x = match value.as_decimal() {
            Some(x) => x,
            None => return NOT_ENOUGH_DATA.into(),
        };

        match self {
            Self::CurrentRatio => {
                if x < Decimal::ONE {
                    Text::new("منخفضة (<1).", "Low (<1).").into()
                } else if x <= Decimal::TWO {
                    Text::new("ضمن النطاق (1–2).", "Acceptable (1–2).").into()
                } else {
                    Text::new("مرتفعة (>2).", "High (>2).").into()
                }
            }
            Self::QuickRatio => {
                if x < dec!(0.8) {
                    Text::new("ضعيفة (<0.8).", "Weak (<0.8).").into()
                } else if x < Decimal::ONE {
                    Text::new("متوسطة (≈1).", "Moderate (≈1).").into()
                } else {
                    Text::new("جيدة (≥1).", "Good (≥1).").into()
                }
            }
            Self::CashRatio => {
                if x < dec!(0.2) {
                    Text::new("ضعيفة (<0.2).", "Weak (<0.2).").into()
                } else if x < dec!(0.5) {
                    Text::new("متوسطة (0.2–0.5).", "Moderate (0.2–0.5).").into()
                } else {
                    Text::new("مطمئنة (≥0.5).", "Comfortable (≥0.5).").into()
                }
            }
            Self::DebtRatio => {
                if x > dec!(0.6) {
                    Text::new("مرتفعة (>60%).", "High (>60%).").into()
                } else if x >= dec!(0.4) {
                    Text::new("متوازنة (40–60%).", "Balanced (40–60%).").into()
                } else {
                    Text::new("منخفضة (<40%).", "Low (<40%).").into()
                }
            }
            Self::DebtToEquity => {
                if x > Decimal::TWO {
                    Text::new("مرتفعة (>2).", "High (>2).").into()
                } else if x >= Decimal::ONE {
                    Text::new("متوسطة (1–2).", "Moderate (1–2).").into()
                } else {
                    Text::new("منخفضة (<1).", "Low (<1).").into()
                }
            }
            Self::InterestCoverage => {
                if x > Decimal::ONE {
                    Text::new("تغطية آمنة (>1).", "Safe (>1).").into()
                } else {
                    Text::new("تغطية خطرة (≤1).", "Risky (≤1).").into()
                }
            }
            Self::Margin(family) => {
                let label = family.label();
                let pct = x * Decimal::ONE_HUNDRED;
                if pct < dec!(5) {
                    BilingualText::new(
                        format!("{} ضعيف (<5%).", label.ar),
                        format!("{} weak (<5%).", label.en),
                    )
                } else if pct < dec!(15) {
                    BilingualText::new(
                        format!("{} متوسط (5–15%).", label.ar),
                        format!("{} moderate (5–15%).", label.en),
                    )
                } else {
                    BilingualText::new(
                        format!("{} جيد (≥15%).", label.ar),
                        format!("{} good (≥15%).", label.en),
                    )
                }
            }
            Self::HigherIsBetter => HIGHER_IS_BETTER.into(),
            Self::PayoutBand => Text::new("40-60% مناسب", "40-60% reasonable").into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn bucket(i: Interpreter, v: Decimal) -> String {
        i.interpret(RatioValue::Defined(v)).en
    }

    #[test]
    fn test_undefined_always_classifies_to_not_enough_data() {
        for i in [
            Interpreter::CurrentRatio,
            Interpreter::QuickRatio,
            Interpreter::CashRatio,
            Interpreter::DebtRatio,
            Interpreter::DebtToEquity,
            Interpreter::InterestCoverage,
            Interpreter::Margin(MarginFamily::Gross),
            Interpreter::HigherIsBetter,
            Interpreter::PayoutBand,
        ] {
            assert_eq!(i.interpret(RatioValue::Undefined).en, "Not enough data.");
        }
    }

    #[test]
    fn test_current_ratio_buckets() {
        assert_eq!(bucket(Interpreter::CurrentRatio, dec!(0.9)), "Low (<1).");
        assert_eq!(bucket(Interpreter::CurrentRatio, dec!(1)), "Acceptable (1–2).");
        // the >2 boundary is exclusive; exactly 2 stays in range
        assert_eq!(bucket(Interpreter::CurrentRatio, dec!(2)), "Acceptable (1–2).");
        assert_eq!(bucket(Interpreter::CurrentRatio, dec!(2.01)), "High (>2).");
    }

    #[test]
    fn test_quick_ratio_buckets() {
        assert_eq!(bucket(Interpreter::QuickRatio, dec!(0.79)), "Weak (<0.8).");
        assert_eq!(bucket(Interpreter::QuickRatio, dec!(0.8)), "Moderate (≈1).");
        assert_eq!(bucket(Interpreter::QuickRatio, dec!(0.99)), "Moderate (≈1).");
        assert_eq!(bucket(Interpreter::QuickRatio, dec!(1)), "Good (≥1).");
    }

    #[test]
    fn test_cash_ratio_buckets() {
        assert_eq!(bucket(Interpreter::CashRatio, dec!(0.1)), "Weak (<0.2).");
        assert_eq!(bucket(Interpreter::CashRatio, dec!(0.2)), "Moderate (0.2–0.5).");
        assert_eq!(bucket(Interpreter::CashRatio, dec!(0.5)), "Comfortable (≥0.5).");
    }

    #[test]
    fn test_debt_ratio_buckets() {
        assert_eq!(bucket(Interpreter::DebtRatio, dec!(0.61)), "High (>60%).");
        assert_eq!(bucket(Interpreter::DebtRatio, dec!(0.6)), "Balanced (40–60%).");
        assert_eq!(bucket(Interpreter::DebtRatio, dec!(0.4)), "Balanced (40–60%).");
        assert_eq!(bucket(Interpreter::DebtRatio, dec!(0.39)), "Low (<40%).");
    }

    #[test]
    fn test_debt_to_equity_buckets() {
        assert_eq!(bucket(Interpreter::DebtToEquity, dec!(2.5)), "High (>2).");
        assert_eq!(bucket(Interpreter::DebtToEquity, dec!(2)), "Moderate (1–2).");
        assert_eq!(bucket(Interpreter::DebtToEquity, dec!(1)), "Moderate (1–2).");
        assert_eq!(bucket(Interpreter::DebtToEquity, dec!(0.5)), "Low (<1).");
    }

    #[test]
    fn test_interest_coverage_is_binary() {
        assert_eq!(bucket(Interpreter::InterestCoverage, dec!(1.01)), "Safe (>1).");
        assert_eq!(bucket(Interpreter::InterestCoverage, dec!(1)), "Risky (≤1).");
        assert_eq!(bucket(Interpreter::InterestCoverage, dec!(-3)), "Risky (≤1).");
    }

    #[test]
    fn test_margin_buckets_carry_family_label() {
        let gross = Interpreter::Margin(MarginFamily::Gross);
        assert_eq!(bucket(gross, dec!(0.04)), "Gross margin weak (<5%).");
        assert_eq!(bucket(gross, dec!(0.05)), "Gross margin moderate (5–15%).");
        assert_eq!(bucket(gross, dec!(0.15)), "Gross margin good (≥15%).");

        let net = Interpreter::Margin(MarginFamily::Net);
        assert_eq!(bucket(net, dec!(0.04)), "Net margin weak (<5%).");
    }

    #[test]
    fn test_monotonic_and_band_labels_are_fixed() {
        assert_eq!(bucket(Interpreter::HigherIsBetter, dec!(-1)), "Higher is better");
        assert_eq!(bucket(Interpreter::HigherIsBetter, dec!(99)), "Higher is better");
        assert_eq!(bucket(Interpreter::PayoutBand, dec!(0.5)), "40-60% reasonable");
    }
}
