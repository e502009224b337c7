use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Multiples (e.g., 2.5x current ratio)
pub type Multiple = Decimal;

/// The fixed taxonomy used to organize ratio results for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioGroup {
    Assets,
    Liabilities,
    Sales,
    Profitability,
    Market,
}

impl RatioGroup {
    pub fn label(&self) -> Text {
        match self {
            Self::Assets => Text::new("نسب الأصول", "Asset Ratios"),
            Self::Liabilities => Text::new("نسب الخصوم", "Liability Ratios"),
            Self::Sales => Text::new("نسب المبيعات", "Sales Ratios"),
            Self::Profitability => Text::new("نسب الربحية", "Profitability Ratios"),
            Self::Market => Text::new("نسب السوق", "Market Ratios"),
        }
    }
}

/// Presentation language for bilingual text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Arabic,
    English,
}

/// Borrowed bilingual pair for static catalog and resource text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub ar: &'static str,
    pub en: &'static str,
}

impl Text {
    pub const fn new(ar: &'static str, en: &'static str) -> Self {
        Self { ar, en }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Arabic => self.ar,
            Language::English => self.en,
        }
    }
}

/// Owned bilingual pair carried on computed results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub ar: String,
    pub en: String,
}

impl BilingualText {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Arabic => &self.ar,
            Language::English => &self.en,
        }
    }
}

impl From<Text> for BilingualText {
    fn from(t: Text) -> Self {
        Self::new(t.ar, t.en)
    }
}

/// Outcome of one ratio computation. `Undefined` marks a division whose
/// denominator was zero or absent; it is not an error, and it is distinct
/// from a computed value of exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum RatioValue {
    Defined(Decimal),
    Undefined,
}

impl RatioValue {
    /// Numeric form for trend charts and comparisons.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Defined(v) => Some(*v),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl From<Option<Decimal>> for RatioValue {
    fn from(v: Option<Decimal>) -> Self {
        match v {
            Some(d) => Self::Defined(d),
            None => Self::Undefined,
        }
    }
}

/// How a ratio's value is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    Plain,
    Percent,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T> {
    pub result: T,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T>(warnings: Vec<String>, elapsed_us: u64, result: T) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ratio_value_distinguishes_zero_from_undefined() {
        let zero = RatioValue::Defined(Decimal::ZERO);
        assert!(zero.is_defined());
        assert_eq!(zero.as_decimal(), Some(Decimal::ZERO));
        assert!(!RatioValue::Undefined.is_defined());
        assert_eq!(RatioValue::Undefined.as_decimal(), None);
        assert_ne!(zero, RatioValue::Undefined);
    }

    #[test]
    fn test_ratio_value_serde_tagging() {
        let json = serde_json::to_value(RatioValue::Defined(dec!(1.5))).unwrap();
        assert_eq!(json["status"], "defined");
        let json = serde_json::to_value(RatioValue::Undefined).unwrap();
        assert_eq!(json["status"], "undefined");
    }

    #[test]
    fn test_bilingual_text_lookup() {
        let t = BilingualText::new("نص", "text");
        assert_eq!(t.get(Language::Arabic), "نص");
        assert_eq!(t.get(Language::English), "text");
    }

    #[test]
    fn test_group_labels_cover_taxonomy() {
        for group in [
            RatioGroup::Assets,
            RatioGroup::Liabilities,
            RatioGroup::Sales,
            RatioGroup::Profitability,
            RatioGroup::Market,
        ] {
            assert!(!group.label().en.is_empty());
            assert!(!group.label().ar.is_empty());
        }
    }
}
