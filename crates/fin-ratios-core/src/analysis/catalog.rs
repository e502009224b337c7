//! The fixed ratio catalog: one declarative row per ratio, iterated once
//! per engine pass. The "one true list" lives here and nowhere else.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{format_amount, format_opt_amount};
use crate::types::{Money, RatioGroup, Text, ValueFormat};
use crate::{FinRatiosError, FinRatiosResult};

use super::engine::Figures;
use super::interpret::{Interpreter, MarginFamily};

/// Canonical identifier for every cataloged ratio. Doubles as the key the
/// presentation layer uses to join its static explanation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioId {
    CurrentRatio,
    QuickRatio,
    CashRatio,
    DebtRatio,
    GrossMargin,
    OperatingMargin,
    NetProfitMargin,
    ReturnOnEquity,
    ReturnOnAssets,
    BasicEarningsPower,
    CashConversion,
    DebtToEquity,
    InterestCoverage,
    InventoryTurnover,
    ReceivableTurnover,
    FixedAssetTurnover,
    EarningsPerShare,
    PayoutRatio,
}

impl RatioId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentRatio => "current_ratio",
            Self::QuickRatio => "quick_ratio",
            Self::CashRatio => "cash_ratio",
            Self::DebtRatio => "debt_ratio",
            Self::GrossMargin => "gross_margin",
            Self::OperatingMargin => "operating_margin",
            Self::NetProfitMargin => "net_profit_margin",
            Self::ReturnOnEquity => "return_on_equity",
            Self::ReturnOnAssets => "return_on_assets",
            Self::BasicEarningsPower => "basic_earnings_power",
            Self::CashConversion => "cash_conversion",
            Self::DebtToEquity => "debt_to_equity",
            Self::InterestCoverage => "interest_coverage",
            Self::InventoryTurnover => "inventory_turnover",
            Self::ReceivableTurnover => "receivable_turnover",
            Self::FixedAssetTurnover => "fixed_asset_turnover",
            Self::EarningsPerShare => "earnings_per_share",
            Self::PayoutRatio => "payout_ratio",
        }
    }

    /// Resolve a canonical name back to its id.
    pub fn parse(name: &str) -> FinRatiosResult<Self> {
        CATALOG
            .iter()
            .map(|spec| spec.id)
            .find(|id| id.as_str() == name)
            .ok_or_else(|| FinRatiosError::UnknownRatio {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for RatioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A figure drawn from the statement or derived from it. Keeping the
/// selectors as data keeps every ratio a numerator operand over a
/// denominator operand, with no per-ratio procedural code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Sales,
    Cogs,
    Cash,
    Cfo,
    Ebit,
    NetIncome,
    Equity,
    InterestExpense,
    CurrentAssets,
    CurrentLiabilities,
    TotalAssets,
    TotalLiabilities,
    /// current assets − inventory
    QuickAssets,
    /// sales − COGS
    GrossProfit,
    /// total assets − current assets
    FixedAssets,
    AvgTotalAssets,
    AvgInventory,
    AvgReceivables,
    SharesOutstanding,
    DividendsPaid,
}

impl Operand {
    /// Resolve against prepared figures. Absent market inputs resolve to
    /// `None`, which safe division surfaces as undefined.
    pub(crate) fn value(&self, fig: &Figures<'_>) -> Option<Money> {
        let fi = fig.input;
        match self {
            Self::Sales => Some(fi.sales),
            Self::Cogs => Some(fi.cogs),
            Self::Cash => Some(fi.cash),
            Self::Cfo => Some(fi.cfo),
            Self::Ebit => Some(fig.derived.ebit),
            Self::NetIncome => Some(fig.derived.net_income),
            Self::Equity => Some(fi.equity),
            Self::InterestExpense => Some(fi.interest_expense),
            Self::CurrentAssets => Some(fi.current_assets),
            Self::CurrentLiabilities => Some(fi.current_liabilities),
            Self::TotalAssets => Some(fi.total_assets),
            Self::TotalLiabilities => Some(fi.total_liabilities),
            Self::QuickAssets => Some(fi.current_assets - fi.inventory),
            Self::GrossProfit => Some(fi.sales - fi.cogs),
            Self::FixedAssets => Some(fi.total_assets - fi.current_assets),
            Self::AvgTotalAssets => Some(fig.averages.total_assets),
            Self::AvgInventory => Some(fig.averages.inventory),
            Self::AvgReceivables => Some(fig.averages.accounts_receivable),
            Self::SharesOutstanding => fi.shares_outstanding,
            Self::DividendsPaid => fi.dividends_paid,
        }
    }

    /// Numbers text for the substituted-equation line. Composite operands
    /// show their construction.
    pub(crate) fn substitution(&self, fig: &Figures<'_>) -> String {
        let fi = fig.input;
        match self {
            Self::QuickAssets => format!(
                "({} − {})",
                format_amount(fi.current_assets),
                format_amount(fi.inventory)
            ),
            Self::GrossProfit => {
                format!("({} − {})", format_amount(fi.sales), format_amount(fi.cogs))
            }
            Self::FixedAssets => format!(
                "({} − {})",
                format_amount(fi.total_assets),
                format_amount(fi.current_assets)
            ),
            _ => format_opt_amount(self.value(fig)),
        }
    }
}

/// One catalog row: everything the engine needs to compute, render, and
/// interpret a single ratio.
pub struct RatioSpec {
    pub id: RatioId,
    pub group: RatioGroup,
    pub name: Text,
    pub explain: Text,
    pub formula: Text,
    pub format: ValueFormat,
    pub numerator: Operand,
    pub denominator: Operand,
    pub interpreter: Interpreter,
}

/// The fixed ratio catalog, in presentation order. Exactly one result per
/// row per invocation, regardless of how many inputs are undefined.
pub static CATALOG: &[RatioSpec] = &[
    RatioSpec {
        id: RatioId::CurrentRatio,
        group: RatioGroup::Assets,
        name: Text::new("نسبة التداول", "Current Ratio"),
        explain: Text::new(
            "تقيس قدرة الشركة على سداد الالتزامات قصيرة الأجل.",
            "Measures ability to pay short-term obligations.",
        ),
        formula: Text::new(
            "الأصول المتداولة ÷ الخصوم المتداولة",
            "Current Assets ÷ Current Liabilities",
        ),
        format: ValueFormat::Plain,
        numerator: Operand::CurrentAssets,
        denominator: Operand::CurrentLiabilities,
        interpreter: Interpreter::CurrentRatio,
    },
    RatioSpec {
        id: RatioId::QuickRatio,
        group: RatioGroup::Assets,
        name: Text::new("النسبة السريعة", "Quick Ratio"),
        explain: Text::new(
            "تستبعد المخزون لقياس السيولة الفورية.",
            "Excludes inventory for immediate liquidity.",
        ),
        formula: Text::new(
            "(الأصول المتداولة − المخزون) ÷ الخصوم المتداولة",
            "(Current Assets − Inventory) ÷ Current Liabilities",
        ),
        format: ValueFormat::Plain,
        numerator: Operand::QuickAssets,
        denominator: Operand::CurrentLiabilities,
        interpreter: Interpreter::QuickRatio,
    },
    RatioSpec {
        id: RatioId::CashRatio,
        group: RatioGroup::Assets,
        name: Text::new("النسبة النقدية", "Cash Ratio"),
        explain: Text::new("يقيس تغطية الخصوم بالنقد.", "Covers liabilities with cash."),
        formula: Text::new("النقدية ÷ الخصوم المتداولة", "Cash ÷ Current Liabilities"),
        format: ValueFormat::Plain,
        numerator: Operand::Cash,
        denominator: Operand::CurrentLiabilities,
        interpreter: Interpreter::CashRatio,
    },
    RatioSpec {
        id: RatioId::DebtRatio,
        group: RatioGroup::Liabilities,
        name: Text::new("نسبة المديونية", "Debt Ratio"),
        explain: Text::new("نسبة تمويل الأصول بالديون.", "Assets financed by debt."),
        formula: Text::new(
            "إجمالي الخصوم ÷ إجمالي الأصول",
            "Total Liabilities ÷ Total Assets",
        ),
        format: ValueFormat::Percent,
        numerator: Operand::TotalLiabilities,
        denominator: Operand::TotalAssets,
        interpreter: Interpreter::DebtRatio,
    },
    RatioSpec {
        id: RatioId::GrossMargin,
        group: RatioGroup::Sales,
        name: Text::new("هامش الربح الإجمالي", "Gross Margin"),
        explain: Text::new("ربحية النشاط الأساسي.", "Core profitability."),
        formula: Text::new(
            "(المبيعات − تكلفة المبيعات) ÷ المبيعات",
            "(Sales − COGS) ÷ Sales",
        ),
        format: ValueFormat::Percent,
        numerator: Operand::GrossProfit,
        denominator: Operand::Sales,
        interpreter: Interpreter::Margin(MarginFamily::Gross),
    },
    RatioSpec {
        id: RatioId::OperatingMargin,
        group: RatioGroup::Sales,
        name: Text::new("هامش التشغيل", "Operating Margin"),
        explain: Text::new("كفاءة النشاط.", "Operating efficiency."),
        formula: Text::new("EBIT ÷ المبيعات", "EBIT ÷ Sales"),
        format: ValueFormat::Percent,
        numerator: Operand::Ebit,
        denominator: Operand::Sales,
        interpreter: Interpreter::Margin(MarginFamily::Operating),
    },
    RatioSpec {
        id: RatioId::NetProfitMargin,
        group: RatioGroup::Profitability,
        name: Text::new("هامش صافي الربح", "Net Profit Margin"),
        explain: Text::new("نسبة الربح الصافي.", "Net profit ratio."),
        formula: Text::new("صافي الربح ÷ المبيعات", "Net Income ÷ Sales"),
        format: ValueFormat::Percent,
        numerator: Operand::NetIncome,
        denominator: Operand::Sales,
        interpreter: Interpreter::Margin(MarginFamily::Net),
    },
    RatioSpec {
        id: RatioId::ReturnOnEquity,
        group: RatioGroup::Profitability,
        name: Text::new("العائد على حقوق الملكية (ROE)", "Return on Equity (ROE)"),
        explain: Text::new("عائد الملاك.", "Return on shareholders' equity."),
        formula: Text::new("صافي الربح ÷ حقوق الملكية", "Net Income ÷ Equity"),
        format: ValueFormat::Percent,
        numerator: Operand::NetIncome,
        denominator: Operand::Equity,
        interpreter: Interpreter::HigherIsBetter,
    },
    RatioSpec {
        id: RatioId::ReturnOnAssets,
        group: RatioGroup::Profitability,
        name: Text::new("العائد على الأصول (ROA)", "Return on Assets (ROA)"),
        explain: Text::new(
            "يقيس كفاءة الأصول في توليد الأرباح.",
            "Efficiency of assets in generating profit.",
        ),
        formula: Text::new(
            "صافي الربح ÷ متوسط إجمالي الأصول",
            "Net Income ÷ Avg Total Assets",
        ),
        format: ValueFormat::Percent,
        numerator: Operand::NetIncome,
        denominator: Operand::AvgTotalAssets,
        interpreter: Interpreter::HigherIsBetter,
    },
    RatioSpec {
        id: RatioId::BasicEarningsPower,
        group: RatioGroup::Profitability,
        name: Text::new("مؤشر كفاءة الربح (BEP)", "Basic Earnings Power Ratio"),
        explain: Text::new(
            "يبين قدرة الأصول على توليد أرباح تشغيلية بغض النظر عن الضرائب والفوائد.",
            "Ability of assets to generate EBIT regardless of tax/interest.",
        ),
        formula: Text::new("EBIT ÷ إجمالي الأصول", "EBIT ÷ Total Assets"),
        format: ValueFormat::Percent,
        numerator: Operand::Ebit,
        denominator: Operand::TotalAssets,
        interpreter: Interpreter::HigherIsBetter,
    },
    RatioSpec {
        id: RatioId::CashConversion,
        group: RatioGroup::Profitability,
        name: Text::new("نسبة التحول النقدي", "Cash Conversion Ratio"),
        explain: Text::new(
            "يقارن صافي الربح بالتدفق النقدي التشغيلي.",
            "Compares net income with operating cash flow.",
        ),
        formula: Text::new(
            "التدفق النقدي التشغيلي ÷ صافي الربح",
            "CFO ÷ Net Income",
        ),
        format: ValueFormat::Plain,
        numerator: Operand::Cfo,
        denominator: Operand::NetIncome,
        interpreter: Interpreter::HigherIsBetter,
    },
    RatioSpec {
        id: RatioId::DebtToEquity,
        group: RatioGroup::Liabilities,
        name: Text::new("نسبة الدين إلى حقوق الملكية", "Debt to Equity Ratio (D/E)"),
        explain: Text::new(
            "يقيس اعتماد الشركة على الديون مقابل حقوق الملكية.",
            "Measures reliance on debt vs equity.",
        ),
        formula: Text::new("إجمالي الخصوم ÷ حقوق الملكية", "Total Liabilities ÷ Equity"),
        format: ValueFormat::Plain,
        numerator: Operand::TotalLiabilities,
        denominator: Operand::Equity,
        interpreter: Interpreter::DebtToEquity,
    },
    RatioSpec {
        id: RatioId::InterestCoverage,
        group: RatioGroup::Liabilities,
        name: Text::new("تغطية الفوائد", "Interest Coverage"),
        explain: Text::new(
            "يبين قدرة الأرباح التشغيلية على تغطية مصروف الفوائد.",
            "Ability of EBIT to cover interest expense.",
        ),
        formula: Text::new("EBIT ÷ مصروف الفوائد", "EBIT ÷ Interest Expense"),
        format: ValueFormat::Plain,
        numerator: Operand::Ebit,
        denominator: Operand::InterestExpense,
        interpreter: Interpreter::InterestCoverage,
    },
    RatioSpec {
        id: RatioId::InventoryTurnover,
        group: RatioGroup::Assets,
        name: Text::new("دوران المخزون", "Inventory Turnover Ratio"),
        explain: Text::new(
            "عدد مرات بيع وتجديد المخزون خلال الفترة.",
            "Times inventory is sold and replaced.",
        ),
        formula: Text::new("تكلفة المبيعات ÷ متوسط المخزون", "COGS ÷ Avg Inventory"),
        format: ValueFormat::Plain,
        numerator: Operand::Cogs,
        denominator: Operand::AvgInventory,
        interpreter: Interpreter::HigherIsBetter,
    },
    RatioSpec {
        id: RatioId::ReceivableTurnover,
        group: RatioGroup::Assets,
        name: Text::new("دوران الذمم المدينة", "Accounts Receivable Turnover"),
        explain: Text::new(
            "عدد مرات تحصيل الذمم خلال الفترة.",
            "Times receivables collected during period.",
        ),
        formula: Text::new(
            "المبيعات ÷ متوسط الذمم المدينة",
            "Sales ÷ Avg Accounts Receivable",
        ),
        format: ValueFormat::Plain,
        numerator: Operand::Sales,
        denominator: Operand::AvgReceivables,
        interpreter: Interpreter::HigherIsBetter,
    },
    RatioSpec {
        id: RatioId::FixedAssetTurnover,
        group: RatioGroup::Assets,
        name: Text::new("دوران الأصول الثابتة", "Fixed Assets Turnover Ratio"),
        explain: Text::new(
            "كفاءة الأصول الثابتة في توليد المبيعات.",
            "Efficiency of fixed assets in generating sales.",
        ),
        formula: Text::new("المبيعات ÷ الأصول الثابتة", "Sales ÷ Fixed Assets"),
        format: ValueFormat::Plain,
        numerator: Operand::Sales,
        denominator: Operand::FixedAssets,
        interpreter: Interpreter::HigherIsBetter,
    },
    RatioSpec {
        id: RatioId::EarningsPerShare,
        group: RatioGroup::Market,
        name: Text::new("ربحية السهم (EPS)", "Earnings per Share (EPS)"),
        explain: Text::new(
            "يبين نصيب السهم الواحد من صافي الربح.",
            "Shows net income per share.",
        ),
        formula: Text::new("صافي الربح ÷ عدد الأسهم", "Net Income ÷ Shares Outstanding"),
        format: ValueFormat::Plain,
        numerator: Operand::NetIncome,
        denominator: Operand::SharesOutstanding,
        interpreter: Interpreter::HigherIsBetter,
    },
    RatioSpec {
        id: RatioId::PayoutRatio,
        group: RatioGroup::Market,
        name: Text::new("نسبة التوزيعات", "Payout Ratio"),
        explain: Text::new(
            "يبين نسبة صافي الربح التي توزع كأرباح نقدية.",
            "Portion of net income paid as dividends.",
        ),
        formula: Text::new("الأرباح الموزعة ÷ صافي الربح", "Dividends ÷ Net Income"),
        format: ValueFormat::Percent,
        numerator: Operand::DividendsPaid,
        denominator: Operand::NetIncome,
        interpreter: Interpreter::PayoutBand,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<RatioId> = CATALOG.iter().map(|spec| spec.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_covers_every_id() {
        assert_eq!(CATALOG.len(), 18);
    }

    #[test]
    fn test_parse_round_trips_every_id() {
        for spec in CATALOG {
            assert_eq!(RatioId::parse(spec.id.as_str()).unwrap(), spec.id);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = RatioId::parse("acid_test").unwrap_err();
        assert!(matches!(err, FinRatiosError::UnknownRatio { .. }));
    }

    #[test]
    fn test_serde_name_matches_canonical_name() {
        for spec in CATALOG {
            let json = serde_json::to_value(spec.id).unwrap();
            assert_eq!(json, serde_json::Value::String(spec.id.as_str().to_string()));
        }
    }
}
