//! One pass over the catalog turns a statement into the ratio table.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::arith::safe_div_opt;
use crate::format::format_ratio;
use crate::statements::{BalanceAverages, DerivedFigures, StatementInput};
use crate::types::{
    with_metadata, BilingualText, ComputationOutput, RatioGroup, RatioValue,
};

use super::catalog::{RatioId, CATALOG};

/// Prepared figures a single engine pass reads from: the raw statement plus
/// the derived and averaged values shared by multiple ratios.
#[derive(Debug, Clone)]
pub(crate) struct Figures<'a> {
    pub(crate) input: &'a StatementInput,
    pub(crate) derived: DerivedFigures,
    pub(crate) averages: BalanceAverages,
}

impl<'a> Figures<'a> {
    fn prepare(input: &'a StatementInput) -> Self {
        Self {
            derived: DerivedFigures::from_statement(input),
            averages: BalanceAverages::from_statement(input),
            input,
        }
    }
}

/// A ratio's equation: the symbolic formula per language, and the shared
/// substituted-numbers line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub formula: BilingualText,
    pub substitution: String,
}

/// One computed ratio: value, rendered display, equation, interpretation.
/// Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioResult {
    pub id: RatioId,
    pub group: RatioGroup,
    pub name: BilingualText,
    pub value: RatioValue,
    pub display: String,
    pub equation: Equation,
    pub explain: BilingualText,
    pub interpretation: BilingualText,
}

/// Compute every cataloged ratio for one period, in catalog order.
///
/// Pure: same input, same output, including ordering. Each ratio is
/// computed independently; an undefined denominator degrades that single
/// result to the undefined sentinel and never suppresses the others.
pub fn compute_ratios(input: &StatementInput) -> Vec<RatioResult> {
    let figures = Figures::prepare(input);

    CATALOG
        .iter()
        .map(|spec| {
            let value = safe_div_opt(
                spec.numerator.value(&figures),
                spec.denominator.value(&figures),
            );
            RatioResult {
                id: spec.id,
                group: spec.group,
                name: spec.name.into(),
                display: format_ratio(value, spec.format),
                equation: Equation {
                    formula: spec.formula.into(),
                    substitution: format!(
                        "{} ÷ {}",
                        spec.numerator.substitution(&figures),
                        spec.denominator.substitution(&figures)
                    ),
                },
                explain: spec.explain.into(),
                interpretation: spec.interpreter.interpret(value),
                value,
            }
        })
        .collect()
}

/// Compute the ratio table and wrap it in the standard envelope, with
/// non-fatal notes about derived or missing figures.
pub fn analyze(input: &StatementInput) -> ComputationOutput<Vec<RatioResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let derived = DerivedFigures::from_statement(input);
    if derived.net_income_derived {
        warnings.push(format!(
            "Net income not supplied; derived as EBIT − interest − tax = {}.",
            derived.net_income
        ));
    }

    let no_priors = input.prev_total_assets.is_none()
        && input.prev_inventory.is_none()
        && input.prev_accounts_receivable.is_none()
        && input.prev_accounts_payable.is_none();
    if no_priors {
        warnings.push(
            "No prior-period balances supplied; turnover ratios use point-in-time figures."
                .into(),
        );
    }
    if input.shares_outstanding.is_none() {
        warnings.push("Shares outstanding not supplied; EPS reported as undefined.".into());
    }
    if input.dividends_paid.is_none() {
        warnings.push("Dividends paid not supplied; payout ratio reported as undefined.".into());
    }

    let results = compute_ratios(input);
    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(warnings, elapsed, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample_statement() -> StatementInput {
        StatementInput {
            sales: dec!(1_000_000),
            cogs: dec!(700_000),
            opex: dec!(200_000),
            interest_expense: dec!(50_000),
            tax_expense: dec!(10_000),
            current_assets: dec!(500_000),
            inventory: dec!(100_000),
            cash: dec!(80_000),
            accounts_receivable: dec!(120_000),
            accounts_payable: dec!(90_000),
            current_liabilities: dec!(250_000),
            total_assets: dec!(1_200_000),
            total_liabilities: dec!(500_000),
            equity: dec!(700_000),
            cfo: dec!(60_000),
            ..StatementInput::default()
        }
    }

    fn ratio(results: &[RatioResult], id: RatioId) -> RatioResult {
        results
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .unwrap_or_else(|| panic!("missing {id}"))
    }

    #[test]
    fn test_one_result_per_catalog_row_in_order() {
        let results = compute_ratios(&sample_statement());
        assert_eq!(results.len(), CATALOG.len());
        for (result, spec) in results.iter().zip(CATALOG) {
            assert_eq!(result.id, spec.id);
        }
    }

    #[test]
    fn test_idempotence() {
        let fi = sample_statement();
        assert_eq!(compute_ratios(&fi), compute_ratios(&fi));
    }

    #[test]
    fn test_current_ratio_value_and_display() {
        let results = compute_ratios(&sample_statement());
        let r = ratio(&results, RatioId::CurrentRatio);
        assert_eq!(r.value, RatioValue::Defined(dec!(2)));
        assert_eq!(r.display, "2.00");
        assert_eq!(r.interpretation.en, "Acceptable (1–2).");
    }

    #[test]
    fn test_substitution_carries_the_numbers() {
        let results = compute_ratios(&sample_statement());
        let r = ratio(&results, RatioId::CurrentRatio);
        assert_eq!(r.equation.substitution, "500,000.00 ÷ 250,000.00");
        let q = ratio(&results, RatioId::QuickRatio);
        assert_eq!(
            q.equation.substitution,
            "(500,000.00 − 100,000.00) ÷ 250,000.00"
        );
    }

    #[test]
    fn test_derived_net_income_flows_into_margins() {
        // EBIT = 100k, derived NI = 40k, margin = 4%
        let results = compute_ratios(&sample_statement());
        let r = ratio(&results, RatioId::NetProfitMargin);
        assert_eq!(r.value, RatioValue::Defined(dec!(0.04)));
        assert_eq!(r.display, "4.00%");
        assert_eq!(r.interpretation.en, "Net margin weak (<5%).");
    }

    #[test]
    fn test_zero_equity_undefines_only_equity_ratios() {
        let mut fi = sample_statement();
        fi.equity = Decimal::ZERO;
        let results = compute_ratios(&fi);

        assert_eq!(ratio(&results, RatioId::ReturnOnEquity).value, RatioValue::Undefined);
        assert_eq!(ratio(&results, RatioId::DebtToEquity).value, RatioValue::Undefined);
        assert_eq!(ratio(&results, RatioId::DebtToEquity).display, "—");

        // Debt ratio divides by total assets and is unaffected
        let debt = ratio(&results, RatioId::DebtRatio);
        assert_eq!(debt.value, RatioValue::Defined(dec!(500_000) / dec!(1_200_000)));
    }

    #[test]
    fn test_missing_market_inputs_are_undefined_not_fabricated() {
        let results = compute_ratios(&sample_statement());
        assert_eq!(ratio(&results, RatioId::EarningsPerShare).value, RatioValue::Undefined);
        assert_eq!(ratio(&results, RatioId::PayoutRatio).value, RatioValue::Undefined);
        assert_eq!(ratio(&results, RatioId::PayoutRatio).display, "—");
    }

    #[test]
    fn test_market_inputs_feed_eps_and_payout() {
        let mut fi = sample_statement();
        fi.shares_outstanding = Some(dec!(10_000));
        fi.dividends_paid = Some(dec!(20_000));
        let results = compute_ratios(&fi);

        // derived NI = 40k
        assert_eq!(
            ratio(&results, RatioId::EarningsPerShare).value,
            RatioValue::Defined(dec!(4))
        );
        let payout = ratio(&results, RatioId::PayoutRatio);
        assert_eq!(payout.value, RatioValue::Defined(dec!(0.5)));
        assert_eq!(payout.display, "50.00%");
    }

    #[test]
    fn test_prior_balances_average_into_turnover() {
        let mut fi = sample_statement();
        fi.prev_inventory = Some(dec!(300_000));
        let results = compute_ratios(&fi);
        // avg inventory = (100k + 300k) / 2 = 200k; COGS 700k / 200k = 3.5
        assert_eq!(
            ratio(&results, RatioId::InventoryTurnover).value,
            RatioValue::Defined(dec!(3.5))
        );
    }

    #[test]
    fn test_analyze_warns_about_derived_and_missing_figures() {
        let report = analyze(&sample_statement());
        assert!(report.warnings.iter().any(|w| w.contains("Net income")));
        assert!(report.warnings.iter().any(|w| w.contains("prior-period")));
        assert!(report.warnings.iter().any(|w| w.contains("Shares")));
        assert_eq!(report.result.len(), CATALOG.len());
        assert_eq!(report.metadata.precision, "rust_decimal_128bit");
    }

    #[test]
    fn test_analyze_is_quiet_when_figures_are_complete() {
        let mut fi = sample_statement();
        fi.net_income = Some(dec!(40_000));
        fi.prev_total_assets = Some(dec!(1_100_000));
        fi.shares_outstanding = Some(dec!(10_000));
        fi.dividends_paid = Some(dec!(20_000));
        let report = analyze(&fi);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let results = compute_ratios(&sample_statement());
        let json = serde_json::to_string(&results).unwrap();
        let back: Vec<RatioResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(results, back);
    }
}
