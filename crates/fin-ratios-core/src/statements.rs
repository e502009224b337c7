//! Per-period financial statement snapshot and the figures derived from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::arith::two_point_average;
use crate::types::Money;
use crate::FinRatiosResult;

/// One reporting period's financial statement figures.
///
/// Required figures default to zero when missing from serialized input;
/// optional figures stay `None`. Negative values (a net loss, negative
/// equity) are legal and propagate through every downstream ratio. The
/// engine never mutates the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementInput {
    // Income statement
    pub sales: Money,
    pub cogs: Money,
    pub opex: Money,
    pub interest_expense: Money,
    pub tax_expense: Money,
    /// Supplied value wins over the derived figure unconditionally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_income: Option<Money>,

    // Balance sheet, current period
    pub current_assets: Money,
    pub inventory: Money,
    pub cash: Money,
    pub accounts_receivable: Money,
    pub accounts_payable: Money,
    pub current_liabilities: Money,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub equity: Money,

    // Balance sheet, prior period. Used only for two-point averages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_total_assets: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_inventory: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_accounts_receivable: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_accounts_payable: Option<Money>,

    /// Cash flow from operations.
    pub cfo: Money,

    // Market inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_outstanding: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividends_paid: Option<Money>,

    /// Label only; never used in arithmetic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<NaiveDate>,
}

impl StatementInput {
    /// Deserialize a single period from JSON text.
    pub fn from_json_str(s: &str) -> FinRatiosResult<Self> {
        serde_json::from_str(s).map_err(Into::into)
    }
}

/// Intermediate accounting figures shared by several ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFigures {
    pub ebit: Money,
    pub net_income: Money,
    /// True when net income was not supplied and fell back to
    /// EBIT − interest − tax.
    pub net_income_derived: bool,
}

impl DerivedFigures {
    pub fn from_statement(fi: &StatementInput) -> Self {
        let ebit = fi.sales - fi.cogs - fi.opex;
        let (net_income, net_income_derived) = match fi.net_income {
            Some(ni) => (ni, false),
            None => (ebit - fi.interest_expense - fi.tax_expense, true),
        };
        Self {
            ebit,
            net_income,
            net_income_derived,
        }
    }
}

/// Two-point averages for the balance-sheet items turnover ratios smooth
/// over. The policy is uniform across all four items: a missing or zero
/// prior leaves the current-period figure standing alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceAverages {
    pub total_assets: Money,
    pub inventory: Money,
    pub accounts_receivable: Money,
    pub accounts_payable: Money,
}

impl BalanceAverages {
    pub fn from_statement(fi: &StatementInput) -> Self {
        Self {
            total_assets: two_point_average(fi.total_assets, fi.prev_total_assets),
            inventory: two_point_average(fi.inventory, fi.prev_inventory),
            accounts_receivable: two_point_average(
                fi.accounts_receivable,
                fi.prev_accounts_receivable,
            ),
            accounts_payable: two_point_average(fi.accounts_payable, fi.prev_accounts_payable),
        }
    }
}
