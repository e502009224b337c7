use clap::Args;
use rust_decimal::Decimal;

use fin_ratios_core::{analyze, FinRatiosError, StatementInput};

use crate::input;
use crate::output::{self, PeriodReport};
use crate::{Lang, OutputFormat};

/// Arguments for the ratios command
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RatiosArgs {
    /// Path to a JSON or YAML input file holding one period object or an
    /// array of periods (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Sales revenue
    #[arg(long)]
    pub sales: Option<Decimal>,

    /// Cost of goods sold
    #[arg(long)]
    pub cogs: Option<Decimal>,

    /// Operating expenses
    #[arg(long)]
    pub opex: Option<Decimal>,

    /// Interest expense
    #[arg(long)]
    pub interest_expense: Option<Decimal>,

    /// Tax expense
    #[arg(long)]
    pub tax_expense: Option<Decimal>,

    /// Net income (derived from EBIT, interest, and tax when omitted)
    #[arg(long)]
    pub net_income: Option<Decimal>,

    /// Current assets
    #[arg(long)]
    pub current_assets: Option<Decimal>,

    /// Inventory
    #[arg(long)]
    pub inventory: Option<Decimal>,

    /// Cash and cash equivalents
    #[arg(long)]
    pub cash: Option<Decimal>,

    /// Accounts receivable
    #[arg(long)]
    pub accounts_receivable: Option<Decimal>,

    /// Accounts payable
    #[arg(long)]
    pub accounts_payable: Option<Decimal>,

    /// Current liabilities
    #[arg(long)]
    pub current_liabilities: Option<Decimal>,

    /// Total assets
    #[arg(long)]
    pub total_assets: Option<Decimal>,

    /// Total liabilities
    #[arg(long)]
    pub total_liabilities: Option<Decimal>,

    /// Owners' equity
    #[arg(long)]
    pub equity: Option<Decimal>,

    /// Prior-period total assets (enables two-point averaging)
    #[arg(long)]
    pub prev_total_assets: Option<Decimal>,

    /// Prior-period inventory
    #[arg(long)]
    pub prev_inventory: Option<Decimal>,

    /// Prior-period accounts receivable
    #[arg(long)]
    pub prev_accounts_receivable: Option<Decimal>,

    /// Prior-period accounts payable
    #[arg(long)]
    pub prev_accounts_payable: Option<Decimal>,

    /// Cash flow from operations
    #[arg(long)]
    pub cfo: Option<Decimal>,

    /// Shares outstanding (EPS reports undefined when omitted)
    #[arg(long)]
    pub shares_outstanding: Option<Decimal>,

    /// Dividends paid (payout ratio reports undefined when omitted)
    #[arg(long)]
    pub dividends_paid: Option<Decimal>,
}

pub fn run(
    args: RatiosArgs,
    format: OutputFormat,
    lang: Lang,
) -> Result<(), Box<dyn std::error::Error>> {
    let periods: Vec<StatementInput> = if let Some(ref path) = args.input {
        input::file::read_periods(path)?
    } else if let Some(piped) = input::stdin::read_stdin()? {
        input::periods_from_value(piped)?
    } else {
        vec![statement_from_flags(&args)?]
    };

    let reports: Vec<PeriodReport> = periods
        .iter()
        .map(|fi| PeriodReport {
            period_end: fi.period_end.map(|d| d.to_string()),
            report: analyze(fi),
        })
        .collect();

    match format {
        OutputFormat::Json => output::json::print_reports(&reports)?,
        OutputFormat::Table => output::table::print_reports(&reports, lang),
        OutputFormat::Csv => output::csv_out::print_reports(&reports, lang)?,
        OutputFormat::Minimal => output::minimal::print_reports(&reports),
    }
    Ok(())
}

fn statement_from_flags(args: &RatiosArgs) -> Result<StatementInput, FinRatiosError> {
    let supplied = [
        args.sales,
        args.cogs,
        args.opex,
        args.interest_expense,
        args.tax_expense,
        args.net_income,
        args.current_assets,
        args.inventory,
        args.cash,
        args.accounts_receivable,
        args.accounts_payable,
        args.current_liabilities,
        args.total_assets,
        args.total_liabilities,
        args.equity,
        args.prev_total_assets,
        args.prev_inventory,
        args.prev_accounts_receivable,
        args.prev_accounts_payable,
        args.cfo,
        args.shares_outstanding,
        args.dividends_paid,
    ];
    if supplied.iter().all(Option::is_none) {
        return Err(FinRatiosError::InvalidInput {
            field: "input".into(),
            reason: "provide --input, piped JSON on stdin, or at least one figure flag".into(),
        });
    }

    Ok(StatementInput {
        sales: args.sales.unwrap_or_default(),
        cogs: args.cogs.unwrap_or_default(),
        opex: args.opex.unwrap_or_default(),
        interest_expense: args.interest_expense.unwrap_or_default(),
        tax_expense: args.tax_expense.unwrap_or_default(),
        net_income: args.net_income,
        current_assets: args.current_assets.unwrap_or_default(),
        inventory: args.inventory.unwrap_or_default(),
        cash: args.cash.unwrap_or_default(),
        accounts_receivable: args.accounts_receivable.unwrap_or_default(),
        accounts_payable: args.accounts_payable.unwrap_or_default(),
        current_liabilities: args.current_liabilities.unwrap_or_default(),
        total_assets: args.total_assets.unwrap_or_default(),
        total_liabilities: args.total_liabilities.unwrap_or_default(),
        equity: args.equity.unwrap_or_default(),
        prev_total_assets: args.prev_total_assets,
        prev_inventory: args.prev_inventory,
        prev_accounts_receivable: args.prev_accounts_receivable,
        prev_accounts_payable: args.prev_accounts_payable,
        cfo: args.cfo.unwrap_or_default(),
        shares_outstanding: args.shares_outstanding,
        dividends_paid: args.dividends_paid,
        period_end: None,
    })
}
