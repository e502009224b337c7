//! Bilingual financial-statement ratio analysis.
//!
//! [`compute_ratios`] maps one reporting period's statement figures to a
//! fixed catalog of liquidity, leverage, profitability, efficiency, and
//! market ratios, each carrying a rendered value, an equation with the
//! substituted numbers, and a qualitative interpretation in Arabic and
//! English. [`analyze`] wraps the same results in the standard computation
//! envelope with non-fatal notes.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

pub mod analysis;
pub mod arith;
pub mod error;
pub mod format;
pub mod statements;
pub mod types;

pub use analysis::catalog::{Operand, RatioId, RatioSpec, CATALOG};
pub use analysis::engine::{analyze, compute_ratios, Equation, RatioResult};
pub use analysis::interpret::{Interpreter, MarginFamily};
pub use arith::{safe_div, safe_div_opt, two_point_average};
pub use error::FinRatiosError;
pub use format::{format_ratio, UNDEFINED_PLACEHOLDER};
pub use statements::{BalanceAverages, DerivedFigures, StatementInput};
pub use types::*;

/// Standard result type for fallible fin-ratios operations.
pub type FinRatiosResult<T> = Result<T, FinRatiosError>;
