pub mod file;
pub mod stdin;

use fin_ratios_core::{FinRatiosResult, StatementInput};
use serde_json::Value;

/// Interpret a parsed document as one period or an array of periods.
pub fn periods_from_value(value: Value) -> FinRatiosResult<Vec<StatementInput>> {
    let periods = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(periods)
}
