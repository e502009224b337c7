use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Ratio engine
// ---------------------------------------------------------------------------

/// Compute the full ratio catalog for one period, returning the standard
/// envelope (results, warnings, metadata) as JSON.
#[napi]
pub fn analyze_statement(input_json: String) -> NapiResult<String> {
    let input =
        fin_ratios_core::StatementInput::from_json_str(&input_json).map_err(to_napi_error)?;
    let output = fin_ratios_core::analyze(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Compute the bare ratio results without the envelope.
#[napi]
pub fn compute_ratio_table(input_json: String) -> NapiResult<String> {
    let input =
        fin_ratios_core::StatementInput::from_json_str(&input_json).map_err(to_napi_error)?;
    let results = fin_ratios_core::compute_ratios(&input);
    serde_json::to_string(&results).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Catalog metadata
// ---------------------------------------------------------------------------

/// The static catalog (ids, groups, bilingual names and formulas) for
/// presentation-side joins.
#[napi]
pub fn ratio_catalog() -> NapiResult<String> {
    let catalog: Vec<serde_json::Value> = fin_ratios_core::CATALOG
        .iter()
        .map(|spec| {
            serde_json::json!({
                "id": spec.id.as_str(),
                "group": spec.group,
                "name": { "ar": spec.name.ar, "en": spec.name.en },
                "formula": { "ar": spec.formula.ar, "en": spec.formula.en },
                "explain": { "ar": spec.explain.ar, "en": spec.explain.en },
            })
        })
        .collect();
    serde_json::to_string(&catalog).map_err(to_napi_error)
}
