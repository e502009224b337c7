pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use serde::Serialize;

use fin_ratios_core::{BilingualText, ComputationOutput, RatioResult, Text};

use crate::Lang;

/// One period's analyzed ratio table, labeled when the statement carried a
/// period-end date.
#[derive(Serialize)]
pub struct PeriodReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,
    #[serde(flatten)]
    pub report: ComputationOutput<Vec<RatioResult>>,
}

/// Select the rendering of an owned bilingual text for the chosen language.
pub(crate) fn pick(text: &BilingualText, lang: Lang) -> String {
    match lang {
        Lang::En => text.en.clone(),
        Lang::Ar => text.ar.clone(),
        Lang::Both => format!("{} | {}", text.en, text.ar),
    }
}

/// As [`pick`], for static resource text.
pub(crate) fn pick_static(text: Text, lang: Lang) -> String {
    match lang {
        Lang::En => text.en.to_string(),
        Lang::Ar => text.ar.to_string(),
        Lang::Both => format!("{} | {}", text.en, text.ar),
    }
}
