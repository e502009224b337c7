use clap::Args;
use serde::Serialize;

use fin_ratios_core::{BilingualText, RatioGroup, RatioId, CATALOG};

use crate::output;
use crate::text;
use crate::{Lang, OutputFormat};

/// Arguments for the guide command
#[derive(Args)]
pub struct GuideArgs {
    /// Canonical ratio id (e.g. current_ratio); omit to list the whole catalog
    pub ratio: Option<String>,
}

/// One catalog entry joined with its static companion text.
#[derive(Serialize)]
pub struct GuideEntry {
    pub id: String,
    pub group: RatioGroup,
    pub name: BilingualText,
    pub simplified: BilingualText,
    pub improvement: BilingualText,
}

pub fn run(
    args: GuideArgs,
    format: OutputFormat,
    lang: Lang,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match args.ratio {
        Some(ref name) => Some(RatioId::parse(name)?),
        None => None,
    };

    let entries: Vec<GuideEntry> = CATALOG
        .iter()
        .filter(|spec| filter.map_or(true, |id| spec.id == id))
        .map(|spec| GuideEntry {
            id: spec.id.as_str().to_string(),
            group: spec.group,
            name: spec.name.into(),
            simplified: text::simplified_view(spec.id).into(),
            improvement: text::improvement(spec.id).into(),
        })
        .collect();

    match format {
        OutputFormat::Json => output::json::print(&entries)?,
        OutputFormat::Table => output::table::print_guide(&entries, lang),
        OutputFormat::Csv => output::csv_out::print_guide(&entries, lang)?,
        OutputFormat::Minimal => {
            for entry in &entries {
                println!("{}", entry.id);
            }
        }
    }
    Ok(())
}
