use std::io;

use crate::commands::guide::GuideEntry;
use crate::Lang;

use super::{pick, pick_static, PeriodReport};

/// Write one CSV row per ratio per period.
pub fn print_reports(
    reports: &[PeriodReport],
    lang: Lang,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    wtr.write_record([
        "period_end",
        "id",
        "group",
        "name",
        "value",
        "display",
        "interpretation",
    ])?;

    for report in reports {
        let period = report.period_end.clone().unwrap_or_default();
        for r in &report.report.result {
            wtr.write_record(&[
                period.clone(),
                r.id.to_string(),
                pick_static(r.group.label(), lang),
                pick(&r.name, lang),
                r.value
                    .as_decimal()
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                r.display.clone(),
                pick(&r.interpretation, lang),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Write the guide entries as CSV.
pub fn print_guide(entries: &[GuideEntry], lang: Lang) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    wtr.write_record(["id", "name", "simplified", "improvement"])?;
    for entry in entries {
        wtr.write_record(&[
            entry.id.clone(),
            pick(&entry.name, lang),
            pick(&entry.simplified, lang),
            pick(&entry.improvement, lang),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
