use tabled::{builder::Builder, Table};

use crate::commands::guide::GuideEntry;
use crate::Lang;

use super::{pick, pick_static, PeriodReport};

/// Render each period's ratio table with the tabled crate, followed by any
/// engine notes.
pub fn print_reports(reports: &[PeriodReport], lang: Lang) {
    for report in reports {
        if let Some(ref period) = report.period_end {
            println!("Period: {period}");
        }

        let mut builder = Builder::default();
        builder.push_record(headers(lang));
        for r in &report.report.result {
            builder.push_record([
                pick_static(r.group.label(), lang),
                pick(&r.name, lang),
                r.display.clone(),
                format!("{} = {}", pick(&r.equation.formula, lang), r.equation.substitution),
                pick(&r.interpretation, lang),
            ]);
        }
        let table = Table::from(builder);
        println!("{}", table);

        if !report.report.warnings.is_empty() {
            println!("\nNotes:");
            for w in &report.report.warnings {
                println!("  - {}", w);
            }
        }
        println!();
    }
}

/// Render the guide entries as a table.
pub fn print_guide(entries: &[GuideEntry], lang: Lang) {
    let mut builder = Builder::default();
    builder.push_record(guide_headers(lang));
    for entry in entries {
        builder.push_record([
            entry.id.clone(),
            pick(&entry.name, lang),
            pick(&entry.simplified, lang),
            pick(&entry.improvement, lang),
        ]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn headers(lang: Lang) -> [String; 5] {
    match lang {
        Lang::Ar => ["المجموعة", "النسبة", "القيمة", "المعادلة", "التفسير"].map(String::from),
        _ => ["Group", "Ratio", "Value", "Equation", "Interpretation"].map(String::from),
    }
}

fn guide_headers(lang: Lang) -> [String; 4] {
    match lang {
        Lang::Ar => ["المعرف", "النسبة", "تبسيط", "تحسين مقترح"].map(String::from),
        _ => ["Id", "Ratio", "Simplified view", "Improvement"].map(String::from),
    }
}
