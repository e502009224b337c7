use super::PeriodReport;

/// One line per ratio: canonical id and rendered value.
pub fn print_reports(reports: &[PeriodReport]) {
    for report in reports {
        if let Some(ref period) = report.period_end {
            println!("# {period}");
        }
        for r in &report.report.result {
            println!("{} {}", r.id, r.display);
        }
    }
}
