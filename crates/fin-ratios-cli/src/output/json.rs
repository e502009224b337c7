use serde::Serialize;

use super::PeriodReport;

/// Pretty-print any serializable payload to stdout.
pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A single period prints as an object, multiple periods as an array.
pub fn print_reports(reports: &[PeriodReport]) -> Result<(), Box<dyn std::error::Error>> {
    match reports {
        [single] => print(single),
        many => print(many),
    }
}
