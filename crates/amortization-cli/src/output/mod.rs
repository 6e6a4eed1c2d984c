pub mod csv_out;
pub mod minimal;
pub mod table;
pub mod text;

use crate::OutputFormat;
use serde_json::Value;

/// Schedule columns in display order: (JSON key, header).
pub const SCHEDULE_COLUMNS: [(&str, &str); 6] = [
    ("payment_number", "Payment #"),
    ("balance", "Balance"),
    ("payment", "Payment"),
    ("interest", "Interest"),
    ("total_payments", "Total Payments"),
    ("total_interest", "Total Interest"),
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("JSON serialization error: {}", e),
        },
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `schedule` array of a schedule envelope, if present.
pub(crate) fn schedule_rows(value: &Value) -> Option<&Vec<Value>> {
    value.get("result")?.get("schedule")?.as_array()
}

/// The headline figures: `result.summary` for schedules, `result` otherwise.
pub(crate) fn summary_fields(value: &Value) -> Option<&serde_json::Map<String, Value>> {
    let result = value.get("result")?;
    result.get("summary").unwrap_or(result).as_object()
}

pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// One schedule line as cells in [`SCHEDULE_COLUMNS`] order.
pub(crate) fn schedule_cells(row: &Value) -> Vec<String> {
    SCHEDULE_COLUMNS
        .iter()
        .map(|(key, _)| row.get(*key).map(format_value).unwrap_or_default())
        .collect()
}
