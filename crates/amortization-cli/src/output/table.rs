use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, schedule_cells, schedule_rows, summary_fields, SCHEDULE_COLUMNS};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    if let Some(summary) = summary_fields(value) {
        println!("{}", field_table(summary));
    } else {
        println!("{}", value);
        return;
    }

    if let Some(rows) = schedule_rows(value) {
        println!();
        println!("{}", schedule_table(rows));
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn field_table(map: &serde_json::Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    builder.build()
}

fn schedule_table(rows: &[Value]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(SCHEDULE_COLUMNS.iter().map(|(_, header)| *header));
    for row in rows {
        builder.push_record(schedule_cells(row));
    }
    builder.build()
}
