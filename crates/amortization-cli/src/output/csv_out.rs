use serde_json::Value;
use std::io;

use super::{format_value, schedule_cells, schedule_rows, summary_fields, SCHEDULE_COLUMNS};

/// Write output as CSV to stdout.
///
/// Schedules are written one line per period; summaries as field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_csv<W: io::Write>(writer: W, value: &Value) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    if let Some(rows) = schedule_rows(value) {
        wtr.write_record(SCHEDULE_COLUMNS.iter().map(|(key, _)| *key))?;
        for row in rows {
            wtr.write_record(schedule_cells(row))?;
        }
    } else if let Some(summary) = summary_fields(value) {
        wtr.write_record(["field", "value"])?;
        for (key, val) in summary {
            wtr.write_record([key.as_str(), &format_value(val)])?;
        }
    } else {
        wtr.write_record([&format_value(value)])?;
    }

    wtr.flush()?;
    Ok(())
}
