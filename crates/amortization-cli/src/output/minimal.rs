use serde_json::Value;

use super::{format_value, summary_fields};

/// Print just the monthly payment, or the first headline figure if absent.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let Some(summary) = summary_fields(value) else {
        return format_value(value);
    };

    if let Some(payment) = summary.get("monthly_payment").filter(|v| !v.is_null()) {
        return format_value(payment);
    }

    match summary.iter().next() {
        Some((key, val)) => format!("{}: {}", key, format_value(val)),
        None => format_value(value),
    }
}
