use std::io;

use amortization_core::{to_major_units, ScheduleRow, TotalUnits};

use crate::console::Console;

const COLUMN_WIDTH: usize = 20;

const HEADERS: [&str; 6] = [
    "PaymentNumber",
    "CurrentBalance",
    "PaymentAmount",
    "PaymentInterest",
    "TotalPayments",
    "TotalInterestPaid",
];

fn money(minor: impl Into<TotalUnits>) -> String {
    to_major_units(minor).to_string()
}

fn line(cells: [String; 6]) -> String {
    let mut out = String::with_capacity(COLUMN_WIDTH * cells.len() + 1);
    for cell in &cells {
        out.push_str(&format!("{:<width$}", cell, width = COLUMN_WIDTH));
    }
    out.push('\n');
    out
}

pub fn header_line() -> String {
    line(HEADERS.map(String::from))
}

pub fn row_line(row: &ScheduleRow) -> String {
    line([
        row.payment_number.to_string(),
        money(row.balance),
        money(row.payment_amount),
        money(row.interest_portion),
        money(row.cumulative_payments),
        money(row.cumulative_interest),
    ])
}

/// Stream a schedule to the console, one fixed-width line per period.
pub fn write_schedule(
    console: &mut dyn Console,
    rows: impl IntoIterator<Item = ScheduleRow>,
) -> io::Result<()> {
    console.print(&header_line())?;
    for row in rows {
        console.print(&row_line(&row))?;
    }
    console.flush()
}
