use std::fmt::Display;
use std::io;
use std::str::FromStr;

use amortization_core::validation::{
    is_valid_principal, is_valid_rate, is_valid_term_years, ValueRange, PRINCIPAL_RANGE,
    RATE_RANGE, TERM_YEARS_RANGE,
};
use amortization_core::LoanInput;

use crate::console::Console;

pub const PRINCIPAL_PROMPT: &str = "Please enter the amount you would like to borrow: ";
pub const RATE_PROMPT: &str = "Please enter the annual percentage rate used to repay the loan: ";
pub const TERM_PROMPT: &str = "Please enter the term, in years, over which the loan is repaid: ";

pub const INVALID_VALUE: &str = "An invalid value was entered.\n";

fn range_hint<T: Display>(kind: &str, range: ValueRange<T>) -> String {
    format!(
        "Please enter a positive {kind}between {} and {}. ",
        range.min, range.max
    )
}

/// Re-prompt until a line parses as `T` and passes `accept`.
fn ask<T: FromStr + Copy>(
    console: &mut dyn Console,
    prompt: &str,
    accept: fn(T) -> bool,
    hint: &str,
) -> io::Result<T> {
    loop {
        let line = console.read_line(prompt)?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all loan terms were entered",
            )
        })?;

        match line.parse::<T>() {
            Ok(value) if accept(value) => return Ok(value),
            Ok(_) => console.print(hint)?,
            Err(_) => {}
        }
        console.print(INVALID_VALUE)?;
    }
}

/// Collect principal, rate and term, in that order, from the console.
pub fn collect_loan_input(console: &mut dyn Console) -> io::Result<LoanInput> {
    let principal = ask(
        console,
        PRINCIPAL_PROMPT,
        is_valid_principal,
        &range_hint("value ", PRINCIPAL_RANGE),
    )?;
    let annual_rate = ask(
        console,
        RATE_PROMPT,
        is_valid_rate,
        &range_hint("value ", RATE_RANGE),
    )?;
    let term_years = ask(
        console,
        TERM_PROMPT,
        is_valid_term_years,
        &range_hint("integer value ", TERM_YEARS_RANGE),
    )?;

    Ok(LoanInput {
        principal,
        annual_rate,
        term_years,
    })
}
