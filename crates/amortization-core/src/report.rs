use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::engine::AmortizationEngine;
use crate::schedule::ScheduleRow;
use crate::terms::LoanInput;
use crate::types::*;
use crate::AmortizationResult;

/// A schedule row expressed in major currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleLine {
    pub payment_number: u32,
    pub balance: Money,
    pub payment: Money,
    pub interest: Money,
    pub total_payments: Money,
    pub total_interest: Money,
}

impl From<&ScheduleRow> for ScheduleLine {
    fn from(row: &ScheduleRow) -> Self {
        ScheduleLine {
            payment_number: row.payment_number,
            balance: to_major_units(row.balance),
            payment: to_major_units(row.payment_amount),
            interest: to_major_units(row.interest_portion),
            total_payments: to_major_units(row.cumulative_payments),
            total_interest: to_major_units(row.cumulative_interest),
        }
    }
}

/// Headline figures of a loan, computed without materialising the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub monthly_payment: Money,
    pub term_months: u32,
    pub number_of_payments: u32,
    pub final_payment: Money,
    pub total_payments: Money,
    pub total_interest: Money,
}

/// Full amortization schedule with its summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub summary: ScheduleSummary,
    pub schedule: Vec<ScheduleLine>,
}

/// Running state while folding over a schedule.
#[derive(Default)]
struct Tally {
    first_interest: MinorUnits,
    last: Option<ScheduleRow>,
}

impl Tally {
    fn observe(&mut self, row: &ScheduleRow) {
        if row.payment_number == 1 {
            self.first_interest = row.interest_portion;
        }
        self.last = Some(*row);
    }

    fn summary(&self, engine: &AmortizationEngine) -> ScheduleSummary {
        let last = self.last.unwrap_or(ScheduleRow {
            payment_number: 0,
            balance: engine.terms().principal(),
            payment_amount: 0,
            interest_portion: 0,
            cumulative_payments: 0,
            cumulative_interest: 0,
        });
        ScheduleSummary {
            monthly_payment: to_major_units(engine.monthly_payment()),
            term_months: engine.terms().term_months(),
            number_of_payments: last.payment_number,
            final_payment: to_major_units(last.payment_amount),
            total_payments: to_major_units(last.cumulative_payments),
            total_interest: to_major_units(last.cumulative_interest),
        }
    }

    fn warnings(&self, engine: &AmortizationEngine) -> Vec<String> {
        let mut warnings = Vec::new();
        let payment = engine.monthly_payment();
        let term_months = engine.terms().term_months();

        if payment == 0 {
            warnings.push(
                "Monthly payment rounds to zero; the balance is settled by a single final payment"
                    .into(),
            );
        } else if payment == self.first_interest {
            warnings.push(
                "Monthly payment covers interest only; principal is repaid in the final period"
                    .into(),
            );
        }

        if let Some(last) = self.last {
            if last.payment_number > term_months {
                warnings.push(format!(
                    "Rounding residue extended the schedule to {} payments against a {term_months}-month term",
                    last.payment_number
                ));
            }
        }
        warnings
    }
}

fn assumptions(input: &LoanInput, engine: &AmortizationEngine) -> serde_json::Value {
    serde_json::json!({
        "principal": to_major_units(engine.terms().principal()).to_string(),
        "annual_rate_pct": input.annual_rate,
        "monthly_rate": engine.monthly_rate(),
        "term_years": input.term_years,
        "term_months": engine.terms().term_months(),
    })
}

/// Build the full period-by-period schedule.
///
/// Materialises every row; terms near the upper bound produce millions of
/// rows, so prefer [`summarize`] or iterate [`AmortizationEngine::schedule`]
/// directly when only totals are needed.
pub fn build_schedule(input: &LoanInput) -> AmortizationResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let engine = AmortizationEngine::from_raw(input.principal, input.annual_rate, input.term_years)?;

    let mut tally = Tally::default();
    let schedule: Vec<ScheduleLine> = engine
        .schedule()
        .inspect(|row| tally.observe(row))
        .map(|row| ScheduleLine::from(&row))
        .collect();

    let output = ScheduleOutput {
        summary: tally.summary(&engine),
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Amortization Schedule",
        &assumptions(input, &engine),
        tally.warnings(&engine),
        elapsed,
        output,
    ))
}

/// Compute the monthly payment and lifetime totals by streaming the schedule.
pub fn summarize(input: &LoanInput) -> AmortizationResult<ComputationOutput<ScheduleSummary>> {
    let start = Instant::now();
    let engine = AmortizationEngine::from_raw(input.principal, input.annual_rate, input.term_years)?;

    let mut tally = Tally::default();
    engine.schedule().for_each(|row| tally.observe(&row));

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Amortization Summary",
        &assumptions(input, &engine),
        tally.warnings(&engine),
        elapsed,
        tally.summary(&engine),
    ))
}
