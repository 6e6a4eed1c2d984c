use amortization_core::report::{self, ScheduleSummary};
use amortization_core::validation::{PRINCIPAL_RANGE, RATE_RANGE, TERM_YEARS_RANGE};
use amortization_core::{
    monthly_payment, AmortizationEngine, AmortizationError, LoanInput, LoanTerms, Schedule,
    ScheduleRow,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Construction
// ===========================================================================

fn assert_invalid(principal: f64, rate: f64, years: i64) {
    match AmortizationEngine::from_raw(principal, rate, years) {
        Err(AmortizationError::InvalidLoanTerms { .. }) => {}
        other => panic!("expected InvalidLoanTerms for ({principal}, {rate}, {years}), got {other:?}"),
    }
}

#[test]
fn test_reference_loan_payment() {
    // 500,008.00 at 4.75% over 22 years
    let engine = AmortizationEngine::from_raw(500008.0, 4.75, 22).unwrap();
    assert_eq!(engine.monthly_payment(), 305629);
    assert_eq!(engine.terms().principal(), 50000800);
    assert_eq!(engine.terms().term_months(), 264);
}

#[test]
fn test_values_just_outside_each_range() {
    assert_invalid(0.0, 4.75, 22);
    assert_invalid(0.001, 4.75, 22);
    assert_invalid(1_000_000_000_000.5, 4.75, 22);
    assert_invalid(500008.0, 100.0001, 22);
    assert_invalid(500008.0, 0.0, 22);
    assert_invalid(500008.0, 105.0, 22);
    assert_invalid(500008.0, 4.75, 0);
    assert_invalid(500008.0, 4.75, 1_000_001);
    assert_invalid(500008.0, 4.75, 1_000_000_002);
}

#[test]
fn test_range_edges_construct() {
    for (p, r, y) in [
        (PRINCIPAL_RANGE.min, RATE_RANGE.min, TERM_YEARS_RANGE.min),
        (PRINCIPAL_RANGE.max, RATE_RANGE.max, TERM_YEARS_RANGE.min),
        (PRINCIPAL_RANGE.min, RATE_RANGE.max, TERM_YEARS_RANGE.max),
    ] {
        let engine = AmortizationEngine::from_raw(p, r, y).unwrap();
        assert!(engine.monthly_payment() <= engine.terms().principal());
    }
}

#[test]
fn test_engine_from_validated_terms() {
    let terms = LoanTerms::new(1200.0, 6.0, 1).unwrap();
    let engine = AmortizationEngine::new(terms).unwrap();
    assert_eq!(engine.monthly_payment(), 10328);
    assert_eq!(engine.terms(), &terms);
}

// ===========================================================================
// Schedule generation
// ===========================================================================

#[test]
fn test_reference_schedule_accounting() {
    let engine = AmortizationEngine::from_raw(500008.0, 4.75, 22).unwrap();
    let rows: Vec<ScheduleRow> = engine.schedule().collect();

    assert_eq!(rows.len(), 265);
    assert_eq!(rows[0].payment_number, 0);
    assert_eq!(rows[0].balance, 50000800);

    // every payment but the last is the fixed amount
    assert!(rows[1..264].iter().all(|r| r.payment_amount == 305629));

    let last = rows.last().unwrap();
    assert_eq!(last.balance, 0);

    let paid: i128 = rows.iter().map(|r| i128::from(r.payment_amount)).sum();
    assert_eq!(paid, last.cumulative_payments);

    let retired: i64 = rows.iter().map(|r| r.principal_portion()).sum();
    assert_eq!(retired, 50000800);
    assert_eq!(last.cumulative_interest + 50000800, last.cumulative_payments);
}

#[test]
fn test_smallest_loan_closes_within_slack_period() {
    let engine = AmortizationEngine::from_raw(0.01, 0.000001, 1).unwrap();
    let payments: Vec<ScheduleRow> = engine.schedule().skip(1).collect();
    assert!(payments.len() <= 13);
    assert_eq!(payments.last().unwrap().balance, 0);
    assert_eq!(payments.last().unwrap().cumulative_payments, 1);
}

#[test]
fn test_zero_rate_bypasses_closed_form() {
    let payment = monthly_payment(120000, 0.0, 12);
    assert_eq!(payment, 10000);

    let rows: Vec<ScheduleRow> = Schedule::new(120000, 0.0, payment, 12).collect();
    assert_eq!(rows[12].payment_number, 12);
    assert_eq!(rows[12].balance, 0);
    assert_eq!(rows[12].cumulative_interest, 0);
    assert_eq!(rows.len(), 13);
}

#[test]
fn test_summary_at_range_ceiling() {
    // twelve million interest-only periods: totals exceed i64::MAX
    let input = LoanInput {
        principal: PRINCIPAL_RANGE.max,
        annual_rate: RATE_RANGE.max,
        term_years: TERM_YEARS_RANGE.max,
    };
    let out = report::summarize(&input).unwrap();
    let summary = &out.result;
    assert_eq!(summary.number_of_payments, 12_000_001);
    assert!(summary.total_payments > summary.total_interest);
    assert_eq!(
        summary.total_payments - summary.total_interest,
        dec!(1000000000000.00)
    );
    assert!(out.warnings.iter().any(|w| w.contains("interest only")));
}

#[test]
fn test_long_term_schedule_streams() {
    // 1,000 years is 12,000 periods; only the tail is inspected
    let engine = AmortizationEngine::from_raw(250000.0, 7.5, 1000).unwrap();
    let last = engine.schedule().last().unwrap();
    assert_eq!(last.balance, 0);
    assert!(last.payment_number <= 12_001);
}

// ===========================================================================
// Reports
// ===========================================================================

#[test]
fn test_summary_report() {
    let input = LoanInput {
        principal: 1200.0,
        annual_rate: 6.0,
        term_years: 1,
    };
    let out = report::summarize(&input).unwrap();
    assert_eq!(
        out.result,
        ScheduleSummary {
            monthly_payment: dec!(103.28),
            term_months: 12,
            number_of_payments: 12,
            final_payment: dec!(103.24),
            total_payments: dec!(1239.32),
            total_interest: dec!(39.32),
        }
    );
    assert_eq!(out.methodology, "Fixed-Rate Amortization Summary");
}

#[test]
fn test_schedule_report_lines() {
    let input = LoanInput {
        principal: 1200.0,
        annual_rate: 6.0,
        term_years: 1,
    };
    let out = report::build_schedule(&input).unwrap();
    let lines = &out.result.schedule;
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[1].payment, dec!(103.28));
    assert_eq!(lines[1].interest, dec!(6.00));
    assert_eq!(lines[1].balance, dec!(1102.72));
    assert_eq!(lines[12].balance, dec!(0));
}
