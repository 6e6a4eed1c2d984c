use tracing::{debug, warn};

use crate::error::AmortizationError;
use crate::schedule::Schedule;
use crate::terms::LoanTerms;
use crate::types::{AnnualRate, MinorUnits};
use crate::AmortizationResult;

/// Converts an annual percentage rate into a monthly decimal rate.
pub const MONTHLY_RATE_DIVISOR: f64 = 12.0 * 100.0;

pub fn monthly_rate(annual_rate: AnnualRate) -> f64 {
    annual_rate / MONTHLY_RATE_DIVISOR
}

/// Fixed monthly payment, in minor units, for a fully amortizing loan.
///
/// `M = P * J / (1 - (1 + J)^-N)` with `J` the monthly rate and `N` the
/// number of months, rounded to the nearest minor unit. A zero rate
/// degenerates to straight division `P / N`.
pub fn monthly_payment(principal: MinorUnits, annual_rate: AnnualRate, term_months: u32) -> MinorUnits {
    if term_months == 0 {
        return principal;
    }

    let j = monthly_rate(annual_rate);
    if j == 0.0 {
        return (principal as f64 / term_months as f64).round() as MinorUnits;
    }

    let discount = (1.0 + j).powf(-1.0);
    let discount = discount.powf(term_months as f64);
    let annuity = (1.0 - discount).powf(-1.0);

    (principal as f64 * j * annuity).round() as MinorUnits
}

/// Amortization engine for a single fixed-rate loan.
///
/// The fixed payment is computed once at construction; every call to
/// [`AmortizationEngine::schedule`] replays the loan from origination.
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationEngine {
    terms: LoanTerms,
    monthly_rate: f64,
    monthly_payment: MinorUnits,
}

impl AmortizationEngine {
    /// Validate raw inputs and build an engine.
    pub fn from_raw(principal: f64, annual_rate: AnnualRate, term_years: i64) -> AmortizationResult<Self> {
        Self::new(LoanTerms::new(principal, annual_rate, term_years)?)
    }

    pub fn new(terms: LoanTerms) -> AmortizationResult<Self> {
        let payment = monthly_payment(terms.principal(), terms.annual_rate(), terms.term_months());

        // Unreachable within the accepted ranges, but extreme rate and term
        // combinations can break the closed form in floating point.
        if payment > terms.principal() {
            warn!(
                payment,
                principal = terms.principal(),
                "monthly payment exceeds principal"
            );
            return Err(AmortizationError::invalid(
                "monthly_payment",
                format!(
                    "computed payment {payment} exceeds principal {} (minor units)",
                    terms.principal()
                ),
            ));
        }

        debug!(
            principal = terms.principal(),
            annual_rate = terms.annual_rate(),
            term_months = terms.term_months(),
            monthly_payment = payment,
            "amortization engine constructed"
        );

        Ok(AmortizationEngine {
            monthly_rate: monthly_rate(terms.annual_rate()),
            monthly_payment: payment,
            terms,
        })
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Fixed monthly payment, in minor units.
    pub fn monthly_payment(&self) -> MinorUnits {
        self.monthly_payment
    }

    /// Monthly interest rate as a decimal fraction.
    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    /// Lazily generated schedule, origination row first.
    pub fn schedule(&self) -> Schedule {
        Schedule::new(
            self.terms.principal(),
            self.monthly_rate,
            self.monthly_payment,
            self.terms.term_months(),
        )
    }
}
