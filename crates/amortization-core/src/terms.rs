use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AmortizationError;
use crate::types::{to_minor_units, AnnualRate, MinorUnits};
use crate::validation::{
    is_valid_principal, is_valid_rate, is_valid_term_years, PRINCIPAL_RANGE, RATE_RANGE,
    TERM_YEARS_RANGE,
};
use crate::AmortizationResult;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Raw loan inputs as supplied by a caller, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed, in major currency units
    pub principal: f64,
    /// Annual percentage rate, e.g. 4.75 for 4.75%
    pub annual_rate: AnnualRate,
    /// Term in whole years
    pub term_years: i64,
}

/// Validated loan terms. Only obtainable through [`LoanTerms::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    principal: MinorUnits,
    annual_rate: AnnualRate,
    term_months: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate: AnnualRate, term_years: i64) -> AmortizationResult<Self> {
        if !is_valid_principal(principal) {
            debug!(principal, "principal rejected");
            return Err(AmortizationError::invalid(
                "principal",
                format!(
                    "must be between {} and {}, got {principal}",
                    PRINCIPAL_RANGE.min, PRINCIPAL_RANGE.max
                ),
            ));
        }
        if !is_valid_rate(annual_rate) {
            debug!(annual_rate, "annual rate rejected");
            return Err(AmortizationError::invalid(
                "annual_rate",
                format!(
                    "must be between {} and {}, got {annual_rate}",
                    RATE_RANGE.min, RATE_RANGE.max
                ),
            ));
        }
        if !is_valid_term_years(term_years) {
            debug!(term_years, "term rejected");
            return Err(AmortizationError::invalid(
                "term_years",
                format!(
                    "must be between {} and {}, got {term_years}",
                    TERM_YEARS_RANGE.min, TERM_YEARS_RANGE.max
                ),
            ));
        }

        Ok(LoanTerms {
            principal: to_minor_units(principal),
            annual_rate,
            // range-checked above, at most 12,000,000
            term_months: term_years as u32 * MONTHS_PER_YEAR,
        })
    }

    /// Principal in minor units.
    pub fn principal(&self) -> MinorUnits {
        self.principal
    }

    pub fn annual_rate(&self) -> AnnualRate {
        self.annual_rate
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }
}

impl TryFrom<&LoanInput> for LoanTerms {
    type Error = AmortizationError;

    fn try_from(input: &LoanInput) -> AmortizationResult<Self> {
        LoanTerms::new(input.principal, input.annual_rate, input.term_years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_terms() {
        let terms = LoanTerms::new(500008.0, 4.75, 22).unwrap();
        assert_eq!(terms.principal(), 50000800);
        assert_eq!(terms.annual_rate(), 4.75);
        assert_eq!(terms.term_months(), 264);
    }

    #[test]
    fn test_term_ceiling_months() {
        let terms = LoanTerms::new(1.0, 1.0, 1_000_000).unwrap();
        assert_eq!(terms.term_months(), 12_000_000);
    }

    #[test]
    fn test_rejections_name_the_field() {
        let cases = [
            (0.0, 4.75, 22, "principal"),
            (500008.0, 105.0, 22, "annual_rate"),
            (500008.0, 4.75, 0, "term_years"),
        ];
        for (p, r, y, expected) in cases {
            match LoanTerms::new(p, r, y) {
                Err(AmortizationError::InvalidLoanTerms { field, .. }) => {
                    assert_eq!(field, expected)
                }
                other => panic!("expected InvalidLoanTerms for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_json_input() {
        let input: LoanInput = serde_json::from_str(
            r#"{ "principal": 1200.0, "annual_rate": 6.0, "term_years": 1 }"#,
        )
        .unwrap();
        let terms = LoanTerms::try_from(&input).unwrap();
        assert_eq!(terms.principal(), 120000);
        assert_eq!(terms.term_months(), 12);
    }
}
