use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmortizationError {
    #[error("Invalid loan terms: {field}: {reason}")]
    InvalidLoanTerms { field: String, reason: String },
}

impl AmortizationError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        AmortizationError::InvalidLoanTerms {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
