pub mod engine;
pub mod error;
pub mod report;
pub mod schedule;
pub mod terms;
pub mod types;
pub mod validation;

pub use engine::{monthly_payment, AmortizationEngine};
pub use error::AmortizationError;
pub use schedule::{Schedule, ScheduleRow};
pub use terms::{LoanInput, LoanTerms};
pub use types::*;

/// Standard result type for all amortization operations
pub type AmortizationResult<T> = Result<T, AmortizationError>;
