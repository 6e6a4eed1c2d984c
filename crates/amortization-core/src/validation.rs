use serde::Serialize;

/// Inclusive range of accepted values for a loan input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> ValueRange<T> {
    /// True iff `min <= value <= max`. NaN is never contained.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Accepted principal, in major currency units.
pub const PRINCIPAL_RANGE: ValueRange<f64> = ValueRange {
    min: 0.01,
    max: 1_000_000_000_000.0,
};

/// Accepted annual percentage rate, in percentage points.
pub const RATE_RANGE: ValueRange<f64> = ValueRange {
    min: 0.000001,
    max: 100.0,
};

/// Accepted loan term, in whole years.
pub const TERM_YEARS_RANGE: ValueRange<i64> = ValueRange {
    min: 1,
    max: 1_000_000,
};

pub fn is_valid_principal(amount: f64) -> bool {
    PRINCIPAL_RANGE.contains(amount)
}

pub fn is_valid_rate(rate: f64) -> bool {
    RATE_RANGE.contains(rate)
}

pub fn is_valid_term_years(years: i64) -> bool {
    TERM_YEARS_RANGE.contains(years)
}
