use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Integer count of minor currency units (cents). All balance tracking uses this.
pub type MinorUnits = i64;

/// Running total of minor units. Wide enough for twelve million periods at the
/// largest accepted payment, which overflows `i64`.
pub type TotalUnits = i128;

/// Display-side currency amount in major units, exact to two decimals.
pub type Money = Decimal;

/// Annual percentage rate in percentage points (4.75 = 4.75%).
pub type AnnualRate = f64;

/// Minor units per major currency unit.
pub const MINOR_PER_MAJOR: i64 = 100;

/// Convert a minor-unit amount or total to an exact two-decimal major-unit amount.
pub fn to_major_units(minor: impl Into<TotalUnits>) -> Money {
    Decimal::from_i128_with_scale(minor.into(), 2)
}

/// Convert a floating major-unit amount to minor units, rounding half away from zero.
pub fn to_minor_units(major: f64) -> MinorUnits {
    (major * MINOR_PER_MAJOR as f64).round() as MinorUnits
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "i64_minor_units".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_major_units_are_exact() {
        assert_eq!(to_major_units(50000800), dec!(500008.00));
        assert_eq!(to_major_units(1), dec!(0.01));
        assert_eq!(to_major_units(0), Decimal::ZERO);
        assert_eq!(to_major_units(305629).to_string(), "3056.29");
        // beyond i64::MAX
        let total: TotalUnits = 100_000_000_000_000_000_000;
        assert_eq!(
            to_major_units(total),
            Decimal::from_i128_with_scale(1_000_000_000_000_000_000, 0)
        );
    }

    #[test]
    fn test_minor_units_round_to_nearest_cent() {
        assert_eq!(to_minor_units(500008.0), 50000800);
        assert_eq!(to_minor_units(0.01), 1);
        assert_eq!(to_minor_units(12.346), 1235);
        assert_eq!(to_minor_units(1_000_000_000_000.0), 100_000_000_000_000);
    }

    #[test]
    fn test_metadata_envelope() {
        let out = with_metadata(
            "Test",
            &serde_json::json!({ "k": 1 }),
            vec!["w".into()],
            42,
            7_i64,
        );
        assert_eq!(out.result, 7);
        assert_eq!(out.metadata.computation_time_us, 42);
        assert_eq!(out.assumptions["k"], 1);
        assert_eq!(out.warnings, vec!["w".to_string()]);
    }
}
