use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual monetary amounts in EUR. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Energy quantities in kWh.
pub type Energy = Decimal;

/// Prices and compensations in ct/kWh. Never converted to EUR until applied.
pub type CentsPerKwh = Decimal;

/// Contract model evaluated from the cooperative's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    /// Fixed annual roof rent; the operator keeps all energy revenue.
    RoofLease,
    /// The cooperative sells electricity and pays a fixed plant lease.
    PlantLease,
    /// Per-kWh compensation on internally consumed energy.
    SupplyChain,
}

impl Model {
    /// Report column order. Also the tie-break order when ranking.
    pub const ALL: [Model; 3] = [Model::RoofLease, Model::PlantLease, Model::SupplyChain];

    /// Column header used in the comparison table.
    pub fn column_label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Model::RoofLease, Locale::De) => "Dachpachtmodell",
            (Model::PlantLease, Locale::De) => "Anlagenpachtmodell",
            (Model::SupplyChain, Locale::De) => "Lieferkettenmodell",
            (Model::RoofLease, Locale::En) => "Roof lease",
            (Model::PlantLease, Locale::En) => "Plant lease",
            (Model::SupplyChain, Locale::En) => "Supply chain",
        }
    }

    /// Short label used for chart bars.
    pub fn short_label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Model::RoofLease, Locale::De) => "Dachpacht",
            (Model::PlantLease, Locale::De) => "Anlagenpacht",
            (Model::SupplyChain, Locale::De) => "Lieferkette",
            (Model::RoofLease, Locale::En) => "Roof lease",
            (Model::PlantLease, Locale::En) => "Plant lease",
            (Model::SupplyChain, Locale::En) => "Supply chain",
        }
    }
}

/// Language of report labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    En,
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
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Round a presented value to cents (banker's rounding).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round2_is_bankers_rounding() {
        assert_eq!(round2(dec!(1.005)), dec!(1.00));
        assert_eq!(round2(dec!(1.015)), dec!(1.02));
        assert_eq!(round2(dec!(9288)), dec!(9288));
    }

    #[test]
    fn test_model_serializes_snake_case() {
        let json = serde_json::to_string(&Model::SupplyChain).unwrap();
        assert_eq!(json, "\"supply_chain\"");
    }

    #[test]
    fn test_locale_defaults_to_german() {
        assert_eq!(Locale::default(), Locale::De);
        assert_eq!(Model::PlantLease.column_label(Locale::De), "Anlagenpachtmodell");
    }
}
