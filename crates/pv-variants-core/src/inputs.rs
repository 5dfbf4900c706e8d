//! Scenario parameters and their documented bounds.
//!
//! A [`ScenarioInputs`] value is built once per evaluation, from a file, a
//! request body or CLI flags, and never mutated by the engine. Missing fields
//! in serialized form fall back to the defaults of [`FIELD_SPECS`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::engine::allocation::participants;
use crate::error::PvVariantsError;
use crate::types::{CentsPerKwh, Energy, Money};
use crate::PvVariantsResult;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Technical and commercial parameters of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    /// Installed PV capacity in kWp.
    pub installed_capacity_kwp: Decimal,
    /// Specific annual yield in kWh per kWp.
    pub specific_yield_kwh_per_kwp_year: Energy,
    /// Number of residential units in the building.
    pub unit_count: u32,
    /// Annual consumption of one participating unit in kWh.
    pub consumption_per_unit_kwh_year: Energy,
    /// Share of units taking part in tenant electricity, 0-100.
    pub participant_rate_percent: u32,
    /// Annual common-area consumption including heat pump, in kWh.
    pub general_consumption_kwh_year: Energy,
    /// Emission factor of displaced grid electricity in kg/kWh.
    pub co2_factor_kg_per_kwh: Decimal,
    /// Tenant energy price.
    pub tenant_price_ct_per_kwh: CentsPerKwh,
    /// Tenant base fee per participating unit and month.
    pub tenant_base_fee_eur_per_month: Money,
    /// Common-area / heat pump energy price.
    pub general_price_ct_per_kwh: CentsPerKwh,
    /// Common-area base fee per month.
    pub general_base_fee_eur_per_month: Money,
    /// Roof rent received under the roof-lease model.
    pub roof_lease_eur_year: Money,
    /// Lease paid under the plant-lease model.
    pub plant_lease_eur_year: Money,
    /// Compensation on internally consumed kWh under the supply-chain model.
    pub supply_chain_compensation_ct_per_kwh: CentsPerKwh,
    /// Other annual costs borne by the cooperative in every model.
    pub other_costs_eur_year: Money,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        ScenarioInputs {
            installed_capacity_kwp: dec!(150),
            specific_yield_kwh_per_kwp_year: dec!(950),
            unit_count: 40,
            consumption_per_unit_kwh_year: dec!(1500),
            participant_rate_percent: 45,
            general_consumption_kwh_year: dec!(10000),
            co2_factor_kg_per_kwh: dec!(0.40),
            tenant_price_ct_per_kwh: dec!(28.0),
            tenant_base_fee_eur_per_month: dec!(8.0),
            general_price_ct_per_kwh: dec!(26.0),
            general_base_fee_eur_per_month: dec!(0.0),
            roof_lease_eur_year: dec!(3000.0),
            plant_lease_eur_year: dec!(6000.0),
            supply_chain_compensation_ct_per_kwh: dec!(4.0),
            other_costs_eur_year: dec!(0.0),
        }
    }
}

impl ScenarioInputs {
    /// Value of a field by its serialized key.
    pub fn field_value(&self, key: &str) -> Option<Decimal> {
        let value = match key {
            "installed_capacity_kwp" => self.installed_capacity_kwp,
            "specific_yield_kwh_per_kwp_year" => self.specific_yield_kwh_per_kwp_year,
            "unit_count" => Decimal::from(self.unit_count),
            "consumption_per_unit_kwh_year" => self.consumption_per_unit_kwh_year,
            "participant_rate_percent" => Decimal::from(self.participant_rate_percent),
            "general_consumption_kwh_year" => self.general_consumption_kwh_year,
            "co2_factor_kg_per_kwh" => self.co2_factor_kg_per_kwh,
            "tenant_price_ct_per_kwh" => self.tenant_price_ct_per_kwh,
            "tenant_base_fee_eur_per_month" => self.tenant_base_fee_eur_per_month,
            "general_price_ct_per_kwh" => self.general_price_ct_per_kwh,
            "general_base_fee_eur_per_month" => self.general_base_fee_eur_per_month,
            "roof_lease_eur_year" => self.roof_lease_eur_year,
            "plant_lease_eur_year" => self.plant_lease_eur_year,
            "supply_chain_compensation_ct_per_kwh" => self.supply_chain_compensation_ct_per_kwh,
            "other_costs_eur_year" => self.other_costs_eur_year,
            _ => return None,
        };
        Some(value)
    }

    /// Check every field against its documented bound.
    ///
    /// The first violation wins; fields are checked in [`FIELD_SPECS`] order.
    /// A scenario that passes is also guaranteed to evaluate within the
    /// decimal range: every product and sum of the engine is checked too.
    pub fn validate(&self) -> PvVariantsResult<()> {
        for spec in FIELD_SPECS.iter() {
            let value = self
                .field_value(spec.key)
                .ok_or_else(|| PvVariantsError::invalid(spec.key, "Unknown field"))?;
            spec.check(value)?;
        }
        self.check_magnitudes()
    }

    /// Replay every product and sum of the engine with checked arithmetic.
    ///
    /// All fields are non-negative once the bounds hold, so differences
    /// cannot overflow and only products and sums are checked. The error
    /// names the field whose factor pushes the result out of range.
    fn check_magnitudes(&self) -> PvVariantsResult<()> {
        let generation = product(
            "specific_yield_kwh_per_kwp_year",
            self.installed_capacity_kwp,
            self.specific_yield_kwh_per_kwp_year,
        )?;
        product("co2_factor_kg_per_kwh", generation, self.co2_factor_kg_per_kwh)?;

        let count = Decimal::from(participants(self.unit_count, self.participant_rate_percent));
        let tenant_demand = product(
            "consumption_per_unit_kwh_year",
            count,
            self.consumption_per_unit_kwh_year,
        )?;
        let delivered_tenant = generation.min(tenant_demand);
        let delivered_general = (generation - delivered_tenant).min(self.general_consumption_kwh_year);

        let tenant_energy = product("tenant_price_ct_per_kwh", delivered_tenant, self.tenant_price_ct_per_kwh)?;
        let tenant_fee = product(
            "tenant_base_fee_eur_per_month",
            product("tenant_base_fee_eur_per_month", count, self.tenant_base_fee_eur_per_month)?,
            MONTHS,
        )?;
        let general_energy = product(
            "general_price_ct_per_kwh",
            delivered_general,
            self.general_price_ct_per_kwh,
        )?;
        let general_fee = product(
            "general_base_fee_eur_per_month",
            self.general_base_fee_eur_per_month,
            MONTHS,
        )?;

        let tenant_revenue = sum(
            "tenant_base_fee_eur_per_month",
            tenant_energy / CENTS,
            tenant_fee,
        )?;
        let general_revenue = sum(
            "general_base_fee_eur_per_month",
            general_energy / CENTS,
            general_fee,
        )?;
        sum("general_price_ct_per_kwh", tenant_revenue, general_revenue)?;

        product(
            "supply_chain_compensation_ct_per_kwh",
            delivered_tenant + delivered_general,
            self.supply_chain_compensation_ct_per_kwh,
        )?;
        sum("other_costs_eur_year", self.plant_lease_eur_year, self.other_costs_eur_year)?;
        Ok(())
    }
}

const MONTHS: Decimal = dec!(12);
const CENTS: Decimal = dec!(100);

fn product(field: &str, a: Decimal, b: Decimal) -> PvVariantsResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| {
        PvVariantsError::invalid(field, format!("Too large: {a} × {b} exceeds the decimal range"))
    })
}

fn sum(field: &str, a: Decimal, b: Decimal) -> PvVariantsResult<Decimal> {
    a.checked_add(b).ok_or_else(|| {
        PvVariantsError::invalid(field, format!("Too large: {a} + {b} exceeds the decimal range"))
    })
}

// ---------------------------------------------------------------------------
// Field specs
// ---------------------------------------------------------------------------

/// Bounds, default and form step of one input field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
    pub default: Decimal,
    pub step: Decimal,
    pub integer: bool,
}

impl FieldSpec {
    fn check(&self, value: Decimal) -> PvVariantsResult<()> {
        if value < self.min {
            return Err(PvVariantsError::invalid(
                self.key,
                format!("Must be at least {} {}, got {}", self.min, self.unit, value),
            ));
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(PvVariantsError::invalid(
                    self.key,
                    format!("Must be at most {} {}, got {}", max, self.unit, value),
                ));
            }
        }
        Ok(())
    }
}

const fn spec(
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    min: Decimal,
    default: Decimal,
    step: Decimal,
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        unit,
        min,
        max: None,
        default,
        step,
        integer: false,
    }
}

/// All scenario fields in form order.
pub static FIELD_SPECS: [FieldSpec; 15] = [
    spec("installed_capacity_kwp", "Anlagengröße", "kWp", dec!(10), dec!(150), dec!(10)),
    spec(
        "specific_yield_kwh_per_kwp_year",
        "Spez. Ertrag",
        "kWh/kWp·a",
        dec!(600),
        dec!(950),
        dec!(10),
    ),
    FieldSpec {
        integer: true,
        ..spec("unit_count", "Anzahl Wohneinheiten (WE)", "WE", dec!(1), dec!(40), dec!(1))
    },
    spec(
        "consumption_per_unit_kwh_year",
        "Verbrauch je WE",
        "kWh/a",
        dec!(500),
        dec!(1500),
        dec!(100),
    ),
    FieldSpec {
        max: Some(dec!(100)),
        integer: true,
        ..spec("participant_rate_percent", "Teilnehmerquote", "%", dec!(0), dec!(45), dec!(1))
    },
    spec(
        "general_consumption_kwh_year",
        "Allgemeinstrom inkl. WP",
        "kWh/a",
        dec!(0),
        dec!(10000),
        dec!(500),
    ),
    spec("co2_factor_kg_per_kwh", "CO₂-Faktor", "kg/kWh", dec!(0), dec!(0.40), dec!(0.01)),
    spec(
        "tenant_price_ct_per_kwh",
        "Mieter: Arbeitspreis",
        "ct/kWh",
        dec!(0),
        dec!(28.0),
        dec!(0.1),
    ),
    spec(
        "tenant_base_fee_eur_per_month",
        "Mieter: Grundpreis",
        "€/Monat",
        dec!(0),
        dec!(8.0),
        dec!(0.5),
    ),
    spec(
        "general_price_ct_per_kwh",
        "Allgemeinstrom/WP: Arbeitspreis",
        "ct/kWh",
        dec!(0),
        dec!(26.0),
        dec!(0.1),
    ),
    spec(
        "general_base_fee_eur_per_month",
        "Allgemeinstrom/WP: Grundpreis",
        "€/Monat",
        dec!(0),
        dec!(0.0),
        dec!(0.5),
    ),
    spec("roof_lease_eur_year", "Dachpacht", "€/a", dec!(0), dec!(3000.0), dec!(100)),
    spec("plant_lease_eur_year", "Anlagenpacht", "€/a", dec!(0), dec!(6000.0), dec!(100)),
    spec(
        "supply_chain_compensation_ct_per_kwh",
        "Lieferkette: Vergütung",
        "ct/kWh",
        dec!(0),
        dec!(4.0),
        dec!(0.1),
    ),
    spec("other_costs_eur_year", "Sonstige Kosten WG", "€/a", dec!(0), dec!(0.0), dec!(100)),
];

/// Field specs in form order.
pub fn field_specs() -> &'static [FieldSpec] {
    &FIELD_SPECS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
