//! Hierarchical dump of a scenario's inputs and derived values, kept with a
//! report as documentation of how it was produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::{EnergyAllocation, ModelResults, RevenueComponents};
use crate::inputs::ScenarioInputs;
use crate::types::{round2, Money};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDump {
    pub installed_capacity_kwp: Decimal,
    pub specific_yield_kwh_per_kwp_year: Decimal,
    pub unit_count: u32,
    pub participant_count: u32,
    pub participant_rate_percent: u32,
    pub consumption_per_unit_kwh_year: Decimal,
    pub general_consumption_kwh_year: Decimal,
    pub co2_factor_kg_per_kwh: Decimal,
    pub prices: PriceDump,
    pub model_params: ModelParamsDump,
    pub derived: DerivedDump,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDump {
    pub tenant_ct_per_kwh: Decimal,
    pub tenant_base_eur_per_month: Money,
    pub general_ct_per_kwh: Decimal,
    pub general_base_eur_per_month: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParamsDump {
    pub roof_lease_eur_year: Money,
    pub plant_lease_eur_year: Money,
    pub supply_chain_ct_per_kwh: Decimal,
    pub other_costs_eur_year: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedDump {
    pub generation_kwh_year: Decimal,
    pub delivered_tenant_kwh_year: Decimal,
    pub delivered_general_kwh_year: Decimal,
    pub total_internal_kwh_year: Decimal,
    pub surplus_kwh_year: Decimal,
    pub co2_tons_year: Decimal,
    pub revenues: RevenueDump,
    pub results: ResultsDump,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueDump {
    pub tenant_revenue_eur_year: Money,
    pub general_revenue_eur_year: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsDump {
    pub roof_lease_eur_year: Money,
    pub plant_lease_eur_year: Money,
    pub supply_chain_eur_year: Money,
}

/// Build the documentation dump. Money and CO₂ are rounded to cents.
pub fn build_dump(
    inputs: &ScenarioInputs,
    allocation: &EnergyAllocation,
    revenue: &RevenueComponents,
    results: &ModelResults,
) -> ScenarioDump {
    ScenarioDump {
        installed_capacity_kwp: inputs.installed_capacity_kwp,
        specific_yield_kwh_per_kwp_year: inputs.specific_yield_kwh_per_kwp_year,
        unit_count: inputs.unit_count,
        participant_count: allocation.participant_count,
        participant_rate_percent: inputs.participant_rate_percent,
        consumption_per_unit_kwh_year: inputs.consumption_per_unit_kwh_year,
        general_consumption_kwh_year: inputs.general_consumption_kwh_year,
        co2_factor_kg_per_kwh: inputs.co2_factor_kg_per_kwh,
        prices: PriceDump {
            tenant_ct_per_kwh: inputs.tenant_price_ct_per_kwh,
            tenant_base_eur_per_month: inputs.tenant_base_fee_eur_per_month,
            general_ct_per_kwh: inputs.general_price_ct_per_kwh,
            general_base_eur_per_month: inputs.general_base_fee_eur_per_month,
        },
        model_params: ModelParamsDump {
            roof_lease_eur_year: inputs.roof_lease_eur_year,
            plant_lease_eur_year: inputs.plant_lease_eur_year,
            supply_chain_ct_per_kwh: inputs.supply_chain_compensation_ct_per_kwh,
            other_costs_eur_year: inputs.other_costs_eur_year,
        },
        derived: DerivedDump {
            generation_kwh_year: allocation.annual_generation_kwh,
            delivered_tenant_kwh_year: allocation.delivered_tenant_kwh,
            delivered_general_kwh_year: allocation.delivered_general_kwh,
            total_internal_kwh_year: allocation.total_internal_kwh,
            surplus_kwh_year: allocation.surplus_kwh,
            co2_tons_year: round2(allocation.co2_credit_tons),
            revenues: RevenueDump {
                tenant_revenue_eur_year: round2(revenue.tenant_revenue_eur),
                general_revenue_eur_year: round2(revenue.general_revenue_eur),
            },
            results: ResultsDump {
                roof_lease_eur_year: round2(results.roof_lease.net_result_eur),
                plant_lease_eur_year: round2(results.plant_lease.net_result_eur),
                supply_chain_eur_year: round2(results.supply_chain.net_result_eur),
            },
        },
    }
}
