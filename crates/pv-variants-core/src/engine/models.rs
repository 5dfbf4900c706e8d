//! Annual result of each contract model from the cooperative's perspective.
//!
//! Covers:
//! 1. **Roof lease** -- fixed rent, independent of energy flows.
//! 2. **Plant lease** -- electricity sales minus plant lease.
//! 3. **Supply chain** -- per-kWh compensation on internal consumption.
//!
//! Other costs are charged to every model.

use serde::{Deserialize, Serialize};

use crate::engine::allocation::EnergyAllocation;
use crate::engine::revenue::{energy_value, RevenueComponents};
use crate::inputs::ScenarioInputs;
use crate::types::{Model, Money};

/// Gross income, costs and net result of one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub model: Model,
    pub gross_eur: Money,
    pub cost_eur: Money,
    pub net_result_eur: Money,
}

/// All three model results side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResults {
    pub roof_lease: ModelResult,
    pub plant_lease: ModelResult,
    pub supply_chain: ModelResult,
    /// Highest net result; ties go to the earlier model in [`Model::ALL`].
    pub best_model: Model,
}

impl ModelResults {
    pub fn get(&self, model: Model) -> &ModelResult {
        match model {
            Model::RoofLease => &self.roof_lease,
            Model::PlantLease => &self.plant_lease,
            Model::SupplyChain => &self.supply_chain,
        }
    }

    /// Results in report column order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelResult> {
        Model::ALL.into_iter().map(move |m| self.get(m))
    }

    pub fn best(&self) -> &ModelResult {
        self.get(self.best_model)
    }
}

/// Evaluate a single model.
pub fn evaluate_model(
    model: Model,
    allocation: &EnergyAllocation,
    revenue: &RevenueComponents,
    inputs: &ScenarioInputs,
) -> ModelResult {
    let (gross_eur, cost_eur) = match model {
        Model::RoofLease => (inputs.roof_lease_eur_year, inputs.other_costs_eur_year),
        Model::PlantLease => (
            revenue.tenant_revenue_eur + revenue.general_revenue_eur,
            inputs.plant_lease_eur_year + inputs.other_costs_eur_year,
        ),
        Model::SupplyChain => (
            energy_value(
                allocation.total_internal_kwh,
                inputs.supply_chain_compensation_ct_per_kwh,
            ),
            inputs.other_costs_eur_year,
        ),
    };

    ModelResult {
        model,
        gross_eur,
        cost_eur,
        net_result_eur: gross_eur - cost_eur,
    }
}

/// Evaluate all three models and pick the best one.
pub fn evaluate_models(
    allocation: &EnergyAllocation,
    revenue: &RevenueComponents,
    inputs: &ScenarioInputs,
) -> ModelResults {
    let roof_lease = evaluate_model(Model::RoofLease, allocation, revenue, inputs);
    let plant_lease = evaluate_model(Model::PlantLease, allocation, revenue, inputs);
    let supply_chain = evaluate_model(Model::SupplyChain, allocation, revenue, inputs);

    let mut best = &roof_lease;
    for candidate in [&plant_lease, &supply_chain] {
        if candidate.net_result_eur > best.net_result_eur {
            best = candidate;
        }
    }
    let best_model = best.model;

    ModelResults {
        roof_lease,
        plant_lease,
        supply_chain,
        best_model,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate, calculate_revenue};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn results_for(inputs: &ScenarioInputs) -> ModelResults {
        let allocation = allocate(inputs);
        let revenue = calculate_revenue(&allocation, inputs);
        evaluate_models(&allocation, &revenue, inputs)
    }

    #[test]
    fn test_default_results() {
        let out = results_for(&ScenarioInputs::default());
        assert_eq!(out.roof_lease.net_result_eur, dec!(3000));
        assert_eq!(out.plant_lease.gross_eur, dec!(11888));
        assert_eq!(out.plant_lease.cost_eur, dec!(6000));
        assert_eq!(out.plant_lease.net_result_eur, dec!(5888));
        assert_eq!(out.supply_chain.gross_eur, dec!(1480));
        assert_eq!(out.supply_chain.net_result_eur, dec!(1480));
        assert_eq!(out.best_model, Model::PlantLease);
    }

    #[test]
    fn test_other_costs_charged_to_every_model() {
        let mut input = ScenarioInputs::default();
        input.other_costs_eur_year = dec!(500);
        let out = results_for(&input);
        assert_eq!(out.roof_lease.net_result_eur, dec!(2500));
        assert_eq!(out.plant_lease.net_result_eur, dec!(5388));
        assert_eq!(out.supply_chain.net_result_eur, dec!(980));
        for result in out.iter() {
            assert!(result.cost_eur >= dec!(500));
        }
    }

    #[test]
    fn test_roof_lease_ignores_energy_and_prices() {
        let base = results_for(&ScenarioInputs::default());
        let mut input = ScenarioInputs::default();
        input.tenant_price_ct_per_kwh = dec!(45);
        input.general_price_ct_per_kwh = dec!(0);
        input.participant_rate_percent = 100;
        input.specific_yield_kwh_per_kwp_year = dec!(1200);
        let changed = results_for(&input);
        assert_eq!(changed.roof_lease, base.roof_lease);
        assert_ne!(changed.plant_lease, base.plant_lease);
    }

    #[test]
    fn test_plant_lease_can_be_negative() {
        let mut input = ScenarioInputs::default();
        input.plant_lease_eur_year = dec!(20000);
        let out = results_for(&input);
        assert_eq!(out.plant_lease.net_result_eur, dec!(-8112));
        assert_eq!(out.best_model, Model::RoofLease);
    }

    #[test]
    fn test_tie_goes_to_earlier_model() {
        let mut input = ScenarioInputs::default();
        input.roof_lease_eur_year = dec!(5888);
        let out = results_for(&input);
        assert_eq!(out.best_model, Model::RoofLease);
    }

    #[test]
    fn test_supply_chain_zero_generation() {
        let mut input = ScenarioInputs::default();
        input.specific_yield_kwh_per_kwp_year = Decimal::ZERO;
        let out = results_for(&input);
        assert_eq!(out.supply_chain.gross_eur, Decimal::ZERO);
        assert_eq!(out.roof_lease.net_result_eur, dec!(3000));
        // only the tenant base fees survive: 1728 - 6000
        assert_eq!(out.plant_lease.net_result_eur, dec!(-4272));
    }

    #[test]
    fn test_iter_follows_column_order() {
        let out = results_for(&ScenarioInputs::default());
        let order: Vec<Model> = out.iter().map(|r| r.model).collect();
        assert_eq!(order, Model::ALL.to_vec());
    }
}
