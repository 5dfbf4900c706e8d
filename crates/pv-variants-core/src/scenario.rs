use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use crate::engine::{
    allocate, calculate_revenue, evaluate_models, EnergyAllocation, ModelResults,
    RevenueComponents,
};
use crate::inputs::ScenarioInputs;
use crate::report::{build_dump, build_report, ComparisonReport, ScenarioDump};
use crate::types::{round2, with_metadata, ComputationOutput, Locale};
use crate::PvVariantsResult;

const METHODOLOGY: &str = "PV generation serves tenant demand first, then common-area/heat pump \
     demand; surplus is not priced. Roof lease: fixed rent. Plant lease: electricity sales minus \
     plant lease. Supply chain: ct/kWh compensation on internally consumed energy. CO2 credit on \
     generated energy.";

/// Everything derived from one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutput {
    pub allocation: EnergyAllocation,
    pub revenue: RevenueComponents,
    pub models: ModelResults,
    pub report: ComparisonReport,
    pub dump: ScenarioDump,
}

/// Validate the inputs and run the full pipeline.
///
/// allocation -> revenue -> model results -> report and dump. Nothing is
/// computed when validation fails.
pub fn evaluate_scenario(
    inputs: &ScenarioInputs,
    locale: Locale,
) -> PvVariantsResult<ComputationOutput<ScenarioOutput>> {
    let start = Instant::now();

    inputs.validate()?;

    let allocation = allocate(inputs);
    let revenue = calculate_revenue(&allocation, inputs);
    let models = evaluate_models(&allocation, &revenue, inputs);
    debug!(best = ?models.best_model, "models evaluated");

    let warnings = collect_warnings(inputs, &allocation, &models, locale);
    for w in &warnings {
        warn!("{w}");
    }

    let report = build_report(inputs, &allocation, &revenue, &models, locale);
    let dump = build_dump(inputs, &allocation, &revenue, &models);

    let output = ScenarioOutput {
        allocation,
        revenue,
        models,
        report,
        dump,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(METHODOLOGY, inputs, warnings, elapsed, output))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn collect_warnings(
    inputs: &ScenarioInputs,
    allocation: &EnergyAllocation,
    models: &ModelResults,
    locale: Locale,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if allocation.surplus_kwh > Decimal::ZERO {
        warnings.push(format!(
            "{} kWh/a of generation exceed internal demand and are not priced",
            allocation.surplus_kwh
        ));
    }
    if allocation.delivered_tenant_kwh < allocation.tenant_demand_kwh {
        warnings.push(format!(
            "Generation covers only {} of {} kWh/a tenant demand",
            allocation.delivered_tenant_kwh, allocation.tenant_demand_kwh
        ));
    }
    if allocation.participant_count == 0 && inputs.participant_rate_percent > 0 {
        warnings.push(format!(
            "Participant rate of {}% on {} units rounds down to zero participants",
            inputs.participant_rate_percent, inputs.unit_count
        ));
    }
    let best = models.best();
    if best.net_result_eur < Decimal::ZERO {
        warnings.push(format!(
            "Every model loses money; best is {} at {} €/a",
            best.model.column_label(locale),
            round2(best.net_result_eur)
        ));
    }

    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
