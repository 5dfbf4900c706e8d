//! Annual generation and its allocation to tenant and common-area demand.
//!
//! Priority:
//! 1. **Tenant demand** -- participating units are served first.
//! 2. **General demand** -- common areas and heat pump take what remains.
//! 3. **Surplus** -- anything left is reported but never priced.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inputs::ScenarioInputs;
use crate::types::Energy;

/// Derived energy flows of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyAllocation {
    /// Installed capacity times specific yield.
    pub annual_generation_kwh: Energy,
    /// Participating units, rounded down.
    pub participant_count: u32,
    /// Aggregate demand of participating units.
    pub tenant_demand_kwh: Energy,
    pub delivered_tenant_kwh: Energy,
    /// Generation left after tenant delivery.
    pub remaining_kwh: Energy,
    pub delivered_general_kwh: Energy,
    /// Tenant plus general delivery; the supply-chain compensation base.
    pub total_internal_kwh: Energy,
    /// Generation beyond internal demand.
    pub surplus_kwh: Energy,
    /// Internal consumption over generation, zero without generation.
    pub self_consumption_ratio: Decimal,
    /// Avoided emissions on generated (not delivered) energy, in tonnes.
    pub co2_credit_tons: Decimal,
}

/// Split annual generation between tenant and general demand.
pub fn allocate(inputs: &ScenarioInputs) -> EnergyAllocation {
    let annual_generation_kwh = inputs.installed_capacity_kwp * inputs.specific_yield_kwh_per_kwp_year;
    let participant_count = participants(inputs.unit_count, inputs.participant_rate_percent);

    let tenant_demand_kwh = Decimal::from(participant_count) * inputs.consumption_per_unit_kwh_year;
    let delivered_tenant_kwh = annual_generation_kwh.min(tenant_demand_kwh);

    let remaining_kwh = (annual_generation_kwh - delivered_tenant_kwh).max(Decimal::ZERO);
    let delivered_general_kwh = remaining_kwh.min(inputs.general_consumption_kwh_year);

    let total_internal_kwh = delivered_tenant_kwh + delivered_general_kwh;
    let surplus_kwh = (annual_generation_kwh - total_internal_kwh).max(Decimal::ZERO);
    let self_consumption_ratio = if annual_generation_kwh > Decimal::ZERO {
        total_internal_kwh / annual_generation_kwh
    } else {
        Decimal::ZERO
    };

    let co2_credit_tons = annual_generation_kwh * inputs.co2_factor_kg_per_kwh / dec!(1000);

    debug!(
        %annual_generation_kwh,
        participant_count,
        %delivered_tenant_kwh,
        %delivered_general_kwh,
        %surplus_kwh,
        "energy allocated"
    );

    EnergyAllocation {
        annual_generation_kwh,
        participant_count,
        tenant_demand_kwh,
        delivered_tenant_kwh,
        remaining_kwh,
        delivered_general_kwh,
        total_internal_kwh,
        surplus_kwh,
        self_consumption_ratio,
        co2_credit_tons,
    }
}

/// floor(units * rate / 100) in integer arithmetic.
pub(crate) fn participants(unit_count: u32, rate_percent: u32) -> u32 {
    let count = u64::from(unit_count) * u64::from(rate_percent) / 100;
    u32::try_from(count).unwrap_or(u32::MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
