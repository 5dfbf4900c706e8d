use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::engine::allocation::EnergyAllocation;
use crate::inputs::ScenarioInputs;
use crate::types::{CentsPerKwh, Energy, Money};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Demand-side revenue, split into energy and base-fee parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueComponents {
    pub tenant_energy_eur: Money,
    pub tenant_base_fee_eur: Money,
    /// Energy part plus annualized base fees of all participants.
    pub tenant_revenue_eur: Money,
    pub general_energy_eur: Money,
    pub general_base_fee_eur: Money,
    /// Energy part plus the annualized common-area base fee.
    pub general_revenue_eur: Money,
    pub total_revenue_eur: Money,
}

/// Price the delivered energy and annualize the monthly base fees.
///
/// tenant = delivered_tenant x ct / 100 + participants x fee x 12
/// general = delivered_general x ct / 100 + fee x 12
pub fn calculate_revenue(allocation: &EnergyAllocation, inputs: &ScenarioInputs) -> RevenueComponents {
    let tenant_energy_eur = energy_value(allocation.delivered_tenant_kwh, inputs.tenant_price_ct_per_kwh);
    let tenant_base_fee_eur = Decimal::from(allocation.participant_count)
        * inputs.tenant_base_fee_eur_per_month
        * MONTHS_PER_YEAR;
    let tenant_revenue_eur = tenant_energy_eur + tenant_base_fee_eur;

    let general_energy_eur =
        energy_value(allocation.delivered_general_kwh, inputs.general_price_ct_per_kwh);
    let general_base_fee_eur = inputs.general_base_fee_eur_per_month * MONTHS_PER_YEAR;
    let general_revenue_eur = general_energy_eur + general_base_fee_eur;

    RevenueComponents {
        tenant_energy_eur,
        tenant_base_fee_eur,
        tenant_revenue_eur,
        general_energy_eur,
        general_base_fee_eur,
        general_revenue_eur,
        total_revenue_eur: tenant_revenue_eur + general_revenue_eur,
    }
}

/// kWh priced in ct/kWh, returned in EUR.
pub(crate) fn energy_value(kwh: Energy, price_ct: CentsPerKwh) -> Money {
    kwh * price_ct / dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::allocation::allocate;

    fn revenue_for(inputs: &ScenarioInputs) -> RevenueComponents {
        calculate_revenue(&allocate(inputs), inputs)
    }

    #[test]
    fn test_default_revenue() {
        let out = revenue_for(&ScenarioInputs::default());
        // 27000 * 0.28 = 7560, 18 * 8 * 12 = 1728
        assert_eq!(out.tenant_energy_eur, dec!(7560));
        assert_eq!(out.tenant_base_fee_eur, dec!(1728));
        assert_eq!(out.tenant_revenue_eur, dec!(9288));
        // 10000 * 0.26 = 2600
        assert_eq!(out.general_revenue_eur, dec!(2600));
        assert_eq!(out.total_revenue_eur, dec!(11888));
    }

    #[test]
    fn test_general_base_fee_annualized() {
        let mut input = ScenarioInputs::default();
        input.general_base_fee_eur_per_month = dec!(15.5);
        let out = revenue_for(&input);
        assert_eq!(out.general_base_fee_eur, dec!(186));
        assert_eq!(out.general_revenue_eur, dec!(2786));
    }

    #[test]
    fn test_zero_generation_keeps_only_base_fees() {
        let mut input = ScenarioInputs::default();
        input.specific_yield_kwh_per_kwp_year = Decimal::ZERO;
        input.general_base_fee_eur_per_month = dec!(10);
        let out = revenue_for(&input);
        assert_eq!(out.tenant_energy_eur, Decimal::ZERO);
        assert_eq!(out.general_energy_eur, Decimal::ZERO);
        assert_eq!(out.tenant_revenue_eur, dec!(1728));
        assert_eq!(out.general_revenue_eur, dec!(120));
    }

    #[test]
    fn test_no_participants_no_tenant_revenue() {
        let mut input = ScenarioInputs::default();
        input.participant_rate_percent = 0;
        let out = revenue_for(&input);
        assert_eq!(out.tenant_revenue_eur, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_price() {
        assert_eq!(energy_value(dec!(1234), dec!(27.9)), dec!(344.286));
    }
}
