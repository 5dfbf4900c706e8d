//! The 13-row comparison table, one column per model.
//!
//! Cells that do not apply to a model are zero, never absent, so the table
//! stays rectangular for rendering and export. Money and CO₂ cells are
//! rounded to cents here; the engine itself keeps full precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::{EnergyAllocation, ModelResults, RevenueComponents};
use crate::inputs::ScenarioInputs;
use crate::report::chart::{net_result_chart, ChartBar};
use crate::types::{round2, Locale, Model};

/// Sheet name used by spreadsheet exports.
pub const SHEET_NAME: &str = "Variantenvergleich";

/// Default file stem for exports.
pub const EXPORT_FILE_STEM: &str = "variantenvergleich_pv_modelle";

/// Spreadsheet column widths (characters) by column index; index 0 is the
/// parameter label column.
pub const SPREADSHEET_COLUMN_WIDTHS: [u16; 13] = [28, 20, 14, 26, 30, 18, 22, 26, 24, 24, 26, 22, 24];

/// How a metric is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Capacity,
    Energy,
    Count,
    Co2,
    Money,
    Rate,
}

impl MetricKind {
    /// Rounded for presentation: money and CO₂ to cents, counts to integers.
    pub fn present(self, value: Decimal) -> Decimal {
        match self {
            MetricKind::Money | MetricKind::Co2 => round2(value),
            MetricKind::Count => value.trunc(),
            MetricKind::Capacity | MetricKind::Energy | MetricKind::Rate => value,
        }
    }
}

/// One metric across the three models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub key: String,
    pub label: String,
    pub kind: MetricKind,
    pub roof_lease: Decimal,
    pub plant_lease: Decimal,
    pub supply_chain: Decimal,
}

impl MetricRow {
    pub fn value(&self, model: Model) -> Decimal {
        match model {
            Model::RoofLease => self.roof_lease,
            Model::PlantLease => self.plant_lease,
            Model::SupplyChain => self.supply_chain,
        }
    }
}

/// Column header of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub model: Model,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub locale: Locale,
    /// Header of the label column.
    pub parameter_header: String,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<MetricRow>,
    /// Net result per model, for bar charts.
    pub chart: Vec<ChartBar>,
}

impl ComparisonReport {
    pub fn row(&self, key: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.key == key)
    }
}

/// Row definitions: key, German label, English label, kind.
const ROWS: [(&str, &str, &str, MetricKind); 13] = [
    ("installed_capacity_kwp", "Anlagengröße (kWp)", "Installed capacity (kWp)", MetricKind::Capacity),
    ("annual_generation_kwh", "Erzeugung (kWh/a)", "Generation (kWh/a)", MetricKind::Energy),
    ("participant_count", "Teilnehmer (WE)", "Participants (units)", MetricKind::Count),
    (
        "delivered_tenant_kwh",
        "Mieterstrom geliefert (kWh/a)",
        "Tenant electricity delivered (kWh/a)",
        MetricKind::Energy,
    ),
    (
        "delivered_general_kwh",
        "Allgemeinstrom/WP geliefert (kWh/a)",
        "Common/heat pump electricity delivered (kWh/a)",
        MetricKind::Energy,
    ),
    ("co2_credit_tons", "CO₂-Gutschrift (t/a)", "CO₂ credit (t/a)", MetricKind::Co2),
    ("tenant_revenue_eur", "Einnahmen Mieter (€/a)", "Tenant revenue (€/a)", MetricKind::Money),
    (
        "general_revenue_eur",
        "Einnahmen Allgemeinstrom/WP (€/a)",
        "Common/heat pump revenue (€/a)",
        MetricKind::Money,
    ),
    ("roof_lease_income_eur", "Dachpacht Einnahme (€/a)", "Roof lease income (€/a)", MetricKind::Money),
    ("plant_lease_cost_eur", "Anlagenpacht Ausgabe (€/a)", "Plant lease expense (€/a)", MetricKind::Money),
    (
        "supply_chain_rate_ct_per_kwh",
        "Lieferkette Vergütung (ct/kWh)",
        "Supply chain compensation (ct/kWh)",
        MetricKind::Rate,
    ),
    ("other_costs_eur", "Sonstige Kosten WG (€/a)", "Other cooperative costs (€/a)", MetricKind::Money),
    ("net_result_eur", "Gesamtergebnis WG (€/a)", "Cooperative net result (€/a)", MetricKind::Money),
];

/// Assemble the comparison table from the pipeline outputs.
pub fn build_report(
    inputs: &ScenarioInputs,
    allocation: &EnergyAllocation,
    revenue: &RevenueComponents,
    results: &ModelResults,
    locale: Locale,
) -> ComparisonReport {
    let zero = Decimal::ZERO;
    let same = |v: Decimal| [v, v, v];

    let values: [[Decimal; 3]; 13] = [
        same(inputs.installed_capacity_kwp),
        same(allocation.annual_generation_kwh),
        same(Decimal::from(allocation.participant_count)),
        same(allocation.delivered_tenant_kwh),
        same(allocation.delivered_general_kwh),
        same(allocation.co2_credit_tons),
        [zero, revenue.tenant_revenue_eur, zero],
        [zero, revenue.general_revenue_eur, zero],
        [inputs.roof_lease_eur_year, zero, zero],
        [zero, inputs.plant_lease_eur_year, zero],
        [zero, zero, inputs.supply_chain_compensation_ct_per_kwh],
        same(inputs.other_costs_eur_year),
        [
            results.roof_lease.net_result_eur,
            results.plant_lease.net_result_eur,
            results.supply_chain.net_result_eur,
        ],
    ];

    let rows = ROWS
        .iter()
        .zip(values)
        .map(|(&(key, de, en, kind), [roof, plant, supply])| MetricRow {
            key: key.to_string(),
            label: match locale {
                Locale::De => de,
                Locale::En => en,
            }
            .to_string(),
            kind,
            roof_lease: kind.present(roof),
            plant_lease: kind.present(plant),
            supply_chain: kind.present(supply),
        })
        .collect();

    let columns = Model::ALL
        .iter()
        .map(|&model| ColumnHeader {
            model,
            label: model.column_label(locale).to_string(),
        })
        .collect();

    ComparisonReport {
        locale,
        parameter_header: "Parameter".to_string(),
        columns,
        rows,
        chart: net_result_chart(results, locale),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate, calculate_revenue, evaluate_models};
    use rust_decimal_macros::dec;

    fn report_for(inputs: &ScenarioInputs, locale: Locale) -> ComparisonReport {
        let allocation = allocate(inputs);
        let revenue = calculate_revenue(&allocation, inputs);
        let results = evaluate_models(&allocation, &revenue, inputs);
        build_report(inputs, &allocation, &revenue, &results, locale)
    }

    #[test]
    fn test_thirteen_rows_in_fixed_order() {
        let report = report_for(&ScenarioInputs::default(), Locale::De);
        let keys: Vec<&str> = report.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys.len(), 13);
        assert_eq!(keys[0], "installed_capacity_kwp");
        assert_eq!(keys[5], "co2_credit_tons");
        assert_eq!(keys[12], "net_result_eur");
        assert_eq!(report.columns.len(), 3);
        assert_eq!(report.columns[1].label, "Anlagenpachtmodell");
    }

    #[test]
    fn test_inapplicable_cells_are_zero() {
        let report = report_for(&ScenarioInputs::default(), Locale::De);
        let tenant = report.row("tenant_revenue_eur").unwrap();
        assert_eq!(tenant.roof_lease, Decimal::ZERO);
        assert_eq!(tenant.plant_lease, dec!(9288));
        assert_eq!(tenant.supply_chain, Decimal::ZERO);

        let roof = report.row("roof_lease_income_eur").unwrap();
        assert_eq!(roof.value(Model::RoofLease), dec!(3000));
        assert_eq!(roof.value(Model::PlantLease), Decimal::ZERO);

        let rate = report.row("supply_chain_rate_ct_per_kwh").unwrap();
        assert_eq!(rate.value(Model::SupplyChain), dec!(4.0));
        assert_eq!(rate.value(Model::RoofLease), Decimal::ZERO);
    }

    #[test]
    fn test_net_results_row() {
        let report = report_for(&ScenarioInputs::default(), Locale::De);
        let net = report.row("net_result_eur").unwrap();
        assert_eq!(net.roof_lease, dec!(3000));
        assert_eq!(net.plant_lease, dec!(5888));
        assert_eq!(net.supply_chain, dec!(1480));
    }

    #[test]
    fn test_money_and_co2_rounded_energy_not() {
        let mut input = ScenarioInputs::default();
        input.installed_capacity_kwp = dec!(150.333);
        input.co2_factor_kg_per_kwh = dec!(0.4017);
        input.tenant_price_ct_per_kwh = dec!(28.123);
        let report = report_for(&input, Locale::De);

        let generation = report.row("annual_generation_kwh").unwrap();
        assert_eq!(generation.roof_lease, dec!(142816.35));
        let co2 = report.row("co2_credit_tons").unwrap();
        // 142816.35 * 0.4017 / 1000 = 57.3693278...
        assert_eq!(co2.roof_lease, dec!(57.37));
        let tenant = report.row("tenant_revenue_eur").unwrap();
        // 27000 * 0.28123 + 1728 = 9321.21
        assert_eq!(tenant.plant_lease, dec!(9321.21));
        let capacity = report.row("installed_capacity_kwp").unwrap();
        assert_eq!(capacity.roof_lease, dec!(150.333));
    }

    #[test]
    fn test_english_labels() {
        let report = report_for(&ScenarioInputs::default(), Locale::En);
        assert_eq!(report.rows[12].label, "Cooperative net result (€/a)");
        assert_eq!(report.columns[0].label, "Roof lease");
    }

    #[test]
    fn test_participants_integer() {
        let report = report_for(&ScenarioInputs::default(), Locale::De);
        let participants = report.row("participant_count").unwrap();
        assert_eq!(participants.plant_lease, dec!(18));
        assert_eq!(participants.plant_lease.scale(), 0);
    }
}
