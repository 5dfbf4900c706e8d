use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tracing::debug;

use pv_variants_core::report::{ComparisonReport, EXPORT_FILE_STEM, SHEET_NAME};
use pv_variants_core::{evaluate_scenario, Locale, ScenarioInputs};

use crate::input;
use crate::output::report::report_records;
use crate::OutputFormat;

/// Scenario parameters. Flags override values read from `--input` or stdin;
/// anything left unset keeps its default.
#[derive(Args, Debug, Default)]
#[command(allow_hyphen_values = true)]
pub struct ScenarioArgs {
    /// Path to JSON or YAML scenario file
    #[arg(long)]
    pub input: Option<String>,

    /// Installed PV capacity (kWp, min 10)
    #[arg(long, alias = "kwp")]
    pub installed_capacity_kwp: Option<Decimal>,

    /// Specific yield (kWh/kWp per year, min 600)
    #[arg(long, alias = "yield")]
    pub specific_yield_kwh_per_kwp_year: Option<Decimal>,

    /// Number of residential units (min 1)
    #[arg(long, alias = "units")]
    pub unit_count: Option<u32>,

    /// Consumption per unit (kWh per year, min 500)
    #[arg(long)]
    pub consumption_per_unit_kwh_year: Option<Decimal>,

    /// Participating share of units in percent (0-100)
    #[arg(long, alias = "participant-rate")]
    pub participant_rate_percent: Option<u32>,

    /// Common-area consumption incl. heat pump (kWh per year)
    #[arg(long)]
    pub general_consumption_kwh_year: Option<Decimal>,

    /// CO2 factor (kg/kWh)
    #[arg(long)]
    pub co2_factor_kg_per_kwh: Option<Decimal>,

    /// Tenant energy price (ct/kWh)
    #[arg(long)]
    pub tenant_price_ct_per_kwh: Option<Decimal>,

    /// Tenant base fee (EUR per month and participant)
    #[arg(long)]
    pub tenant_base_fee_eur_per_month: Option<Decimal>,

    /// Common-area energy price (ct/kWh)
    #[arg(long)]
    pub general_price_ct_per_kwh: Option<Decimal>,

    /// Common-area base fee (EUR per month)
    #[arg(long)]
    pub general_base_fee_eur_per_month: Option<Decimal>,

    /// Roof lease received (EUR per year)
    #[arg(long)]
    pub roof_lease_eur_year: Option<Decimal>,

    /// Plant lease paid (EUR per year)
    #[arg(long)]
    pub plant_lease_eur_year: Option<Decimal>,

    /// Supply-chain compensation (ct/kWh)
    #[arg(long)]
    pub supply_chain_compensation_ct_per_kwh: Option<Decimal>,

    /// Other cooperative costs (EUR per year)
    #[arg(long)]
    pub other_costs_eur_year: Option<Decimal>,
}

impl ScenarioArgs {
    /// Overlay the flags that were given onto `base`.
    fn apply(&self, mut base: ScenarioInputs) -> ScenarioInputs {
        if let Some(v) = self.installed_capacity_kwp {
            base.installed_capacity_kwp = v;
        }
        if let Some(v) = self.specific_yield_kwh_per_kwp_year {
            base.specific_yield_kwh_per_kwp_year = v;
        }
        if let Some(v) = self.unit_count {
            base.unit_count = v;
        }
        if let Some(v) = self.consumption_per_unit_kwh_year {
            base.consumption_per_unit_kwh_year = v;
        }
        if let Some(v) = self.participant_rate_percent {
            base.participant_rate_percent = v;
        }
        if let Some(v) = self.general_consumption_kwh_year {
            base.general_consumption_kwh_year = v;
        }
        if let Some(v) = self.co2_factor_kg_per_kwh {
            base.co2_factor_kg_per_kwh = v;
        }
        if let Some(v) = self.tenant_price_ct_per_kwh {
            base.tenant_price_ct_per_kwh = v;
        }
        if let Some(v) = self.tenant_base_fee_eur_per_month {
            base.tenant_base_fee_eur_per_month = v;
        }
        if let Some(v) = self.general_price_ct_per_kwh {
            base.general_price_ct_per_kwh = v;
        }
        if let Some(v) = self.general_base_fee_eur_per_month {
            base.general_base_fee_eur_per_month = v;
        }
        if let Some(v) = self.roof_lease_eur_year {
            base.roof_lease_eur_year = v;
        }
        if let Some(v) = self.plant_lease_eur_year {
            base.plant_lease_eur_year = v;
        }
        if let Some(v) = self.supply_chain_compensation_ct_per_kwh {
            base.supply_chain_compensation_ct_per_kwh = v;
        }
        if let Some(v) = self.other_costs_eur_year {
            base.other_costs_eur_year = v;
        }
        base
    }

    /// Input file, else piped stdin, else defaults; then flag overrides.
    pub fn load(&self) -> Result<ScenarioInputs, Box<dyn std::error::Error>> {
        let base: ScenarioInputs = if let Some(ref path) = self.input {
            debug!(path = %path, "reading scenario file");
            input::file::read_input(path)?
        } else if let Some(data) = input::stdin::read_stdin()? {
            debug!("reading scenario from stdin");
            data
        } else {
            ScenarioInputs::default()
        };
        Ok(self.apply(base))
    }
}

/// Arguments for spreadsheet export
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Target CSV file (default: variantenvergleich_pv_modelle.csv)
    #[arg(long)]
    pub path: Option<String>,
}

/// Document formats of the dump.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DumpFormat {
    Json,
    Yaml,
}

impl From<DumpFormat> for OutputFormat {
    fn from(format: DumpFormat) -> Self {
        match format {
            DumpFormat::Json => OutputFormat::Json,
            DumpFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Arguments for the documentation dump
#[derive(Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Dump format; takes precedence over --output
    #[arg(long)]
    pub format: Option<DumpFormat>,
}

/// Full evaluation: allocation, revenue, model results, report and dump.
pub fn run_compare(args: ScenarioArgs, locale: Locale) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.load()?;
    let output = evaluate_scenario(&inputs, locale)?;
    Ok(serde_json::to_value(output)?)
}

/// Only the 13-row comparison table.
pub fn run_report(args: ScenarioArgs, locale: Locale) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.load()?;
    let output = evaluate_scenario(&inputs, locale)?;
    Ok(serde_json::to_value(output.result.report)?)
}

/// Hierarchical dump of inputs and derived values.
pub fn run_dump(args: DumpArgs, locale: Locale) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.scenario.load()?;
    let output = evaluate_scenario(&inputs, locale)?;
    Ok(serde_json::to_value(output.result.dump)?)
}

/// Write the comparison table to a CSV file.
pub fn run_export(args: ExportArgs, locale: Locale) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.scenario.load()?;
    let output = evaluate_scenario(&inputs, locale)?;
    let path = args
        .path
        .unwrap_or_else(|| format!("{EXPORT_FILE_STEM}.csv"));

    write_report_csv(&output.result.report, &path)?;

    Ok(json!({
        "path": path,
        "sheet": SHEET_NAME,
        "rows": output.result.report.rows.len(),
        "columns": output.result.report.columns.len() + 1,
    }))
}

fn write_report_csv(report: &ComparisonReport, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| format!("Failed to create '{}': {}", path, e))?;
    for record in report_records(report) {
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    debug!(path, "report exported");
    Ok(())
}
