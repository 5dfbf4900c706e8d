use rust_decimal::Decimal;
use serde_json::Value;

use pv_variants_core::report::{ComparisonReport, MetricKind};

/// Locate a comparison report in a command's output.
///
/// Accepts the report itself or a full evaluation envelope.
pub fn extract_report(value: &Value) -> Option<ComparisonReport> {
    let candidate = if value.get("rows").is_some() && value.get("columns").is_some() {
        value
    } else {
        value.pointer("/result/report")?
    };
    serde_json::from_value(candidate.clone()).ok()
}

/// Header record followed by one record per metric row.
pub fn report_records(report: &ComparisonReport) -> Vec<Vec<String>> {
    let mut records = Vec::with_capacity(report.rows.len() + 1);

    let mut header = vec![report.parameter_header.clone()];
    header.extend(report.columns.iter().map(|c| c.label.clone()));
    records.push(header);

    for row in &report.rows {
        let mut record = vec![row.label.clone()];
        record.extend(
            report
                .columns
                .iter()
                .map(|c| format_cell(row.kind, row.value(c.model))),
        );
        records.push(record);
    }

    records
}

/// Money and CO2 with two decimals, counts as integers, the rest as-is.
pub fn format_cell(kind: MetricKind, value: Decimal) -> String {
    match kind {
        MetricKind::Money | MetricKind::Co2 => format!("{:.2}", value),
        MetricKind::Count => value.trunc().to_string(),
        MetricKind::Capacity | MetricKind::Energy | MetricKind::Rate => {
            value.normalize().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_variants_core::{evaluate_scenario, Locale, ScenarioInputs};
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(MetricKind::Money, dec!(9288)), "9288.00");
        assert_eq!(format_cell(MetricKind::Co2, dec!(57.369)), "57.37");
        assert_eq!(format_cell(MetricKind::Count, dec!(18)), "18");
        assert_eq!(format_cell(MetricKind::Energy, dec!(142500.00)), "142500");
        assert_eq!(format_cell(MetricKind::Rate, dec!(4.0)), "4");
    }

    #[test]
    fn test_extract_from_envelope_and_bare_report() {
        let out = evaluate_scenario(&ScenarioInputs::default(), Locale::En).unwrap();
        let envelope = serde_json::to_value(&out).unwrap();
        let bare = serde_json::to_value(&out.result.report).unwrap();

        assert_eq!(extract_report(&envelope), Some(out.result.report.clone()));
        assert_eq!(extract_report(&bare), Some(out.result.report));
        assert_eq!(extract_report(&serde_json::json!({"path": "x"})), None);
    }

    #[test]
    fn test_records_shape() {
        let out = evaluate_scenario(&ScenarioInputs::default(), Locale::De).unwrap();
        let records = report_records(&out.result.report);
        assert_eq!(records.len(), 14);
        assert!(records.iter().all(|r| r.len() == 4));
        assert_eq!(records[3], ["Teilnehmer (WE)", "18", "18", "18"]);
    }
}
