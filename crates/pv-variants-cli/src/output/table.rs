use colored::Colorize;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use pv_variants_core::report::{chart_titles, ChartBar, ComparisonReport};
use pv_variants_core::Locale;

use crate::output::report::{extract_report, report_records};

const BAR_WIDTH: u32 = 40;

/// Format output as a table using the tabled crate.
///
/// Comparison reports are rendered as the model table plus a net-result bar
/// chart; anything else falls back to field/value tables.
pub fn print_table(value: &Value, locale: Locale) {
    if let Some(report) = extract_report(value) {
        print_report(&report, locale);
        if let Value::Object(envelope) = value {
            print_envelope_notes(envelope);
        }
        return;
    }

    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(res_map)) => {
                print_flat_object(res_map);
                print_envelope_notes(map);
            }
            _ => print_flat_object(map),
        },
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_report(report: &ComparisonReport, locale: Locale) {
    let mut builder = Builder::default();
    for record in report_records(report) {
        builder.push_record(record);
    }
    println!("{}", Table::from(builder));

    println!();
    for line in chart_lines(&report.chart, locale) {
        println!("{}", line);
    }
}

/// Horizontal bars scaled to the largest absolute net result.
fn chart_lines(bars: &[ChartBar], locale: Locale) -> Vec<String> {
    let (x_title, y_title, title) = chart_titles(locale);
    let mut lines = vec![format!("{} ({} / {})", title.bold(), x_title, y_title)];

    let max_abs = bars
        .iter()
        .map(|b| b.net_result_eur.abs())
        .max()
        .unwrap_or(Decimal::ZERO);
    let label_width = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);

    for bar in bars {
        let len = if max_abs.is_zero() {
            0
        } else {
            (bar.net_result_eur.abs() / max_abs * Decimal::from(BAR_WIDTH))
                .round()
                .to_usize()
                .unwrap_or(0)
        };
        let body = "█".repeat(len);
        let body = if bar.net_result_eur.is_sign_negative() {
            body.red().to_string()
        } else {
            body.green().to_string()
        };
        lines.push(format!(
            "{:<width$} │{} {:.2}",
            bar.label,
            body,
            bar.net_result_eur,
            width = label_width
        ));
    }
    lines
}

fn print_envelope_notes(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_flat_object(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_variants_core::Model;
    use rust_decimal_macros::dec;

    fn bar(model: Model, value: Decimal) -> ChartBar {
        ChartBar {
            model,
            label: model.short_label(Locale::De).to_string(),
            net_result_eur: value,
        }
    }

    #[test]
    fn test_chart_scales_to_largest_bar() {
        colored::control::set_override(false);
        let bars = [
            bar(Model::RoofLease, dec!(3000)),
            bar(Model::PlantLease, dec!(6000)),
            bar(Model::SupplyChain, dec!(-1500)),
        ];
        let lines = chart_lines(&bars, Locale::De);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].matches('█').count(), 20);
        assert_eq!(lines[2].matches('█').count(), 40);
        assert_eq!(lines[3].matches('█').count(), 10);
        assert!(lines[3].ends_with("-1500.00"));
    }

    #[test]
    fn test_chart_handles_largest_decimal() {
        colored::control::set_override(false);
        let bars = [
            bar(Model::RoofLease, Decimal::MAX),
            bar(Model::PlantLease, dec!(-6000)),
        ];
        let lines = chart_lines(&bars, Locale::De);
        assert_eq!(lines[1].matches('█').count(), 40);
        assert_eq!(lines[2].matches('█').count(), 0);
    }

    #[test]
    fn test_chart_all_zero() {
        colored::control::set_override(false);
        let bars = [bar(Model::RoofLease, Decimal::ZERO)];
        let lines = chart_lines(&bars, Locale::En);
        assert_eq!(lines[1].matches('█').count(), 0);
    }
}
