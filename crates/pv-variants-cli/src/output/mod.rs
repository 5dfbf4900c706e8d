pub mod csv_out;
pub mod document;
pub mod minimal;
pub mod report;
pub mod table;

use crate::OutputFormat;
use pv_variants_core::Locale;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value, locale: Locale) {
    match format {
        OutputFormat::Json => document::print_json(value),
        OutputFormat::Yaml => document::print_yaml(value),
        OutputFormat::Table => table::print_table(value, locale),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}
