use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::ModelResults;
use crate::types::{round2, Locale, Model};

/// One bar of the net-result comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub model: Model,
    pub label: String,
    pub net_result_eur: Decimal,
}

/// Net result per model, in column order.
pub fn net_result_chart(results: &ModelResults, locale: Locale) -> Vec<ChartBar> {
    results
        .iter()
        .map(|r| ChartBar {
            model: r.model,
            label: r.model.short_label(locale).to_string(),
            net_result_eur: round2(r.net_result_eur),
        })
        .collect()
}

/// Chart axis titles: (x, y, title).
pub fn chart_titles(locale: Locale) -> (&'static str, &'static str, &'static str) {
    match locale {
        Locale::De => ("Modell", "Ergebnis (€/a)", "Gesamtergebnis der WG pro Jahr"),
        Locale::En => ("Model", "Result (€/a)", "Cooperative net result per year"),
    }
}
