use serde_json::Value;

/// Print just the key answer: the best model and its net result.
///
/// Falls back to well-known fields, then the first field of the result.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    if let Some(best) = value.pointer("/result/models/best_model").and_then(Value::as_str) {
        let net = value
            .pointer(&format!("/result/models/{best}/net_result_eur"))
            .map(format_minimal)
            .unwrap_or_default();
        return format!("{best}: {net}");
    }

    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["net_result_eur", "path"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    return format_minimal(val);
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_minimal(val));
        }
    }

    format_minimal(result_obj)
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_variants_core::{evaluate_scenario, Locale, ScenarioInputs};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_best_model_line() {
        let out = evaluate_scenario(&ScenarioInputs::default(), Locale::De).unwrap();
        let value = serde_json::to_value(out).unwrap();
        let line = minimal_line(&value);
        let (model, net) = line.split_once(": ").unwrap();
        assert_eq!(model, "plant_lease");
        assert_eq!(net.parse::<Decimal>().unwrap(), dec!(5888));
    }

    #[test]
    fn test_export_summary_prints_path() {
        let value = json!({"path": "out.csv", "rows": 13});
        assert_eq!(minimal_line(&value), "out.csv");
    }
}
