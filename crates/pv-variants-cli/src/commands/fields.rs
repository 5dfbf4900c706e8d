use serde_json::Value;

use pv_variants_core::field_specs;

/// List every scenario field with its bounds, default and form step.
pub fn run_fields() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(field_specs())?)
}
