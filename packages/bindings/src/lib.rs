use napi::Result as NapiResult;
use napi_derive::napi;

use pv_variants_core::engine::{allocate, calculate_revenue, evaluate_models};
use pv_variants_core::{Locale, ScenarioInputs};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_inputs(input_json: &str) -> NapiResult<ScenarioInputs> {
    let inputs: ScenarioInputs = serde_json::from_str(input_json).map_err(to_napi_error)?;
    inputs.validate().map_err(to_napi_error)?;
    Ok(inputs)
}

fn parse_locale(locale: Option<String>) -> NapiResult<Locale> {
    match locale.as_deref() {
        None | Some("de") => Ok(Locale::De),
        Some("en") => Ok(Locale::En),
        Some(other) => Err(napi::Error::from_reason(format!(
            "Unknown locale '{other}'. Expected one of: de, en"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[napi]
pub fn evaluate_scenario(input_json: String, locale: Option<String>) -> NapiResult<String> {
    let inputs = parse_inputs(&input_json)?;
    let output = pv_variants_core::evaluate_scenario(&inputs, parse_locale(locale)?)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn comparison_report(input_json: String, locale: Option<String>) -> NapiResult<String> {
    let inputs = parse_inputs(&input_json)?;
    let output = pv_variants_core::evaluate_scenario(&inputs, parse_locale(locale)?)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output.result.report).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Engine stages
// ---------------------------------------------------------------------------

#[napi]
pub fn allocate_energy(input_json: String) -> NapiResult<String> {
    let inputs = parse_inputs(&input_json)?;
    serde_json::to_string(&allocate(&inputs)).map_err(to_napi_error)
}

#[napi]
pub fn model_results(input_json: String) -> NapiResult<String> {
    let inputs = parse_inputs(&input_json)?;
    let allocation = allocate(&inputs);
    let revenue = calculate_revenue(&allocation, &inputs);
    let results = evaluate_models(&allocation, &revenue, &inputs);
    serde_json::to_string(&results).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Form metadata
// ---------------------------------------------------------------------------

#[napi]
pub fn default_inputs() -> NapiResult<String> {
    serde_json::to_string(&ScenarioInputs::default()).map_err(to_napi_error)
}

#[napi]
pub fn field_specs() -> NapiResult<String> {
    serde_json::to_string(pv_variants_core::field_specs()).map_err(to_napi_error)
}
