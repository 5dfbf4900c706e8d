//! Calculation engine: energy allocation, revenue and per-model results.
//!
//! Every function here is total for inputs that passed
//! [`ScenarioInputs::validate`](crate::inputs::ScenarioInputs::validate).

pub mod allocation;
pub mod models;
pub mod revenue;

pub use allocation::{allocate, EnergyAllocation};
pub use models::{evaluate_model, evaluate_models, ModelResult, ModelResults};
pub use revenue::{calculate_revenue, RevenueComponents};
