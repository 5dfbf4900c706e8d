pub mod engine;
pub mod error;
pub mod inputs;
pub mod report;
pub mod scenario;
pub mod types;

pub use error::PvVariantsError;
pub use inputs::{field_specs, FieldSpec, ScenarioInputs};
pub use scenario::{evaluate_scenario, ScenarioOutput};
pub use types::*;

/// Standard result type for all pv-variants operations
pub type PvVariantsResult<T> = Result<T, PvVariantsError>;
