pub mod fields;
pub mod scenario;
