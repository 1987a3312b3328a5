//! Input values, validation and scenario loading

mod data;
pub mod loader;

pub use data::BusinessCaseInputs;
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
