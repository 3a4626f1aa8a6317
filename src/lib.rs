pub mod catalog;
pub mod cost;
pub mod error;
pub mod generator;
pub mod sizing;
pub mod ui;

pub use catalog::{Catalog, HardwareProfile, builtin_catalog};
pub use cost::{Algorithm, DEFAULT_KWH_COST_USD, hashes_per_dollar, hashes_per_watt_dollar};
pub use error::{Error, Result};
pub use generator::{CharsetPolicy, generate};
pub use sizing::{AttackScenario, Resource, Service, SizingResult, required_combinations};
