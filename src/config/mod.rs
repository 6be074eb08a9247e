//! Policy configuration for the absence cost engine.
//!
//! This module provides loading of policy defaults (employer period length,
//! working days, surcharge and indirect cost rates) from YAML files.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{PolicyConfig, PolicyDefaults, PolicyMetadata};
