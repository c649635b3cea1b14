pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{
    console::ConsoleNarrator,
    memory::InMemoryRepository,
    report::{ReportFormat, ReportWriter},
    storage::LocalStorage,
};
pub use config::{scenario_config::ScenarioConfig, seed_config::SeedConfig};
pub use crate::core::{catalog::Catalog, scenario::ScenarioEngine, BoundedStore};
pub use utils::error::{Result, VarastoError};
