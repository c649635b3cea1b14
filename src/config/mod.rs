#[cfg(feature = "cli")]
pub mod cli;
pub mod scenario_config;
pub mod seed_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
