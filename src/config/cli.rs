use crate::adapters::report::ReportFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "varasto")]
#[command(about = "Bounded storage containers and a small warehouse catalog")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the built-in walkthrough
    Demo,

    /// Run a scenario described in a TOML file
    Run {
        /// Path to the scenario file
        #[arg(short, long, default_value = "scenario.toml")]
        scenario: String,

        /// Directory for reports (overrides [output].path)
        #[arg(short, long)]
        output: Option<String>,

        /// Report format (overrides [output].format)
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Validate and summarize without running
        #[arg(long)]
        dry_run: bool,
    },

    /// Load a warehouse seed file and print the catalog
    Catalog {
        /// Path to the seed file
        #[arg(long, default_value = "warehouses.toml")]
        seed: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_command() {
        let config = CliConfig::parse_from([
            "varasto", "-v", "run", "--scenario", "s.toml", "--format", "json",
        ]);

        assert!(config.verbose);
        match config.command {
            Command::Run {
                scenario,
                output,
                format,
                dry_run,
            } => {
                assert_eq!(scenario, "s.toml");
                assert_eq!(output, None);
                assert_eq!(format, Some(ReportFormat::Json));
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_catalog_seed_default() {
        let config = CliConfig::parse_from(["varasto", "catalog"]);
        assert!(matches!(config.command, Command::Catalog { ref seed } if seed == "warehouses.toml"));
    }
}
