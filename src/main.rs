use clap::Parser;
use varasto::core::demo;
use varasto::core::Scenario;
use varasto::utils::error::ErrorSeverity;
use varasto::utils::{logger, validation::Validate};
use varasto::{
    Catalog, CliConfig, Command, ConsoleNarrator, InMemoryRepository, LocalStorage, ReportFormat,
    ReportWriter, ScenarioConfig, ScenarioEngine, SeedConfig, VarastoError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let result = match &config.command {
        Command::Demo => run_demo(),
        Command::Run {
            scenario,
            output,
            format,
            dry_run,
        } => run_scenario_file(scenario, output.as_deref(), *format, *dry_run),
        Command::Catalog { seed } => show_catalog(seed),
    };

    if let Err(e) = result {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run_demo() -> Result<(), VarastoError> {
    tracing::info!("🚀 Running built-in walkthrough");
    let scenario = demo::walkthrough();
    let mut engine = ScenarioEngine::new(ConsoleNarrator::stdout());
    engine.run(&scenario)?;
    Ok(())
}

fn run_scenario_file(
    path: &str,
    output: Option<&str>,
    format: Option<ReportFormat>,
    dry_run: bool,
) -> Result<(), VarastoError> {
    tracing::info!("📁 Loading scenario from: {}", path);
    let config = ScenarioConfig::from_file(path)?;
    config.validate()?;
    tracing::info!("✅ Scenario '{}' loaded and validated", config.scenario.name);

    let scenario = config.to_scenario();
    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - No steps will be executed");
        print_summary(&scenario);
        return Ok(());
    }

    let mut engine = ScenarioEngine::new(ConsoleNarrator::stdout());
    let report = engine.run(&scenario)?;

    if let Some((dir, format)) = config.report_target(output, format) {
        let writer = ReportWriter::new(LocalStorage::new(dir));
        for written in writer.save(&report, format)? {
            tracing::info!("📁 Report saved to: {}", written);
            println!("📁 Report saved to: {}", written);
        }
    }

    Ok(())
}

fn print_summary(scenario: &Scenario) {
    println!("Scenario: {}", scenario.name);
    if let Some(description) = &scenario.description {
        println!("  {}", description);
    }
    println!("Stores:");
    for spec in &scenario.stores {
        match spec.initial_balance {
            Some(balance) => println!(
                "  {} (capacity {}, initial balance {})",
                spec.name, spec.capacity, balance
            ),
            None => println!("  {} (capacity {})", spec.name, spec.capacity),
        }
    }
    println!("Steps: {}", scenario.steps.len());
}

fn show_catalog(seed_path: &str) -> Result<(), VarastoError> {
    tracing::info!("📁 Loading warehouse seed from: {}", seed_path);
    let seed = SeedConfig::from_file(seed_path)?;

    let mut catalog = Catalog::new(InMemoryRepository::new());
    let created = seed.apply(&mut catalog);

    print!("{}", catalog.index());
    for id in created {
        if let Some(view) = catalog.view_warehouse(id) {
            println!();
            print!("{}", view);
        }
    }

    Ok(())
}
