use anyhow::Context;
use clap::Parser;
use race_tracker::utils::{logger, validation::Validate};
use race_tracker::{
    CliConfig, ConsoleNotificationService, InMemoryRaceRepository, InMemoryRunnerRepository,
    SeedFile, SeedImporter, Services, TrackerConfig,
};

fn load_settings(cli: &CliConfig) -> anyhow::Result<TrackerConfig> {
    let settings = match &cli.config {
        Some(path) => TrackerConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => TrackerConfig::default(),
    };
    settings.validate().context("invalid configuration")?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(4);
        }
    };

    let format = if cli.json_logs {
        logger::LogFormat::Json
    } else {
        settings.log_format()
    };
    logger::init_logger(format, cli.verbose, settings.log_level());

    tracing::info!("Starting race-tracker");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let notifier = if settings.notifications_enabled() {
        ConsoleNotificationService::new()
    } else {
        ConsoleNotificationService::disabled()
    };
    let services = Services::new(
        InMemoryRunnerRepository::new(),
        InMemoryRaceRepository::new(),
        notifier,
    )
    .with_welcome_message(settings.welcome_message());

    let Some(seed_path) = &cli.seed else {
        tracing::warn!("No seed file given, nothing to import (use --seed <file>)");
        return Ok(());
    };

    let seed = SeedFile::from_file(seed_path)
        .with_context(|| format!("failed to load seed file '{}'", seed_path))?;

    match SeedImporter::new(&services).import(&seed).await {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Err(e) => {
            tracing::error!("❌ Import failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
