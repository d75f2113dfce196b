//! CLI entrypoint for survey-form
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use std::sync::Arc;
use survey_application::SurveyController;
use survey_infrastructure::{
    ConfigLoader, FileConfig, JsonlSessionLogger, StoreBackend, build_store,
};
use survey_presentation::{Cli, OutputConfig, SurveyRepl};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Apply command-line flags on top of the merged file configuration.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(path) = &cli.store {
        config.store.backend = StoreBackend::File;
        config.store.path = path.display().to_string();
    }
    if let Some(url) = &cli.store_url {
        config.store.backend = StoreBackend::Http;
        config.store.base_url = Some(url.clone());
    }
    if let Some(collection) = &cli.collection {
        config.store.collection = collection.clone();
    }
    if let Some(path) = &cli.session_log {
        config.logging.session_log = Some(path.display().to_string());
    }
    if cli.quiet {
        config.output.show_progress = false;
    }
    if cli.no_color {
        config.output.color = false;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("{}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    for issue in config.validate() {
        warn!("Configuration: {}", issue);
    }

    let output = OutputConfig {
        color: config.output.color,
        show_progress: config.output.show_progress,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    info!("Starting survey-form");

    // === Dependency Injection ===
    let store = build_store(&config.store)?;
    let mut controller = SurveyController::new(store);

    if let Some(path) = config.logging.session_log_path()
        && let Some(logger) = JsonlSessionLogger::new(&path)
    {
        info!("Session log: {}", logger.path().display());
        controller = controller.with_session_logger(Arc::new(logger));
    }

    let mut repl = SurveyRepl::new(controller).with_output_config(&output);
    repl.run().await?;

    Ok(())
}
