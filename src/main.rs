/// Command line entry point for the holiday optimizer
use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use tracing::{error, info};

use holiday_optimizer::{
    cli::Cli,
    config::load_config,
    logging,
    optimizer::compute_optimization_result,
    report,
    Config, HolidayError,
};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if let Some(err) = e.downcast_ref::<HolidayError>() {
            error!("Run failed: {} ({})", err, err.error_code());
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };

    logging::init(cli.verbose, &config.log_level);

    let settings = cli.resolve(&config, Local::now().year())?;
    info!(
        "Optimizing {} with {} voluntary holiday(s), mode {}",
        settings.year,
        settings.num_voluntary_holidays,
        settings.mode.as_str()
    );

    let result = compute_optimization_result(
        settings.year,
        settings.num_voluntary_holidays,
        settings.mode,
        settings.exact_warn_threshold,
    )?;

    // Nothing reaches stdout until the whole computation has succeeded
    let mut stdout = std::io::stdout().lock();
    report::write_report(&result, settings.format, &mut stdout)?;

    Ok(())
}
