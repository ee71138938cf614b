mod cli;

use imgbatch::{
    config,
    converter::BatchConverter,
    report::{format_outcome, Summary},
};

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "imgbatch=debug,imgbatch_common=debug".to_string()
        } else {
            "imgbatch=info".to_string()
        }
    });

    // Logs go to stderr; stdout carries one line per converted file
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::load_config_or_default(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config::prepare_config(&mut config);
    config::validate_config(&config)?;

    run_batch(config)
}

fn run_batch(config: config::Config) -> Result<()> {
    let converter = BatchConverter::new(config)?;
    let mut summary = Summary::default();

    for outcome in converter.run()? {
        println!("{}", format_outcome(&outcome));
        summary.record(&outcome);
    }

    if summary.total() == 0 {
        tracing::info!(
            "No {} files found in {:?}",
            converter.config().source_suffix,
            converter.config().source_dir
        );
    } else {
        tracing::info!("Batch complete: {}", summary);
    }

    Ok(())
}
