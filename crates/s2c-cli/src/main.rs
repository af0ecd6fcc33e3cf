use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use s2c_cli::{Cli, Config, convert};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support. Diagnostics go to stderr so
    // stdout carries nothing but the sheet.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(input) = cli.input.as_deref() else {
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    tracing::debug!(input = %input.display(), "conversion started");

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let options = cli.convert_options(config);

    let sheet = convert::render_file(input, &options)?;
    convert::write_sheet(&sheet, cli.output.as_deref())?;

    tracing::debug!("conversion finished");
    Ok(())
}
