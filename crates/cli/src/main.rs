//! Portico command-line inspector.
//!
//! Decodes portal URLs into their window state, builds new URLs through the
//! per-window provider, and escapes text for markup.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use portico_config::DriverConfig;
use tracing::debug;

fn main() -> Result<()> {
	let cli = Cli::parse();

	let config = match &cli.config {
		Some(path) => DriverConfig::load(path).with_context(|| format!("failed to load {}", path.display()))?,
		None => DriverConfig::default(),
	};
	setup_tracing(&config, cli.verbose);
	debug!(?config, "loaded driver configuration");

	let output = match cli.command {
		Command::Decode { url, json } => commands::decode(&config, &url, json)?,
		Command::Link(args) => commands::link(&config, args)?,
		Command::Escape { text } => commands::escape(&text),
	};
	println!("{}", output.trim_end());
	Ok(())
}

/// Logs to stderr. `RUST_LOG` wins; otherwise `--verbose` selects debug
/// output and the configured filter applies.
fn setup_tracing(config: &DriverConfig, verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"))
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
