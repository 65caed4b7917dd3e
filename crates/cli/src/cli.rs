use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use portico_primitives::{CacheLevel, Phase, PortletMode, QName, WindowState};

#[derive(Parser, Debug)]
#[command(name = "portico")]
#[command(about = "Inspect and build portal URLs")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Driver configuration file (TOML)
	#[arg(short, long, value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the state encoded in a portal URL
	Decode {
		/// Relative or absolute portal URL
		url: String,

		/// Print JSON instead of text
		#[arg(long)]
		json: bool,
	},
	/// Build a URL for one window on top of an existing portal URL
	Link(LinkArgs),
	/// Escape text for embedding in markup
	Escape {
		/// Text to escape
		text: String,
	},
}

/// Arguments of `portico link`.
#[derive(Args, Debug)]
pub struct LinkArgs {
	/// Portal URL of the current request
	pub base: String,

	/// Window the new URL addresses
	#[arg(short, long)]
	pub window: String,

	/// Lifecycle phase: render, action or resource
	#[arg(short, long, default_value = "render")]
	pub phase: Phase,

	/// Portlet mode to switch to
	#[arg(short, long)]
	pub mode: Option<PortletMode>,

	/// Window state to switch to
	#[arg(short, long)]
	pub state: Option<WindowState>,

	/// Render parameter, repeatable: NAME=VALUE
	#[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_pair)]
	pub params: Vec<(String, String)>,

	/// Public render parameter, repeatable: NS:LOCAL=IDENTIFIER=VALUE
	#[arg(long = "public", value_name = "QNAME=ID=VALUE", value_parser = parse_public)]
	pub public: Vec<PublicArg>,

	/// Public render parameter to remove, repeatable: NS:LOCAL=IDENTIFIER
	#[arg(long = "remove-public", value_name = "QNAME=ID", value_parser = parse_removal)]
	pub remove_public: Vec<(QName, String)>,

	/// Resource id (resource phase)
	#[arg(long)]
	pub resource_id: Option<String>,

	/// Cache level: full, portlet or page (resource phase)
	#[arg(long)]
	pub cache: Option<CacheLevel>,

	/// Request a secure URL
	#[arg(long)]
	pub secure: bool,

	/// Prefix the configured origin
	#[arg(long)]
	pub absolute: bool,

	/// Escape the output for markup (relative URLs only)
	#[arg(long, conflicts_with = "absolute")]
	pub escape: bool,
}

/// One `--public` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicArg {
	pub qname: QName,
	pub identifier: String,
	pub value: String,
}

pub fn parse_pair(input: &str) -> Result<(String, String), String> {
	input
		.split_once('=')
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.ok_or_else(|| format!("expected NAME=VALUE, got {input:?}"))
}

/// Parses `{ns}local` or `ns:local`; the namespace may itself contain `:`.
pub fn parse_qname(input: &str) -> Result<QName, String> {
	if input.starts_with('{') {
		return input.parse().map_err(|e| format!("{e}"));
	}
	match input.rsplit_once(':') {
		Some((ns, local)) if !local.is_empty() => Ok(QName::new(ns, local)),
		None if !input.is_empty() => Ok(QName::local(input)),
		_ => Err(format!("invalid qualified name {input:?}")),
	}
}

fn parse_removal(input: &str) -> Result<(QName, String), String> {
	let (qname, identifier) = parse_pair(input)?;
	Ok((parse_qname(&qname)?, identifier))
}

fn parse_public(input: &str) -> Result<PublicArg, String> {
	let (qname, rest) = parse_pair(input)?;
	let (identifier, value) = rest
		.split_once('=')
		.ok_or_else(|| format!("expected QNAME=ID=VALUE, got {input:?}"))?;
	Ok(PublicArg {
		qname: parse_qname(&qname)?,
		identifier: identifier.to_string(),
		value: value.to_string(),
	})
}
