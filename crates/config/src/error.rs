//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A path prefix is not empty and does not start with `/`, or ends with `/`.
	#[error("invalid {field}: {value:?} (expected empty or '/segment' without trailing slash)")]
	InvalidPath {
		/// Config key holding the path.
		field: &'static str,
		/// The rejected value.
		value: String,
	},

	/// The origin scheme is neither `http` nor `https`.
	#[error("invalid scheme: {0:?} (expected 'http' or 'https')")]
	InvalidScheme(String),

	/// The origin host is empty.
	#[error("host must not be empty")]
	EmptyHost,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
