//! Configuration for the portal driver's URL layer.
//!
//! Configuration is written in TOML. Every key is optional; missing keys
//! take the defaults shown here:
//!
//! ```toml
//! # What `set_secure(true)` on a URL builder does: "ignore" or "reject".
//! secure = "ignore"
//! # Default tracing filter for the CLI when RUST_LOG is unset.
//! log-filter = "info"
//!
//! [url]
//! context-path = "/pluto"
//! servlet-path = "/portal"
//! default-page = ""
//! scheme = "http"
//! host = "localhost"
//! # port = 8080
//! ```

pub mod error;

use std::path::Path;

pub use error::{ConfigError, Result};
use serde::{Deserialize, Serialize};


/// Parsed driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DriverConfig {
	/// URL layout and origin.
	pub url: UrlConfig,
	/// Handling of secure-URL requests.
	pub secure: SecurePolicy,
	/// Tracing filter used when `RUST_LOG` is not set.
	pub log_filter: String,
}

impl Default for DriverConfig {
	fn default() -> Self {
		Self {
			url: UrlConfig::default(),
			secure: SecurePolicy::default(),
			log_filter: "info".to_string(),
		}
	}
}

/// Where portal URLs live and how absolute URLs are prefixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct UrlConfig {
	/// Web application context path, e.g. `/pluto`. Empty for the root context.
	pub context_path: String,
	/// Servlet path of the portal driver, e.g. `/portal`.
	pub servlet_path: String,
	/// Page rendered when a URL names none.
	pub default_page: String,
	/// Scheme of absolute URLs.
	pub scheme: String,
	/// Host of absolute URLs.
	pub host: String,
	/// Port of absolute URLs; omitted from the URL when unset.
	pub port: Option<u16>,
}

impl Default for UrlConfig {
	fn default() -> Self {
		Self {
			context_path: "/pluto".to_string(),
			servlet_path: "/portal".to_string(),
			default_page: String::new(),
			scheme: "http".to_string(),
			host: "localhost".to_string(),
			port: None,
		}
	}
}

impl UrlConfig {
	/// `{scheme}://{host}[:{port}]`.
	pub fn origin(&self) -> String {
		match self.port {
			Some(port) => format!("{}://{}:{port}", self.scheme, self.host),
			None => format!("{}://{}", self.scheme, self.host),
		}
	}

	/// Context path followed by servlet path; every portal URL path starts
	/// with this prefix.
	pub fn base_path(&self) -> String {
		format!("{}{}", self.context_path, self.servlet_path)
	}

	fn validate(&self) -> Result<()> {
		for (field, value) in [("context-path", &self.context_path), ("servlet-path", &self.servlet_path)] {
			let valid = value.is_empty() || (value.starts_with('/') && !value.ends_with('/'));
			if !valid {
				return Err(ConfigError::InvalidPath {
					field,
					value: value.clone(),
				});
			}
		}
		if !matches!(self.scheme.as_str(), "http" | "https") {
			return Err(ConfigError::InvalidScheme(self.scheme.clone()));
		}
		if self.host.is_empty() {
			return Err(ConfigError::EmptyHost);
		}
		Ok(())
	}
}

/// What a URL builder does when asked for a secure URL.
///
/// Switching protocols is not supported by this driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurePolicy {
	/// Treat the request as a no-op.
	#[default]
	Ignore,
	/// Fail the request with an unsupported-operation error.
	Reject,
}

impl DriverConfig {
	/// Parse a TOML string into a validated [`DriverConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Checks invariants the deserializer cannot express.
	pub fn validate(&self) -> Result<()> {
		self.url.validate()
	}
}
