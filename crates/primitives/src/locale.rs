use std::fmt;

use serde::{Deserialize, Serialize};

/// A locale tag such as `en` or `de_CH`.
///
/// Comparison is exact: `en` and `en_US` are different locales and no
/// fallback between them is ever attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
	/// Creates a locale from its tag.
	pub fn new(tag: impl Into<String>) -> Self {
		Self(tag.into())
	}

	/// Returns the locale tag.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Locale {
	fn from(tag: &str) -> Self {
		Self(tag.to_string())
	}
}
