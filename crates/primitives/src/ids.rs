use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of one portlet window on a portal page.
///
/// The identifier is opaque: any string the portal assigns is accepted and
/// round-trips unchanged through the URL codec.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
	/// Creates a window identifier.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for WindowId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for WindowId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

impl From<String> for WindowId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

impl Borrow<str> for WindowId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for WindowId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
