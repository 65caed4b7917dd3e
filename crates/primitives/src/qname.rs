use std::fmt;
use std::str::FromStr;

use crate::{PrimitiveError, string_serde};


/// A namespace-qualified name, written `{namespace}local`.
///
/// The namespace may be empty, in which case the display form is just the
/// local part, or `{}local` when the local part itself starts with `{`.
/// Parsing splits at the last `}`, so the namespace may contain braces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
	namespace: String,
	local: String,
}

impl QName {
	/// Creates a qualified name.
	///
	/// The local part must be non-empty and, when the namespace is not, free
	/// of `}`. XML local names always are. Other names do not survive a
	/// display and parse round trip.
	pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			local: local.into(),
		}
	}

	/// Creates a name without a namespace.
	pub fn local(local: impl Into<String>) -> Self {
		Self::new(String::new(), local)
	}

	/// Returns the namespace URI, empty when unqualified.
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Returns the local part.
	pub fn local_part(&self) -> &str {
		&self.local
	}
}

impl fmt::Display for QName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.namespace.is_empty() && !self.local.starts_with('{') {
			f.write_str(&self.local)
		} else {
			write!(f, "{{{}}}{}", self.namespace, self.local)
		}
	}
}

impl FromStr for QName {
	type Err = PrimitiveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (namespace, local) = match s.strip_prefix('{') {
			Some(rest) => rest.rsplit_once('}').ok_or_else(|| PrimitiveError::MalformedQName(s.to_string()))?,
			None => ("", s),
		};
		if local.is_empty() {
			return Err(PrimitiveError::MalformedQName(s.to_string()));
		}
		Ok(Self::new(namespace, local))
	}
}

string_serde!(QName);
