use portico_primitives::{QName, WindowId};
use serde::Serialize;

/// One private parameter assignment, owned by a single window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalUrlParameter {
	window: WindowId,
	name: String,
	values: Vec<String>,
}

impl PortalUrlParameter {
	/// Creates a parameter of `window`.
	pub fn new<S: Into<String>>(window: impl Into<WindowId>, name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
		Self {
			window: window.into(),
			name: name.into(),
			values: values.into_iter().map(Into::into).collect(),
		}
	}

	/// Returns the owning window.
	pub fn window(&self) -> &WindowId {
		&self.window
	}

	/// Returns the parameter name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the values in order.
	pub fn values(&self) -> &[String] {
		&self.values
	}

	pub(crate) fn into_parts(self) -> (WindowId, String, Vec<String>) {
		(self.window, self.name, self.values)
	}
}

/// A public render parameter entry on a portal URL.
///
/// Identity is the qualified name: a URL holds at most one entry per qualified
/// name. An entry with `removed` set is a tombstone telling every window that
/// shares the name to drop it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalUrlPublicParameter {
	window: WindowId,
	identifier: String,
	qname: QName,
	values: Vec<String>,
	removed: bool,
}

impl PortalUrlPublicParameter {
	/// Creates a public parameter set by `window`.
	pub fn new<S: Into<String>>(
		window: impl Into<WindowId>,
		identifier: impl Into<String>,
		qname: QName,
		values: impl IntoIterator<Item = S>,
	) -> Self {
		Self {
			window: window.into(),
			identifier: identifier.into(),
			qname,
			values: values.into_iter().map(Into::into).collect(),
			removed: false,
		}
	}

	/// Creates a tombstone for `qname`, carrying no values.
	pub fn removal(window: impl Into<WindowId>, identifier: impl Into<String>, qname: QName) -> Self {
		Self {
			window: window.into(),
			identifier: identifier.into(),
			qname,
			values: Vec::new(),
			removed: true,
		}
	}

	/// Returns the window that declared or removed the parameter.
	pub fn window(&self) -> &WindowId {
		&self.window
	}

	/// Returns the declaring window's identifier for the parameter.
	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	/// Returns the qualified name, the entry's identity.
	pub fn qname(&self) -> &QName {
		&self.qname
	}

	/// Returns the values in order. Always empty for tombstones.
	pub fn values(&self) -> &[String] {
		&self.values
	}

	/// Returns true for a tombstone.
	pub fn is_removed(&self) -> bool {
		self.removed
	}
}
