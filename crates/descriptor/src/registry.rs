use indexmap::IndexMap;
use portico_primitives::{PublicNames, QName, WindowId};
use tracing::trace;

use crate::PublicRenderParameter;

#[cfg(test)]
mod tests;

/// Public render parameter declarations of every window on a page.
///
/// Conflicting declarations (one qualified name under two identifiers in the
/// same window, or the reverse) are not detected here; they are rejected
/// while the deployment metadata is loaded. Lookups return the first
/// matching declaration.
#[derive(Debug, Clone, Default)]
pub struct PublicParameterRegistry {
	windows: IndexMap<WindowId, Vec<PublicRenderParameter>>,
}

impl PublicParameterRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `window` declares `parameter`.
	pub fn declare(&mut self, window: impl Into<WindowId>, parameter: PublicRenderParameter) {
		let window = window.into();
		trace!(%window, qname = %parameter.qname(), identifier = parameter.identifier(), "declare public render parameter");
		self.windows.entry(window).or_default().push(parameter);
	}

	/// Returns the declarations of `window`.
	pub fn declarations(&self, window: &WindowId) -> &[PublicRenderParameter] {
		self.windows.get(window).map(Vec::as_slice).unwrap_or_default()
	}

	/// Returns the public identifiers declared by `window`.
	pub fn public_names(&self, window: &WindowId) -> PublicNames {
		self.declarations(window).iter().map(|p| p.identifier()).collect()
	}

	/// Returns true if `name` is a public identifier for `window`.
	pub fn is_public(&self, window: &WindowId, name: &str) -> bool {
		self.declarations(window).iter().any(|p| p.identifier() == name)
	}

	/// Finds the declaration `window` knows as `identifier`.
	pub fn find_by_identifier(&self, window: &WindowId, identifier: &str) -> Option<&PublicRenderParameter> {
		self.declarations(window).iter().find(|p| p.identifier() == identifier)
	}

	/// Finds the declaration of `window` that resolves `qname`, directly or
	/// through an alias.
	pub fn find_by_qname(&self, window: &WindowId, qname: &QName) -> Option<&PublicRenderParameter> {
		let decls = self.declarations(window);
		decls.iter().find(|p| p.qname() == qname).or_else(|| decls.iter().find(|p| p.resolves(qname)))
	}

	/// Returns every window whose declarations resolve `qname`.
	pub fn sharing_windows(&self, qname: &QName) -> Vec<&WindowId> {
		self.windows
			.iter()
			.filter(|(_, decls)| decls.iter().any(|p| p.resolves(qname)))
			.map(|(window, _)| window)
			.collect()
	}

	/// Iterates over the windows with at least one declaration.
	pub fn windows(&self) -> impl Iterator<Item = &WindowId> {
		self.windows.keys()
	}
}
