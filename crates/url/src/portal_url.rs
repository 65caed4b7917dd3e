use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use portico_descriptor::PublicParameterRegistry;
use portico_primitives::{CacheLevel, Parameters, Phase, PortletMode, QName, WindowId, WindowState};
use serde::Serialize;

use crate::{PortalUrlParameter, PortalUrlPublicParameter, Result, UrlCodec, UrlError};

#[cfg(test)]
mod tests;

/// Addressable state of one portal page.
///
/// `Clone` is a deep copy of every map and value list. The only thing a clone
/// shares with its original is the immutable [`UrlCodec`] used by
/// [`to_url`](Self::to_url), which is also ignored by equality.
#[derive(Debug, Clone, Serialize)]
pub struct PortalUrl {
	#[serde(skip)]
	codec: Arc<UrlCodec>,
	page: String,
	target_window: Option<WindowId>,
	phase: Phase,
	modes: IndexMap<WindowId, PortletMode>,
	states: IndexMap<WindowId, WindowState>,
	parameters: IndexMap<WindowId, Parameters>,
	private_render_parameters: Parameters,
	public_parameters: IndexMap<QName, PortalUrlPublicParameter>,
	resource_id: Option<String>,
	cache_level: Option<CacheLevel>,
}

impl PartialEq for PortalUrl {
	fn eq(&self, other: &Self) -> bool {
		self.page == other.page
			&& self.target_window == other.target_window
			&& self.phase == other.phase
			&& self.modes == other.modes
			&& self.states == other.states
			&& self.parameters == other.parameters
			&& self.private_render_parameters == other.private_render_parameters
			&& self.public_parameters == other.public_parameters
			&& self.resource_id == other.resource_id
			&& self.cache_level == other.cache_level
	}
}

impl Eq for PortalUrl {}

impl PortalUrl {
	/// Creates a page-level render URL for the codec's default page.
	pub fn new(codec: &Arc<UrlCodec>) -> Self {
		Self {
			codec: Arc::clone(codec),
			page: codec.default_page().to_string(),
			target_window: None,
			phase: Phase::Render,
			modes: IndexMap::new(),
			states: IndexMap::new(),
			parameters: IndexMap::new(),
			private_render_parameters: Parameters::new(),
			public_parameters: IndexMap::new(),
			resource_id: None,
			cache_level: None,
		}
	}

	/// Parses a URL produced by [`to_url`](Self::to_url), relative or absolute.
	pub fn parse(codec: &Arc<UrlCodec>, input: &str) -> Result<Self> {
		let mut url = Self::new(codec);
		codec.decode_into(input, &mut url)?;
		Ok(url)
	}

	/// Serializes the URL. `absolute` prefixes the configured origin.
	pub fn to_url(&self, absolute: bool) -> String {
		self.codec.encode(self, absolute)
	}

	/// Returns the codec this URL serializes with.
	pub fn codec(&self) -> &Arc<UrlCodec> {
		&self.codec
	}

	/// Returns the page path, `/`-separated, without leading slash.
	pub fn page(&self) -> &str {
		&self.page
	}

	/// Sets the page path.
	///
	/// Empty segments and leading or trailing slashes are dropped, so the
	/// stored page is the form a parsed URL yields. `.` and `..` segments are
	/// rejected: they are resolved away by every URL parser.
	pub fn set_page(&mut self, page: &str) -> Result<()> {
		let segments: Vec<&str> = page.split('/').filter(|s| !s.is_empty()).collect();
		if segments.iter().any(|s| matches!(*s, "." | "..")) {
			return Err(UrlError::DotSegment(page.to_string()));
		}
		self.page = segments.join("/");
		Ok(())
	}

	/// Returns the window the phase is addressed to, `None` for a page-level render.
	pub fn target_window(&self) -> Option<&WindowId> {
		self.target_window.as_ref()
	}

	pub fn set_target_window(&mut self, window: Option<WindowId>) {
		self.target_window = window;
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Sets the lifecycle phase.
	///
	/// Leaving the resource phase drops the resource id and cache level.
	pub fn set_phase(&mut self, phase: Phase) {
		self.phase = phase;
		if phase != Phase::Resource {
			self.resource_id = None;
			self.cache_level = None;
		}
	}

	/// Returns the explicit mode of `window`, if any.
	pub fn portlet_mode(&self, window: &WindowId) -> Option<&PortletMode> {
		self.modes.get(window)
	}

	pub fn set_portlet_mode(&mut self, window: WindowId, mode: PortletMode) {
		self.modes.insert(window, mode);
	}

	/// Iterates over windows with an explicit mode.
	pub fn portlet_modes(&self) -> impl Iterator<Item = (&WindowId, &PortletMode)> {
		self.modes.iter()
	}

	/// Returns the explicit window state of `window`, if any.
	pub fn window_state(&self, window: &WindowId) -> Option<&WindowState> {
		self.states.get(window)
	}

	pub fn set_window_state(&mut self, window: WindowId, state: WindowState) {
		self.states.insert(window, state);
	}

	/// Iterates over windows with an explicit window state.
	pub fn window_states(&self) -> impl Iterator<Item = (&WindowId, &WindowState)> {
		self.states.iter()
	}

	/// Returns the private parameters of `window`.
	pub fn window_parameters(&self, window: &WindowId) -> Option<&Parameters> {
		self.parameters.get(window)
	}

	/// Iterates over every window that has private parameters.
	pub fn parameters(&self) -> impl Iterator<Item = (&WindowId, &Parameters)> {
		self.parameters.iter()
	}

	/// Sets one private parameter, replacing earlier values of the same name.
	pub fn add_parameter(&mut self, parameter: PortalUrlParameter) {
		let (window, name, values) = parameter.into_parts();
		self.parameters.entry(window).or_default().put(name, values);
	}

	/// Removes every private parameter of `window`, returning them.
	pub fn clear_parameters(&mut self, window: &WindowId) -> Option<Parameters> {
		self.parameters.shift_remove(window)
	}

	/// Render parameters of the target window carried by a resource URL.
	pub fn private_render_parameters(&self) -> &Parameters {
		&self.private_render_parameters
	}

	pub fn private_render_parameters_mut(&mut self) -> &mut Parameters {
		&mut self.private_render_parameters
	}

	/// Iterates over public parameter entries, tombstones included.
	pub fn public_parameters(&self) -> impl Iterator<Item = &PortalUrlPublicParameter> {
		self.public_parameters.values()
	}

	/// Returns the public parameter entry for `qname`.
	pub fn public_parameter(&self, qname: &QName) -> Option<&PortalUrlPublicParameter> {
		self.public_parameters.get(qname)
	}

	/// Adds a public parameter, replacing any entry with the same qualified name.
	pub fn add_public_parameter(&mut self, parameter: PortalUrlPublicParameter) {
		self.public_parameters.insert(parameter.qname().clone(), parameter);
	}

	/// Drops the entry for `qname` entirely, without leaving a tombstone.
	pub fn remove_public_parameter(&mut self, qname: &QName) -> Option<PortalUrlPublicParameter> {
		self.public_parameters.shift_remove(qname)
	}

	pub fn resource_id(&self) -> Option<&str> {
		self.resource_id.as_deref()
	}

	/// Sets the resource id. No-op unless the phase is [`Phase::Resource`].
	pub fn set_resource_id(&mut self, resource_id: Option<String>) {
		if self.phase == Phase::Resource {
			self.resource_id = resource_id;
		}
	}

	pub fn cache_level(&self) -> Option<CacheLevel> {
		self.cache_level
	}

	/// Sets the cache level. No-op unless the phase is [`Phase::Resource`].
	pub fn set_cache_level(&mut self, cache_level: Option<CacheLevel>) {
		if self.phase == Phase::Resource {
			self.cache_level = cache_level;
		}
	}

	/// Public render parameters visible to `window`, keyed by the window's
	/// own identifiers.
	///
	/// An entry is visible when one of the window's declarations resolves its
	/// qualified name, directly or through an alias. Tombstones are never
	/// visible.
	pub fn public_render_parameters(&self, window: &WindowId, registry: &PublicParameterRegistry) -> Parameters {
		let mut visible = Parameters::new();
		for entry in self.public_parameters.values().filter(|p| !p.is_removed()) {
			if let Some(decl) = registry.find_by_qname(window, entry.qname()) {
				visible.put(decl.identifier(), entry.values().iter().cloned());
			}
		}
		visible
	}

	/// Full render state of `window`: private parameters, then visible public
	/// parameters.
	///
	/// For the target of a resource URL the preserved render parameters
	/// stand in for the private ones, which then belong to the resource
	/// request itself.
	pub fn render_parameters(&self, window: &WindowId, registry: &PublicParameterRegistry) -> Parameters {
		let mut params = if self.phase == Phase::Resource && self.target_window.as_ref() == Some(window) {
			self.private_render_parameters.clone()
		} else {
			self.parameters.get(window).cloned().unwrap_or_default()
		};
		params.extend(self.public_render_parameters(window, registry));
		params
	}

	/// Every window the URL mentions, in first-mention order: target window,
	/// then modes, states, private parameters and public parameter owners.
	pub(crate) fn referenced_windows(&self) -> IndexSet<&WindowId> {
		let mut windows = IndexSet::new();
		windows.extend(self.target_window.iter());
		windows.extend(self.modes.keys());
		windows.extend(self.states.keys());
		windows.extend(self.parameters.keys());
		windows.extend(self.public_parameters.values().map(|p| p.window()));
		windows
	}
}
