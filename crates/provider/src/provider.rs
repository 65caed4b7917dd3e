use std::borrow::Cow;
use std::io;

use indexmap::IndexMap;
use portico_config::SecurePolicy;
use portico_descriptor::PublicParameterRegistry;
use portico_primitives::{CacheLevel, Parameters, Phase, PortletMode, PublicNames, QName, WindowId, WindowState};
use portico_url::{PortalUrl, PortalUrlParameter, PortalUrlPublicParameter, escape_xml};
use tracing::{Span, debug, trace};

use crate::{ProviderError, Result};


/// Builds URLs addressed to one portlet window.
///
/// The phase is fixed at construction. Every other setting is staged on the
/// provider and only takes effect on the URL returned by
/// [`apply`](Self::apply), which may be called any number of times.
#[derive(Debug)]
pub struct PortletUrlProvider<'a> {
	base: &'a PortalUrl,
	window: WindowId,
	phase: Phase,
	portlet_mode: Option<PortletMode>,
	window_state: Option<WindowState>,
	cache_level: Option<CacheLevel>,
	resource_id: Option<String>,
	render_parameters: Parameters,
	properties: Parameters,
	public_names: PublicNames,
	staged: IndexMap<QName, PortalUrlPublicParameter>,
	secure_policy: SecurePolicy,
	span: Span,
}

impl<'a> PortletUrlProvider<'a> {
	/// Creates a provider for `window` over the request URL `base`.
	///
	/// Events are recorded in the span current at construction unless
	/// another one is set with [`with_span`](Self::with_span).
	pub fn new(base: &'a PortalUrl, phase: Phase, window: impl Into<WindowId>) -> Self {
		Self {
			base,
			window: window.into(),
			phase,
			portlet_mode: None,
			window_state: None,
			cache_level: None,
			resource_id: None,
			render_parameters: Parameters::new(),
			properties: Parameters::new(),
			public_names: PublicNames::new(),
			staged: IndexMap::new(),
			secure_policy: SecurePolicy::default(),
			span: Span::current(),
		}
	}

	/// Sets the identifiers the window declares as public.
	pub fn with_public_names(mut self, names: PublicNames) -> Self {
		self.public_names = names;
		self
	}

	/// Takes the window's public identifiers from `registry`.
	pub fn with_registry(self, registry: &PublicParameterRegistry) -> Self {
		let names = registry.public_names(&self.window);
		self.with_public_names(names)
	}

	pub fn with_secure_policy(mut self, policy: SecurePolicy) -> Self {
		self.secure_policy = policy;
		self
	}

	/// Records the provider's events in `span`, usually the span of the
	/// request being rendered.
	pub fn with_span(mut self, span: Span) -> Self {
		self.span = span;
		self
	}

	pub fn window(&self) -> &WindowId {
		&self.window
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn portlet_mode(&self) -> Option<&PortletMode> {
		self.portlet_mode.as_ref()
	}

	pub fn set_portlet_mode(&mut self, mode: PortletMode) {
		self.portlet_mode = Some(mode);
	}

	pub fn window_state(&self) -> Option<&WindowState> {
		self.window_state.as_ref()
	}

	pub fn set_window_state(&mut self, state: WindowState) {
		self.window_state = Some(state);
	}

	/// Requests a secure URL.
	///
	/// Secure URLs are not supported. Under [`SecurePolicy::Ignore`] the
	/// request is dropped; under [`SecurePolicy::Reject`] asking for one
	/// fails.
	pub fn set_secure(&mut self, secure: bool) -> Result<()> {
		if !secure {
			return Ok(());
		}
		match self.secure_policy {
			SecurePolicy::Ignore => {
				self.span.in_scope(|| debug!(window = %self.window, "secure URL requested; ignoring"));
				Ok(())
			}
			SecurePolicy::Reject => Err(ProviderError::Unsupported("secure portlet URLs")),
		}
	}

	/// Always false.
	pub fn is_secure(&self) -> bool {
		false
	}

	/// Render parameters to set on the window.
	pub fn render_parameters(&self) -> &Parameters {
		&self.render_parameters
	}

	pub fn render_parameters_mut(&mut self) -> &mut Parameters {
		&mut self.render_parameters
	}

	/// Response properties attached to the URL. They are never encoded.
	pub fn properties(&self) -> &Parameters {
		&self.properties
	}

	pub fn properties_mut(&mut self) -> &mut Parameters {
		&mut self.properties
	}

	pub fn cache_level(&self) -> Option<CacheLevel> {
		self.cache_level
	}

	/// Sets the cache level. Only resource URLs carry it.
	pub fn set_cache_level(&mut self, level: Option<CacheLevel>) {
		self.cache_level = level;
	}

	pub fn resource_id(&self) -> Option<&str> {
		self.resource_id.as_deref()
	}

	/// Sets the resource id. Only resource URLs carry it.
	pub fn set_resource_id(&mut self, resource_id: Option<String>) {
		self.resource_id = resource_id;
	}

	/// Stages a public render parameter value, replacing anything staged for
	/// the same qualified name.
	pub fn add_public_render_parameter<S: Into<String>>(
		&mut self,
		qname: QName,
		identifier: impl Into<String>,
		values: impl IntoIterator<Item = S>,
	) {
		let parameter = PortalUrlPublicParameter::new(self.window.clone(), identifier, qname, values);
		self.span.in_scope(|| {
			debug!(
				qname = %parameter.qname(),
				identifier = parameter.identifier(),
				values = ?parameter.values(),
				"add public render parameter"
			)
		});
		self.staged.insert(parameter.qname().clone(), parameter);
	}

	/// Stages removal of a public render parameter.
	pub fn remove_public_render_parameter(&mut self, qname: QName, identifier: impl Into<String>) {
		let parameter = PortalUrlPublicParameter::removal(self.window.clone(), identifier, qname);
		self.span.in_scope(|| debug!(qname = %parameter.qname(), "remove public render parameter"));
		self.staged.insert(parameter.qname().clone(), parameter);
	}

	/// Drops staged public values. Staged removals are kept.
	pub fn clear_public_render_parameters(&mut self) {
		self.staged.retain(|_, p| p.is_removed());
	}

	/// Iterates over staged public parameters, removals included.
	pub fn staged_public_parameters(&self) -> impl Iterator<Item = &PortalUrlPublicParameter> {
		self.staged.values()
	}

	/// Returns true if `name` is public for this window: declared public, or
	/// the identifier of a staged public parameter.
	pub fn is_public(&self, name: &str) -> bool {
		self.public_names.is_public(name) || self.staged.values().any(|p| p.identifier() == name)
	}

	/// Builds the URL: a clone of the base with this provider's window,
	/// phase and staged settings applied.
	pub fn apply(&self) -> PortalUrl {
		let _entered = self.span.enter();
		let mut url = self.base.clone();
		url.set_target_window(Some(self.window.clone()));
		url.set_phase(self.phase);

		// The preserved store belongs to the base's resource target. It only
		// carries over when this URL targets the same window.
		let carried = std::mem::take(url.private_render_parameters_mut());
		let same_target = self.base.phase() == Phase::Resource && self.base.target_window() == Some(&self.window);
		let mut render_state = if same_target {
			carried
		} else {
			Parameters::new()
		};
		if let Some(cleared) = url.clear_parameters(&self.window) {
			render_state.extend(cleared);
		}
		if self.phase == Phase::Resource && self.cache_level.is_none_or(CacheLevel::preserves_render_state) {
			*url.private_render_parameters_mut() = render_state;
		}

		if let Some(mode) = &self.portlet_mode {
			url.set_portlet_mode(self.window.clone(), mode.clone());
		}
		if let Some(state) = &self.window_state {
			url.set_window_state(self.window.clone(), state.clone());
		}

		for (name, values) in self.render_parameters.iter() {
			if self.is_public(name) {
				trace!(name, "skipping public name in private parameters");
				continue;
			}
			url.add_parameter(PortalUrlParameter::new(self.window.clone(), name, values.iter().cloned()));
		}
		for parameter in self.staged.values() {
			url.add_public_parameter(parameter.clone());
		}

		url.set_resource_id(self.resource_id.clone());
		url.set_cache_level(self.cache_level);
		trace!(window = %self.window, phase = %self.phase, "applied URL provider");
		url
	}

	/// Applies and serializes. `absolute` prefixes the configured origin.
	pub fn to_url(&self, absolute: bool) -> String {
		self.apply().to_url(absolute)
	}

	/// Applies, serializes as a relative URL and writes it to `out`,
	/// escaped for markup when `escape` is set.
	pub fn write<W: io::Write>(&self, out: &mut W, escape: bool) -> Result<()> {
		let url = self.to_url(false);
		let text = if escape { escape_xml(&url) } else { Cow::Borrowed(url.as_str()) };
		out.write_all(text.as_bytes())?;
		Ok(())
	}
}
