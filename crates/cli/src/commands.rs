use std::fmt::{self, Write as _};
use std::sync::Arc;

use anyhow::{Context, Result};
use portico_config::DriverConfig;
use portico_primitives::{QName, WindowId};
use portico_provider::PortletUrlProvider;
use portico_url::{PortalUrl, UrlCodec, escape_xml};
use tracing::info_span;

use crate::cli::LinkArgs;

fn codec(config: &DriverConfig) -> Arc<UrlCodec> {
	Arc::new(UrlCodec::new(&config.url))
}

fn parse(config: &DriverConfig, input: &str) -> Result<PortalUrl> {
	PortalUrl::parse(&codec(config), input).with_context(|| format!("failed to decode {input:?}"))
}

/// `portico decode`
pub fn decode(config: &DriverConfig, input: &str, json: bool) -> Result<String> {
	let url = parse(config, input)?;
	if json {
		return serde_json::to_string_pretty(&url).context("failed to serialize URL state");
	}
	let mut out = String::new();
	describe(&mut out, &url).context("failed to describe URL")?;
	Ok(out)
}

/// `portico link`
pub fn link(config: &DriverConfig, args: LinkArgs) -> Result<String> {
	let base = parse(config, &args.base)?;
	let span = info_span!("link", window = %args.window, phase = %args.phase);

	let mut provider = PortletUrlProvider::new(&base, args.phase, args.window.as_str())
		.with_secure_policy(config.secure)
		.with_span(span);
	if let Some(mode) = args.mode {
		provider.set_portlet_mode(mode);
	}
	if let Some(state) = args.state {
		provider.set_window_state(state);
	}
	provider.set_secure(args.secure)?;
	for (name, value) in args.params {
		provider.render_parameters_mut().append(name, value);
	}

	let mut public: Vec<(QName, String, Vec<String>)> = Vec::new();
	for arg in args.public {
		match public.iter_mut().find(|(qname, _, _)| *qname == arg.qname) {
			Some((_, _, values)) => values.push(arg.value),
			None => public.push((arg.qname, arg.identifier, vec![arg.value])),
		}
	}
	for (qname, identifier, values) in public {
		provider.add_public_render_parameter(qname, identifier, values);
	}
	for (qname, identifier) in args.remove_public {
		provider.remove_public_render_parameter(qname, identifier);
	}
	provider.set_resource_id(args.resource_id);
	provider.set_cache_level(args.cache);

	if args.absolute {
		return Ok(provider.to_url(true));
	}
	let mut out = Vec::new();
	provider.write(&mut out, args.escape)?;
	String::from_utf8(out).context("serialized URL is not UTF-8")
}

/// `portico escape`
pub fn escape(text: &str) -> String {
	escape_xml(text).into_owned()
}

/// Human-readable summary of every field of `url`.
fn describe(out: &mut String, url: &PortalUrl) -> fmt::Result {
	let page = if url.page().is_empty() { "(default)" } else { url.page() };
	writeln!(out, "page: {page}")?;
	if let Some(target) = url.target_window() {
		writeln!(out, "target: {target}")?;
	}
	writeln!(out, "phase: {}", url.phase())?;
	if let Some(id) = url.resource_id() {
		writeln!(out, "resource id: {id}")?;
	}
	if let Some(level) = url.cache_level() {
		writeln!(out, "cache level: {level}")?;
	}

	let mut windows: Vec<&WindowId> = Vec::new();
	let mentioned = url
		.portlet_modes()
		.map(|(w, _)| w)
		.chain(url.window_states().map(|(w, _)| w))
		.chain(url.parameters().map(|(w, _)| w));
	for window in mentioned {
		if !windows.contains(&window) {
			windows.push(window);
		}
	}
	for window in windows {
		writeln!(out, "window {window}")?;
		if let Some(mode) = url.portlet_mode(window) {
			writeln!(out, "  mode: {mode}")?;
		}
		if let Some(state) = url.window_state(window) {
			writeln!(out, "  state: {state}")?;
		}
		for (name, values) in url.window_parameters(window).into_iter().flat_map(|p| p.iter()) {
			writeln!(out, "  param {name} = {values:?}")?;
		}
	}

	for (name, values) in url.private_render_parameters().iter() {
		writeln!(out, "preserved {name} = {values:?}")?;
	}
	for entry in url.public_parameters() {
		if entry.is_removed() {
			writeln!(out, "public {} ({}) removed by {}", entry.qname(), entry.identifier(), entry.window())?;
		} else {
			writeln!(
				out,
				"public {} ({}) = {:?} from {}",
				entry.qname(),
				entry.identifier(),
				entry.values(),
				entry.window()
			)?;
		}
	}
	Ok(())
}
