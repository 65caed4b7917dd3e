//! URL codec.
//!
//! The path is `{context path}{servlet path}/{page}` with every segment,
//! base path included, percent-encoded. All window state travels in the query string as
//! `application/x-www-form-urlencoded` pairs under the `pu.` namespace:
//!
//! ```text
//! pu.win=<window id>          repeated; the n-th occurrence is window index n
//! pu.target=<idx>             target window
//! pu.type=<phase>             action | resource (render is the default)
//! pu.mode.<idx>=<mode>
//! pu.state.<idx>=<state>
//! pu.p.<idx>.<name>=<value>   one pair per value
//! pu.pn.<idx>.<name>          parameter present with no values
//! pu.rp.<name>=<value>        preserved render parameter of the target window
//! pu.rpn.<name>               preserved render parameter with no values
//! pu.pub.<k>=<identifier>     public parameter k
//! pu.pubq.<k>=<qname>
//! pu.pubw.<k>=<idx>
//! pu.pubv.<k>=<value>         one pair per value
//! pu.pubx.<k>                 public parameter k is a tombstone
//! pu.rid=<resource id>        resource phase only
//! pu.cache=<cache level>      resource phase only
//! ```
//!
//! Window ids never appear in keys, so any id round-trips. Query pairs
//! outside the `pu.` namespace are ignored on parse.

use std::borrow::Cow;
use std::collections::BTreeMap;

use indexmap::IndexMap;
use portico_config::UrlConfig;
use portico_primitives::{Parameters, Phase, QName, WindowId};
use tracing::trace;
use url::{Url, form_urlencoded};

use crate::{PortalUrl, PortalUrlParameter, PortalUrlPublicParameter, Result, UrlError};


const PREFIX: &str = "pu.";
const WINDOW: &str = "pu.win";
const TARGET: &str = "pu.target";
const TYPE: &str = "pu.type";
const MODE: &str = "pu.mode";
const STATE: &str = "pu.state";
const PARAM: &str = "pu.p";
const PARAM_EMPTY: &str = "pu.pn";
const RENDER_PARAM: &str = "pu.rp";
const RENDER_PARAM_EMPTY: &str = "pu.rpn";
const PUBLIC: &str = "pu.pub";
const PUBLIC_QNAME: &str = "pu.pubq";
const PUBLIC_WINDOW: &str = "pu.pubw";
const PUBLIC_VALUE: &str = "pu.pubv";
const PUBLIC_REMOVED: &str = "pu.pubx";
const RESOURCE_ID: &str = "pu.rid";
const CACHE: &str = "pu.cache";

/// Converts [`PortalUrl`] state to and from URL strings.
///
/// Immutable once built; share it behind an `Arc` between every URL of a
/// portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCodec {
	base_path: String,
	origin: String,
	default_page: String,
}

/// Public parameter tokens collected before the entry is complete.
#[derive(Default)]
struct PublicDraft {
	identifier: Option<String>,
	qname: Option<QName>,
	window: Option<WindowId>,
	values: Vec<String>,
	removed: bool,
}

impl UrlCodec {
	pub fn new(config: &UrlConfig) -> Self {
		Self {
			base_path: config.base_path(),
			origin: config.origin(),
			default_page: config.default_page.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>().join("/"),
		}
	}

	/// Context path followed by servlet path.
	pub fn base_path(&self) -> &str {
		&self.base_path
	}

	/// Page addressed by URLs that name none.
	pub fn default_page(&self) -> &str {
		&self.default_page
	}

	pub(crate) fn encode(&self, url: &PortalUrl, absolute: bool) -> String {
		let mut out = String::new();
		if absolute {
			out.push_str(&self.origin);
		}
		let path_start = out.len();
		let segments = self.base_path.split('/').chain(url.page().split('/'));
		for segment in segments.filter(|s| !s.is_empty()) {
			out.push('/');
			out.push_str(&urlencoding::encode(segment));
		}
		if out.len() == path_start {
			out.push('/');
		}

		let windows = url.referenced_windows();
		// Every window reachable from `url` is in `windows`.
		let index = |window: &WindowId| windows.get_index_of(window).unwrap_or_default().to_string();

		let mut query = form_urlencoded::Serializer::new(String::new());
		for window in &windows {
			query.append_pair(WINDOW, window.as_str());
		}
		if let Some(target) = url.target_window() {
			query.append_pair(TARGET, &index(target));
		}
		if url.phase() != Phase::Render {
			query.append_pair(TYPE, url.phase().as_str());
		}
		for (window, mode) in url.portlet_modes() {
			query.append_pair(&format!("{MODE}.{}", index(window)), mode.as_str());
		}
		for (window, state) in url.window_states() {
			query.append_pair(&format!("{STATE}.{}", index(window)), state.as_str());
		}
		for (window, params) in url.parameters() {
			let prefix = format!("{}.{}.", PARAM, index(window));
			let empty_prefix = format!("{}.{}.", PARAM_EMPTY, index(window));
			append_parameters(&mut query, &prefix, &empty_prefix, params);
		}
		append_parameters(
			&mut query,
			&format!("{RENDER_PARAM}."),
			&format!("{RENDER_PARAM_EMPTY}."),
			url.private_render_parameters(),
		);
		for (k, entry) in url.public_parameters().enumerate() {
			query.append_pair(&format!("{PUBLIC}.{k}"), entry.identifier());
			query.append_pair(&format!("{PUBLIC_QNAME}.{k}"), &entry.qname().to_string());
			query.append_pair(&format!("{PUBLIC_WINDOW}.{k}"), &index(entry.window()));
			for value in entry.values() {
				query.append_pair(&format!("{PUBLIC_VALUE}.{k}"), value);
			}
			if entry.is_removed() {
				query.append_pair(&format!("{PUBLIC_REMOVED}.{k}"), "");
			}
		}
		if url.phase() == Phase::Resource {
			if let Some(resource_id) = url.resource_id() {
				query.append_pair(RESOURCE_ID, resource_id);
			}
			if let Some(level) = url.cache_level() {
				query.append_pair(CACHE, level.as_str());
			}
		}

		let query = query.finish();
		if !query.is_empty() {
			out.push('?');
			out.push_str(&query);
		}
		out
	}

	pub(crate) fn decode_into(&self, input: &str, url: &mut PortalUrl) -> Result<()> {
		trace!(input, "decoding portal URL");
		let parsed = if input.starts_with('/') {
			Url::parse(&format!("http://localhost{input}"))?
		} else {
			Url::parse(input)?
		};
		url.set_page(&self.decode_page(parsed.path())?)?;

		let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
		let windows: Vec<WindowId> = pairs.iter().filter(|(k, _)| k == WINDOW).map(|(_, v)| WindowId::new(v.as_str())).collect();
		let window_at = |key: &str, raw: &str| -> Result<WindowId> {
			let idx: usize = raw.parse().map_err(|_| malformed(key, "window index is not a number"))?;
			windows.get(idx).cloned().ok_or(UrlError::UnknownWindow(idx))
		};

		let mut params: IndexMap<WindowId, Parameters> = IndexMap::new();
		let mut render_params = Parameters::new();
		let mut publics: BTreeMap<usize, PublicDraft> = BTreeMap::new();
		let mut resource_id = None;
		let mut cache_level = None;

		for (key, value) in &pairs {
			let Some(token) = key.strip_prefix(PREFIX) else {
				trace!(key = key.as_str(), "ignoring foreign query parameter");
				continue;
			};
			let (head, tail) = token.split_once('.').unwrap_or((token, ""));
			match head {
				"win" if tail.is_empty() => {}
				"target" if tail.is_empty() => url.set_target_window(Some(window_at(key, value)?)),
				"type" if tail.is_empty() => url.set_phase(value.parse()?),
				"rid" if tail.is_empty() => resource_id = Some(value.clone()),
				"cache" if tail.is_empty() => cache_level = Some(value.parse()?),
				"mode" => url.set_portlet_mode(window_at(key, tail)?, value.parse()?),
				"state" => url.set_window_state(window_at(key, tail)?, value.parse()?),
				"p" | "pn" => {
					let (idx, name) = tail.split_once('.').ok_or_else(|| malformed(key, "expected <window>.<name>"))?;
					let store = params.entry(window_at(key, idx)?).or_default();
					add_value(store, head == "pn", name, value);
				}
				"rp" | "rpn" => add_value(&mut render_params, head == "rpn", tail, value),
				"pub" | "pubq" | "pubw" | "pubv" | "pubx" => {
					let k: usize = tail.parse().map_err(|_| malformed(key, "public parameter index is not a number"))?;
					let draft = publics.entry(k).or_default();
					match head {
						"pub" => draft.identifier = Some(value.clone()),
						"pubq" => draft.qname = Some(value.parse()?),
						"pubw" => draft.window = Some(window_at(key, value)?),
						"pubv" => draft.values.push(value.clone()),
						_ => draft.removed = true,
					}
				}
				_ => return Err(UrlError::UnknownToken(key.clone())),
			}
		}

		for (window, store) in params {
			for (name, values) in store {
				url.add_parameter(PortalUrlParameter::new(window.clone(), name, values));
			}
		}
		*url.private_render_parameters_mut() = render_params;
		for (index, draft) in publics {
			url.add_public_parameter(draft.finish(index)?);
		}
		url.set_resource_id(resource_id);
		url.set_cache_level(cache_level);
		Ok(())
	}

	/// Matches the configured base path segment by segment, both sides
	/// percent-decoded, and returns the remaining segments as the page.
	fn decode_page(&self, path: &str) -> Result<String> {
		let mut segments = path
			.split('/')
			.filter(|s| !s.is_empty())
			.map(|s| urlencoding::decode(s).map_err(|_| UrlError::Encoding(s.to_string())));
		for expected in self.base_path.split('/').filter(|s| !s.is_empty()) {
			match segments.next().transpose()? {
				Some(segment) if segment == expected => {}
				_ => {
					return Err(UrlError::ForeignPath {
						path: path.to_string(),
						expected: self.base_path.clone(),
					});
				}
			}
		}
		let page = segments.map(|s| s.map(Cow::into_owned)).collect::<Result<Vec<_>>>()?;
		if page.is_empty() {
			Ok(self.default_page.clone())
		} else {
			Ok(page.join("/"))
		}
	}
}

impl PublicDraft {
	fn finish(self, index: usize) -> Result<PortalUrlPublicParameter> {
		let missing = |field| UrlError::IncompletePublicParameter { index, field };
		let identifier = self.identifier.ok_or_else(|| missing("identifier"))?;
		let qname = self.qname.ok_or_else(|| missing("qualified name"))?;
		let window = self.window.ok_or_else(|| missing("window"))?;
		Ok(if self.removed {
			PortalUrlPublicParameter::removal(window, identifier, qname)
		} else {
			PortalUrlPublicParameter::new(window, identifier, qname, self.values)
		})
	}
}

fn append_parameters(query: &mut form_urlencoded::Serializer<'_, String>, prefix: &str, empty_prefix: &str, params: &Parameters) {
	for (name, values) in params.iter() {
		if values.is_empty() {
			query.append_pair(&format!("{empty_prefix}{name}"), "");
		}
		for value in values {
			query.append_pair(&format!("{prefix}{name}"), value);
		}
	}
}

fn add_value(store: &mut Parameters, empty_marker: bool, name: &str, value: &str) {
	if !empty_marker {
		store.append(name, value);
	} else if !store.contains(name) {
		store.put(name, Vec::<String>::new());
	}
}

fn malformed(key: &str, reason: &'static str) -> UrlError {
	UrlError::MalformedToken {
		key: key.to_string(),
		reason,
	}
}
