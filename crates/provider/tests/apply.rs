//! Phase rules of `PortletUrlProvider::apply` against a populated request URL.

use std::sync::Arc;

use portico_config::UrlConfig;
use portico_descriptor::{PublicParameterRegistry, PublicRenderParameter};
use portico_primitives::{CacheLevel, Phase, PortletMode, QName, WindowId, WindowState};
use portico_provider::PortletUrlProvider;
use portico_url::{PortalUrl, PortalUrlParameter, PortalUrlPublicParameter, UrlCodec};
use pretty_assertions::assert_eq;

fn w() -> WindowId {
	WindowId::new("w")
}

fn other() -> WindowId {
	WindowId::new("other")
}

fn zip() -> QName {
	QName::new("urn:geo", "zip")
}

/// Request URL with private parameters on `w` and `other`.
fn request() -> PortalUrl {
	let mut url = PortalUrl::new(&Arc::new(UrlCodec::new(&UrlConfig::default())));
	url.set_page("home").unwrap();
	url.add_parameter(PortalUrlParameter::new(w(), "page", ["2"]));
	url.add_parameter(PortalUrlParameter::new(w(), "sort", ["asc", "name"]));
	url.add_parameter(PortalUrlParameter::new(other(), "tab", ["news"]));
	url
}

#[test]
fn apply_never_mutates_the_base() {
	let base = request();
	let snapshot = base.clone();

	let mut provider = PortletUrlProvider::new(&base, Phase::Resource, "w");
	provider.set_portlet_mode(PortletMode::Edit);
	provider.render_parameters_mut().put("page", ["3"]);
	provider.add_public_render_parameter(zip(), "zip", ["10115"]);
	let applied = provider.apply();

	assert_eq!(base, snapshot);
	assert_ne!(applied, base);
}

#[test]
fn render_and_action_clear_the_window_parameters() {
	let base = request();
	for phase in [Phase::Render, Phase::Action] {
		let url = PortletUrlProvider::new(&base, phase, "w").apply();
		assert_eq!(url.phase(), phase);
		assert_eq!(url.target_window(), Some(&w()));
		assert!(url.window_parameters(&w()).is_none(), "{phase}: window parameters survived");
		assert_eq!(url.window_parameters(&other()).unwrap().get("tab").unwrap(), ["news"]);
		assert!(url.private_render_parameters().is_empty());
	}
}

#[test]
fn resource_preserves_render_state_below_full_cache() {
	let base = request();
	for level in [None, Some(CacheLevel::Portlet), Some(CacheLevel::Page)] {
		let mut provider = PortletUrlProvider::new(&base, Phase::Resource, "w");
		provider.set_cache_level(level);
		let url = provider.apply();

		assert!(url.window_parameters(&w()).is_none());
		let preserved = url.private_render_parameters();
		assert_eq!(preserved.get("page").unwrap(), ["2"]);
		assert_eq!(preserved.get("sort").unwrap(), ["asc", "name"]);
		assert_eq!(url.cache_level(), level);
	}
}

#[test]
fn full_cache_skips_preservation() {
	let base = request();
	let mut provider = PortletUrlProvider::new(&base, Phase::Resource, "w");
	provider.set_cache_level(Some(CacheLevel::Full));
	let url = provider.apply();

	assert!(url.window_parameters(&w()).is_none());
	assert!(url.private_render_parameters().is_empty());
	assert_eq!(url.cache_level(), Some(CacheLevel::Full));
}

#[test]
fn resource_fields_only_apply_to_resource_urls() {
	let base = request();

	let mut resource = PortletUrlProvider::new(&base, Phase::Resource, "w");
	resource.set_resource_id(Some("chart.png".into()));
	assert_eq!(resource.apply().resource_id(), Some("chart.png"));

	let mut render = PortletUrlProvider::new(&base, Phase::Render, "w");
	render.set_resource_id(Some("chart.png".into()));
	render.set_cache_level(Some(CacheLevel::Page));
	let url = render.apply();
	assert_eq!(url.resource_id(), None);
	assert_eq!(url.cache_level(), None);
}

#[test]
fn mode_and_state_are_set_on_the_window() {
	let base = request();
	let mut provider = PortletUrlProvider::new(&base, Phase::Render, "w");
	provider.set_portlet_mode(PortletMode::Help);
	provider.set_window_state(WindowState::Maximized);
	let url = provider.apply();

	assert_eq!(url.portlet_mode(&w()), Some(&PortletMode::Help));
	assert_eq!(url.window_state(&w()), Some(&WindowState::Maximized));
	assert_eq!(url.portlet_mode(&other()), None);
}

#[test]
fn public_names_never_become_private() {
	let base = request();
	let mut provider = PortletUrlProvider::new(&base, Phase::Render, "w");
	provider.render_parameters_mut().put("zip", ["10115"]);
	provider.render_parameters_mut().put("page", ["3"]);
	provider.add_public_render_parameter(zip(), "zip", ["10115"]);
	let url = provider.apply();

	let private = url.window_parameters(&w()).unwrap();
	assert!(!private.contains("zip"));
	assert_eq!(private.get("page").unwrap(), ["3"]);
	assert_eq!(url.public_parameter(&zip()).unwrap().values(), ["10115"]);
}

#[test]
fn removal_reaches_every_sharing_window() {
	let mut registry = PublicParameterRegistry::new();
	registry.declare("map", PublicRenderParameter::new(zip(), "zip"));
	registry.declare("weather", PublicRenderParameter::new(zip(), "postcode"));

	let mut base = request();
	base.add_public_parameter(PortalUrlPublicParameter::new("map", "zip", zip(), ["10115"]));
	assert_eq!(
		base.public_render_parameters(&WindowId::new("weather"), &registry).get("postcode").unwrap(),
		["10115"]
	);

	let mut provider = PortletUrlProvider::new(&base, Phase::Render, "weather").with_registry(&registry);
	provider.remove_public_render_parameter(zip(), "postcode");
	let url = provider.apply();

	let entry = url.public_parameter(&zip()).unwrap();
	assert!(entry.is_removed());
	assert!(entry.values().is_empty());
	for window in ["map", "weather"] {
		assert!(url.public_render_parameters(&WindowId::new(window), &registry).is_empty());
	}

	let parsed = PortalUrl::parse(url.codec(), &url.to_url(false)).unwrap();
	assert!(parsed.public_parameter(&zip()).unwrap().is_removed());
}

#[test]
fn provider_output_round_trips() {
	let base = PortalUrl::new(&Arc::new(UrlCodec::new(&UrlConfig::default())));
	let mut provider = PortletUrlProvider::new(&base, Phase::Render, "w");
	provider.set_portlet_mode(PortletMode::Edit);
	provider.render_parameters_mut().put("x", ["1", "2"]);

	let url = provider.apply();
	let parsed = PortalUrl::parse(url.codec(), &provider.to_url(false)).unwrap();
	assert_eq!(parsed, url);
	assert_eq!(parsed.target_window(), Some(&w()));
	assert_eq!(parsed.phase(), Phase::Render);
	assert_eq!(parsed.portlet_mode(&w()), Some(&PortletMode::Edit));
	assert_eq!(parsed.window_parameters(&w()).unwrap().get("x").unwrap(), ["1", "2"]);
}

#[test]
fn providers_over_one_base_are_independent() {
	let base = request();

	let mut first = PortletUrlProvider::new(&base, Phase::Action, "w");
	first.render_parameters_mut().put("page", ["9"]);
	let mut second = PortletUrlProvider::new(&base, Phase::Render, "other");
	second.set_window_state(WindowState::Minimized);

	let a = first.apply();
	let b = second.apply();

	assert_eq!(a.window_parameters(&w()).unwrap().get("page").unwrap(), ["9"]);
	assert_eq!(a.window_parameters(&other()).unwrap().get("tab").unwrap(), ["news"]);
	assert_eq!(a.window_state(&other()), None);

	assert_eq!(b.window_parameters(&w()).unwrap().get("page").unwrap(), ["2"]);
	assert!(b.window_parameters(&other()).is_none());
	assert_eq!(b.window_state(&other()), Some(&WindowState::Minimized));
}

#[test]
fn repeated_apply_yields_equal_urls() {
	let base = request();
	let mut provider = PortletUrlProvider::new(&base, Phase::Render, "w");
	provider.render_parameters_mut().put("page", ["4"]);
	assert_eq!(provider.apply(), provider.apply());
}

/// Resource URL for `w` built over [`request`], as the page would hand it
/// back on the next request.
fn resource_request() -> PortalUrl {
	let base = request();
	let url = PortletUrlProvider::new(&base, Phase::Resource, "w").apply();
	PortalUrl::parse(url.codec(), &url.to_url(false)).unwrap()
}

#[test]
fn resource_state_does_not_follow_another_window() {
	let base = resource_request();
	assert_eq!(base.private_render_parameters().get("page").unwrap(), ["2"]);

	let url = PortletUrlProvider::new(&base, Phase::Resource, "other").apply();
	let preserved = url.private_render_parameters();
	assert_eq!(preserved.get("tab").unwrap(), ["news"]);
	assert!(!preserved.contains("page"));
	assert!(!preserved.contains("sort"));

	let reg = PublicParameterRegistry::new();
	assert!(!url.render_parameters(&other(), &reg).contains("page"));
}

#[test]
fn render_after_resource_drops_preserved_state() {
	let base = resource_request();
	for window in ["w", "other"] {
		let url = PortletUrlProvider::new(&base, Phase::Render, window).apply();
		assert!(url.private_render_parameters().is_empty(), "{window}");
		assert!(!url.to_url(false).contains("pu.rp"), "{window}");
	}
}

#[test]
fn resource_for_the_same_window_keeps_its_state() {
	let base = resource_request();
	let mut provider = PortletUrlProvider::new(&base, Phase::Resource, "w");
	provider.set_resource_id(Some("chart.png".into()));
	let url = provider.apply();

	let preserved = url.private_render_parameters();
	assert_eq!(preserved.get("page").unwrap(), ["2"]);
	assert_eq!(preserved.get("sort").unwrap(), ["asc", "name"]);
	assert_eq!(url.resource_id(), Some("chart.png"));
}
