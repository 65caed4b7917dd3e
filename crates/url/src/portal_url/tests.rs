use portico_config::UrlConfig;
use portico_descriptor::PublicRenderParameter;
use pretty_assertions::assert_eq;

use super::*;

fn codec() -> Arc<UrlCodec> {
	Arc::new(UrlCodec::new(&UrlConfig::default()))
}

fn populated() -> PortalUrl {
	let w = WindowId::new("w");
	let mut url = PortalUrl::new(&codec());
	url.set_target_window(Some(w.clone()));
	url.set_portlet_mode(w.clone(), PortletMode::Edit);
	url.set_window_state(w.clone(), WindowState::Maximized);
	url.add_parameter(PortalUrlParameter::new(w.clone(), "x", ["1", "2"]));
	url.add_public_parameter(PortalUrlPublicParameter::new(w, "zip", QName::new("urn:geo", "zip"), ["10115"]));
	url
}

#[test]
fn clone_is_independent() {
	let original = populated();
	let snapshot = original.clone();
	let w = WindowId::new("w");

	let mut copy = original.clone();
	copy.set_page("other").unwrap();
	copy.set_target_window(None);
	copy.set_phase(Phase::Action);
	copy.set_portlet_mode(w.clone(), PortletMode::Help);
	copy.set_window_state(w.clone(), WindowState::Minimized);
	copy.add_parameter(PortalUrlParameter::new(w.clone(), "x", ["changed"]));
	copy.clear_parameters(&w);
	copy.private_render_parameters_mut().put("y", ["1"]);
	copy.add_public_parameter(PortalUrlPublicParameter::removal(w.clone(), "zip", QName::new("urn:geo", "zip")));

	assert_eq!(original, snapshot);
	assert_eq!(original.window_parameters(&w).unwrap().get("x").unwrap(), ["1", "2"]);
	assert!(!original.public_parameter(&QName::new("urn:geo", "zip")).unwrap().is_removed());
}

#[test]
fn equality_ignores_codec() {
	let url = populated();
	let mut other = PortalUrl::new(&Arc::new(UrlCodec::new(&UrlConfig {
		context_path: String::new(),
		..UrlConfig::default()
	})));
	other.set_target_window(url.target_window().cloned());
	let w = WindowId::new("w");
	other.set_portlet_mode(w.clone(), PortletMode::Edit);
	other.set_window_state(w.clone(), WindowState::Maximized);
	other.add_parameter(PortalUrlParameter::new(w.clone(), "x", ["1", "2"]));
	other.add_public_parameter(PortalUrlPublicParameter::new(w, "zip", QName::new("urn:geo", "zip"), ["10115"]));
	assert_eq!(other, url);
}

#[test]
fn resource_fields_require_resource_phase() {
	let mut url = PortalUrl::new(&codec());
	url.set_resource_id(Some("img".into()));
	url.set_cache_level(Some(CacheLevel::Page));
	assert_eq!(url.resource_id(), None);
	assert_eq!(url.cache_level(), None);

	url.set_phase(Phase::Resource);
	url.set_resource_id(Some("img".into()));
	url.set_cache_level(Some(CacheLevel::Page));
	assert_eq!(url.resource_id(), Some("img"));

	url.set_phase(Phase::Render);
	assert_eq!(url.resource_id(), None);
	assert_eq!(url.cache_level(), None);
}

#[test]
fn add_parameter_replaces_same_name() {
	let mut url = PortalUrl::new(&codec());
	let w = WindowId::new("w");
	url.add_parameter(PortalUrlParameter::new(w.clone(), "x", ["1"]));
	url.add_parameter(PortalUrlParameter::new(w.clone(), "x", ["2"]));
	assert_eq!(url.window_parameters(&w).unwrap().get("x").unwrap(), ["2"]);
}

#[test]
fn clear_parameters_only_touches_one_window() {
	let mut url = PortalUrl::new(&codec());
	let a = WindowId::new("a");
	let b = WindowId::new("b");
	url.add_parameter(PortalUrlParameter::new(a.clone(), "x", ["1"]));
	url.add_parameter(PortalUrlParameter::new(b.clone(), "x", ["2"]));

	let removed = url.clear_parameters(&a).unwrap();
	assert_eq!(removed.get("x").unwrap(), ["1"]);
	assert!(url.window_parameters(&a).is_none());
	assert_eq!(url.window_parameters(&b).unwrap().get("x").unwrap(), ["2"]);
}

#[test]
fn public_parameter_with_same_qname_replaces() {
	let mut url = PortalUrl::new(&codec());
	let qn = QName::new("urn:geo", "zip");
	url.add_public_parameter(PortalUrlPublicParameter::new("a", "zip", qn.clone(), ["1"]));
	url.add_public_parameter(PortalUrlPublicParameter::new("b", "plz", qn.clone(), ["2"]));

	assert_eq!(url.public_parameters().count(), 1);
	let entry = url.public_parameter(&qn).unwrap();
	assert_eq!(entry.window(), &WindowId::new("b"));
	assert_eq!(entry.values(), ["2"]);
}

fn registry() -> PublicParameterRegistry {
	let mut reg = PublicParameterRegistry::new();
	reg.declare("map", PublicRenderParameter::new(QName::new("urn:geo", "zip"), "zip"));
	let mut plz = PublicRenderParameter::new(QName::new("urn:de", "plz"), "plz");
	plz.add_alias(QName::new("urn:geo", "zip"));
	reg.declare("weather", plz);
	reg.declare("weather", PublicRenderParameter::new(QName::new("urn:ui", "color"), "color"));
	reg
}

#[test]
fn public_values_propagate_through_aliases() {
	let mut url = PortalUrl::new(&codec());
	url.add_public_parameter(PortalUrlPublicParameter::new("map", "zip", QName::new("urn:geo", "zip"), ["10115"]));

	let reg = registry();
	let weather = url.public_render_parameters(&WindowId::new("weather"), &reg);
	assert_eq!(weather.get("plz").unwrap(), ["10115"]);
	assert!(!weather.contains("zip"));

	let map = url.public_render_parameters(&WindowId::new("map"), &reg);
	assert_eq!(map.get("zip").unwrap(), ["10115"]);

	assert!(url.public_render_parameters(&WindowId::new("other"), &reg).is_empty());
}

#[test]
fn tombstones_are_not_visible() {
	let mut url = PortalUrl::new(&codec());
	url.add_public_parameter(PortalUrlPublicParameter::removal("map", "zip", QName::new("urn:geo", "zip")));
	url.add_public_parameter(PortalUrlPublicParameter::new("weather", "color", QName::new("urn:ui", "color"), ["red"]));

	let reg = registry();
	let weather = url.public_render_parameters(&WindowId::new("weather"), &reg);
	assert!(!weather.contains("plz"));
	assert_eq!(weather.get("color").unwrap(), ["red"]);
}

#[test]
fn render_parameters_merge_private_and_public() {
	let reg = registry();
	let weather = WindowId::new("weather");
	let mut url = PortalUrl::new(&codec());
	url.add_parameter(PortalUrlParameter::new(weather.clone(), "days", ["3"]));
	url.add_public_parameter(PortalUrlPublicParameter::new("map", "zip", QName::new("urn:geo", "zip"), ["10115"]));

	let params = url.render_parameters(&weather, &reg);
	assert_eq!(params.names().collect::<Vec<_>>(), vec!["days", "plz"]);
}

#[test]
fn resource_target_uses_preserved_render_parameters() {
	let reg = registry();
	let weather = WindowId::new("weather");
	let mut url = PortalUrl::new(&codec());
	url.set_target_window(Some(weather.clone()));
	url.set_phase(Phase::Resource);
	url.private_render_parameters_mut().put("days", ["3"]);
	url.add_parameter(PortalUrlParameter::new(weather.clone(), "format", ["json"]));

	let params = url.render_parameters(&weather, &reg);
	assert_eq!(params.get("days").unwrap(), ["3"]);
	assert!(!params.contains("format"));
}

#[test]
fn serializes_state_without_codec() {
	let json = serde_json::to_value(populated()).unwrap();
	assert_eq!(json["target_window"], "w");
	assert_eq!(json["phase"], "render");
	assert_eq!(json["modes"]["w"], "edit");
	assert_eq!(json["parameters"]["w"]["x"], serde_json::json!(["1", "2"]));
	assert_eq!(json["public_parameters"]["{urn:geo}zip"]["identifier"], "zip");
	assert!(json.get("codec").is_none());
}
