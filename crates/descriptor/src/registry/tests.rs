use pretty_assertions::assert_eq;

use super::*;

fn registry() -> PublicParameterRegistry {
	let mut zip = PublicRenderParameter::new(QName::new("urn:geo", "zip"), "zip");
	zip.add_alias(QName::new("urn:legacy", "postcode"));

	let mut reg = PublicParameterRegistry::new();
	reg.declare("map", zip);
	reg.declare("weather", PublicRenderParameter::new(QName::new("urn:legacy", "postcode"), "plz"));
	reg.declare("weather", PublicRenderParameter::new(QName::new("urn:ui", "color"), "color"));
	reg
}

#[test]
fn public_names_are_per_window() {
	let reg = registry();
	let map = WindowId::new("map");
	let weather = WindowId::new("weather");

	assert!(reg.is_public(&map, "zip"));
	assert!(!reg.is_public(&map, "plz"));
	assert!(reg.is_public(&weather, "plz"));
	assert_eq!(reg.public_names(&weather).iter().collect::<Vec<_>>(), vec!["plz", "color"]);
}

#[test]
fn unknown_window_has_no_declarations() {
	let reg = registry();
	let nobody = WindowId::new("nobody");
	assert!(reg.declarations(&nobody).is_empty());
	assert!(reg.public_names(&nobody).is_empty());
}

#[test]
fn find_by_qname_follows_aliases() {
	let reg = registry();
	let map = WindowId::new("map");

	let found = reg.find_by_qname(&map, &QName::new("urn:legacy", "postcode")).unwrap();
	assert_eq!(found.identifier(), "zip");
	assert!(reg.find_by_qname(&map, &QName::new("urn:ui", "color")).is_none());
}

#[test]
fn find_by_identifier_is_window_local() {
	let reg = registry();
	assert!(reg.find_by_identifier(&WindowId::new("map"), "color").is_none());
	assert_eq!(reg.find_by_identifier(&WindowId::new("weather"), "color").unwrap().qname(), &QName::new("urn:ui", "color"));
}

#[test]
fn sharing_windows_include_alias_declarers() {
	let reg = registry();
	let sharing = reg.sharing_windows(&QName::new("urn:legacy", "postcode"));
	assert_eq!(sharing, vec![&WindowId::new("map"), &WindowId::new("weather")]);

	let color = reg.sharing_windows(&QName::new("urn:ui", "color"));
	assert_eq!(color, vec![&WindowId::new("weather")]);
}
