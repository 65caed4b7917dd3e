use super::*;

#[test]
fn standard_modes_parse_case_insensitively() {
	assert_eq!("VIEW".parse::<PortletMode>().unwrap(), PortletMode::View);
	assert_eq!("Edit".parse::<PortletMode>().unwrap(), PortletMode::Edit);
	assert_eq!(" help ".parse::<PortletMode>().unwrap(), PortletMode::Help);
}

#[test]
fn custom_mode_is_lowercased() {
	let mode: PortletMode = "Config".parse().unwrap();
	assert_eq!(mode, PortletMode::Custom("config".into()));
	assert_eq!(mode.to_string(), "config");
}

#[test]
fn empty_mode_is_rejected() {
	assert_eq!("".parse::<PortletMode>(), Err(PrimitiveError::Empty("portlet mode")));
}

#[test]
fn window_states_round_trip_through_display() {
	for state in [
		WindowState::Normal,
		WindowState::Maximized,
		WindowState::Minimized,
		WindowState::Custom("solo".into()),
	] {
		assert_eq!(state.to_string().parse::<WindowState>().unwrap(), state);
	}
}

#[test]
fn mode_serializes_as_its_name() {
	let json = serde_json::to_string(&PortletMode::Edit).unwrap();
	assert_eq!(json, "\"edit\"");
	let back: WindowState = serde_json::from_str("\"MAXIMIZED\"").unwrap();
	assert_eq!(back, WindowState::Maximized);
}
