//! Portlet modes and window states.
//!
//! Both are case-insensitive names; the canonical form is lower case. The
//! standard values get their own variants, anything else a portal defines is
//! carried as `Custom`.

use std::fmt;
use std::str::FromStr;

use crate::{PrimitiveError, string_serde};

#[cfg(test)]
mod tests;

/// The function a portlet is performing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PortletMode {
	/// Normal content generation.
	#[default]
	View,
	/// Customization of the portlet's behavior.
	Edit,
	/// Help about the portlet.
	Help,
	/// Portal-defined mode, stored lower case.
	Custom(String),
}

impl PortletMode {
	/// Returns the canonical lower-case name.
	pub fn as_str(&self) -> &str {
		match self {
			Self::View => "view",
			Self::Edit => "edit",
			Self::Help => "help",
			Self::Custom(name) => name,
		}
	}
}

impl FromStr for PortletMode {
	type Err = PrimitiveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim().to_ascii_lowercase();
		Ok(match name.as_str() {
			"" => return Err(PrimitiveError::Empty("portlet mode")),
			"view" => Self::View,
			"edit" => Self::Edit,
			"help" => Self::Help,
			_ => Self::Custom(name),
		})
	}
}

impl fmt::Display for PortletMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

string_serde!(PortletMode);

/// How much page space a portlet window occupies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum WindowState {
	/// Shares the page with other windows.
	#[default]
	Normal,
	/// The only (or dominant) window on the page.
	Maximized,
	/// Renders minimal or no content.
	Minimized,
	/// Portal-defined state, stored lower case.
	Custom(String),
}

impl WindowState {
	/// Returns the canonical lower-case name.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Normal => "normal",
			Self::Maximized => "maximized",
			Self::Minimized => "minimized",
			Self::Custom(name) => name,
		}
	}
}

impl FromStr for WindowState {
	type Err = PrimitiveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim().to_ascii_lowercase();
		Ok(match name.as_str() {
			"" => return Err(PrimitiveError::Empty("window state")),
			"normal" => Self::Normal,
			"maximized" => Self::Maximized,
			"minimized" => Self::Minimized,
			_ => Self::Custom(name),
		})
	}
}

impl fmt::Display for WindowState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

string_serde!(WindowState);
