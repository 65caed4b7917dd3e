use std::fmt;
use std::str::FromStr;

use crate::{PrimitiveError, string_serde};

/// Lifecycle phase a portal URL triggers for its target window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
	/// Produce markup.
	#[default]
	Render,
	/// Process a user-triggered action, then redirect.
	Action,
	/// Serve an auxiliary resource (AJAX, images).
	Resource,
}

impl Phase {
	/// Returns the wire name of the phase.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Render => "render",
			Self::Action => "action",
			Self::Resource => "resource",
		}
	}
}

impl FromStr for Phase {
	type Err = PrimitiveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"render" => Ok(Self::Render),
			"action" => Ok(Self::Action),
			"resource" => Ok(Self::Resource),
			other => Err(PrimitiveError::UnknownPhase(other.to_string())),
		}
	}
}

impl fmt::Display for Phase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

string_serde!(Phase);

/// Cacheability of a resource URL.
///
/// Anything below `Full` makes the resource depend on the window's render
/// state, which then has to travel with the resource request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheLevel {
	/// Cacheable independent of any render state.
	Full,
	/// Depends on the render state of the owning window.
	Portlet,
	/// Depends on the render state of the whole page.
	Page,
}

impl CacheLevel {
	/// Returns the wire name of the cache level.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Full => "full",
			Self::Portlet => "portlet",
			Self::Page => "page",
		}
	}

	/// Whether a resource request at this level must carry the window's
	/// render parameters.
	pub const fn preserves_render_state(self) -> bool {
		!matches!(self, Self::Full)
	}
}

impl FromStr for CacheLevel {
	type Err = PrimitiveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"full" => Ok(Self::Full),
			"portlet" => Ok(Self::Portlet),
			"page" => Ok(Self::Page),
			_ => Err(PrimitiveError::UnknownCacheLevel(s.to_string())),
		}
	}
}

impl fmt::Display for CacheLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

string_serde!(CacheLevel);
