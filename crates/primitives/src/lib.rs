//! Value types shared by the portal URL model.
//!
//! Everything here is a plain value: cheap to clone, comparable, and
//! convertible to and from the string form used on the wire.

/// Implements `Serialize`/`Deserialize` through the type's `Display` and
/// `FromStr` impls, so the serde form always matches the wire form.
macro_rules! string_serde {
	($ty:ty) => {
		impl serde::Serialize for $ty {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
				serializer.collect_str(self)
			}
		}

		impl<'de> serde::Deserialize<'de> for $ty {
			fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
				let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
				raw.parse().map_err(serde::de::Error::custom)
			}
		}
	};
}

pub(crate) use string_serde;

/// Error type for parsing primitive values.
pub mod error;
/// Portlet window identifiers.
pub mod ids;
/// Locales used to key localized descriptions.
pub mod locale;
/// Portlet modes and window states.
pub mod mode;
/// Parameter stores: name to ordered values, plus the public-name filter.
pub mod params;
/// Lifecycle phases and resource cache levels.
pub mod phase;
/// Namespace-qualified names.
pub mod qname;

pub use error::{PrimitiveError, Result};
pub use ids::WindowId;
pub use locale::Locale;
pub use mode::{PortletMode, WindowState};
pub use params::{Parameters, PublicNames};
pub use phase::{CacheLevel, Phase};
pub use qname::QName;
