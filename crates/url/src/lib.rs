//! The portal URL model.
//!
//! One [`PortalUrl`] describes everything a portal page request addresses:
//! the target window and lifecycle phase, the mode and window state of every
//! window that has one, each window's private parameters, the shared public
//! render parameters, and for resource requests the resource id and cache
//! level. [`UrlCodec`] turns that state into a URL string and back without
//! losing any of it.
//!
//! ```
//! use std::sync::Arc;
//!
//! use portico_config::UrlConfig;
//! use portico_primitives::{Phase, PortletMode, WindowId};
//! use portico_url::{PortalUrl, PortalUrlParameter, UrlCodec};
//!
//! let codec = Arc::new(UrlCodec::new(&UrlConfig::default()));
//! let window = WindowId::new("w");
//!
//! let mut url = PortalUrl::new(&codec);
//! url.set_target_window(Some(window.clone()));
//! url.set_phase(Phase::Render);
//! url.set_portlet_mode(window.clone(), PortletMode::Edit);
//! url.add_parameter(PortalUrlParameter::new(window, "x", ["1", "2"]));
//!
//! let parsed = PortalUrl::parse(&codec, &url.to_url(false)).unwrap();
//! assert_eq!(parsed, url);
//! ```

pub mod codec;
pub mod error;
pub mod escape;
pub mod parameter;
pub mod portal_url;

pub use codec::UrlCodec;
pub use error::{Result, UrlError};
pub use escape::escape_xml;
pub use parameter::{PortalUrlParameter, PortalUrlPublicParameter};
pub use portal_url::PortalUrl;
