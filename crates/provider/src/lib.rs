//! Per-window portlet URL builder.
//!
//! A [`PortletUrlProvider`] is created for one window and one lifecycle
//! phase over the portal URL of the current request. It collects the
//! changes the portlet asks for and [`apply`](PortletUrlProvider::apply)s
//! them to a clone of that URL, so the request's own URL is never touched.

pub mod error;
pub mod provider;

pub use error::{ProviderError, Result};
pub use provider::PortletUrlProvider;
