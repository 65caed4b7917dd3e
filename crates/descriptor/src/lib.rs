//! Deployment-time declarations of public render parameters.
//!
//! A portlet declares the public render parameters it reads by qualified
//! name, gives each a local identifier, and may list alias names that
//! resolve to the same identifier. [`PublicParameterRegistry`] collects the
//! declarations of every window on a page and answers the routing questions
//! the URL layer asks: is this name public for that window, and which
//! windows share this qualified name.

pub mod parameter;
pub mod registry;

pub use parameter::{Description, PublicRenderParameter};
pub use registry::PublicParameterRegistry;
