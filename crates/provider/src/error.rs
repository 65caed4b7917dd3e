use thiserror::Error;

/// Errors produced by a [`PortletUrlProvider`](crate::PortletUrlProvider).
#[derive(Debug, Error)]
pub enum ProviderError {
	/// The requested feature is not supported by this driver.
	#[error("{0} are not supported")]
	Unsupported(&'static str),

	/// Writing the serialized URL failed.
	#[error("failed to write URL: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for URL provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
