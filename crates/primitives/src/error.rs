use thiserror::Error;

/// Errors produced when a primitive value is parsed from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
	/// The lifecycle phase name is not one of `render`, `action`, `resource`.
	#[error("unknown lifecycle phase: {0:?}")]
	UnknownPhase(String),

	/// The cache level is not one of `full`, `portlet`, `page`.
	#[error("unknown cache level: {0:?}")]
	UnknownCacheLevel(String),

	/// A qualified name in `{namespace}local` form could not be parsed.
	#[error("malformed qualified name: {0:?}")]
	MalformedQName(String),

	/// A name that must not be empty was empty.
	#[error("{0} must not be empty")]
	Empty(&'static str),
}

/// Result type for primitive parsing.
pub type Result<T> = std::result::Result<T, PrimitiveError>;
