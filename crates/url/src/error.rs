use portico_primitives::PrimitiveError;
use thiserror::Error;

/// Errors produced while parsing a portal URL.
#[derive(Debug, Error)]
pub enum UrlError {
	/// The input is not a URL at all.
	#[error("invalid URL: {0}")]
	Syntax(#[from] url::ParseError),

	/// The path does not start with the configured context and servlet path.
	#[error("path {path:?} is outside the portal base path {expected:?}")]
	ForeignPath {
		/// Path of the parsed URL.
		path: String,
		/// Configured base path.
		expected: String,
	},

	/// A path segment is not valid percent-encoded UTF-8.
	#[error("invalid percent-encoding in path segment {0:?}")]
	Encoding(String),

	/// A page path contains a `.` or `..` segment.
	#[error("page {0:?} contains a dot segment")]
	DotSegment(String),

	/// A `pu.` query key this codec does not know.
	#[error("unknown portal URL token {0:?}")]
	UnknownToken(String),

	/// A known `pu.` query key with a malformed shape or value.
	#[error("malformed portal URL token {key:?}: {reason}")]
	MalformedToken {
		/// The offending query key.
		key: String,
		/// What is wrong with it.
		reason: &'static str,
	},

	/// A token refers to a window index no `pu.win` entry declared.
	#[error("window index {0} is not declared")]
	UnknownWindow(usize),

	/// A public parameter is missing one of its required tokens.
	#[error("public parameter {index} is missing its {field}")]
	IncompletePublicParameter {
		/// Index of the public parameter.
		index: usize,
		/// Name of the missing field.
		field: &'static str,
	},

	/// A phase, cache level, mode, state or qualified name failed to parse.
	#[error(transparent)]
	Value(#[from] PrimitiveError),
}

/// Result type for portal URL parsing.
pub type Result<T> = std::result::Result<T, UrlError>;
