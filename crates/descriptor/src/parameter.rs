use portico_primitives::{Locale, QName};
use serde::{Deserialize, Serialize};


/// A localized description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
	/// Locale the text is written in.
	pub locale: Locale,
	/// Description text.
	pub text: String,
}

impl Description {
	/// Creates a description.
	pub fn new(locale: impl Into<Locale>, text: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			text: text.into(),
		}
	}
}

/// Declaration of one public render parameter.
///
/// `Clone` is a deep copy: the qualified name, the alias list and every
/// description are owned by the copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicRenderParameter {
	qname: QName,
	identifier: String,
	#[serde(default)]
	aliases: Vec<QName>,
	#[serde(default)]
	descriptions: Vec<Description>,
}

impl PublicRenderParameter {
	/// Declares `qname`, known locally as `identifier`.
	pub fn new(qname: QName, identifier: impl Into<String>) -> Self {
		Self {
			qname,
			identifier: identifier.into(),
			aliases: Vec::new(),
			descriptions: Vec::new(),
		}
	}

	/// Returns the declared qualified name.
	pub fn qname(&self) -> &QName {
		&self.qname
	}

	/// Returns the portlet-local identifier.
	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	/// Returns the alias names.
	pub fn aliases(&self) -> &[QName] {
		&self.aliases
	}

	/// Returns every description in insertion order.
	pub fn descriptions(&self) -> &[Description] {
		&self.descriptions
	}

	/// Returns the description for exactly `locale`.
	///
	/// When several descriptions share the locale the last one added wins.
	/// There is no fallback to a less specific locale.
	pub fn description(&self, locale: &Locale) -> Option<&Description> {
		self.descriptions.iter().rev().find(|d| &d.locale == locale)
	}

	/// Appends a description. Duplicates are kept.
	pub fn add_description(&mut self, description: Description) {
		self.descriptions.push(description);
	}

	/// Appends an alias. Duplicates are kept.
	pub fn add_alias(&mut self, alias: QName) {
		self.aliases.push(alias);
	}

	/// Returns true if `qname` is the declared name or one of its aliases.
	pub fn resolves(&self, qname: &QName) -> bool {
		&self.qname == qname || self.aliases.contains(qname)
	}
}
