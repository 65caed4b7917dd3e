//! Parameter stores.
//!
//! A [`Parameters`] map holds multi-valued parameters: every name maps to an
//! ordered, possibly empty list of values, never a single scalar. Insertion
//! order is kept so that serialized URLs are deterministic; equality ignores
//! it.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};


/// Parameter name to ordered values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(IndexMap<String, Vec<String>>);

impl Parameters {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the values of `name`, if present.
	pub fn get(&self, name: &str) -> Option<&[String]> {
		self.0.get(name).map(Vec::as_slice)
	}

	/// Returns the first value of `name`, if present and non-empty.
	pub fn first(&self, name: &str) -> Option<&str> {
		self.0.get(name).and_then(|v| v.first()).map(String::as_str)
	}

	/// Sets `name` to `values`, returning the previous values.
	///
	/// Replacing keeps the name's original position.
	pub fn put<S: Into<String>>(&mut self, name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Option<Vec<String>> {
		self.0.insert(name.into(), values.into_iter().map(Into::into).collect())
	}

	/// Appends one value to `name`, creating the entry if needed.
	pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.entry(name.into()).or_default().push(value.into());
	}

	/// Removes `name`, returning its values.
	pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
		self.0.shift_remove(name)
	}

	/// Returns true if `name` is present, even with no values.
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Iterates over names in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Iterates over `(name, values)` in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	/// Number of distinct names.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no names are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Removes every name.
	pub fn clear(&mut self) {
		self.0.clear();
	}
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for Parameters {
	fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
	}
}

impl<K: Into<String>> Extend<(K, Vec<String>)> for Parameters {
	fn extend<I: IntoIterator<Item = (K, Vec<String>)>>(&mut self, iter: I) {
		self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
	}
}

impl IntoIterator for Parameters {
	type Item = (String, Vec<String>);
	type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Names declared as public render parameter identifiers.
///
/// Used to route a render-parameter write either to the window's private
/// store or to the shared public set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicNames(IndexSet<String>);

impl PublicNames {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares `name` as public.
	pub fn declare(&mut self, name: impl Into<String>) {
		self.0.insert(name.into());
	}

	/// Returns true iff `name` has been declared public.
	pub fn is_public(&self, name: &str) -> bool {
		self.0.contains(name)
	}

	/// Iterates over the declared names.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Number of declared names.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if nothing is declared.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<S: Into<String>> FromIterator<S> for PublicNames {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}
