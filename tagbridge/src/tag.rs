//! Multi-valued tag fields
//!
//! A [`TagMap`] maps lower-cased field names (`"title"`, `"artist"`, `"tracknumber"`, ...) to the
//! ordered list of values stored for that field. Most fields have exactly one value, but some
//! (multiple genres, multiple artists) can have several.
//!
//! # Multiple values on the boundary
//!
//! When written, the values of a field are joined with [`VALUE_SEPARATOR`] and split back apart by
//! the engine. A value that itself contains a `'\n'` is therefore indistinguishable from two
//! separate values. This is a known limitation of the engine contract, not something this crate
//! tries to work around.

use std::collections::btree_map::{self, BTreeMap};

/// Separator used to pack multiple values into a single written value
pub const VALUE_SEPARATOR: char = '\n';

/// A mapping of field names to their values
///
/// Field names are case-insensitive, and stored lower-cased.
///
/// # Examples
///
/// ```rust
/// use tagbridge::tag::TagMap;
///
/// let mut tags = TagMap::new();
/// tags.insert("GENRE", "Jazz");
/// tags.insert("genre", "Fusion");
///
/// assert_eq!(tags.get("Genre"), Some(&[String::from("Jazz"), String::from("Fusion")][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
	fields: BTreeMap<String, Vec<String>>,
}

fn normalize(field: &str) -> String {
	field.to_lowercase()
}

impl TagMap {
	/// Create an empty `TagMap`
	pub const fn new() -> Self {
		Self {
			fields: BTreeMap::new(),
		}
	}

	/// Append `value` to the values of `field`
	pub fn insert(&mut self, field: impl AsRef<str>, value: impl Into<String>) {
		self.fields
			.entry(normalize(field.as_ref()))
			.or_default()
			.push(value.into());
	}

	/// Replace all values of `field`, returning the previous ones
	pub fn set<I, V>(&mut self, field: impl AsRef<str>, values: I) -> Option<Vec<String>>
	where
		I: IntoIterator<Item = V>,
		V: Into<String>,
	{
		self.fields.insert(
			normalize(field.as_ref()),
			values.into_iter().map(Into::into).collect(),
		)
	}

	/// All values of `field`
	pub fn get(&self, field: &str) -> Option<&[String]> {
		self.fields.get(&normalize(field)).map(Vec::as_slice)
	}

	/// The first value of `field`
	pub fn get_first(&self, field: &str) -> Option<&str> {
		self.get(field)?.first().map(String::as_str)
	}

	/// Remove `field`, returning its values
	pub fn remove(&mut self, field: &str) -> Option<Vec<String>> {
		self.fields.remove(&normalize(field))
	}

	/// Whether `field` is present
	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains_key(&normalize(field))
	}

	/// Number of distinct fields
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether there are no fields
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Iterate over the fields and their values
	pub fn iter(&self) -> Iter<'_> {
		Iter {
			inner: self.fields.iter(),
		}
	}
}

/// Pack `values` into a single value, separated by [`VALUE_SEPARATOR`]
pub(crate) fn join_values<V: AsRef<str>>(values: &[V]) -> String {
	let mut joined = String::new();
	for (i, value) in values.iter().enumerate() {
		if i > 0 {
			joined.push(VALUE_SEPARATOR);
		}

		joined.push_str(value.as_ref());
	}

	joined
}

/// An iterator over the fields of a [`TagMap`]
pub struct Iter<'a> {
	inner: btree_map::Iter<'a, String, Vec<String>>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = (&'a str, &'a [String]);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner
			.next()
			.map(|(field, values)| (field.as_str(), values.as_slice()))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TagMap {
	type Item = (&'a str, &'a [String]);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl IntoIterator for TagMap {
	type Item = (String, Vec<String>);
	type IntoIter = btree_map::IntoIter<String, Vec<String>>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.into_iter()
	}
}

impl<K, V> FromIterator<(K, V)> for TagMap
where
	K: AsRef<str>,
	V: Into<String>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut tags = Self::new();
		tags.extend(iter);
		tags
	}
}

impl<K, V> Extend<(K, V)> for TagMap
where
	K: AsRef<str>,
	V: Into<String>,
{
	fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
		for (field, value) in iter {
			self.insert(field, value);
		}
	}
}
