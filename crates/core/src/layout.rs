use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// Ordered dial definitions: names paired with their allowed values.
///
/// Entry order is significance order, so the first entry is the most
/// significant dial and the last entry is the least significant.
/// Names are unique. Inserting a name that already exists replaces its values
/// without moving the entry.
///
/// A `Layout` does not validate its entries. Empty names and empty value lists
/// are rejected when an [`Odometer`](crate::Odometer) is built from the layout,
/// or reported by [`next_combination`](crate::next_combination) when it reaches
/// an empty dial.
///
/// With the `serde` feature, a layout encodes as a map and decodes map entries
/// in the order the deserializer yields them. Input that has already lost its
/// key order, such as a `serde_json::Value` map built without `serde_json`'s
/// `preserve_order` feature, cannot have that order recovered.
///
/// Equality compares entries in order.
///
/// # Examples
///
/// ```
/// use tumbler_core::Layout;
///
/// let layout: Layout<u32> = [("section", vec![100, 101]), ("seat", vec![1, 2, 3])]
///     .into_iter()
///     .collect();
///
/// assert_eq!(layout.len(), 2);
/// assert_eq!(layout.get("seat"), Some(&[1, 2, 3][..]));
/// assert_eq!(layout.names().collect::<Vec<_>>(), ["section", "seat"]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Layout<V> {
    entries: IndexMap<String, Vec<V>>,
}

impl<V> Default for Layout<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> Layout<V> {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dial definition as the new least-significant dial.
    ///
    /// If `name` is already defined, its values are replaced in place and the
    /// previous values are returned.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<V>) -> Option<Vec<V>> {
        self.entries.insert(name.into(), values)
    }

    /// Returns the values defined for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[V]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Returns the number of dials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no dials are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over dial names, most significant first.
    pub fn names(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(name, values)` pairs, most significant first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &[V])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<V: PartialEq> PartialEq for Layout<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<V: Eq> Eq for Layout<V> {}

impl<V: Hash> Hash for Layout<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        self.entries.iter().for_each(|entry| entry.hash(state));
    }
}

impl<S, V> FromIterator<(S, Vec<V>)> for Layout<V>
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, Vec<V>)>>(iter: I) -> Self {
        let mut layout = Self::new();
        for (name, values) in iter {
            layout.insert(name, values);
        }
        layout
    }
}

impl<V> IntoIterator for Layout<V> {
    type Item = (String, Vec<V>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
