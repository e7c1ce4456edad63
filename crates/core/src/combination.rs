use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// A record mapping dial names to values, in dial order.
///
/// Combinations returned by an [`Odometer`](crate::Odometer) are fresh
/// copies, so changing one never affects the odometer that produced it.
/// Combinations passed to [`next_combination`](crate::next_combination) may
/// omit dials, in which case those dials are skipped.
///
/// Equality compares entries in order.
///
/// # Examples
///
/// ```
/// use tumbler_core::Combination;
///
/// let mut combo: Combination<u32> = [("section", 100), ("seat", 1)].into_iter().collect();
/// assert_eq!(combo.get("seat"), Some(&1));
///
/// combo.insert("seat", 2);
/// assert_eq!(combo.get("seat"), Some(&2));
/// assert!(!combo.contains("row"));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Combination<V> {
    entries: IndexMap<String, V>,
}

impl<V> Default for Combination<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> Combination<V> {
    /// Creates an empty combination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty combination with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets the value for `name`.
    ///
    /// An existing entry keeps its position and its previous value is
    /// returned. A new entry is appended.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(name.into(), value)
    }

    /// Removes the entry for `name`, returning its value.
    ///
    /// The remaining entries keep their order.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.entries.shift_remove(name)
    }

    /// Returns the value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Returns a mutable reference to the value for `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.entries.get_mut(name)
    }

    /// Returns `true` if the combination has an entry for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entry names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<V: PartialEq> PartialEq for Combination<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<V: Eq> Eq for Combination<V> {}

impl<V: Hash> Hash for Combination<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        self.entries.iter().for_each(|entry| entry.hash(state));
    }
}

impl<S, V> FromIterator<(S, V)> for Combination<V>
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut combination = Self::new();
        for (name, value) in iter {
            combination.insert(name, value);
        }
        combination
    }
}

impl<V> IntoIterator for Combination<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_position_of_existing_entry() {
        let mut combo: Combination<i32> = [("a", 1), ("b", 2)].into_iter().collect();

        assert_eq!(combo.insert("a", 5), Some(1));
        assert_eq!(combo.insert("c", 3), None);

        assert_eq!(combo.names().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(combo.get("a"), Some(&5));
    }

    #[test]
    fn remove_drops_entry_and_keeps_order() {
        let mut combo: Combination<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

        assert_eq!(combo.remove("a"), Some(1));
        assert_eq!(combo.remove("a"), None);
        assert_eq!(combo.names().collect::<Vec<_>>(), ["b", "c"]);
        assert!(!combo.contains("a"));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab: Combination<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: Combination<i32> = [("b", 2), ("a", 1)].into_iter().collect();

        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[cfg(feature = "serde")]
    mod serde {
        use super::*;

        #[test]
        fn serializes_in_dial_order() {
            let combination: Combination<u32> = [("z", 1), ("a", 2)].into_iter().collect();

            let text = serde_json::to_string(&combination).unwrap();

            assert_eq!(text, r#"{"z":1,"a":2}"#);
            assert_eq!(
                serde_json::from_str::<Combination<u32>>(&text).unwrap(),
                combination
            );
        }
    }
}
