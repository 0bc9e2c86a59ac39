use std::collections::HashMap;

use crate::name::FullyQualifiedName;

/// A mapping from the fully qualified name of an array to its units.
///
/// The index is append-only: it grows as groups are loaded and an entry is never replaced.
#[derive(Clone, Debug, Default)]
pub struct UnitIndex(HashMap<FullyQualifiedName, String>);

impl UnitIndex {
    /// Create a new empty unit index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the `units` of the array `name`.
    ///
    /// Returns false if `name` was already present, in which case the index is unchanged.
    pub fn insert(&mut self, name: FullyQualifiedName, units: impl Into<String>) -> bool {
        match self.0.entry(name) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(units.into());
                true
            }
        }
    }

    /// Returns the units of the array `name`, or [`None`] if it is not present.
    #[must_use]
    pub fn get(&self, name: &FullyQualifiedName) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns true if the index has an entry for `name`.
    #[must_use]
    pub fn contains(&self, name: &FullyQualifiedName) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
