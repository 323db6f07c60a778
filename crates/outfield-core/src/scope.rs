//! The name → value symbol table read by custom-field expressions.

use indexmap::IndexMap;

/// Symbol table mapping field names to their current values.
///
/// Owned by a field collection and rebuilt from scratch at the start of
/// every evaluation pass; it never carries entries across passes.
/// Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scope {
    values: IndexMap<String, f64>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scope with room for `capacity` names.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(capacity),
        }
    }

    /// Bind `name` to `value`, overwriting any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Look up the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove every binding, keeping the allocation.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the scope has no bindings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Scope {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut scope = Self::new();
        for (name, value) in iter {
            scope.set(name, value);
        }
        scope
    }
}
