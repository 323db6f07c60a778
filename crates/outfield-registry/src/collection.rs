//! The generic insertion-ordered field registry.
//!
//! [`FieldCollection`] owns its records in an `IndexMap` keyed by field
//! name: the hash table gives O(1) keyed lookup and the entry vector gives
//! the registration order that every "all fields" traversal and every
//! positional access follows. Positions are assigned on insert and never
//! change (there is no removal).
//!
//! All three query flavours (by key, by group, by classification) run on
//! one linear scan primitive; only the predicate differs. Each query comes
//! in two forms: an instance method that scans the whole collection, and a
//! `select_*` associated function that scans an explicit slice of
//! references, so an already-filtered subset can be queried again.

use indexmap::map::Entry;
use indexmap::IndexMap;
use outfield_core::{FieldType, Scope};

use crate::error::RegistryError;
use crate::record::OutputField;

/// Result of a key or group query.
#[derive(Debug)]
pub struct Lookup<'a, T> {
    /// Matched records, in request order and then registration order.
    pub matches: Vec<&'a T>,
    /// Requested keys that matched nothing, in request order.
    pub not_found: Vec<String>,
}

impl<'a, T> Lookup<'a, T> {
    /// Drop the not-found list.
    pub fn into_matches(self) -> Vec<&'a T> {
        self.matches
    }

    /// Whether every requested key matched at least one record.
    pub fn is_complete(&self) -> bool {
        self.not_found.is_empty()
    }
}

/// How many records a single requested key may match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Matches {
    /// Stop at the first record satisfying the predicate.
    First,
    /// Collect every record satisfying the predicate.
    All,
}

/// Scan `refs` once per key.
///
/// Returns the matched records and the keys that matched nothing.
fn scan<'a, 'k, T, K, I, P>(
    keys: &'k [K],
    refs: I,
    mode: Matches,
    pred: P,
) -> (Vec<&'a T>, Vec<&'k K>)
where
    T: 'a,
    I: Iterator<Item = &'a T> + Clone,
    P: Fn(&K, &T) -> bool,
{
    let mut matches = Vec::new();
    let mut not_found = Vec::new();
    for key in keys {
        let mut found = false;
        for record in refs.clone() {
            if pred(key, record) {
                matches.push(record);
                found = true;
                if mode == Matches::First {
                    break;
                }
            }
        }
        if !found {
            not_found.push(key);
        }
    }
    (matches, not_found)
}

fn lookup_by_keys<'a, T, K, I>(keys: &[K], refs: I, search_group: bool) -> Lookup<'a, T>
where
    T: OutputField + 'a,
    K: AsRef<str>,
    I: Iterator<Item = &'a T> + Clone,
{
    let (matches, not_found) = scan(keys, refs, Matches::First, |key, record: &T| {
        let key = key.as_ref();
        key == record.name() || (search_group && key == record.group())
    });
    Lookup {
        matches,
        not_found: not_found.into_iter().map(|k| k.as_ref().to_string()).collect(),
    }
}

fn lookup_by_groups<'a, T, K, I>(groups: &[K], refs: I) -> Lookup<'a, T>
where
    T: OutputField + 'a,
    K: AsRef<str>,
    I: Iterator<Item = &'a T> + Clone,
{
    let (matches, not_found) = scan(groups, refs, Matches::All, |group, record: &T| {
        group.as_ref() == record.group()
    });
    Lookup {
        matches,
        not_found: not_found.into_iter().map(|k| k.as_ref().to_string()).collect(),
    }
}

fn lookup_by_type<'a, T, I>(types: &[FieldType], refs: I) -> Vec<&'a T>
where
    T: OutputField + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    // One pseudo-key holding the whole set keeps the result in plain
    // registration order regardless of the order of `types`.
    let set = [types];
    let (matches, _) = scan(&set, refs, Matches::All, |wanted, record: &T| {
        wanted.contains(&record.field_type())
    });
    matches
}

/// Insertion-ordered, uniquely-keyed store of output field records.
///
/// See the [module documentation](self) for the query semantics.
#[derive(Debug)]
pub struct FieldCollection<T> {
    pub(crate) entries: IndexMap<String, T>,
    pub(crate) scope: Scope,
}

impl<T> Default for FieldCollection<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            scope: Scope::new(),
        }
    }
}

impl<T: OutputField> FieldCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            scope: Scope::with_capacity(capacity),
        }
    }

    /// Register `record` under its name and return its position.
    ///
    /// Fails with [`RegistryError::DuplicateKey`] if the name is taken; the
    /// existing record is left untouched.
    pub fn insert(&mut self, record: T) -> Result<usize, RegistryError> {
        match self.entries.entry(record.name().to_string()) {
            Entry::Occupied(entry) => {
                tracing::warn!(key = %entry.key(), "duplicate output field registration rejected");
                Err(RegistryError::DuplicateKey {
                    key: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                let index = entry.index();
                tracing::debug!(
                    key = %entry.key(),
                    group = %record.group(),
                    field_type = %record.field_type(),
                    index,
                    "registered output field"
                );
                entry.insert(record);
                Ok(index)
            }
        }
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a field named `key` is registered.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Look up a field by name for mutation.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    /// The field at position `index` in registration order.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.entries.get_index(index).map(|(_, v)| v)
    }

    /// Registration position of the field named `key`.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    /// Iterate over all fields in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + Clone {
        self.entries.values()
    }

    /// Iterate over all field names in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + Clone {
        self.entries.keys().map(String::as_str)
    }

    /// References to every field in registration order, suitable as input
    /// to the `select_*` functions.
    pub fn refs(&self) -> Vec<&T> {
        self.entries.values().collect()
    }

    /// The symbol table custom expressions are evaluated against.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Fields whose name equals one of `keys` (or, with `search_group`,
    /// whose group equals it).
    ///
    /// Each key contributes at most one record: the first in registration
    /// order satisfying the predicate. Keys that match nothing are listed
    /// in [`Lookup::not_found`].
    pub fn fields_by_keys<K: AsRef<str>>(&self, keys: &[K], search_group: bool) -> Lookup<'_, T> {
        lookup_by_keys(keys, self.entries.values(), search_group)
    }

    /// Fields whose group equals one of `groups`.
    ///
    /// Every record in a requested group is returned, in registration
    /// order, concatenated per group in request order.
    pub fn fields_by_groups<K: AsRef<str>>(&self, groups: &[K]) -> Lookup<'_, T> {
        lookup_by_groups(groups, self.entries.values())
    }

    /// Fields whose classification is in `types`, in registration order.
    pub fn fields_by_type(&self, types: &[FieldType]) -> Vec<&T> {
        lookup_by_type(types, self.entries.values())
    }

    /// [`fields_by_keys`](Self::fields_by_keys) over an explicit reference set.
    pub fn select_by_keys<'a, K: AsRef<str>>(
        keys: &[K],
        refs: &[&'a T],
        search_group: bool,
    ) -> Lookup<'a, T> {
        lookup_by_keys(keys, refs.iter().copied(), search_group)
    }

    /// [`fields_by_groups`](Self::fields_by_groups) over an explicit reference set.
    pub fn select_by_groups<'a, K: AsRef<str>>(groups: &[K], refs: &[&'a T]) -> Lookup<'a, T> {
        lookup_by_groups(groups, refs.iter().copied())
    }

    /// [`fields_by_type`](Self::fields_by_type) over an explicit reference set.
    pub fn select_by_type<'a>(types: &[FieldType], refs: &[&'a T]) -> Vec<&'a T> {
        lookup_by_type(types, refs.iter().copied())
    }
}

/// The per-cycle hook that refreshes derived values.
///
/// Lets an output driver drive history and volume collections uniformly.
pub trait EvaluationPass {
    /// Recompute every derived value from the current direct values.
    fn evaluate(&mut self) -> Result<(), RegistryError>;
}
