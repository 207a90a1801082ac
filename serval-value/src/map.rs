use core::{borrow::Borrow, fmt, hash::Hash};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::{string::String, value::Value};

/// Copy-on-write map that keeps keys in insertion order.
///
/// Re-inserting an existing key replaces the value in place, so a key keeps
/// the position it was first inserted at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Map {
    entries: Arc<IndexMap<String, Value>>,
}

impl Map {
    pub fn new() -> Map {
        Map::default()
    }

    pub fn with_capacity(capacity: usize) -> Map {
        Map {
            entries: Arc::new(IndexMap::with_capacity(capacity)),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&Value>
    where
        Q: ?Sized + Hash + Eq,
        String: Borrow<Q>,
    {
        self.entries.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Value>
    where
        Q: ?Sized + Hash + Eq,
        String: Borrow<Q>,
    {
        Arc::make_mut(&mut self.entries).get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Eq,
        String: Borrow<Q>,
    {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let entries = Arc::make_mut(&mut self.entries);
        entries.insert(key.into(), value.into())
    }

    /// Removes the entry and shifts the following entries down, preserving order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Value>
    where
        Q: ?Sized + Hash + Eq,
        String: Borrow<Q>,
    {
        let entries = Arc::make_mut(&mut self.entries);
        entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;
    fn into_iter(self) -> Self::IntoIter {
        Arc::unwrap_or_clone(self.entries).into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Map {
            entries: Arc::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (key, value)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: ", key.as_str())?;
            match value {
                Value::String(s) => write!(f, "{:?}", s.as_str())?,
                other => write!(f, "{}", other)?,
            }
        }
        f.write_str("}")
    }
}
