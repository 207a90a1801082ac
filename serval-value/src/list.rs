use core::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Copy-on-write list of values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    items: Arc<Vec<Value>>,
}

impl List {
    pub fn new() -> List {
        List::default()
    }

    pub fn with_capacity(capacity: usize) -> List {
        List {
            items: Arc::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        Arc::make_mut(&mut self.items).push(value.into());
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Value> {
        Arc::make_mut(&mut self.items).get_mut(idx)
    }
}

impl core::ops::Deref for List {
    type Target = [Value];
    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        List {
            items: Arc::new(items),
        }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        List::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Value> for List {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        Arc::make_mut(&mut self.items).extend(iter)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;
    fn into_iter(self) -> Self::IntoIter {
        Arc::unwrap_or_clone(self.items).into_iter()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            match item {
                Value::String(s) => write!(f, "{:?}", s.as_str())?,
                other => write!(f, "{}", other)?,
            }
        }
        f.write_str("]")
    }
}
