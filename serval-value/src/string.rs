use std::sync::Arc;
use core::{borrow::Borrow, fmt};

/// Immutable, cheaply cloned string used for keys and string values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct String(Arc<str>);

impl String {
    pub fn new(std: std::string::String) -> String {
        String(Arc::from(std))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for String {
    fn default() -> Self {
        String(Arc::from(""))
    }
}

impl fmt::Display for String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for String {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for String {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::ops::Deref for String {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl From<Arc<str>> for String {
    fn from(value: Arc<str>) -> Self {
        String(value)
    }
}

impl From<String> for Arc<str> {
    fn from(value: String) -> Self {
        value.0
    }
}

impl From<String> for std::string::String {
    fn from(value: String) -> Self {
        value.as_str().to_owned()
    }
}

impl From<std::string::String> for String {
    fn from(value: std::string::String) -> Self {
        String::new(value)
    }
}

impl<'a> From<&'a str> for String {
    fn from(value: &'a str) -> Self {
        String(Arc::from(value))
    }
}

impl<'a> From<&'a String> for String {
    fn from(value: &'a String) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for String {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<'a> PartialEq<&'a str> for String {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<std::string::String> for String {
    fn eq(&self, other: &std::string::String) -> bool {
        self.as_str() == other
    }
}
