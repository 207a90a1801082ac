#![no_std]

use core::fmt;

use alloc::{borrow::Cow, boxed::Box, collections::btree_map::BTreeMap};

extern crate alloc;

pub type BoxError = Box<dyn core::error::Error + Send + Sync>;

pub type Result<T> = core::result::Result<T, Error>;

/// Broad category of a failure.
///
/// The serialization engine only ever recovers from [`ErrorKind::Retrieval`],
/// and only for optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// A key or attribute was absent on the subject.
    Retrieval,
    /// A value was present but could not be converted.
    Conversion,
    /// A definition or serializer was set up incorrectly.
    Configuration,
    Custom,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Retrieval => "retrieval",
            ErrorKind::Conversion => "conversion",
            ErrorKind::Configuration => "configuration",
            ErrorKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    inner: BoxError,
    values: BTreeMap<Cow<'static, str>, Cow<'static, str>>,
}

impl Error {
    pub fn new<T: Into<BoxError>>(kind: ErrorKind, error: T) -> Error {
        Error {
            kind,
            inner: error.into(),
            values: Default::default(),
        }
    }

    pub fn retrieval<T: Into<BoxError>>(error: T) -> Error {
        Error::new(ErrorKind::Retrieval, error)
    }

    pub fn conversion<T: Into<BoxError>>(error: T) -> Error {
        Error::new(ErrorKind::Conversion, error)
    }

    pub fn configuration<T: Into<BoxError>>(error: T) -> Error {
        Error::new(ErrorKind::Configuration, error)
    }

    pub fn custom<T: Into<BoxError>>(error: T) -> Error {
        Error::new(ErrorKind::Custom, error)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_retrieval(&self) -> bool {
        self.kind == ErrorKind::Retrieval
    }

    pub fn is_conversion(&self) -> bool {
        self.kind == ErrorKind::Conversion
    }

    pub fn is_configuration(&self) -> bool {
        self.kind == ErrorKind::Configuration
    }

    /// Attach a piece of context. An existing value under the same key is kept.
    pub fn value(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.values.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|value| value.as_ref())
    }

    pub fn inner(&self) -> &(dyn core::error::Error + Send + Sync + 'static) {
        &*self.inner
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)?;

        if !self.values.is_empty() {
            write!(f, " [")?;
            for (key, value) in self.values.iter() {
                write!(f, "{}: {}, ", key, value)?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.inner.source()
    }
}

impl From<BoxError> for Error {
    fn from(value: BoxError) -> Self {
        Error::custom(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use alloc::string::ToString;
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Error", 3)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("message", &self.inner.to_string())?;
        state.serialize_field("values", &self.values)?;
        state.end()
    }
}
