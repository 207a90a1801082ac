use serval_error::Result;

use crate::getter::{Accessor, Converter};
use crate::method::Methods;

/// Options shared by every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOptions {
    /// Attribute or key to read. Defaults to the name the field is declared under.
    pub attr: Option<String>,
    /// Call the retrieved value as a zero-argument function.
    pub call: bool,
    /// Output key. Defaults to the name the field is declared under.
    pub label: Option<String>,
    /// A required field fails when its value is missing. An optional field is
    /// left out of the output instead, and a null value skips `call` and
    /// conversion.
    pub required: bool,
}

impl FieldOptions {
    pub const fn new() -> FieldOptions {
        FieldOptions {
            attr: None,
            call: false,
            label: None,
            required: true,
        }
    }
}

impl Default for FieldOptions {
    fn default() -> Self {
        FieldOptions::new()
    }
}

pub(crate) static DEFAULT_OPTIONS: FieldOptions = FieldOptions::new();

/// Describes how to read and transform one value of a definition.
///
/// Fields are inert: a [`DefinitionBuilder`](crate::DefinitionBuilder) asks
/// every field for its getter and converter once, when the definition is
/// built, and the serializer only ever sees the compiled result.
///
/// A custom field usually only overrides [`Field::to_value`]:
///
/// ```
/// use std::sync::Arc;
/// use serval::{Converter, Definition, Field, FieldOptions, Value, map};
///
/// struct Upper(FieldOptions);
///
/// impl Field for Upper {
///     fn options(&self) -> &FieldOptions {
///         &self.0
///     }
///
///     fn to_value(&self) -> Option<Converter> {
///         Some(Arc::new(|value: Value| -> serval::Result<Value> {
///             Ok(value.to_string().to_uppercase().into())
///         }))
///     }
/// }
///
/// let def = Definition::dict("Shout")
///     .field("word", Upper(FieldOptions::new()))
///     .build()
///     .unwrap();
///
/// let out = def.serialize(map! { "word": "hello" }).unwrap();
/// assert_eq!(out["word"], Value::from("HELLO"));
/// ```
pub trait Field: Send + Sync {
    fn options(&self) -> &FieldOptions;

    /// Whether the getter returned by [`Field::as_getter`] wants the
    /// serializer as its first argument.
    fn getter_takes_serializer(&self) -> bool {
        false
    }

    /// Resolve a getter for the field declared as `name`.
    ///
    /// Returning `None` uses the definition's default [`Access`](crate::Access)
    /// over `attr`, or `name` if no attr was given.
    fn as_getter(&self, name: &str, methods: &Methods) -> Result<Option<Accessor>> {
        let _ = (name, methods);
        Ok(None)
    }

    /// Converter applied to retrieved values. `None` is the identity and
    /// means no conversion step is compiled in at all.
    fn to_value(&self) -> Option<Converter> {
        None
    }
}

/// Passes the retrieved value through unchanged.
#[derive(Debug, Clone, Default)]
pub struct ValueField {
    options: FieldOptions,
}

impl ValueField {
    pub fn new() -> ValueField {
        ValueField::default()
    }

    options_methods!();
}

impl Field for ValueField {
    fn options(&self) -> &FieldOptions {
        &self.options
    }
}
