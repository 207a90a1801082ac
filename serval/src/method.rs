use indexmap::IndexMap;
use serval_error::{Error, Result};

use crate::field::{Field, FieldOptions};
use crate::getter::{Accessor, Method};

/// Methods registered on a definition, including the ones inherited from
/// its parents.
#[derive(Clone, Default)]
pub struct Methods {
    pub(crate) entries: IndexMap<String, Method>,
}

impl Methods {
    pub fn get(&self, name: &str) -> Option<&Method> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl core::fmt::Debug for Methods {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// A field whose value comes from a method registered on the definition.
///
/// The method is looked up when the definition is built, by default under
/// `get_<field name>`, and called with the serializer and the object.
/// Its result is used as is: `call` and `required` don't apply.
///
/// ```
/// use serval::{Definition, MethodField, Value, map};
///
/// let def = Definition::dict("Foo")
///     .field("plus", MethodField::new())
///     .field("minus", MethodField::with_method("do_minus"))
///     .method("get_plus", |_, foo| {
///         let bar = foo["bar"].as_number().copied().unwrap_or(0.into());
///         Ok((bar + foo["baz"].as_number().copied().unwrap_or(0.into())).into())
///     })
///     .method("do_minus", |_, foo| {
///         let bar = foo["bar"].as_number().copied().unwrap_or(0.into());
///         Ok((bar - foo["baz"].as_number().copied().unwrap_or(0.into())).into())
///     })
///     .build()
///     .unwrap();
///
/// let out = def.serialize(map! { "bar": 5, "baz": 10 }).unwrap();
/// assert_eq!(out, Value::from(map! { "plus": 15, "minus": -5 }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MethodField {
    method: Option<String>,
    options: FieldOptions,
}

impl MethodField {
    pub fn new() -> MethodField {
        MethodField::default()
    }

    pub fn with_method(method: impl Into<String>) -> MethodField {
        MethodField::new().method(method)
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    options_methods!();
}

impl Field for MethodField {
    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn getter_takes_serializer(&self) -> bool {
        true
    }

    fn as_getter(&self, name: &str, methods: &Methods) -> Result<Option<Accessor>> {
        let method_name = match &self.method {
            Some(method) => method.clone(),
            None => format!("get_{}", name),
        };

        match methods.get(&method_name) {
            Some(method) => Ok(Some(Accessor::Serializer(method.clone()))),
            None => Err(Error::configuration(format!(
                "no method named `{}` is registered",
                method_name
            ))
            .value("field", name.to_owned())),
        }
    }
}
