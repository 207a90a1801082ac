use core::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serval_error::{Error, Result};
use serval_value::Value;
use tracing::debug;

use crate::field::Field;
use crate::getter::{Access, Accessor, Converter, Method};
use crate::method::Methods;
use crate::serializer::Serializer;

/// One step of a compiled definition.
#[derive(Clone)]
pub struct CompiledField {
    name: serval_value::String,
    getter: Accessor,
    to_value: Option<Converter>,
    call: bool,
    required: bool,
}

impl CompiledField {
    /// The output key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn getter(&self) -> &Accessor {
        &self.getter
    }

    pub fn to_value(&self) -> Option<&Converter> {
        self.to_value.as_ref()
    }

    pub fn call(&self) -> bool {
        self.call
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn getter_takes_serializer(&self) -> bool {
        self.getter.takes_serializer()
    }

    pub(crate) fn label(&self) -> &serval_value::String {
        &self.name
    }
}

impl fmt::Debug for CompiledField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledField")
            .field("name", &self.name)
            .field("getter", &self.getter)
            .field("to_value", &self.to_value.is_some())
            .field("call", &self.call)
            .field("required", &self.required)
            .finish()
    }
}

struct Inner {
    name: String,
    access: Access,
    field_map: IndexMap<String, Arc<dyn Field>>,
    methods: Methods,
    fields: Box<[CompiledField]>,
}

/// A compiled serializer definition.
///
/// Cloning is cheap, clones share the same compiled plan.
#[derive(Clone)]
pub struct Definition {
    inner: Arc<Inner>,
}

impl Definition {
    /// Start a definition that reads attributes of [`Object`](serval_value::Object)s.
    pub fn builder(name: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder::new(name)
    }

    /// Start a definition that reads keys of maps.
    pub fn dict(name: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder::new(name).access(Access::Item)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn access(&self) -> Access {
        self.inner.access
    }

    /// The compiled plan, in output order.
    pub fn fields(&self) -> &[CompiledField] {
        &self.inner.fields
    }

    /// Names of the merged fields, in output order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.inner.field_map.keys().map(String::as_str)
    }

    pub fn methods(&self) -> &Methods {
        &self.inner.methods
    }

    pub fn serializer(&self) -> crate::SerializerBuilder {
        Serializer::builder(self)
    }

    /// Serialize a single subject.
    pub fn serialize(&self, instance: impl Into<Value>) -> Result<Value> {
        Serializer::new(self, instance).into_data()
    }

    /// Serialize every subject, keeping their order.
    pub fn serialize_many<I>(&self, instances: I) -> Result<Value>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Serializer::builder(self)
            .instances(instances)
            .build()?
            .into_data()
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("name", &self.inner.name)
            .field("access", &self.inner.access)
            .field("fields", &self.inner.fields)
            .field("methods", &self.inner.methods)
            .finish()
    }
}

/// Declares the fields and methods of a [`Definition`].
pub struct DefinitionBuilder {
    name: String,
    access: Option<Access>,
    parents: Vec<Definition>,
    fields: IndexMap<String, Arc<dyn Field>>,
    methods: IndexMap<String, Method>,
}

impl DefinitionBuilder {
    pub fn new(name: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder {
            name: name.into(),
            access: None,
            parents: Vec::default(),
            fields: IndexMap::default(),
            methods: IndexMap::default(),
        }
    }

    /// How fields without their own getter read the subject. When unset,
    /// the first parent's access is used, then [`Access::Attribute`].
    pub fn access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }

    /// Inherit fields and methods. Parents listed first take precedence.
    ///
    /// Without an explicit [`DefinitionBuilder::access`] the access of the
    /// first parent is used as is, even when that parent only has the
    /// default and a later parent sets one.
    pub fn extends(mut self, parent: &Definition) -> Self {
        self.parents.push(parent.clone());
        self
    }

    pub fn field<F>(mut self, name: impl Into<String>, field: F) -> Self
    where
        F: Field + 'static,
    {
        self.fields.insert(name.into(), Arc::new(field));
        self
    }

    pub fn method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&Serializer, &Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }

    pub fn build(self) -> Result<Definition> {
        let DefinitionBuilder {
            name,
            access,
            parents,
            fields,
            methods,
        } = self;

        let access = access
            .or_else(|| parents.first().map(Definition::access))
            .unwrap_or_default();

        let field_map = merge_layers(
            parents.iter().rev().map(|parent| &parent.inner.field_map),
            fields,
        );

        let methods = Methods {
            entries: merge_layers(
                parents.iter().rev().map(|parent| &parent.inner.methods.entries),
                methods,
            ),
        };

        let compiled = field_map
            .iter()
            .map(|(field_name, field)| compile_field(field_name, &**field, access, &methods))
            .collect::<Result<Box<[_]>>>()
            .map_err(|err| err.value("definition", name.clone()))?;

        debug!(
            definition = %name,
            fields = compiled.len(),
            access = ?access,
            "compiled definition"
        );

        Ok(Definition {
            inner: Arc::new(Inner {
                name,
                access,
                field_map,
                methods,
                fields: compiled,
            }),
        })
    }
}

// Later layers overwrite values, entries keep the position of their first
// occurrence.
fn merge_layers<'a, V: Clone + 'a>(
    layers: impl Iterator<Item = &'a IndexMap<String, V>>,
    direct: IndexMap<String, V>,
) -> IndexMap<String, V> {
    let mut merged = IndexMap::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in direct {
        merged.insert(key, value);
    }
    merged
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn compile_field(
    name: &str,
    field: &dyn Field,
    access: Access,
    methods: &Methods,
) -> Result<CompiledField> {
    let options = field.options();

    let getter = match field.as_getter(name, methods)? {
        Some(getter) => getter,
        None => Accessor::Object(access.getter(non_empty(&options.attr).unwrap_or(name))),
    };

    if field.getter_takes_serializer() != getter.takes_serializer() {
        return Err(Error::configuration(
            "field getter does not match the serializer capability it declares",
        )
        .value("field", name.to_owned()));
    }

    Ok(CompiledField {
        name: non_empty(&options.label).unwrap_or(name).into(),
        getter,
        to_value: field.to_value(),
        call: options.call,
        required: options.required,
    })
}
