use core::fmt;
use std::sync::OnceLock;

use serval_error::{Error, Result};
use serval_value::{List, Map, Value};
use tracing::trace;

use crate::definition::{CompiledField, Definition};
use crate::getter::Accessor;

/// Runs a [`Definition`] over one subject, or a list of subjects.
///
/// The output is computed on first access and cached for the lifetime of
/// the serializer.
pub struct Serializer {
    definition: Definition,
    instance: Value,
    many: bool,
    context: Option<Value>,
    data: OnceLock<Value>,
}

impl Serializer {
    pub fn new(definition: &Definition, instance: impl Into<Value>) -> Serializer {
        Serializer::nested(definition.clone(), instance.into(), false)
    }

    pub fn builder(definition: &Definition) -> SerializerBuilder {
        SerializerBuilder::new(definition)
    }

    pub(crate) fn nested(definition: Definition, instance: Value, many: bool) -> Serializer {
        Serializer {
            definition,
            instance,
            many,
            context: None,
            data: OnceLock::new(),
        }
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn instance(&self) -> &Value {
        &self.instance
    }

    pub fn is_many(&self) -> bool {
        self.many
    }

    /// Caller supplied context, available to method fields.
    pub fn context(&self) -> Option<&Value> {
        self.context.as_ref()
    }

    /// The serialized output. Computed once, later calls return the cached value.
    pub fn data(&self) -> Result<&Value> {
        if let Some(data) = self.data.get() {
            return Ok(data);
        }
        let data = self.compute()?;
        Ok(self.data.get_or_init(|| data))
    }

    pub fn into_data(mut self) -> Result<Value> {
        match self.data.take() {
            Some(data) => Ok(data),
            None => self.compute(),
        }
    }

    fn compute(&self) -> Result<Value> {
        trace!(definition = %self.definition.name(), many = self.many, "serializing");

        if !self.many {
            return self.to_value(&self.instance).map(Value::Map);
        }

        let Some(instances) = self.instance.as_list() else {
            return Err(Error::conversion(format!(
                "expected a list of subjects, got `{}`",
                self.instance.type_name()
            )));
        };

        instances
            .iter()
            .map(|instance| self.to_value(instance).map(Value::Map))
            .collect::<Result<List>>()
            .map(Value::List)
    }

    /// Serialize a single subject with this serializer's definition.
    pub fn to_value(&self, instance: &Value) -> Result<Map> {
        let fields = self.definition.fields();
        let mut output = Map::with_capacity(fields.len());

        for field in fields {
            if let Some(value) = self.serialize_field(field, instance)? {
                output.insert(field.label(), value);
            }
        }

        Ok(output)
    }

    fn serialize_field(&self, field: &CompiledField, instance: &Value) -> Result<Option<Value>> {
        let getter = match field.getter() {
            Accessor::Serializer(method) => {
                return method(self, instance)
                    .map(Some)
                    .map_err(|err| err.value("field", field.name().to_owned()));
            }
            Accessor::Object(getter) => getter,
        };

        let mut value = match getter(instance) {
            Ok(value) => value,
            Err(err) if err.is_retrieval() && !field.required() => {
                trace!(field = field.name(), "skipping missing optional field");
                return Ok(None);
            }
            Err(err) => return Err(err.value("field", field.name().to_owned())),
        };

        if field.required() || !value.is_null() {
            if field.call() {
                value = value
                    .call()
                    .map_err(|err| err.value("field", field.name().to_owned()))?;
            }
            if let Some(to_value) = field.to_value() {
                value = to_value(value).map_err(|err| err.value("field", field.name().to_owned()))?;
            }
        }

        Ok(Some(value))
    }
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializer")
            .field("definition", &self.definition.name())
            .field("instance", &self.instance)
            .field("many", &self.many)
            .field("context", &self.context)
            .finish()
    }
}

pub struct SerializerBuilder {
    definition: Definition,
    instance: Value,
    many: bool,
    context: Option<Value>,
    data: Option<Value>,
}

impl SerializerBuilder {
    pub fn new(definition: &Definition) -> SerializerBuilder {
        SerializerBuilder {
            definition: definition.clone(),
            instance: Value::Null,
            many: false,
            context: None,
            data: None,
        }
    }

    pub fn instance(mut self, instance: impl Into<Value>) -> Self {
        self.instance = instance.into();
        self
    }

    /// Serialize a sequence of subjects. Implies [`SerializerBuilder::many`].
    pub fn instances<I>(mut self, instances: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.instance = Value::List(instances.into_iter().map(Into::<Value>::into).collect());
        self.many = true;
        self
    }

    pub fn many(mut self, many: bool) -> Self {
        self.many = many;
        self
    }

    pub fn context(mut self, context: impl Into<Value>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Input data is not supported, [`SerializerBuilder::build`] rejects
    /// anything but null.
    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into()).filter(|data| !data.is_null());
        self
    }

    pub fn build(self) -> Result<Serializer> {
        if self.data.is_some() {
            return Err(Error::configuration("serializers do not accept input data")
                .value("definition", self.definition.name().to_owned()));
        }

        if self.many && !self.instance.is_list() {
            return Err(Error::configuration(format!(
                "many requires a list of subjects, got `{}`",
                self.instance.type_name()
            ))
            .value("definition", self.definition.name().to_owned()));
        }

        Ok(Serializer {
            definition: self.definition,
            instance: self.instance,
            many: self.many,
            context: self.context,
            data: OnceLock::new(),
        })
    }
}
