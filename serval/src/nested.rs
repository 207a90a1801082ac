use std::sync::Arc;

use serval_error::{Error, Result};
use serval_value::Value;

use crate::definition::Definition;
use crate::field::{DEFAULT_OPTIONS, Field, FieldOptions};
use crate::getter::Converter;
use crate::serializer::Serializer;

/// A definition used as a field of another definition.
///
/// The retrieved value is serialized with the nested definition. With
/// `many` set the value must be a list and every item is serialized.
#[derive(Debug, Clone)]
pub struct Nested {
    definition: Definition,
    many: bool,
    options: FieldOptions,
}

impl Nested {
    pub fn new(definition: &Definition) -> Nested {
        Nested {
            definition: definition.clone(),
            many: false,
            options: FieldOptions::new(),
        }
    }

    pub fn many(mut self, many: bool) -> Self {
        self.many = many;
        self
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    options_methods!();
}

impl Field for Nested {
    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn to_value(&self) -> Option<Converter> {
        Some(nested_converter(self.definition.clone(), self.many))
    }
}

impl Field for Definition {
    fn options(&self) -> &FieldOptions {
        &DEFAULT_OPTIONS
    }

    fn to_value(&self) -> Option<Converter> {
        Some(nested_converter(self.clone(), false))
    }
}

fn nested_converter(definition: Definition, many: bool) -> Converter {
    Arc::new(move |value: Value| -> Result<Value> {
        if many && !value.is_list() {
            return Err(Error::conversion(format!(
                "expected a list of `{}` subjects, got `{}`",
                definition.name(),
                value.type_name()
            )));
        }
        Serializer::nested(definition.clone(), value, many).into_data()
    })
}
