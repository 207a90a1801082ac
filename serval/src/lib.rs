#[macro_use]
mod macros;

mod definition;
mod field;
mod getter;
mod method;
mod nested;
mod scalar;
mod serializer;

#[cfg(test)]
mod tests;

pub use self::{
    definition::{CompiledField, Definition, DefinitionBuilder},
    field::{Field, FieldOptions, ValueField},
    getter::{Access, Accessor, Converter, Getter, Method, attr_getter, item_getter},
    method::{MethodField, Methods},
    nested::Nested,
    scalar::{BoolField, FloatField, IntField, StrField},
    serializer::{Serializer, SerializerBuilder},
};

pub use serval_error::{BoxError, Error, ErrorKind, Result};
pub use serval_value as value;
pub use serval_value::{List, Map, Object, Value, list, map};
