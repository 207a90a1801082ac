use core::fmt;

use crate::access::Key;
use crate::function::Function;
use crate::number::Number;
use crate::object::ObjectRef;
use crate::{list::List, map::Map, string::String};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    Bool(bool),
    String(String),
    List(List),
    Map(Map),
    Number(Number),
    Object(ObjectRef),
    Function(Function),
    #[default]
    Null,
}

impl Value {
    pub fn object<T: crate::Object + 'static>(object: T) -> Value {
        Value::Object(ObjectRef::new(object))
    }

    pub fn function<F>(func: F) -> Value
    where
        F: Fn() -> serval_error::Result<Value> + Send + Sync + 'static,
    {
        Value::Function(Function::new(func))
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Number(n) if n.is_float() => "float",
            Value::Number(_) => "int",
            Value::Object(o) => o.type_name(),
            Value::Function(_) => "function",
            Value::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => v.fmt(f),
            Value::String(v) => v.fmt(f),
            Value::Map(v) => v.fmt(f),
            Value::List(v) => v.fmt(f),
            Value::Number(v) => v.fmt(f),
            Value::Object(v) => write!(f, "<object {}>", v.type_name()),
            Value::Function(_) => write!(f, "<function>"),
            Value::Null => write!(f, "null"),
        }
    }
}

impl<K: Key> core::ops::Index<K> for Value {
    type Output = Value;
    fn index(&self, index: K) -> &Self::Output {
        static NULL: Value = Value::Null;
        self.get(index).unwrap_or(&NULL)
    }
}
