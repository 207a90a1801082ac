use crate::{String, Value};

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(value: &'a str) -> Self {
        Value::String(value.into())
    }
}

impl From<std::string::String> for Value {
    fn from(value: std::string::String) -> Self {
        Value::String(value.into())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string().into())
    }
}

impl TryFrom<Value> for String {
    type Error = &'static str;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(str) => Ok(str),
            _ => Err("Value not a string"),
        }
    }
}

impl TryFrom<Value> for std::string::String {
    type Error = &'static str;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        String::try_from(value).map(Into::into)
    }
}
