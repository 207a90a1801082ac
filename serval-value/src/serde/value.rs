use serde::ser::{Error, Serialize, SerializeMap, Serializer};

use crate::{List, Map, Number, String, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            Value::Bool(v) => s.serialize_bool(v),
            Value::String(ref v) => v.serialize(s),
            Value::Number(n) => n.serialize(s),
            Value::Null => s.serialize_none(),
            Value::List(ref v) => v.serialize(s),
            Value::Map(ref v) => v.serialize(s),
            Value::Object(ref o) => Err(S::Error::custom(format_args!(
                "cannot serialize object `{}`, use a serializer definition",
                o.type_name()
            ))),
            Value::Function(_) => Err(S::Error::custom("cannot serialize a function")),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I64(v) => s.serialize_i64(v),
            Number::U64(v) => s.serialize_u64(v),
            Number::F64(v) => s.serialize_f64(v),
        }
    }
}

impl Serialize for String {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
