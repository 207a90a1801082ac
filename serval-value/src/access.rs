use serval_error::{Error, Result};

use crate::{Function, List, Map, Number, ObjectRef, String, Value};

macro_rules! is_method {
    ($check: ident, $ty: ident) => {
        pub fn $check(&self) -> bool {
            matches!(self, Value::$ty(_))
        }
    };
}

macro_rules! into_method {
    ($into: ident, $ty: ident, $oty: ty) => {
        pub fn $into(self) -> core::result::Result<$oty, Value> {
            match self {
                Value::$ty(v) => Ok(v),
                _ => Err(self),
            }
        }
    };
}

macro_rules! as_method {
    ($as: ident, $as_mut: ident, $ty: ident, $oty: ty) => {
        pub fn $as(&self) -> Option<&$oty> {
            match &self {
                Value::$ty(v) => Some(v),
                _ => None,
            }
        }

        pub fn $as_mut(&mut self) -> Option<&mut $oty> {
            match self {
                Value::$ty(v) => Some(v),
                _ => None,
            }
        }
    };
}

mod sealed {
    pub trait Sealed {}

    impl<'a> Sealed for &'a str {}

    impl Sealed for usize {}

    impl Sealed for i32 {}
}

pub trait Key: sealed::Sealed {
    fn get(self, value: &Value) -> Option<&Value>;
    fn get_mut(self, value: &mut Value) -> Option<&mut Value>;
}

impl<'a> Key for &'a str {
    fn get(self, value: &Value) -> Option<&Value> {
        match value {
            Value::Map(map) => map.get(self),
            _ => None,
        }
    }

    fn get_mut(self, value: &mut Value) -> Option<&mut Value> {
        match value {
            Value::Map(map) => map.get_mut(self),
            _ => None,
        }
    }
}

impl Key for usize {
    fn get(self, value: &Value) -> Option<&Value> {
        match value {
            Value::List(list) => list.get(self),
            _ => None,
        }
    }

    fn get_mut(self, value: &mut Value) -> Option<&mut Value> {
        match value {
            Value::List(list) => list.get_mut(self),
            _ => None,
        }
    }
}

impl Key for i32 {
    fn get(self, value: &Value) -> Option<&Value> {
        usize::try_from(self).ok().and_then(|idx| idx.get(value))
    }

    fn get_mut(self, value: &mut Value) -> Option<&mut Value> {
        usize::try_from(self).ok().and_then(|idx| idx.get_mut(value))
    }
}

impl Value {
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    is_method!(is_string, String);
    is_method!(is_bool, Bool);
    is_method!(is_list, List);
    is_method!(is_map, Map);
    is_method!(is_object, Object);
    is_method!(is_function, Function);

    as_method!(as_number, as_number_mut, Number, Number);
    as_method!(as_string, as_string_mut, String, String);
    as_method!(as_bool, as_bool_mut, Bool, bool);
    as_method!(as_list, as_list_mut, List, List);
    as_method!(as_map, as_map_mut, Map, Map);
    as_method!(as_object, as_object_mut, Object, ObjectRef);
    as_method!(as_function, as_function_mut, Function, Function);

    into_method!(into_string, String, String);
    into_method!(into_bool, Bool, bool);
    into_method!(into_list, List, List);
    into_method!(into_map, Map, Map);
    into_method!(into_number, Number, Number);
    into_method!(into_object, Object, ObjectRef);
    into_method!(into_function, Function, Function);

    pub fn get<T: Key>(&self, key: T) -> Option<&Value> {
        key.get(self)
    }

    pub fn get_mut<T: Key>(&mut self, key: T) -> Option<&mut Value> {
        key.get_mut(self)
    }

    /// Attribute lookup. Only objects have attributes.
    pub fn get_attr(&self, name: &str) -> Option<Value> {
        match self {
            Value::Object(object) => object.get_attr(name),
            _ => None,
        }
    }

    /// Key lookup on maps, or on objects that support item access.
    pub fn get_item(&self, key: &str) -> Option<Value> {
        match self {
            Value::Map(map) => map.get(key).cloned(),
            Value::Object(object) => object.get_item(key),
            _ => None,
        }
    }

    /// Call the value as a zero-argument function.
    pub fn call(&self) -> Result<Value> {
        match self {
            Value::Function(func) => func.call(),
            other => Err(Error::conversion(format!(
                "value of type `{}` is not callable",
                other.type_name()
            ))),
        }
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        match self {
            Self::Map(map) => map.insert(key, value),
            _ => None,
        }
    }
}
