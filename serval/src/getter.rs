use core::fmt;
use std::sync::Arc;

use serval_error::{Error, Result};
use serval_value::Value;

use crate::serializer::Serializer;

/// Reads a value from the object being serialized.
pub type Getter = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Reads a value with access to the serializer that runs the definition.
pub type Method = Arc<dyn Fn(&Serializer, &Value) -> Result<Value> + Send + Sync>;

/// Transforms a retrieved value.
pub type Converter = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// A resolved way of reading one field.
#[derive(Clone)]
pub enum Accessor {
    /// Called with the object only.
    Object(Getter),
    /// Called with the serializer first, then the object.
    Serializer(Method),
}

impl Accessor {
    pub fn takes_serializer(&self) -> bool {
        matches!(self, Accessor::Serializer(_))
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Object(_) => f.write_str("Accessor::Object"),
            Accessor::Serializer(_) => f.write_str("Accessor::Serializer"),
        }
    }
}

/// How a definition reads fields that don't resolve their own getter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// Attribute lookup on [`Object`](serval_value::Object)s, see [`attr_getter`].
    #[default]
    Attribute,
    /// Key lookup on maps, see [`item_getter`].
    Item,
}

impl Access {
    pub fn getter(self, source: &str) -> Getter {
        match self {
            Access::Attribute => attr_getter(source),
            Access::Item => item_getter(source),
        }
    }
}

/// Attribute getter. Dotted paths like `owner.name` walk nested objects.
pub fn attr_getter(path: &str) -> Getter {
    let segments: Box<[String]> = path.split('.').map(ToOwned::to_owned).collect();

    Arc::new(move |instance: &Value| -> Result<Value> {
        let mut current: Option<Value> = None;
        for segment in segments.iter() {
            let target = current.as_ref().unwrap_or(instance);
            let next = target.get_attr(segment).ok_or_else(|| {
                Error::retrieval(format!(
                    "`{}` has no attribute `{}`",
                    target.type_name(),
                    segment
                ))
            })?;
            current = Some(next);
        }
        Ok(current.unwrap_or_else(|| instance.clone()))
    })
}

/// Key getter.
pub fn item_getter(key: &str) -> Getter {
    let key = key.to_owned();

    Arc::new(move |instance: &Value| -> Result<Value> {
        instance.get_item(&key).ok_or_else(|| {
            Error::retrieval(format!(
                "key `{}` not found on `{}`",
                key,
                instance.type_name()
            ))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serval_value::{Object, map};

    struct Owner {
        name: &'static str,
    }

    impl Object for Owner {
        fn get_attr(&self, name: &str) -> Option<Value> {
            match name {
                "name" => Some(self.name.into()),
                _ => None,
            }
        }
    }

    struct Pet {
        owner: Option<Value>,
    }

    impl Object for Pet {
        fn get_attr(&self, name: &str) -> Option<Value> {
            match name {
                "owner" => Some(self.owner.clone().into()),
                _ => None,
            }
        }
    }

    #[test]
    fn attribute_paths() {
        let pet = Value::object(Pet {
            owner: Some(Value::object(Owner { name: "Rasmus" })),
        });

        let getter = attr_getter("owner.name");
        assert_eq!(getter(&pet).unwrap(), Value::from("Rasmus"));

        let err = attr_getter("owner.age")(&pet).unwrap_err();
        assert!(err.is_retrieval());

        let orphan = Value::object(Pet { owner: None });
        assert!(attr_getter("owner.name")(&orphan).unwrap_err().is_retrieval());
    }

    #[test]
    fn attributes_do_not_read_map_keys() {
        let record = Value::from(map! { "name": "Rasmus" });
        assert!(Access::Attribute.getter("name")(&record).unwrap_err().is_retrieval());
        assert_eq!(
            Access::Item.getter("name")(&record).unwrap(),
            Value::from("Rasmus")
        );
    }

    #[test]
    fn item_getter_reports_missing_keys() {
        let record = Value::from(map! { "name": "Rasmus" });
        let err = item_getter("age")(&record).unwrap_err();
        assert!(err.is_retrieval());
        assert_eq!(err.to_string(), "key `age` not found on `map`");
    }
}
