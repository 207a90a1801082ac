use core::fmt;
use std::sync::Arc;

use crate::Value;

/// A domain object that exposes named attributes.
///
/// Implementors decide what "attribute" means: a struct field, a computed
/// property or a bound method returned as a [`Value::Function`]. Returning
/// `None` means the attribute does not exist, which serializers treat as a
/// retrieval failure.
///
/// ```
/// use serval_value::{Object, Value};
///
/// struct User {
///     name: String,
/// }
///
/// impl Object for User {
///     fn get_attr(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
/// }
///
/// let user = Value::object(User { name: "Rasmus".into() });
/// assert_eq!(user.get_attr("name"), Some(Value::from("Rasmus")));
/// assert_eq!(user.get_attr("age"), None);
/// ```
pub trait Object: Send + Sync {
    fn get_attr(&self, name: &str) -> Option<Value>;

    /// Key based access. Objects are not subscriptable unless they opt in.
    fn get_item(&self, key: &str) -> Option<Value> {
        let _ = key;
        None
    }

    fn type_name(&self) -> &str {
        core::any::type_name::<Self>()
    }
}

#[derive(Clone)]
pub struct ObjectRef(Arc<dyn Object>);

impl ObjectRef {
    pub fn new<T: Object + 'static>(object: T) -> ObjectRef {
        ObjectRef(Arc::new(object))
    }

    pub fn from_arc(object: Arc<dyn Object>) -> ObjectRef {
        ObjectRef(object)
    }
}

impl core::ops::Deref for ObjectRef {
    type Target = dyn Object;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectRef").field(&self.0.type_name()).finish()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl Eq for ObjectRef {}
