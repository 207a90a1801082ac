mod access;
pub mod coerce;
pub mod convert;
mod floating;
mod function;
mod list;
mod macros;
mod map;
mod number;
mod object;
mod string;
mod value;

#[cfg(feature = "serde")]
pub mod serde;

pub use self::{
    access::Key,
    function::Function,
    list::List,
    map::Map,
    number::Number,
    object::{Object, ObjectRef},
    string::String,
    value::Value,
};

pub use serval_error::{Error, ErrorKind, Result};

#[cfg(feature = "serde")]
pub use self::serde::to_value;
