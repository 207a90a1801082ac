mod error;
mod serializer;
mod value;

pub use self::{
    error::SerializerError,
    serializer::{Serializer, to_value},
};
