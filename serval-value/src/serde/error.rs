use core::fmt;

#[derive(Debug)]
pub enum SerializerError {
    Custom(String),
}

impl fmt::Display for SerializerError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SerializerError::Custom(ref s) => fmt.write_str(s),
        }
    }
}

impl core::error::Error for SerializerError {}

impl serde::ser::Error for SerializerError {
    fn custom<T: fmt::Display>(msg: T) -> SerializerError {
        SerializerError::Custom(msg.to_string())
    }
}

impl From<SerializerError> for serval_error::Error {
    fn from(value: SerializerError) -> Self {
        serval_error::Error::conversion(value)
    }
}
