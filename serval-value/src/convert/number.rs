use crate::{Number, Value};
use core::fmt;

#[derive(Debug)]
pub struct TryFromNumberError {
    message: &'static str,
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl core::error::Error for TryFromNumberError {}

macro_rules! from_impl {
    (signed $($from: ty),*) => {
        $(
            impl From<$from> for Number {
                fn from(from: $from) -> Number {
                    Number::I64(from as i64)
                }
            }

            impl From<$from> for Value {
                fn from(from: $from) -> Value {
                    Value::Number(from.into())
                }
            }

            impl TryFrom<Number> for $from {
                type Error = TryFromNumberError;
                fn try_from(number: Number) -> Result<$from, Self::Error> {
                    let int = number.as_i64().ok_or(TryFromNumberError {
                        message: "number is not a signed integer",
                    })?;
                    <$from>::try_from(int).map_err(|_| TryFromNumberError {
                        message: "integer out of range",
                    })
                }
            }
        )*
    };

    (unsigned $($from: ty),*) => {
        $(
            impl From<$from> for Number {
                fn from(from: $from) -> Number {
                    Number::U64(from as u64)
                }
            }

            impl From<$from> for Value {
                fn from(from: $from) -> Value {
                    Value::Number(from.into())
                }
            }

            impl TryFrom<Number> for $from {
                type Error = TryFromNumberError;
                fn try_from(number: Number) -> Result<$from, Self::Error> {
                    let int = number.as_u64().ok_or(TryFromNumberError {
                        message: "number is not an unsigned integer",
                    })?;
                    <$from>::try_from(int).map_err(|_| TryFromNumberError {
                        message: "integer out of range",
                    })
                }
            }
        )*
    };

    (float $($from: ty),*) => {
        $(
            impl From<$from> for Number {
                fn from(from: $from) -> Number {
                    Number::F64(from as f64)
                }
            }

            impl From<$from> for Value {
                fn from(from: $from) -> Value {
                    Value::Number(from.into())
                }
            }
        )*
    };
}

from_impl!(signed i8, i16, i32, i64, isize);
from_impl!(unsigned u8, u16, u32, u64, usize);
from_impl!(float f32, f64);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl TryFrom<Number> for f64 {
    type Error = TryFromNumberError;
    fn try_from(number: Number) -> Result<f64, Self::Error> {
        Ok(number.as_f64())
    }
}

impl TryFrom<Value> for Number {
    type Error = &'static str;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err("Value not a number"),
        }
    }
}
