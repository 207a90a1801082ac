//! Scalar coercions used by the built-in string, integer, float and boolean
//! fields.
//!
//! Every function except [`to_bool`] can fail with an
//! [`ErrorKind::Conversion`](serval_error::ErrorKind::Conversion) error.

use serval_error::{Error, Result};

use crate::{Number, Value};

fn unsupported(target: &str, value: &Value) -> Error {
    Error::conversion(format!(
        "cannot convert value of type `{}` to {}",
        value.type_name(),
        target
    ))
}

/// Render the value as a string.
///
/// Strings pass through untouched, scalars use their `Display` form and
/// lists and maps render as JSON-like text. Objects and functions have no
/// string form.
pub fn to_string(value: Value) -> Result<Value> {
    match value {
        Value::String(_) => Ok(value),
        Value::Object(_) | Value::Function(_) => Err(unsupported("string", &value)),
        other => Ok(Value::String(other.to_string().into())),
    }
}

/// Convert to an integer.
///
/// Floats are truncated toward zero, strings must hold an integer literal
/// (surrounding whitespace is ignored), booleans become `0` or `1`.
pub fn to_int(value: Value) -> Result<Value> {
    let number = match &value {
        Value::Number(n @ (Number::I64(_) | Number::U64(_))) => *n,
        Value::Number(Number::F64(f)) => float_to_int(*f)?,
        Value::Bool(b) => Number::I64(*b as i64),
        Value::String(s) => parse_int(s.trim()).ok_or_else(|| {
            Error::conversion(format!("invalid literal for integer: {:?}", s.as_str()))
        })?,
        _ => return Err(unsupported("integer", &value)),
    };
    Ok(Value::Number(number))
}

fn float_to_int(f: f64) -> Result<Number> {
    if !f.is_finite() {
        return Err(Error::conversion(format!("cannot convert float {} to integer", f)));
    }

    let truncated = f.trunc();
    if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Ok(Number::I64(truncated as i64))
    } else if truncated >= 0.0 && truncated < u64::MAX as f64 {
        Ok(Number::U64(truncated as u64))
    } else {
        Err(Error::conversion(format!("float {} is out of integer range", f)))
    }
}

fn parse_int(s: &str) -> Option<Number> {
    if let Ok(int) = s.parse::<i64>() {
        return Some(Number::I64(int));
    }
    s.strip_prefix('+')
        .unwrap_or(s)
        .parse::<u64>()
        .ok()
        .map(Number::U64)
}

/// Convert to a float. Strings are parsed after trimming whitespace.
pub fn to_float(value: Value) -> Result<Value> {
    let float = match &value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            Error::conversion(format!("could not convert string to float: {:?}", s.as_str()))
        })?,
        _ => return Err(unsupported("float", &value)),
    };
    Ok(Value::Number(Number::F64(float)))
}

/// Truthiness. Null, `false`, zero and empty strings, lists and maps are
/// false, everything else is true.
pub fn to_bool(value: Value) -> Result<Value> {
    let truthy = match &value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !n.is_zero(),
        Value::String(s) => !s.is_empty(),
        Value::List(l) => !l.is_empty(),
        Value::Map(m) => !m.is_empty(),
        Value::Object(_) | Value::Function(_) => true,
    };
    Ok(Value::Bool(truthy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{List, Map, list, map};

    #[test]
    fn strings() {
        assert_eq!(to_string(Value::from(5)).unwrap(), Value::from("5"));
        assert_eq!(to_string(Value::from(2.5)).unwrap(), Value::from("2.5"));
        assert_eq!(to_string(Value::from(true)).unwrap(), Value::from("true"));
        assert_eq!(to_string(Value::Null).unwrap(), Value::from("null"));
        assert_eq!(
            to_string(list![1, "a"].into()).unwrap(),
            Value::from(r#"[1, "a"]"#)
        );

        let err = to_string(Value::function(|| Ok(Value::Null))).unwrap_err();
        assert!(err.is_conversion());
    }

    #[test]
    fn integers() {
        assert_eq!(to_int(Value::from("5")).unwrap(), Value::from(5));
        assert_eq!(to_int(Value::from(" -12 ")).unwrap(), Value::from(-12));
        assert_eq!(to_int(Value::from(2.9)).unwrap(), Value::from(2));
        assert_eq!(to_int(Value::from(-2.9)).unwrap(), Value::from(-2));
        assert_eq!(to_int(Value::from(true)).unwrap(), Value::from(1));
        assert_eq!(
            to_int(Value::from("18446744073709551615")).unwrap(),
            Value::from(u64::MAX)
        );

        assert!(to_int(Value::from("2.2")).unwrap_err().is_conversion());
        assert!(to_int(Value::from("abc")).unwrap_err().is_conversion());
        assert!(to_int(Value::Null).unwrap_err().is_conversion());
        assert!(to_int(Value::from(f64::NAN)).unwrap_err().is_conversion());
        assert!(to_int(Value::from(List::new())).unwrap_err().is_conversion());
    }

    #[test]
    fn floats() {
        assert_eq!(to_float(Value::from("2.2")).unwrap(), Value::from(2.2));
        assert_eq!(to_float(Value::from(3)).unwrap(), Value::from(3.0));
        assert_eq!(to_float(Value::from(false)).unwrap(), Value::from(0.0));

        assert!(to_float(Value::from("two")).unwrap_err().is_conversion());
        assert!(to_float(Value::Null).unwrap_err().is_conversion());
    }

    #[test]
    fn booleans() {
        assert_eq!(to_bool(Value::Null).unwrap(), Value::from(false));
        assert_eq!(to_bool(Value::from(0)).unwrap(), Value::from(false));
        assert_eq!(to_bool(Value::from(0.5)).unwrap(), Value::from(true));
        assert_eq!(to_bool(Value::from("")).unwrap(), Value::from(false));
        assert_eq!(to_bool(Value::from("false")).unwrap(), Value::from(true));
        assert_eq!(to_bool(Map::new().into()).unwrap(), Value::from(false));
        assert_eq!(to_bool(map! { "a": 1 }.into()).unwrap(), Value::from(true));
    }
}
