use std::sync::Arc;

use serval_value::coerce;

use crate::field::{Field, FieldOptions};
use crate::getter::Converter;

macro_rules! scalar_field {
    ($(#[$meta: meta])* $name: ident, $coerce: path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            options: FieldOptions,
        }

        impl $name {
            pub fn new() -> $name {
                $name::default()
            }

            options_methods!();
        }

        impl Field for $name {
            fn options(&self) -> &FieldOptions {
                &self.options
            }

            fn to_value(&self) -> Option<Converter> {
                Some(Arc::new($coerce))
            }
        }
    };
}

scalar_field!(
    /// Converts the value to a string.
    StrField,
    coerce::to_string
);

scalar_field!(
    /// Converts the value to an integer. Fails on values that don't hold one.
    IntField,
    coerce::to_int
);

scalar_field!(
    /// Converts the value to a float.
    FloatField,
    coerce::to_float
);

scalar_field!(
    /// Converts the value to its truthiness.
    BoolField,
    coerce::to_bool
);
