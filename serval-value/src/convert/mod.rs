mod number;
mod string;
mod value;

pub use self::number::TryFromNumberError;
