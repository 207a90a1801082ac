use crate::floating;
use core::fmt;

#[derive(Debug, Clone, Copy)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::I64(l), Number::I64(r)) => l == r,
            (Number::U64(l), Number::U64(r)) => l == r,
            (Number::F64(l), Number::F64(r)) => floating::eq(*l, *r),
            (Number::I64(l), Number::U64(r)) | (Number::U64(r), Number::I64(l)) => {
                u64::try_from(*l).is_ok_and(|l| l == *r)
            }
            (l, r) => floating::eq(l.as_f64(), r.as_f64()),
        }
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(i) => write!(f, "{}", i),
            Number::F64(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

impl Number {
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::I64(i) => Some(i),
            Number::U64(i) => i64::try_from(i).ok(),
            Number::F64(_) => None,
        }
    }

    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::I64(i) => u64::try_from(i).ok(),
            Number::U64(i) => Some(i),
            Number::F64(_) => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I64(i) => i as f64,
            Number::U64(i) => i as f64,
            Number::F64(n) => n,
        }
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Number::F64(_))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        !self.is_float()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::I64(i) => i == 0,
            Number::U64(i) => i == 0,
            Number::F64(n) => n == 0.0,
        }
    }
}

// Integer arithmetic stays in i64 and falls back to f64 on overflow, or as
// soon as either side is a float.
macro_rules! arit_impl {
    ($trait: ident, $method: ident, $assign_trait: ident, $assign: ident, $checked: ident, $op: tt) => {
        impl<V: Into<Number>> core::ops::$trait<V> for Number {
            type Output = Number;
            fn $method(self, rhs: V) -> Self::Output {
                let rhs = rhs.into();
                match (self.as_i64(), rhs.as_i64()) {
                    (Some(l), Some(r)) => l
                        .$checked(r)
                        .map(Number::I64)
                        .unwrap_or_else(|| Number::F64(self.as_f64() $op rhs.as_f64())),
                    _ => Number::F64(self.as_f64() $op rhs.as_f64()),
                }
            }
        }

        impl<V: Into<Number>> core::ops::$assign_trait<V> for Number {
            fn $assign(&mut self, rhs: V) {
                *self = *self $op rhs;
            }
        }
    };
}

arit_impl!(Add, add, AddAssign, add_assign, checked_add, +);
arit_impl!(Sub, sub, SubAssign, sub_assign, checked_sub, -);
arit_impl!(Mul, mul, MulAssign, mul_assign, checked_mul, *);

impl<V: Into<Number>> core::ops::Div<V> for Number {
    type Output = Number;
    fn div(self, rhs: V) -> Self::Output {
        Number::F64(self.as_f64() / rhs.into().as_f64())
    }
}

impl<V: Into<Number>> core::ops::DivAssign<V> for Number {
    fn div_assign(&mut self, rhs: V) {
        *self = *self / rhs;
    }
}

impl core::ops::Neg for Number {
    type Output = Number;
    fn neg(self) -> Self::Output {
        match self {
            Number::I64(i) => i
                .checked_neg()
                .map(Number::I64)
                .unwrap_or(Number::F64(-(i as f64))),
            Number::U64(i) => i64::try_from(i)
                .map(|i| Number::I64(-i))
                .unwrap_or(Number::F64(-(i as f64))),
            Number::F64(n) => Number::F64(-n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn integer_arithmetic() {
        let bar = Number::from(5);
        let baz = Number::from(10u8);
        assert_eq!(bar + baz, Number::I64(15));
        assert_eq!(bar - baz, Number::I64(-5));
        assert_eq!(bar * baz, Number::I64(50));
        assert_eq!(baz / bar, Number::F64(2.0));
    }

    #[test]
    fn float_promotion_and_overflow() {
        assert_eq!(Number::from(1) + 0.5, Number::F64(1.5));
        assert_eq!(Number::from(i64::MAX) + 1, Number::F64(i64::MAX as f64 + 1.0));
        assert_eq!(-Number::from(3u64), Number::I64(-3));
    }

    #[test]
    fn cross_variant_equality() {
        assert_eq!(Number::I64(3), Number::U64(3));
        assert_ne!(Number::I64(-1), Number::U64(u64::MAX));
        assert_eq!(Number::F64(f64::NAN), Number::F64(f64::NAN));
        assert_eq!(Number::F64(2.0), Number::I64(2));
    }

    #[test]
    fn display() {
        assert_eq!(Number::I64(-5).to_string(), "-5");
        assert_eq!(Number::F64(2.2).to_string(), "2.2");
        assert_eq!(Number::F64(3.0).to_string(), "3.0");
    }
}
