// NaN compares equal to NaN so that `Number` and `Value` can be `Eq`.
#[inline]
pub fn eq(left: f64, right: f64) -> bool {
    if left.is_nan() {
        right.is_nan()
    } else {
        left == right
    }
}
