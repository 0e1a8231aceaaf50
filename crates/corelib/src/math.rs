//! Numeric helpers shared by the partitioning strategies.

/// Integer division rounding toward positive infinity.
///
/// `divisor` must be non-zero; callers validate the partition count first.
///
/// ```rust
/// use corelib::math::ceil_div;
///
/// assert_eq!(ceil_div(7, 3), 3);
/// assert_eq!(ceil_div(6, 3), 2);
/// assert_eq!(ceil_div(0, 4), 0);
/// ```
#[inline]
pub fn ceil_div(dividend: usize, divisor: usize) -> usize {
    debug_assert!(divisor > 0, "ceil_div by zero");
    dividend / divisor + usize::from(dividend % divisor != 0)
}

/// Size of group `index` when `len` elements are dealt across `groups`
/// groups one at a time.
///
/// The first `len % groups` groups get the ceiling share.
#[inline]
pub fn dealt_share(len: usize, groups: usize, index: usize) -> usize {
    debug_assert!(groups > 0, "dealt_share over zero groups");
    len / groups + usize::from(index < len % groups)
}
