use core::ops::Div;

use super::ring::Ring;

/// A ring whose non-zero elements can be divided.
///
/// Division is whatever `Div` does for the type: exact for rationals,
/// rounded for floats, truncating for machine integers. Polynomial long
/// division and gcd are only meaningful when it is exact.
pub trait Field: Ring + Div<Output = Self> {}

impl<T> Field for T where T: Ring + Div<Output = T> {}
