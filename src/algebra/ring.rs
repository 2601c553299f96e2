use core::ops::Sub;

use num_traits::{One, Zero};

/// Coefficient ring for [`Polynomial`](crate::Polynomial).
///
/// This trait assumes:
/// - (R, +) is an abelian group with identity `zero()`
/// - (R, ·) is a monoid with identity `one()`
/// - multiplication distributes over addition.
///
/// `PartialOrd` is only used to detect the sign of a coefficient when
/// rendering; it does not have to be a total order. Unsigned integers
/// qualify as well, as long as no operation actually goes negative.
///
/// Every type with `num_traits::{Zero, One}`, subtraction, `Clone` and
/// `PartialOrd` is a `Ring`.
pub trait Ring: Sized + Clone + PartialOrd + Zero + One + Sub<Output = Self> {}

impl<T> Ring for T where T: Clone + PartialOrd + Zero + One + Sub<Output = T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_and_one<R: Ring>() -> (R, R) {
        (R::zero(), R::one())
    }

    #[test]
    fn primitive_rings() {
        assert_eq!(zero_and_one::<i64>(), (0, 1));
        assert_eq!(zero_and_one::<u32>(), (0, 1));
        assert_eq!(zero_and_one::<f64>(), (0.0, 1.0));
    }
}
