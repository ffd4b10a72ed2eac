//! Edge-weight contract for graph algorithms.
//!
//! Distance accumulation and edge sorting only need addition, an additive
//! identity, a unit weight, and a total order. Callers supply any type that
//! satisfies the contract; the primitive integer and float types are covered
//! out of the box.

use std::cmp::Ordering;
use std::ops::Add;

/// Arithmetic-and-order contract required of edge weights.
///
/// `total_order` must be a total order consistent with `PartialOrd` wherever
/// the latter is defined; float implementations use `total_cmp` so `NaN`
/// weights sort deterministically instead of poisoning comparisons.
///
/// # Examples
/// ```
/// use ramus_core::Weight;
///
/// assert_eq!(u32::zero() + u32::one(), 1);
/// assert!((-1.5f64).is_negative());
/// ```
pub trait Weight: Copy + Add<Output = Self> {
    /// Additive identity, used as the starting distance of a path search.
    fn zero() -> Self;

    /// Unit weight assigned to the edges of unweighted graphs.
    fn one() -> Self;

    /// Total order over weights, usable as a sort or heap key.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Whether the weight sorts strictly below [`Weight::zero`].
    fn is_negative(&self) -> bool {
        self.total_order(&Self::zero()) == Ordering::Less
    }
}

macro_rules! impl_weight_for_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )+
    };
}

macro_rules! impl_weight_for_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn total_order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )+
    };
}

impl_weight_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_weight_for_float!(f32, f64);
