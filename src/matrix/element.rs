use num_traits::{One, Zero};
use std::ops::{Div, Mul, Sub};

/// Anything that can live inside a `SquareMatrix`, including another
/// `SquareMatrix` (block matrices).
pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + PartialEq
    + Sub<Output = Self>
    + Mul<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + PartialEq
        + Sub<Output = T>
        + Mul<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// Elements with a multiplicative identity and division, needed by row
/// reduction and inversion.
pub trait Field: Element + One + Div<Output = Self> {}

impl<T> Field for T where T: Element + One + Div<Output = T> {}

/// `-x`, written with the operations every element has.
#[inline(always)]
pub fn negate<T: Element>(x: T) -> T {
    T::zero() - x
}
