use crate::error::{Error, Result};
use crate::linalg::multiply::multiply_naive;
use crate::matrix::element::{negate, Element};
use crate::matrix::square::SquareMatrix;
use num_traits::Zero;
use std::ops;

impl<T: Element> SquareMatrix<T> {
    fn zip_with(&self, rhs: &SquareMatrix<T>, op: impl Fn(T, T) -> T) -> Result<SquareMatrix<T>> {
        if self.size != rhs.size {
            return Err(Error::SizeMismatch {
                lhs: self.size,
                rhs: rhs.size,
            });
        }

        Ok(SquareMatrix {
            size: self.size,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| op(a.to_owned(), b.to_owned()))
                .collect(),
        })
    }

    pub fn map(&self, f: impl Fn(T) -> T) -> SquareMatrix<T> {
        SquareMatrix {
            size: self.size,
            cells: self.cells.iter().cloned().map(f).collect(),
        }
    }

    /// `k * self`, scalar on the left of every element.
    pub fn scale(&self, k: &T) -> SquareMatrix<T> {
        self.map(|x| k.clone() * x)
    }

    /// `self * k`, scalar on the right of every element.
    pub fn scale_right(&self, k: &T) -> SquareMatrix<T> {
        self.map(|x| x * k.clone())
    }
}

// Checked operators: unequal sizes are an error.

impl<T: Element> ops::Add<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = Result<SquareMatrix<T>>;

    fn add(self, rhs: &SquareMatrix<T>) -> Result<SquareMatrix<T>> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Element> ops::Sub<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = Result<SquareMatrix<T>>;

    fn sub(self, rhs: &SquareMatrix<T>) -> Result<SquareMatrix<T>> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Element> ops::Mul<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = Result<SquareMatrix<T>>;

    fn mul(self, rhs: &SquareMatrix<T>) -> Result<SquareMatrix<T>> {
        multiply_naive(self, rhs)
    }
}

// Element operators, used when a matrix is itself a matrix element. The empty
// matrix is the zero: neutral for `+` and `-`, absorbing for `*`.
//
// # Panics
// On two non-empty operands of different sizes.

impl<T: Element> ops::Add for SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn add(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        if rhs.is_empty() {
            return self;
        }
        if self.is_empty() {
            return rhs;
        }
        (&self + &rhs).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl<T: Element> ops::Sub for SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn sub(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        if rhs.is_empty() {
            return self;
        }
        if self.is_empty() {
            return rhs.map(negate);
        }
        (&self - &rhs).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl<T: Element> ops::Mul for SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        if self.is_empty() || rhs.is_empty() {
            return SquareMatrix::zero();
        }
        (&self * &rhs).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl<T: Element> Zero for SquareMatrix<T> {
    fn zero() -> SquareMatrix<T> {
        SquareMatrix {
            size: 0,
            cells: vec![],
        }
    }

    fn is_zero(&self) -> bool {
        self.cells.iter().all(|x| x.is_zero())
    }
}

impl<T: Element> std::iter::Sum<SquareMatrix<T>> for SquareMatrix<T> {
    fn sum<I: Iterator<Item = SquareMatrix<T>>>(iter: I) -> SquareMatrix<T> {
        iter.fold(SquareMatrix::zero(), |acc, m| acc + m)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
