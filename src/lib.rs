//! Generic square matrices with block decomposition (crop, trim, split,
//! merge), row reduction, cofactor algebra and naive / Strassen / Kronecker
//! products. Elements can themselves be matrices.
//!
//! ```rust
//! use smatrix::prelude::*;
//!
//! let a = SquareMatrix::from_list(vec![vec![1, 3, 2], vec![2, 0, 1], vec![1, 2, 0]])?;
//! assert_eq!(a.determinant()?, 9);
//! assert_eq!(multiply_strassen(&a, &a)?, multiply_naive(&a, &a)?);
//! # Ok::<(), smatrix::error::Error>(())
//! ```

pub mod config;
pub mod error;

pub mod matrix {
    pub mod arith;
    pub mod blocks;
    pub mod element;
    pub mod square;
}
pub mod linalg {
    pub mod cofactor;
    pub mod echelon;
    pub mod multiply;
}
pub mod rings {
    pub mod fraction;
}

#[cfg(feature = "python")]
pub mod python;

pub mod prelude {
    pub use crate::config::StrassenConfig;
    pub use crate::error::{Error, Result};
    pub use crate::linalg::multiply::{
        kronecker, multiply_naive, multiply_strassen, multiply_strassen_with,
    };
    pub use crate::matrix::element::{Element, Field};
    pub use crate::matrix::square::SquareMatrix;
    pub use crate::rings::fraction::Fraction;
}
