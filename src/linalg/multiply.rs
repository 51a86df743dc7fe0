//! Multiplication engines. None of them keep state between calls; every call
//! allocates a fresh result.

use crate::config::StrassenConfig;
use crate::error::{Error, Result};
use crate::matrix::element::Element;
use crate::matrix::square::SquareMatrix;

fn check_same_size<T: Element>(a: &SquareMatrix<T>, b: &SquareMatrix<T>) -> Result<()> {
    if a.size() != b.size() {
        return Err(Error::SizeMismatch {
            lhs: a.size(),
            rhs: b.size(),
        });
    }
    Ok(())
}

/// Triple loop, `C[i][j] = sum_k A[i][k] * B[k][j]`.
pub fn multiply_naive<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>> {
    check_same_size(a, b)?;

    let n = a.size();
    Ok(SquareMatrix::from_fn(n, |i, j| {
        (0..n).map(|k| a.get(i, k) * b.get(k, j)).sum()
    }))
}

pub fn multiply_strassen<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>> {
    multiply_strassen_with(a, b, &StrassenConfig::default())
}

/// Strassen divide and conquer: 7 recursive block products per level.
///
/// Odd-sized operands are zero-padded to the next even size by `split`; the
/// result is trimmed back so it always has the size of the operands.
pub fn multiply_strassen_with<T: Element>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
    config: &StrassenConfig,
) -> Result<SquareMatrix<T>> {
    check_same_size(a, b)?;

    let n = a.size();
    if n <= config.leaf_size.max(1) {
        return multiply_naive(a, b);
    }

    let [a11, a12, a21, a22] = a.split();
    let [b11, b12, b21, b22] = b.split();

    let m1 = multiply_strassen_with(&(&a11 + &a22)?, &(&b11 + &b22)?, config)?;
    let m2 = multiply_strassen_with(&(&a21 + &a22)?, &b11, config)?;
    let m3 = multiply_strassen_with(&a11, &(&b12 - &b22)?, config)?;
    let m4 = multiply_strassen_with(&a22, &(&b21 - &b11)?, config)?;
    let m5 = multiply_strassen_with(&(&a11 + &a12)?, &b22, config)?;
    let m6 = multiply_strassen_with(&(&a21 - &a11)?, &(&b11 + &b12)?, config)?;
    let m7 = multiply_strassen_with(&(&a12 - &a22)?, &(&b21 + &b22)?, config)?;

    let c11 = (&(&(&m1 + &m4)? - &m5)? + &m7)?;
    let c12 = (&m3 + &m5)?;
    let c21 = (&m2 + &m4)?;
    let c22 = (&(&(&m1 - &m2)? + &m3)? + &m6)?;

    let mut c = SquareMatrix::merge(&[c11, c12, c21, c22])?;
    if c.size() != n {
        log::trace!("strassen: trimming {} -> {}", c.size(), n);
        c.trim(n)?;
    }
    Ok(c)
}

/// Block `(i, j)` of the result is `A[i][j] * B`, giving a matrix of side
/// `a.size() * b.size()`.
pub fn kronecker<T: Element>(a: &SquareMatrix<T>, b: &SquareMatrix<T>) -> Result<SquareMatrix<T>> {
    let blocks: Vec<SquareMatrix<T>> = a.cells.iter().map(|x| b.scale(x)).collect();
    SquareMatrix::merge_grid(&blocks, a.size())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
