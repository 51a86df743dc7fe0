use crate::error::{Error, Result};
use crate::matrix::element::{negate, Element, Field};
use crate::matrix::square::SquareMatrix;
use num_traits::{One, Zero};

impl<T: Element> SquareMatrix<T> {
    pub fn transpose(&self) -> SquareMatrix<T> {
        SquareMatrix::from_fn(self.size, |i, j| self.get(j, i))
    }

    /// The matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<SquareMatrix<T>> {
        if self.size <= 1 {
            return Err(Error::InvalidSize {
                requested: self.size.saturating_sub(1),
                size: self.size,
                reason: "a minor needs a matrix of size 2 or more",
            });
        }
        self.check_index(row)?;
        self.check_index(col)?;

        Ok(SquareMatrix::from_fn(self.size - 1, |i, j| {
            self.get(i + (i >= row) as usize, j + (j >= col) as usize)
        }))
    }

    /// Cofactor expansion along the first row. Exponential in the size.
    pub fn determinant(&self) -> Result<T> {
        match self.size {
            0 => Err(Error::InvalidSize {
                requested: 0,
                size: 0,
                reason: "determinant of an empty matrix",
            }),
            1 => Ok(self.get(0, 0)),
            2 => Ok(self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0)),
            n => {
                let mut det = self.get(0, 0) * self.minor(0, 0)?.determinant()?;
                for j in 1..n {
                    let term = self.get(0, j) * self.minor(0, j)?.determinant()?;
                    det = if j % 2 == 0 { det + term } else { det - term };
                }
                Ok(det)
            }
        }
    }

    /// Signed determinant of the minor at `(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        let det = self.minor(row, col)?.determinant()?;
        Ok(if (row + col) % 2 == 0 { det } else { negate(det) })
    }

    /// Transposed matrix of cofactors.
    pub fn adjoint(&self) -> Result<SquareMatrix<T>> {
        let cells = (0..self.size)
            .flat_map(|i| (0..self.size).map(move |j| (i, j)))
            .map(|(i, j)| self.cofactor(j, i))
            .collect::<Result<Vec<T>>>()?;

        Ok(SquareMatrix {
            size: self.size,
            cells,
        })
    }
}

impl<T: Field> SquareMatrix<T> {
    /// `adjoint * (1 / determinant)`.
    pub fn inverse(&self) -> Result<SquareMatrix<T>> {
        let det = self.determinant()?;
        if det.is_zero() {
            return Err(Error::SingularMatrix);
        }

        let scale = T::one() / det;
        if self.size == 1 {
            return Ok(SquareMatrix {
                size: 1,
                cells: vec![scale],
            });
        }
        Ok(self.adjoint()?.scale(&scale))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::multiply::multiply_naive;
    use crate::rings::fraction::Fraction;
    use proptest::prelude::*;

    fn frac(lines: Vec<Vec<i64>>) -> SquareMatrix<Fraction> {
        SquareMatrix::from_list(
            lines
                .into_iter()
                .map(|l| l.into_iter().map(Fraction::from).collect())
                .collect(),
        )
        .unwrap()
    }

    fn a() -> SquareMatrix<f64> {
        SquareMatrix::from_list(vec![
            vec![1.0, 3.0, 2.0],
            vec![2.0, 0.0, 1.0],
            vec![1.0, 2.0, 0.0],
        ])
        .unwrap()
    }

    fn b() -> SquareMatrix<i64> {
        SquareMatrix::from_list(vec![vec![3, 0, 1], vec![1, 0, 1], vec![0, 1, 2]]).unwrap()
    }

    #[test]
    fn test_transpose() {
        assert_eq!(
            b().transpose().to_list(),
            vec![vec![3, 1, 0], vec![0, 0, 1], vec![1, 1, 2]]
        );
        assert_eq!(b().transpose().transpose(), b());
    }

    #[test]
    fn test_minor() {
        assert_eq!(b().minor(1, 1).unwrap().to_list(), vec![vec![3, 1], vec![0, 2]]);
        assert_eq!(b().minor(0, 2).unwrap().to_list(), vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(b().minor(3, 0), Err(Error::OutOfRange { index: 3, size: 3 }));
        assert!(matches!(
            SquareMatrix::from_list(vec![vec![4]]).unwrap().minor(0, 0),
            Err(Error::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_determinant() {
        assert_eq!(a().determinant().unwrap(), 9.0);
        assert_eq!(b().determinant().unwrap(), -2);
        assert_eq!(SquareMatrix::from_list(vec![vec![5]]).unwrap().determinant(), Ok(5));

        let m = SquareMatrix::from_list(vec![
            vec![2, 0, 0, 1],
            vec![0, 1, 0, 0],
            vec![1, 0, 3, 0],
            vec![0, 0, 0, 4],
        ])
        .unwrap();
        assert_eq!(m.determinant().unwrap(), 24);

        assert!(matches!(
            SquareMatrix::<i64>::new(0).determinant(),
            Err(Error::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_determinant_identity() {
        for n in 1..7 {
            assert_eq!(SquareMatrix::<i64>::identity(n).determinant().unwrap(), 1);
        }
    }

    #[test]
    fn test_adjoint() {
        assert_eq!(
            b().adjoint().unwrap().to_list(),
            vec![vec![-1, 1, 0], vec![-2, 6, -2], vec![1, -3, 0]]
        );

        let two = SquareMatrix::from_list(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(two.adjoint().unwrap().to_list(), vec![vec![4, -2], vec![-3, 1]]);
    }

    #[test]
    fn test_inverse() {
        let b = frac(vec![vec![3, 0, 1], vec![1, 0, 1], vec![0, 1, 2]]);
        let inv = b.inverse().unwrap();

        let half: Fraction = "1/2".parse().unwrap();
        assert_eq!(inv[(0, 0)], half);
        assert_eq!(inv[(1, 1)], Fraction::from(-3));
        assert_eq!(multiply_naive(&b, &inv).unwrap(), SquareMatrix::identity(3));

        let one = frac(vec![vec![4]]);
        let quarter: Fraction = "1/4".parse().unwrap();
        assert_eq!(one.inverse().unwrap()[(0, 0)], quarter);
    }

    #[test]
    fn test_inverse_singular() {
        let m = frac(vec![vec![1, 2, 3], vec![2, 4, 6], vec![1, 1, 1]]);
        assert_eq!(m.inverse(), Err(Error::SingularMatrix));
        assert_eq!(frac(vec![vec![0]]).inverse(), Err(Error::SingularMatrix));
    }

    #[test]
    fn test_inverse_float() {
        let inv = a().inverse().unwrap();
        let product = multiply_naive(&a(), &inv).unwrap();
        let identity = SquareMatrix::<f64>::identity(3);
        assert!(product
            .cells
            .iter()
            .zip(identity.cells.iter())
            .all(|(x, y)| (x - y).abs() < 1e-12));
    }

    #[test]
    fn test_block_determinant() {
        let block = |x: i64| SquareMatrix::from_list(vec![vec![x, 0], vec![0, x]]).unwrap();
        let m = SquareMatrix::from_list(vec![vec![block(1), block(2)], vec![block(3), block(4)]])
            .unwrap();
        assert_eq!(m.determinant().unwrap(), block(-2));

        // 1x1 blocks behave like the scalars they wrap
        let wrapped = SquareMatrix::from_fn(3, |i, j| {
            SquareMatrix::from_list(vec![vec![a()[(i, j)]]]).unwrap()
        });
        assert_eq!(
            wrapped.determinant().unwrap(),
            SquareMatrix::from_list(vec![vec![9.0]]).unwrap()
        );
        assert_eq!(
            wrapped.adjoint().unwrap()[(0, 0)],
            SquareMatrix::from_list(vec![vec![-2.0]]).unwrap()
        );
    }

    #[test]
    fn test_block_determinant_with_empty_cells() {
        let p = SquareMatrix::from_list(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let q = SquareMatrix::from_list(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let pq = SquareMatrix::from_list(vec![vec![19, 22], vec![43, 50]]).unwrap();

        let mut diag = SquareMatrix::<SquareMatrix<i64>>::new(2);
        diag[(0, 0)] = p.clone();
        diag[(1, 1)] = q.clone();
        assert_eq!(diag.determinant().unwrap(), pq);
        assert_eq!(
            diag.adjoint().unwrap(),
            SquareMatrix::from_list(vec![
                vec![q.clone(), SquareMatrix::new(0)],
                vec![SquareMatrix::new(0), p.clone()]
            ])
            .unwrap()
        );

        let mut anti = SquareMatrix::<SquareMatrix<i64>>::new(2);
        anti[(0, 1)] = p.clone();
        anti[(1, 0)] = q.clone();
        assert_eq!(anti.determinant().unwrap(), pq.scale(&-1));

        let mut diag3 = SquareMatrix::<SquareMatrix<i64>>::new(3);
        diag3[(0, 0)] = p;
        diag3[(1, 1)] = SquareMatrix::identity(2);
        diag3[(2, 2)] = q;
        assert_eq!(diag3.determinant().unwrap(), pq);

        assert!(SquareMatrix::<SquareMatrix<i64>>::new(3)
            .determinant()
            .unwrap()
            .is_zero());
    }

    fn invertible_fraction_matrix() -> impl Strategy<Value = SquareMatrix<Fraction>> {
        (1usize..=4)
            .prop_flat_map(|n| {
                prop::collection::vec(-4i64..5, n * n).prop_map(move |cells| {
                    SquareMatrix::from_fn(n, |i, j| Fraction::from(cells[i * n + j]))
                })
            })
            .prop_filter("singular", |m| !m.determinant().unwrap().is_zero())
    }

    proptest! {
        #[test]
        fn test_transpose_involution(cells in prop::collection::vec(-9i64..10, 16)) {
            let m = SquareMatrix::from_fn(4, |i, j| cells[i * 4 + j]);
            prop_assert_eq!(m.transpose().transpose(), m);
        }

        #[test]
        fn test_inverse_product_is_identity(m in invertible_fraction_matrix()) {
            let product = multiply_naive(&m, &m.inverse().unwrap()).unwrap();
            prop_assert_eq!(product, SquareMatrix::identity(m.size()));
        }

        #[test]
        fn test_determinant_matches_echelon(m in invertible_fraction_matrix()) {
            let echelon = m.echelon_form();
            let pivots = (0..m.size())
                .map(|i| echelon[(i, i)].clone())
                .fold(Fraction::one(), |acc, x| acc * x);
            let det = m.determinant().unwrap();
            prop_assert!(pivots == det || pivots == negate(det));
        }
    }
}
