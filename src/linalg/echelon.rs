use crate::matrix::element::Field;
use crate::matrix::square::SquareMatrix;
use num_traits::{One, Zero};

impl<T: Field> SquareMatrix<T> {
    /// Forward Gaussian elimination. Returns the reduced matrix and, for each
    /// pivot row in order, the column of its pivot.
    fn eliminate(&self) -> (SquareMatrix<T>, Vec<usize>) {
        let mut mat = self.clone();
        let n = mat.size;
        let mut pivot_cols = vec![];
        let mut row = 0;

        for col in 0..n {
            if row >= n {
                break;
            }

            let pivot_row = match (row..n).find(|&r| !mat.get(r, col).is_zero()) {
                Some(r) => r,
                None => continue,
            };
            mat.swap_rows_unchecked(row, pivot_row);

            let pivot_val = mat.get(row, col);
            for r in row + 1..n {
                let below = mat.get(r, col);
                if below.is_zero() {
                    continue;
                }

                let factor = below / pivot_val.clone();
                for k in col + 1..n {
                    mat.cells[r * n + k] = mat.get(r, k) - factor.clone() * mat.get(row, k);
                }
                // exact zero, float rounding must not leave residue under a pivot
                mat.cells[r * n + col] = T::zero();
            }

            pivot_cols.push(col);
            row += 1;
        }

        (mat, pivot_cols)
    }

    /// Row echelon form. Pivots are not scaled.
    pub fn echelon_form(&self) -> SquareMatrix<T> {
        self.eliminate().0
    }

    /// Reduced row echelon form: every pivot is one and alone in its column.
    pub fn reduced_echelon_form(&self) -> SquareMatrix<T> {
        let (mut mat, pivot_cols) = self.eliminate();
        let n = mat.size;

        for (i, &pivot_col) in pivot_cols.iter().enumerate().rev() {
            let pivot_val = mat.get(i, pivot_col);
            for k in pivot_col + 1..n {
                mat.cells[i * n + k] = mat.get(i, k) / pivot_val.clone();
            }
            mat.cells[i * n + pivot_col] = T::one();

            for r in 0..i {
                let factor = mat.get(r, pivot_col);
                if factor.is_zero() {
                    continue;
                }
                for k in pivot_col + 1..n {
                    mat.cells[r * n + k] = mat.get(r, k) - factor.clone() * mat.get(i, k);
                }
                mat.cells[r * n + pivot_col] = T::zero();
            }
        }

        mat
    }

    /// Number of non-zero rows of the row echelon form.
    pub fn rank(&self) -> usize {
        self.echelon_form()
            .rows()
            .filter(|row| row.iter().any(|x| !x.is_zero()))
            .count()
    }

    pub fn is_rref(&self) -> bool {
        let mut lead = None;

        for i in 0..self.size {
            let row = self.row(i);
            let pivot_col_opt = row.iter().position(|x| !x.is_zero());

            match pivot_col_opt {
                None => {
                    if (i + 1..self.size).any(|r| self.row(r).iter().any(|x| !x.is_zero())) {
                        return false;
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if !row[pivot_col].is_one() {
                        return false;
                    }

                    if (0..self.size).any(|r| r != i && !self.get(r, pivot_col).is_zero()) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
