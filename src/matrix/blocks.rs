use crate::error::{Error, Result};
use crate::matrix::element::Element;
use crate::matrix::square::SquareMatrix;

impl<T: Element> SquareMatrix<T> {
    /// Resize in place to `new_size x new_size`. Growing pads the new rows and
    /// columns with zero, shrinking drops them.
    pub fn crop(&mut self, new_size: usize) -> Result<()> {
        if new_size == self.size {
            return Ok(());
        }
        if new_size == 0 {
            return Err(Error::InvalidSize {
                requested: new_size,
                size: self.size,
                reason: "cannot crop a matrix to nothing",
            });
        }

        let old_size = self.size;
        let old = std::mem::take(&mut self.cells);
        self.cells = (0..new_size)
            .flat_map(|i| (0..new_size).map(move |j| (i, j)))
            .map(|(i, j)| {
                if i < old_size && j < old_size {
                    old[i * old_size + j].clone()
                } else {
                    T::zero()
                }
            })
            .collect();
        self.size = new_size;
        Ok(())
    }

    /// Shrink in place, keeping the top-left `new_size x new_size` block.
    pub fn trim(&mut self, new_size: usize) -> Result<()> {
        if new_size > self.size {
            return Err(Error::InvalidSize {
                requested: new_size,
                size: self.size,
                reason: "trim cannot grow a matrix",
            });
        }
        self.crop(new_size)
    }

    /// Quadrants `[top-left, top-right, bottom-left, bottom-right]`, each of
    /// side `ceil(size / 2)`.
    ///
    /// An odd-sized matrix is zero-padded by one row and column first, so the
    /// bottom and right quadrants carry that padding. Trimming anything built
    /// from them back to the original size is up to the caller.
    pub fn split(&self) -> [SquareMatrix<T>; 4] {
        let half = self.size.div_ceil(2);
        if self.size % 2 == 1 {
            log::trace!("split: padding {} -> {}", self.size, half * 2);
        }

        [0, 1, 2, 3].map(|quadrant| {
            let (row_offset, col_offset) = ((quadrant / 2) * half, (quadrant % 2) * half);
            SquareMatrix::from_fn(half, |i, j| {
                let (row, col) = (i + row_offset, j + col_offset);
                if row < self.size && col < self.size {
                    self.get(row, col)
                } else {
                    T::zero()
                }
            })
        })
    }

    /// Inverse of `split`: place four equally-sized quadrants into one matrix
    /// of twice their side.
    pub fn merge(quadrants: &[SquareMatrix<T>; 4]) -> Result<SquareMatrix<T>> {
        Self::merge_grid(quadrants, 2)
    }

    /// Assemble a `grid x grid` arrangement of equally-sized blocks given in
    /// row-major order.
    pub fn merge_grid(blocks: &[SquareMatrix<T>], grid: usize) -> Result<SquareMatrix<T>> {
        if blocks.len() != grid * grid {
            return Err(Error::InvalidShape {
                reason: format!(
                    "{} blocks cannot fill a {}x{} grid",
                    blocks.len(),
                    grid,
                    grid
                ),
            });
        }

        let block_size = blocks.first().map_or(0, |b| b.size);
        if let Some(block) = blocks.iter().find(|b| b.size != block_size) {
            return Err(Error::SizeMismatch {
                lhs: block_size,
                rhs: block.size,
            });
        }

        Ok(SquareMatrix::from_fn(grid * block_size, |i, j| {
            blocks[(i / block_size) * grid + j / block_size].get(i % block_size, j % block_size)
        }))
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.swap_rows_unchecked(i, j);
        Ok(())
    }

    pub(crate) fn swap_rows_unchecked(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.size {
            self.cells.swap(i * self.size + k, j * self.size + k);
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
