use crate::error::{Error, Result};
use crate::matrix::element::Element;
use itertools::Itertools;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense `size x size` matrix stored row-major.
///
/// `cells` always holds exactly `size * size` elements. A size of 0 is a valid
/// empty matrix and doubles as the additive identity when matrices are used
/// as elements of another matrix, so it compares equal to any all-zero matrix.
#[derive(Debug, Clone)]
pub struct SquareMatrix<T> {
    pub(crate) size: usize,
    pub(crate) cells: Vec<T>,
}

impl<T: Element> SquareMatrix<T> {
    /// Zero-filled matrix of the given side length.
    pub fn new(size: usize) -> Self {
        SquareMatrix {
            size,
            cells: (0..size * size).map(|_| T::zero()).collect(),
        }
    }

    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        SquareMatrix {
            size,
            cells: (0..size)
                .flat_map(|i| (0..size).map(move |j| (i, j)))
                .map(|(i, j)| f(i, j))
                .collect(),
        }
    }

    /// Build from a nested literal; every row must have as many entries as
    /// there are rows.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let size = lines.len();
        if let Some((i, line)) = lines.iter().find_position(|l| l.len() != size) {
            return Err(Error::InvalidShape {
                reason: format!(
                    "row {} has {} entries, expected {} (matrix must be square)",
                    i,
                    line.len(),
                    size
                ),
            });
        }

        Ok(SquareMatrix {
            size,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub fn identity(size: usize) -> Self
    where
        T: One,
    {
        Self::from_fn(size, |i, j| if i == j { T::one() } else { T::zero() })
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.check_index(row)?;
        self.check_index(col)?;
        Ok(&self.cells[row * self.size + col])
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_index(row)?;
        self.check_index(col)?;
        Ok(&mut self.cells[row * self.size + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(Error::OutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Unchecked read used by the algorithms, which only walk valid indices.
    #[inline(always)]
    pub(crate) fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.size + col].clone()
    }

    pub(crate) fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.size).map(move |i| self.row(i))
    }
}

impl<T: Element> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    /// # Panics
    /// When either index is not smaller than the size; use `at` to get an error instead.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.at(row, col) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Element> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.at_mut(row, col) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Element> PartialEq for SquareMatrix<T> {
    fn eq(&self, rhs: &SquareMatrix<T>) -> bool {
        if self.size == 0 || rhs.size == 0 {
            return self.is_zero() && rhs.is_zero();
        }
        self.size == rhs.size && self.cells == rhs.cells
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.cells.iter().map(|x| x.to_string()).collect_vec();
        if !rendered.iter().any(|x| x.contains('\n')) {
            let ret = rendered
                .chunks(self.size.max(1))
                .map(|row| row.join(" "))
                .join("\n");
            return write!(f, "{}", ret);
        }

        // block elements sit side by side, block rows are separated by a blank line
        let ret = rendered
            .chunks(self.size)
            .map(|row| {
                let blocks = row.iter().map(|x| x.lines().collect_vec()).collect_vec();
                let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
                let widths = blocks
                    .iter()
                    .map(|b| b.iter().map(|l| l.chars().count()).max().unwrap_or(0))
                    .collect_vec();
                (0..height)
                    .map(|k| {
                        blocks
                            .iter()
                            .zip(&widths)
                            .map(|(b, &w)| format!("{:<w$}", b.get(k).copied().unwrap_or(""), w = w))
                            .join(" ")
                            .trim_end()
                            .to_string()
                    })
                    .join("\n")
            })
            .join("\n\n");
        write!(f, "{}", ret)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
