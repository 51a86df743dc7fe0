use crate::error::Error;
use crate::linalg::multiply::{kronecker, multiply_naive, multiply_strassen};
use crate::matrix::square::SquareMatrix;
use pyo3::exceptions::{PyIndexError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<Error> for PyErr {
    fn from(error: Error) -> PyErr {
        match error {
            Error::OutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            Error::SingularMatrix => PyZeroDivisionError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

/// `SquareMatrix<f64>` exposed to Python.
#[derive(Debug, Clone)]
#[pyclass(name = "SquareMatrix")]
pub struct PyMatrix {
    pub inner: SquareMatrix<f64>,
}

impl From<SquareMatrix<f64>> for PyMatrix {
    fn from(inner: SquareMatrix<f64>) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(size: usize) -> Self {
        SquareMatrix::new(size).into()
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(SquareMatrix::from_list(lines)?.into())
    }

    #[staticmethod]
    pub fn identity(size: usize) -> Self {
        SquareMatrix::identity(size).into()
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn at(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(*self.inner.at(row, col)?)
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> PyResult<()> {
        Ok(self.inner.set(row, col, value)?)
    }

    pub fn crop(&mut self, new_size: usize) -> PyResult<()> {
        Ok(self.inner.crop(new_size)?)
    }

    pub fn trim(&mut self, new_size: usize) -> PyResult<()> {
        Ok(self.inner.trim(new_size)?)
    }

    pub fn split(&self) -> Vec<PyMatrix> {
        self.inner.split().into_iter().map(PyMatrix::from).collect()
    }

    #[staticmethod]
    pub fn merge(quadrants: Vec<PyMatrix>) -> PyResult<Self> {
        let quadrants: [SquareMatrix<f64>; 4] = quadrants
            .into_iter()
            .map(|q| q.inner)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|q: Vec<_>| {
                PyValueError::new_err(format!("merge expects 4 quadrants, got {}", q.len()))
            })?;
        Ok(SquareMatrix::merge(&quadrants)?.into())
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) -> PyResult<()> {
        Ok(self.inner.swap_rows(i, j)?)
    }

    pub fn transpose(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        self.transpose()
    }

    pub fn minor(&self, row: usize, col: usize) -> PyResult<PyMatrix> {
        Ok(self.inner.minor(row, col)?.into())
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn adjoint(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.adjoint()?.into())
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.inverse()?.into())
    }

    pub fn echelon_form(&self) -> PyMatrix {
        self.inner.echelon_form().into()
    }

    pub fn reduced_echelon_form(&self) -> PyMatrix {
        self.inner.reduced_echelon_form().into()
    }

    pub fn rank(&self) -> usize {
        self.inner.rank()
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(multiply_naive(&self.inner, &rhs.inner)?.into())
    }

    pub fn strassen(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(multiply_strassen(&self.inner, &rhs.inner)?.into())
    }

    pub fn kronecker(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(kronecker(&self.inner, &rhs.inner)?.into())
    }

    pub fn scale(&self, k: f64) -> PyMatrix {
        self.inner.scale(&k).into()
    }

    pub fn __eq__(&self, other: &PyMatrix) -> bool {
        self.inner == other.inner
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("SquareMatrix({:?})", self.inner.to_list())
    }
}

/// Python module `smatrix`.
#[pymodule]
#[pyo3(name = "smatrix")]
fn smatrix_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    Ok(())
}
