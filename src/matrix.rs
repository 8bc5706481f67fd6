use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::MatrixError;

/// Dense matrix over a single flat row-major buffer.
///
/// A `Matrix` is either a general `rows x cols` matrix or a vector: a
/// single row flagged as logically 1-dimensional. Element `(r, c)` lives
/// at linear offset `r * cols + c`, and the buffer length always equals
/// `rows * cols`. Both dimensions are at least 1.
///
/// Copying a `Matrix` copies its buffer; no two values ever share storage.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    is_vector: bool,
}

impl<T> Matrix<T> {
    /// Builds a 1 x `data.len()` vector from a flat buffer, preserving
    /// element order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "a matrix holds at least one element");
        Matrix {
            rows: 1,
            cols: data.len(),
            is_vector: true,
            data,
        }
    }

    /// Builds a matrix from nested rows, concatenated in row-major order.
    ///
    /// The column count is taken from the first row; any later row of a
    /// different length fails with [`MatrixError::ShapeMismatch`] and no
    /// matrix is produced.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        assert!(!rows.is_empty(), "a matrix holds at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "matrix rows must not be empty");
        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                log::debug!(
                    "rejecting nested input: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                );
                return Err(MatrixError::ShapeMismatch {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Matrix {
            data,
            rows: nrows,
            cols,
            is_vector: false,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total element count (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the value is flagged as logically 1-dimensional.
    pub fn is_vector(&self) -> bool {
        self.is_vector
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Reinterprets the buffer as a 1 x `len` vector.
    ///
    /// The buffer is not touched; `len` must equal the current element
    /// count or the call fails with [`MatrixError::ReshapeSizeMismatch`]
    /// and the receiver is left unchanged.
    pub fn reshape_vector(&mut self, len: usize) -> Result<(), MatrixError> {
        if len != self.data.len() {
            log::debug!(
                "rejecting reshape to vector of length {} over buffer of length {}",
                len,
                self.data.len()
            );
            return Err(MatrixError::ReshapeSizeMismatch {
                rows: 1,
                cols: len,
                len: self.data.len(),
            });
        }
        self.rows = 1;
        self.cols = len;
        self.is_vector = true;
        Ok(())
    }

    /// Reinterprets the buffer as a `rows` x `cols` matrix.
    ///
    /// The buffer is not touched; `rows * cols` must equal the current
    /// element count or the call fails with
    /// [`MatrixError::ReshapeSizeMismatch`] and the receiver is left
    /// unchanged. A zero dimension can never pass the length check, so a
    /// successful reshape keeps both dimensions at least 1.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows * cols != self.data.len() {
            log::debug!(
                "rejecting reshape to ({}, {}) over buffer of length {}",
                rows,
                cols,
                self.data.len()
            );
            return Err(MatrixError::ReshapeSizeMismatch {
                rows,
                cols,
                len: self.data.len(),
            });
        }
        self.rows = rows;
        self.cols = cols;
        self.is_vector = false;
        Ok(())
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Matrix<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        let mut values = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            values.push(self[(row, col)].clone());
        }
        Matrix::from_vec(values)
    }

    /// Returns the transpose as a new matrix.
    ///
    /// The result has swapped dimensions and `result[(c, r)]` equals
    /// `self[(r, c)]` for every valid pair. The receiver is never
    /// mutated, and transposing twice reproduces the original exactly.
    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[self.offset(row, col)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
            is_vector: self.cols == 1,
        }
    }

    /// Applies `f` to every element, preserving shape.
    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
            is_vector: self.is_vector,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    /// Builds a `rows` x `cols` matrix filled with copies of `value`.
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be at least 1");
        Matrix {
            data: vec![value; rows * cols],
            rows,
            cols,
            is_vector: false,
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    /// Builds a zero-filled `rows` x `cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::from_elem(rows, cols, T::zero())
    }

    /// Builds a zero-filled 1 x `len` vector.
    pub fn zeros_vector(len: usize) -> Self {
        assert!(len > 0, "vector length must be at least 1");
        Matrix {
            data: vec![T::zero(); len],
            rows: 1,
            cols: len,
            is_vector: true,
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + One,
{
    /// Builds a one-filled `rows` x `cols` matrix.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Matrix::from_elem(rows, cols, T::one())
    }
}

/// The 1 x 1 zero vector.
impl<T: Zero> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            data: vec![T::zero()],
            rows: 1,
            cols: 1,
            is_vector: true,
        }
    }
}

/// Shape plus element-wise equality. Dimension mismatch short-circuits
/// before any element comparison; the vector flag does not participate.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        self.data == other.data
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

/// Diagnostic dump: a shape header followed by one line per row. Not a
/// parseable format.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "shape ({}, {})", self.rows, self.cols)?;
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self[(row, col)])?;
                if col + 1 != self.cols {
                    write!(f, " ")?;
                }
            }
            if row + 1 != self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Index arithmetic checked on its own so an off-by-one in the
    // transpose loop cannot hide behind a matching one here.
    #[test]
    fn offset_is_row_major() {
        let m: Matrix<i32> = Matrix::zeros(3, 4);
        assert_eq!(m.offset(0, 0), 0);
        assert_eq!(m.offset(0, 3), 3);
        assert_eq!(m.offset(1, 0), 4);
        assert_eq!(m.offset(1, 2), 6);
        assert_eq!(m.offset(2, 3), 11);
    }

    #[test]
    fn offset_single_column() {
        let m: Matrix<i32> = Matrix::zeros(4, 1);
        for row in 0..4 {
            assert_eq!(m.offset(row, 0), row);
        }
    }
}
