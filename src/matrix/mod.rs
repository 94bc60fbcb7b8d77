use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

use approx::AbsDiffEq;
use ndarray::{Array2, ArrayView2};

use crate::error::{MatrixError, Result};
use crate::Element;


/// SparseMatrix
///
/// A matrix with fixed dimensions that only stores its non-zero entries, keyed
/// by `(row, col)`. The entry map never holds a zero: setting a cell to zero
/// removes its key, so [`nnz`](SparseMatrix::nnz) and
/// [`density`](SparseMatrix::density) always reflect the true sparsity.
///
/// Two matrices compare equal when they have the same shape and the same
/// non-zero entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<F> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) entries: HashMap<(usize, usize), F>,
}

impl<F: Element> SparseMatrix<F> {
    /// Creates an all-zero matrix of shape `rows x cols`. Both dimensions must
    /// be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(SparseMatrix {
            rows,
            cols,
            entries: HashMap::new(),
        })
    }

    /// Creates a matrix and replays [`set`](SparseMatrix::set) for every
    /// `(row, col, value)` triplet, in order. A later triplet overwrites an
    /// earlier one at the same position.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, F)>,
    {
        let mut matrix = Self::new(rows, cols)?;
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Creates a sparse matrix holding the non-zero cells of a dense array.
    pub fn from_dense(dense: ArrayView2<F>) -> Result<Self> {
        let (rows, cols) = dense.dim();
        let mut matrix = Self::new(rows, cols)?;
        for ((row, col), &value) in dense.indexed_iter() {
            if !value.is_zero() {
                matrix.entries.insert((row, col), value);
            }
        }
        Ok(matrix)
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entry is stored.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ratio of stored entries to the total number of cells.
    pub fn density(&self) -> f64 {
        self.entries.len() as f64 / (self.rows as f64 * self.cols as f64)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Returns the value at `(row, col)`, zero if no entry is stored there.
    pub fn get(&self, row: usize, col: usize) -> Result<F> {
        self.check_bounds(row, col)?;
        Ok(self
            .entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(F::zero))
    }

    /// Stores `value` at `(row, col)`. Setting zero removes the entry.
    pub fn set(&mut self, row: usize, col: usize, value: F) -> Result<()> {
        self.check_bounds(row, col)?;
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Iterates over the non-zero entries as `(row, col, value)` triplets, in
    /// unspecified order. Calling it again restarts the enumeration.
    pub fn iter(&self) -> Entries<'_, F> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// Non-zero entries sorted by row, then by column.
    pub fn sorted_entries(&self) -> Vec<(usize, usize, F)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_unstable_by_key(|&(row, col, _)| (row, col));
        sorted
    }

    /// Materializes the matrix as a dense array.
    pub fn to_dense(&self) -> Array2<F> {
        let mut dense = Array2::<F>::zeros((self.rows, self.cols));
        for (&(row, col), &value) in &self.entries {
            dense[[row, col]] = value;
        }
        dense
    }
}

/// Iterator over the non-zero entries of a [`SparseMatrix`].
#[derive(Debug, Clone)]
pub struct Entries<'a, F> {
    inner: hash_map::Iter<'a, (usize, usize), F>,
}

impl<'a, F: Copy> Iterator for Entries<'a, F> {
    type Item = (usize, usize, F);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, F: Copy> ExactSizeIterator for Entries<'a, F> {}

impl<'a, F: Element> IntoIterator for &'a SparseMatrix<F> {
    type Item = (usize, usize, F);
    type IntoIter = Entries<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: Element> fmt::Display for SparseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}, Cols: {}", self.rows, self.cols)?;
        writeln!(f, "Non-zero elements:")?;
        if self.is_zero() {
            return writeln!(f, "  (No non-zero elements)");
        }
        for (row, col, value) in self.sorted_entries() {
            writeln!(f, "  ({}, {}, {})", row, col, value)?;
        }
        Ok(())
    }
}

/// Entrywise approximate equality, treating absent entries as zero. Matrices
/// of different shapes are never close.
impl<F> AbsDiffEq for SparseMatrix<F>
where
    F: Element + AbsDiffEq,
    F::Epsilon: Copy,
{
    type Epsilon = F::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        let zero = F::zero();
        let lhs_close = self.entries.iter().all(|(key, a)| {
            let b = other.entries.get(key).unwrap_or(&zero);
            a.abs_diff_eq(b, epsilon)
        });
        lhs_close
            && other
                .entries
                .iter()
                .filter(|(key, _)| !self.entries.contains_key(key))
                .all(|(_, b)| zero.abs_diff_eq(b, epsilon))
    }
}
