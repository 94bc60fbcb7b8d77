use std::collections::HashMap;

use log::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;
use crate::Element;


/// Checks that two operands have the same shape, as required by entrywise
/// operators.
fn check_same_shape<F: Element>(
    op: &'static str,
    a: &SparseMatrix<F>,
    b: &SparseMatrix<F>,
) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// Shape of the product `a * b`, or a mismatch error when the inner
/// dimensions disagree.
fn multiplied_shape<F: Element>(
    a: &SparseMatrix<F>,
    b: &SparseMatrix<F>,
) -> Result<(usize, usize)> {
    if a.cols != b.rows {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok((a.rows, b.cols))
}

/// Entrywise merge of two same-shape matrices.
///
/// Every key of `a` and every key of `b` is visited exactly once. Absent
/// entries count as zero and results equal to zero are not stored. A `None`
/// from `combine` aborts the merge with [`MatrixError::Overflow`].
fn merge<F, C>(
    op: &'static str,
    a: &SparseMatrix<F>,
    b: &SparseMatrix<F>,
    combine: C,
) -> Result<SparseMatrix<F>>
where
    F: Element,
    C: Fn(F, F) -> Option<F>,
{
    let combine_at = |(row, col): (usize, usize), x: F, y: F| {
        combine(x, y).ok_or(MatrixError::Overflow { op, row, col })
    };

    let zero = F::zero();
    let mut entries = HashMap::with_capacity(a.nnz().max(b.nnz()));

    for (&key, &a_val) in &a.entries {
        let b_val = b.entries.get(&key).copied().unwrap_or(zero);
        let value = combine_at(key, a_val, b_val)?;
        if !value.is_zero() {
            entries.insert(key, value);
        }
    }
    for (&key, &b_val) in &b.entries {
        if a.entries.contains_key(&key) {
            continue;
        }
        let value = combine_at(key, zero, b_val)?;
        if !value.is_zero() {
            entries.insert(key, value);
        }
    }

    Ok(SparseMatrix {
        rows: a.rows,
        cols: a.cols,
        entries,
    })
}

/// Computes `a + b`. Both operands must have the same shape.
///
/// Runs in `O(nnz(a) + nnz(b))`.
pub fn add<F: Element>(a: &SparseMatrix<F>, b: &SparseMatrix<F>) -> Result<SparseMatrix<F>> {
    check_same_shape("add", a, b)?;
    let result = merge("add", a, b, F::try_add)?;
    debug!(
        "add {}x{}: nnz {} + {} -> {}",
        a.rows,
        a.cols,
        a.nnz(),
        b.nnz(),
        result.nnz()
    );
    Ok(result)
}

/// Computes `a - b`. Both operands must have the same shape.
///
/// Runs in `O(nnz(a) + nnz(b))`.
pub fn subtract<F: Element>(
    a: &SparseMatrix<F>,
    b: &SparseMatrix<F>,
) -> Result<SparseMatrix<F>> {
    check_same_shape("subtract", a, b)?;
    let result = merge("subtract", a, b, F::try_sub)?;
    debug!(
        "subtract {}x{}: nnz {} - {} -> {}",
        a.rows,
        a.cols,
        a.nnz(),
        b.nnz(),
        result.nnz()
    );
    Ok(result)
}

/// Computes the matrix product `a * b`, of shape `a.rows x b.cols`.
///
/// The entries of `b` are grouped by row once, then every non-zero `a[i][k]`
/// is paired with the non-zeros of row `k` of `b`. Products are accumulated
/// per output cell and cells whose sum cancels to zero are dropped before the
/// result is returned. An intermediate product or sum that does not fit `F`
/// fails with [`MatrixError::Overflow`] at the offending output cell.
pub fn multiply<F: Element>(
    a: &SparseMatrix<F>,
    b: &SparseMatrix<F>,
) -> Result<SparseMatrix<F>> {
    let (rows, cols) = multiplied_shape(a, b)?;

    let mut b_rows: HashMap<usize, Vec<(usize, F)>> = HashMap::new();
    for (&(k, j), &b_val) in &b.entries {
        b_rows.entry(k).or_default().push((j, b_val));
    }

    let mut acc: HashMap<(usize, usize), F> = HashMap::new();
    for (&(i, k), &a_val) in &a.entries {
        if let Some(b_row) = b_rows.get(&k) {
            for &(j, b_val) in b_row {
                let overflow = MatrixError::Overflow {
                    op: "multiply",
                    row: i,
                    col: j,
                };
                let product = a_val.try_mul(b_val).ok_or_else(|| overflow.clone())?;
                let cell = acc.entry((i, j)).or_insert_with(F::zero);
                *cell = cell.try_add(product).ok_or(overflow)?;
            }
        }
    }

    let accumulated = acc.len();
    acc.retain(|_, value| !value.is_zero());
    debug!(
        "multiply {}x{} by {}x{}: {} cells accumulated, {} cancelled",
        a.rows,
        a.cols,
        b.rows,
        b.cols,
        accumulated,
        accumulated - acc.len()
    );

    Ok(SparseMatrix {
        rows,
        cols,
        entries: acc,
    })
}

/// Operator methods, so that callers can write `a.add(&b)`.
impl<F: Element> SparseMatrix<F> {
    pub fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        subtract(self, other)
    }

    pub fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }

    /// Multiplies every entry by `factor`. A zero factor yields the all-zero
    /// matrix.
    pub fn scale(&self, factor: F) -> Result<Self> {
        let mut entries = HashMap::new();
        if !factor.is_zero() {
            for (&(row, col), &value) in &self.entries {
                let scaled = value.try_mul(factor).ok_or(MatrixError::Overflow {
                    op: "scale",
                    row,
                    col,
                })?;
                if !scaled.is_zero() {
                    entries.insert((row, col), scaled);
                }
            }
        }
        Ok(SparseMatrix {
            rows: self.rows,
            cols: self.cols,
            entries,
        })
    }
}
