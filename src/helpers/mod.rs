
/// This module contains helpers functions to efficiently write tests and
/// benchmarks.
pub mod test_helpers {
    use crate::{Element, SparseMatrix};
    use approx::AbsDiffEq;
    use ndarray::ArrayView2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand_distr::{Distribution, Normal};

    /// Panics unless both matrices have the same shape and every cell agrees
    /// within `delta`, absent entries counting as zero.
    pub fn assert_matrix_all_close<F>(x: &SparseMatrix<F>, y: &SparseMatrix<F>, delta: F)
    where
        F: Element + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.shape(), y.shape());
        for (row, col, _) in x.iter().chain(y.iter()) {
            let (a, b) = (x.get(row, col).unwrap(), y.get(row, col).unwrap());
            if a.abs_diff_ne(&b, delta) {
                panic!(
                    "x: {}, y: {} at ({}, {}) ; with precision level {}",
                    a, b, row, col, delta
                );
            }
        }
    }

    /// Same as [`assert_matrix_all_close`] against a dense expectation.
    pub fn assert_dense_all_close<F>(x: &SparseMatrix<F>, y: ArrayView2<F>, delta: F)
    where
        F: Element + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.shape(), y.dim());
        for ((row, col), expected) in y.indexed_iter() {
            let actual = x.get(row, col).unwrap();
            if actual.abs_diff_ne(expected, delta) {
                panic!(
                    "x: {}, y: {} at ({}, {}) ; with precision level {}",
                    actual, expected, row, col, delta
                );
            }
        }
    }

    /// Generates a `rows x cols` matrix where each cell is non-zero with
    /// probability `density`, values drawn from a standard normal. The
    /// generator is seeded so repeated calls yield the same matrix.
    pub fn generate_random_sparse(
        rows: usize,
        cols: usize,
        density: f64,
        seed: u64,
    ) -> SparseMatrix<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut matrix = SparseMatrix::new(rows, cols).unwrap();
        for row in 0..rows {
            for col in 0..cols {
                if r.gen_bool(density) {
                    matrix.set(row, col, normal.sample(&mut r)).unwrap();
                }
            }
        }
        matrix
    }

    /// Integer counterpart of [`generate_random_sparse`], with values in
    /// `[-range, range]`. Small ranges make cancellations likely.
    pub fn generate_random_sparse_int(
        rows: usize,
        cols: usize,
        density: f64,
        range: i64,
        seed: u64,
    ) -> SparseMatrix<i64> {
        let mut r = StdRng::seed_from_u64(seed);

        let mut matrix = SparseMatrix::new(rows, cols).unwrap();
        for row in 0..rows {
            for col in 0..cols {
                if r.gen_bool(density) {
                    matrix.set(row, col, r.gen_range(-range..=range)).unwrap();
                }
            }
        }
        matrix
    }
}
