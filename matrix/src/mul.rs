use core::ops::Mul;

use tracing::{debug, instrument};

use crate::builder::CsrBuilder;
use crate::entry::Entry;
use crate::error::{MatrixError, MatrixResult};
use crate::sparse::CsrMatrix;
use crate::Matrix;

impl<T: Entry> CsrMatrix<T> {
    /// Compute `C = A * B`, where `A` is `self` and `B` is `other`.
    ///
    /// `B` is transposed once so that every output entry is the dot product of two sorted sparse
    /// rows, found by walking both column runs in step.
    ///
    /// Dot products wrap on overflow. Only strictly positive dot products are stored. Zero and
    /// negative results are dropped.
    ///
    /// The result's shape is `self.height()` x `other.width()`, taken from the storage extents. For
    /// operands that are not [`transpose`](Self::transpose) outputs this is
    /// `self.row_count()` x `other.column_count()`.
    ///
    /// # Errors
    /// [`MatrixError::InnerDimensionMismatch`] if `A`'s column count differs from `B`'s row count.
    #[instrument(
        name = "csr multiply",
        skip_all,
        fields(
            lhs_rows = self.row_count(),
            lhs_cols = self.column_count(),
            rhs_rows = other.row_count(),
            rhs_cols = other.column_count()
        )
    )]
    pub fn multiply(&self, other: &Self) -> MatrixResult<Self> {
        if self.column_count() != other.row_count() || self.width() != other.height() {
            return Err(MatrixError::InnerDimensionMismatch {
                left_columns: self.column_count(),
                right_rows: other.row_count(),
            });
        }

        let other_t = other.transpose();
        let c_width = other.width();
        let mut result = CsrBuilder::new(self.height(), c_width);

        for i in 0..self.height() {
            let (a_cols, a_vals) = self.row(i);
            for j in 0..c_width {
                let (b_rows, b_vals) = other_t.row(j);
                let sum = sparse_dot(a_cols, a_vals, b_rows, b_vals);
                if sum > T::default() {
                    result.push(sum, j);
                }
            }
            result.close_row();
        }

        debug!(nnz = result.nnz(), "product assembled");
        Ok(result.finish())
    }
}

/// Dot product of two sparse vectors given as sorted index runs with matching values.
fn sparse_dot<T: Entry>(a_idx: &[usize], a_vals: &[T], b_idx: &[usize], b_vals: &[T]) -> T {
    let mut sum = T::default();
    let (mut p, mut q) = (0, 0);
    while p < a_idx.len() && q < b_idx.len() {
        if a_idx[p] < b_idx[q] {
            p += 1;
        } else if a_idx[p] > b_idx[q] {
            q += 1;
        } else {
            sum = sum.wrapping_add(a_vals[p].wrapping_mul(b_vals[q]));
            p += 1;
            q += 1;
        }
    }
    sum
}

impl<T: Entry> Mul for &CsrMatrix<T> {
    type Output = MatrixResult<CsrMatrix<T>>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}
