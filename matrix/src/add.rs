use core::ops::Add;

use tracing::{debug, instrument};

use crate::builder::CsrBuilder;
use crate::entry::Entry;
use crate::error::{MatrixError, MatrixResult};
use crate::sparse::CsrMatrix;
use crate::Matrix;

impl<T: Entry> CsrMatrix<T> {
    /// Element-wise sum `self + other`.
    ///
    /// Each row is a merge of the two sorted column runs. Coinciding columns are summed, wrapping on
    /// overflow, and kept even when the sum is zero.
    ///
    /// The result's shape is the operands' storage extents (`height()` x `width()`). This equals
    /// their declared shape unless both operands came out of [`transpose`](Self::transpose), in
    /// which case the sum declares the swapped, true shape.
    ///
    /// # Errors
    /// [`MatrixError::RowCountMismatch`] if the row counts differ, otherwise
    /// [`MatrixError::ColumnCountMismatch`] if the column counts differ.
    #[instrument(
        name = "csr add",
        skip_all,
        fields(rows = self.row_count(), cols = self.column_count())
    )]
    pub fn add(&self, other: &Self) -> MatrixResult<Self> {
        if self.row_count() != other.row_count() || self.height() != other.height() {
            return Err(MatrixError::RowCountMismatch {
                left: self.row_count(),
                right: other.row_count(),
            });
        }
        if self.column_count() != other.column_count() || self.width() != other.width() {
            return Err(MatrixError::ColumnCountMismatch {
                left: self.column_count(),
                right: other.column_count(),
            });
        }

        let mut result =
            CsrBuilder::with_capacity(self.height(), self.width(), self.nnz() + other.nnz());
        for r in 0..self.height() {
            let (a_cols, a_vals) = self.row(r);
            let (b_cols, b_vals) = other.row(r);
            let (mut i, mut j) = (0, 0);

            while i < a_cols.len() && j < b_cols.len() {
                if a_cols[i] < b_cols[j] {
                    result.push(a_vals[i], a_cols[i]);
                    i += 1;
                } else if a_cols[i] > b_cols[j] {
                    result.push(b_vals[j], b_cols[j]);
                    j += 1;
                } else {
                    result.push(a_vals[i].wrapping_add(b_vals[j]), a_cols[i]);
                    i += 1;
                    j += 1;
                }
            }
            for k in i..a_cols.len() {
                result.push(a_vals[k], a_cols[k]);
            }
            for k in j..b_cols.len() {
                result.push(b_vals[k], b_cols[k]);
            }

            result.close_row();
        }

        debug!(nnz = result.nnz(), "sum assembled");
        Ok(result.finish())
    }
}

impl<T: Entry> Add for &CsrMatrix<T> {
    type Output = MatrixResult<CsrMatrix<T>>;

    fn add(self, rhs: Self) -> Self::Output {
        CsrMatrix::add(self, rhs)
    }
}
