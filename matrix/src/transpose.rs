use alloc::vec;
use alloc::vec::Vec;

use tracing::instrument;

use crate::entry::Entry;
use crate::sparse::CsrMatrix;
use crate::Matrix;

impl<T: Entry> CsrMatrix<T> {
    /// The transpose, built by counting entries per column and placing each entry into its
    /// column's bucket.
    ///
    /// Rows are visited in ascending order, so every bucket fills with ascending source rows and
    /// the result's rows come out sorted without a separate pass.
    ///
    /// The storage extents are swapped: `height()` of the result is `width()` of `self` and vice
    /// versa. The declared `row_count()` and `column_count()` are copied from `self` unchanged.
    #[must_use]
    #[instrument(
        name = "csr transpose",
        skip_all,
        fields(height = self.height(), width = self.width(), nnz = self.nnz())
    )]
    pub fn transpose(&self) -> Self {
        let nnz = self.nnz();
        let mut values = vec![T::default(); nnz];
        let mut column_indices = vec![0; nnz];

        let mut count_per_column = vec![0usize; self.width()];
        for &c in self.column_indices() {
            count_per_column[c] += 1;
        }

        let mut row_pointers = Vec::with_capacity(self.width() + 1);
        row_pointers.push(0);
        for &count in &count_per_column {
            row_pointers.push(row_pointers[row_pointers.len() - 1] + count);
        }

        for r in 0..self.height() {
            let (columns, row_values) = self.row(r);
            for (&c, &v) in columns.iter().zip(row_values) {
                let slot = row_pointers[c + 1] - count_per_column[c];
                values[slot] = v;
                column_indices[slot] = r;
                count_per_column[c] -= 1;
            }
        }

        Self::from_parts(
            self.row_count(),
            self.column_count(),
            self.height(),
            values,
            column_indices,
            row_pointers,
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::sparse::tests::{assert_csr_invariants, dense_strategy};

    #[test]
    fn test_transpose() {
        let m = CsrMatrix::from_dense(&[[2, -9, 3], [13, 11, -17], [3, 6, 15], [4, 13, 1]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.values(), &[2, 13, 3, 4, -9, 11, 6, 13, 3, -17, 15, 1]);
        assert_eq!(t.column_indices(), &[0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
        assert_eq!(t.row_pointers(), &[0, 4, 8, 12]);
        assert_csr_invariants(&t);
    }

    #[test]
    fn test_transpose_keeps_declared_shape() {
        let m = CsrMatrix::from_dense(&[[2, -9, 3], [13, 11, -17], [3, 6, 15], [4, 13, 1]]).unwrap();
        let t = m.transpose();
        assert_eq!((t.row_count(), t.column_count()), (4, 3));
        assert_eq!((t.height(), t.width()), (3, 4));
    }

    #[test]
    fn test_transpose_sparse_sample() {
        let m = CsrMatrix::from_dense(&[[1, 0, 5, 0], [2, 3, 0, 0], [4, 0, 0, 1], [0, 0, 2, 0]])
            .unwrap();
        let t = m.transpose();
        assert_eq!(t.values(), &[1, 2, 4, 3, 5, 2, 1]);
        assert_eq!(t.column_indices(), &[0, 1, 2, 1, 0, 3, 2]);
        assert_eq!(t.row_pointers(), &[0, 3, 4, 6, 7]);
        assert_eq!(t.nnz(), 7);
    }

    #[test]
    fn test_transpose_empty_columns() {
        let m = CsrMatrix::from_dense(&[[0, 0, 7], [0, 0, 0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.values(), &[7]);
        assert_eq!(t.column_indices(), &[0]);
        assert_eq!(t.row_pointers(), &[0, 0, 0, 1]);
    }

    proptest! {
        #[test]
        fn proptest_transpose_is_an_involution(dense in dense_strategy(7, 7)) {
            let m = CsrMatrix::from_dense(&dense).unwrap();
            let t = m.transpose();
            assert_csr_invariants(&t);
            prop_assert_eq!(t.height(), m.width());
            prop_assert_eq!(t.width(), m.height());
            for (r, row) in dense.iter().enumerate() {
                for (c, &v) in row.iter().enumerate() {
                    prop_assert_eq!(t.get(c, r), v);
                }
            }

            let tt = t.transpose();
            prop_assert_eq!(tt.values(), m.values());
            prop_assert_eq!(tt.column_indices(), m.column_indices());
            prop_assert_eq!(tt.row_pointers(), m.row_pointers());
            prop_assert_eq!(
                (tt.row_count(), tt.column_count()),
                (m.row_count(), m.column_count())
            );
        }
    }
}
