//! Row-by-row construction of a [`CsrMatrix`].

use alloc::vec::Vec;

use crate::sparse::CsrMatrix;

/// Builds a [`CsrMatrix`] one row at a time.
///
/// Entries of the open row are appended with [`push`](Self::push) in strictly ascending column
/// order, and the row is closed with [`close_row`](Self::close_row). Exactly `row_count` rows must
/// be closed before [`finish`](Self::finish). The ordering contract is checked in debug builds only.
#[derive(Debug)]
pub struct CsrBuilder<T> {
    row_count: usize,
    column_count: usize,
    values: Vec<T>,
    column_indices: Vec<usize>,
    row_pointers: Vec<usize>,
}

impl<T> CsrBuilder<T> {
    #[must_use]
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self::with_capacity(row_count, column_count, 0)
    }

    /// Like [`new`](Self::new), reserving room for `nnz` entries.
    #[must_use]
    pub fn with_capacity(row_count: usize, column_count: usize, nnz: usize) -> Self {
        let mut row_pointers = Vec::with_capacity(row_count + 1);
        row_pointers.push(0);
        Self {
            row_count,
            column_count,
            values: Vec::with_capacity(nnz),
            column_indices: Vec::with_capacity(nnz),
            row_pointers,
        }
    }

    /// Number of entries appended so far.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Number of rows closed so far.
    #[inline]
    pub fn closed_rows(&self) -> usize {
        self.row_pointers.len() - 1
    }

    /// Append `value` at `column` to the open row.
    pub fn push(&mut self, value: T, column: usize) {
        debug_assert!(
            column < self.column_count,
            "column {column} out of bounds for {} columns",
            self.column_count
        );
        debug_assert!(
            self.closed_rows() < self.row_count,
            "all {} rows are already closed",
            self.row_count
        );
        debug_assert!(
            self.open_row_last_column().is_none_or(|last| last < column),
            "column {column} is not after the previous column of the open row"
        );
        self.values.push(value);
        self.column_indices.push(column);
    }

    /// Close the open row, recording the running entry count.
    pub fn close_row(&mut self) {
        debug_assert!(
            self.closed_rows() < self.row_count,
            "all {} rows are already closed",
            self.row_count
        );
        self.row_pointers.push(self.values.len());
    }

    #[must_use]
    pub fn finish(self) -> CsrMatrix<T> {
        debug_assert_eq!(self.closed_rows(), self.row_count, "unclosed rows");
        CsrMatrix::from_parts(
            self.row_count,
            self.column_count,
            self.column_count,
            self.values,
            self.column_indices,
            self.row_pointers,
        )
    }

    fn open_row_last_column(&self) -> Option<usize> {
        let row_start = *self.row_pointers.last()?;
        self.column_indices[row_start..].last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rows_in_order() {
        let mut b = CsrBuilder::new(3, 4);
        b.push(5, 0);
        b.push(8, 3);
        b.close_row();
        b.close_row();
        b.push(-1, 2);
        b.close_row();
        let m = b.finish();

        assert_eq!(m.values(), &[5, 8, -1]);
        assert_eq!(m.column_indices(), &[0, 3, 2]);
        assert_eq!(m.row_pointers(), &[0, 2, 2, 3]);
        assert_eq!(m.row_count(), 3);
        assert_eq!(m.column_count(), 4);
        assert_eq!(m.nnz(), 3);
    }

    #[test]
    fn test_counters_track_progress() {
        let mut b = CsrBuilder::with_capacity(2, 2, 4);
        assert_eq!((b.nnz(), b.closed_rows()), (0, 0));
        b.push(1, 1);
        assert_eq!((b.nnz(), b.closed_rows()), (1, 0));
        b.close_row();
        assert_eq!((b.nnz(), b.closed_rows()), (1, 1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not after the previous column")]
    fn test_descending_columns_rejected() {
        let mut b = CsrBuilder::new(1, 4);
        b.push(1, 2);
        b.push(1, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of bounds")]
    fn test_column_out_of_bounds_rejected() {
        let mut b = CsrBuilder::new(1, 2);
        b.push(1, 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unclosed rows")]
    fn test_finish_with_open_rows_rejected() {
        let mut b = CsrBuilder::<i32>::new(2, 2);
        b.close_row();
        let _ = b.finish();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rows are already closed")]
    fn test_close_row_past_row_count_rejected() {
        let mut b = CsrBuilder::<i32>::new(1, 2);
        b.close_row();
        b.close_row();
    }
}
