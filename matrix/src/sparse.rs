use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use itertools::Itertools;

use crate::builder::CsrBuilder;
use crate::dense::RowMajorMatrix;
use crate::entry::Entry;
use crate::error::{MatrixError, MatrixResult};
use crate::Matrix;

/// A sparse matrix stored in the compressed sparse row format.
///
/// Row `r` owns the entries `row_pointers[r]..row_pointers[r + 1]` of `values` and
/// `column_indices`, with strictly ascending column indices.
///
/// The declared shape (`row_count`, `column_count`) is fixed at construction. It normally matches
/// the storage extents reported through [`Matrix`], except on the output of
/// [`transpose`](Self::transpose), which keeps the declared shape of its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrMatrix<T> {
    row_count: usize,
    column_count: usize,

    /// Exclusive bound on the stored column indices.
    width: usize,

    values: Vec<T>,
    column_indices: Vec<usize>,

    /// Indices into `values`. The `i`th index here is the first index belonging to the `i`th row.
    row_pointers: Vec<usize>,
}

impl<T> CsrMatrix<T> {
    pub(crate) fn from_parts(
        row_count: usize,
        column_count: usize,
        width: usize,
        values: Vec<T>,
        column_indices: Vec<usize>,
        row_pointers: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(values.len(), column_indices.len());
        debug_assert_eq!(row_pointers.first(), Some(&0));
        debug_assert_eq!(row_pointers.last(), Some(&values.len()));
        Self {
            row_count,
            column_count,
            width,
            values,
            column_indices,
            row_pointers,
        }
    }

    /// Start building a `row_count x column_count` matrix row by row.
    #[must_use]
    pub fn builder(row_count: usize, column_count: usize) -> CsrBuilder<T> {
        CsrBuilder::new(row_count, column_count)
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn column_indices(&self) -> &[usize] {
        &self.column_indices
    }

    pub fn row_pointers(&self) -> &[usize] {
        &self.row_pointers
    }

    pub(crate) fn row_index_range(&self, r: usize) -> Range<usize> {
        debug_assert!(r < self.height());
        self.row_pointers[r]..self.row_pointers[r + 1]
    }

    /// The column indices and values stored in row `r`.
    #[must_use]
    pub fn row(&self, r: usize) -> (&[usize], &[T]) {
        let range = self.row_index_range(r);
        (&self.column_indices[range.clone()], &self.values[range])
    }
}

impl<T: Entry> CsrMatrix<T> {
    /// Compress a rectangular array of rows, dropping zeros.
    pub fn from_dense<R: AsRef<[T]>>(rows: &[R]) -> MatrixResult<Self> {
        let first = rows.first().ok_or(MatrixError::EmptyDenseInput)?;
        let column_count = first.as_ref().len();
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != column_count)
        {
            return Err(MatrixError::RaggedDenseInput {
                row,
                expected: column_count,
                found,
            });
        }

        let mut builder = CsrBuilder::new(rows.len(), column_count);
        for row in rows {
            push_nonzero(&mut builder, row.as_ref());
        }
        Ok(builder.finish())
    }

    /// Compress a dense row-major matrix, dropping zeros.
    #[must_use]
    pub fn from_row_major(dense: &RowMajorMatrix<T>) -> Self {
        let mut builder = CsrBuilder::new(dense.height(), dense.width());
        for row in dense.rows() {
            push_nonzero(&mut builder, row);
        }
        builder.finish()
    }

    /// The value at `(r, c)`, or zero if nothing is stored there.
    #[must_use]
    pub fn get(&self, r: usize, c: usize) -> T {
        let (columns, values) = self.row(r);
        columns
            .binary_search(&c)
            .map_or_else(|_| T::default(), |i| values[i])
    }

    /// Expand into a dense `height() x width()` matrix.
    ///
    /// A matrix of width zero expands to an empty dense matrix.
    #[must_use]
    pub fn to_dense(&self) -> RowMajorMatrix<T> {
        let width = self.width();
        let mut dense = RowMajorMatrix::zeroed(self.height(), width);
        for r in 0..self.height() {
            let (columns, values) = self.row(r);
            for (&c, &v) in columns.iter().zip(values) {
                dense.values[r * width + c] = v;
            }
        }
        dense
    }
}

fn push_nonzero<T: Entry>(builder: &mut CsrBuilder<T>, row: &[T]) {
    for (c, &v) in row.iter().enumerate() {
        if !v.is_zero() {
            builder.push(v, c);
        }
    }
    builder.close_row();
}

impl<T> Matrix<T> for CsrMatrix<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.row_pointers.len() - 1
    }
}

/// Renders `Values`, `Column Indices` and `Row Pointers` as bracketed, comma-separated lists, one per
/// line. The blank line that closes a printed block comes from the caller's `println!`.
impl<T: fmt::Display> fmt::Display for CsrMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Values: [{}]", self.values.iter().format(", "))?;
        writeln!(
            f,
            "Column Indices: [{}]",
            self.column_indices.iter().format(", ")
        )?;
        writeln!(f, "Row Pointers: [{}]", self.row_pointers.iter().format(", "))
    }
}
