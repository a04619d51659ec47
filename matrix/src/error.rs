//! Error types for matrix construction and arithmetic.

use thiserror::Error;

/// Failures reported by [`CsrMatrix`](crate::CsrMatrix) constructors and operations.
///
/// Every error is detected before any output is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// Addition operands have different row counts. Checked before columns.
    #[error("Matrices must have the same number of rows")]
    RowCountMismatch {
        /// Row count of the left operand.
        left: usize,
        /// Row count of the right operand.
        right: usize,
    },

    /// Addition operands have the same row count but different column counts.
    #[error("Matrices must have the same number of columns")]
    ColumnCountMismatch { left: usize, right: usize },

    /// The left factor's column count differs from the right factor's row count.
    #[error(
        "The number of columns of the first matrix must be equal to the number of rows of the second matrix."
    )]
    InnerDimensionMismatch {
        left_columns: usize,
        right_rows: usize,
    },

    /// Dense input with no rows.
    #[error("Dense input must contain at least one row")]
    EmptyDenseInput,

    /// Dense input whose rows are not all the same length.
    #[error("Dense input row {row} has {found} columns, expected {expected}")]
    RaggedDenseInput {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for matrix operations.
pub type MatrixResult<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_shape_error_messages() {
        assert_eq!(
            MatrixError::RowCountMismatch { left: 4, right: 3 }.to_string(),
            "Matrices must have the same number of rows"
        );
        assert_eq!(
            MatrixError::ColumnCountMismatch { left: 4, right: 6 }.to_string(),
            "Matrices must have the same number of columns"
        );
        assert_eq!(
            MatrixError::InnerDimensionMismatch {
                left_columns: 4,
                right_rows: 3
            }
            .to_string(),
            "The number of columns of the first matrix must be equal to the number of rows of the second matrix."
        );
    }

    #[test]
    fn test_ragged_message_names_the_row() {
        let err = MatrixError::RaggedDenseInput {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "Dense input row 2 has 3 columns, expected 4");
    }
}
