use alloc::vec;
use alloc::vec::Vec;

use crate::Matrix;

/// A dense matrix stored in row-major form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowMajorMatrix<T> {
    /// All values, stored in row-major order.
    pub values: Vec<T>,
    pub width: usize,
}

impl<T> RowMajorMatrix<T> {
    #[must_use]
    pub fn new(values: Vec<T>, width: usize) -> Self {
        debug_assert!((width == 0 && values.is_empty()) || (width != 0 && values.len() % width == 0));
        Self { values, width }
    }

    /// An all-default `height x width` matrix.
    #[must_use]
    pub fn zeroed(height: usize, width: usize) -> Self
    where
        T: Default + Clone,
    {
        Self {
            values: vec![T::default(); height * width],
            width,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks_exact` rejects a zero chunk size, and a zero-width matrix has no values anyway.
        self.values.chunks_exact(self.width.max(1))
    }
}

impl<T> Matrix<T> for RowMajorMatrix<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.values.len() / self.width
        }
    }
}
