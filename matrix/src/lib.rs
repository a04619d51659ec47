//! Sparse integer matrices in compressed sparse row (CSR) form.

#![no_std]

extern crate alloc;

mod add;
pub mod builder;
pub mod dense;
mod entry;
mod error;
mod mul;
pub mod sparse;
mod transpose;

pub use builder::CsrBuilder;
pub use dense::RowMajorMatrix;
pub use entry::Entry;
pub use error::{MatrixError, MatrixResult};
pub use sparse::CsrMatrix;

/// The storage extents of a matrix.
pub trait Matrix<T> {
    /// Number of columns a stored entry may address.
    fn width(&self) -> usize;

    /// Number of stored rows.
    fn height(&self) -> usize;
}
