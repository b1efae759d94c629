use thiserror::Error;

/// Errors returned when a square cannot be built.
///
/// A square that merely fails to be magic is not an error; see
/// [`Verification`](crate::Verification).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested order is zero or negative.
    #[error("order must be at least 1, got {0}")]
    InvalidOrder(i64),

    /// No magic square of this order exists.
    #[error("magic square of order {0} does not exist")]
    UnsupportedOrder(usize),

    /// The requested order would overflow the cell type.
    #[error("order {0} exceeds the maximum supported order {max}", max = crate::MAX_ORDER)]
    OrderTooLarge(i64),

    /// A row passed to [`Square::from_rows`](crate::Square::from_rows) has the wrong length.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
