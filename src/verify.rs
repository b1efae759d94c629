use std::fmt;

use crate::Square;

/// One of the two main diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// Cells `(i, i)`.
    Main,
    /// Cells `(i, n - 1 - i)`.
    Anti,
}

/// The first property a square was found to violate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    RowSum {
        row: usize,
        actual: u64,
        expected: u64,
    },
    ColumnSum {
        column: usize,
        actual: u64,
        expected: u64,
    },
    Diagonal {
        diagonal: Diagonal,
        actual: u64,
        expected: u64,
    },
    /// The cells are not exactly the values `1..=n²`.
    ValueSet,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::RowSum {
                row,
                actual,
                expected,
            } => write!(f, "Row {row} sum is {actual}, expected {expected}"),
            Mismatch::ColumnSum {
                column,
                actual,
                expected,
            } => write!(f, "Col {column} sum is {actual}, expected {expected}"),
            Mismatch::Diagonal {
                diagonal,
                actual,
                expected,
            } => {
                let name = match diagonal {
                    Diagonal::Main => "Main",
                    Diagonal::Anti => "Anti",
                };
                write!(f, "{name} diagonal sum is {actual}, expected {expected}")
            }
            Mismatch::ValueSet => f.write_str("Not all numbers from 1 to n*n are present"),
        }
    }
}

/// Outcome of [`verify`].
///
/// `Display` renders the human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Magic,
    NotMagic(Mismatch),
}

impl Verification {
    pub fn is_magic(&self) -> bool {
        matches!(self, Verification::Magic)
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Verification::Magic => None,
            Verification::NotMagic(m) => Some(m),
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::Magic => f.write_str("Valid Magic Square"),
            Verification::NotMagic(m) => m.fmt(f),
        }
    }
}

/// Checks whether `square` is a normal magic square.
///
/// Rows, columns, the main diagonal, the anti-diagonal and finally the value
/// set are checked in that order; the first violation is reported.
pub fn verify(square: &Square) -> Verification {
    match find_mismatch(square) {
        None => Verification::Magic,
        Some(mismatch) => {
            log::debug!("order {} square is not magic: {mismatch}", square.n());
            Verification::NotMagic(mismatch)
        }
    }
}

fn line_sum(cells: impl Iterator<Item = u32>) -> u64 {
    cells.map(u64::from).sum()
}

fn find_mismatch(square: &Square) -> Option<Mismatch> {
    let n = square.n();
    let expected = square.magic_constant();

    for (row, values) in square.rows().enumerate() {
        let actual = line_sum(values.iter().copied());
        if actual != expected {
            return Some(Mismatch::RowSum {
                row,
                actual,
                expected,
            });
        }
    }

    for column in 0..n {
        let actual = line_sum((0..n).map(|r| square.get(r, column)));
        if actual != expected {
            return Some(Mismatch::ColumnSum {
                column,
                actual,
                expected,
            });
        }
    }

    let diagonals = [
        (Diagonal::Main, line_sum((0..n).map(|i| square.get(i, i)))),
        (Diagonal::Anti, line_sum((0..n).map(|i| square.get(i, n - 1 - i)))),
    ];
    for (diagonal, actual) in diagonals {
        if actual != expected {
            return Some(Mismatch::Diagonal {
                diagonal,
                actual,
                expected,
            });
        }
    }

    let mut values = square.cells().to_vec();
    values.sort_unstable();
    if !values.iter().copied().eq(1..=(n * n) as u32) {
        return Some(Mismatch::ValueSet);
    }

    None
}
