use std::fmt;

use crate::error::{Error, Result};

/// Returns the magic constant `n * (n² + 1) / 2` of order `n`.
///
/// This is the sum every row, column and main diagonal of a normal magic
/// square of order `n` must have.
pub fn magic_constant(n: usize) -> u64 {
    let n = n as u64;
    n * (n * n + 1) / 2
}

/// An `n x n` grid of positive integers.
///
/// Squares returned by [`generate`](crate::generate) are magic. Squares built
/// with [`Square::from_rows`] or edited with [`Square::set`] are arbitrary
/// and can be checked with [`verify`](crate::verify).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Square {
    n: usize,
    cells: Vec<u32>,
}

impl Square {
    /// Creates an all-zero square. Zero marks an empty cell.
    pub(crate) fn empty(n: usize) -> Self {
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Creates a square from a row-major cell vector of length `n * n`.
    pub(crate) fn from_cells(n: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        Self { n, cells }
    }

    /// Builds a square from its rows.
    ///
    /// The order is the number of rows; every row must have that many cells.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(Error::RaggedRows {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            cells.extend(values);
        }
        Ok(Self { n, cells })
    }

    /// Returns the order of the square.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the magic constant for this square's order.
    pub fn magic_constant(&self) -> u64 {
        magic_constant(self.n)
    }

    /// Returns the value at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn get(&self, r: usize, c: usize) -> u32 {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c]
    }

    /// Sets the value at position `(r, c)` without checking the magic property.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn set(&mut self, r: usize, c: usize, v: u32) {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c] = v;
    }

    #[inline]
    pub(crate) fn is_empty_at(&self, r: usize, c: usize) -> bool {
        self.cells[r * self.n + c] == 0
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * n + c`.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Returns row `r` as a slice.
    ///
    /// # Panics
    /// Panics if `r >= n`.
    pub fn row(&self, r: usize) -> &[u32] {
        assert!(r < self.n, "row out of bounds");
        &self.cells[r * self.n..(r + 1) * self.n]
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.n.max(1))
    }

    /// Copies the square into nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }
}

/// Renders the order, the magic constant and the aligned rows.
///
/// Every value is right-aligned in a field two characters wider than `n²`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_val = (self.n as u64) * (self.n as u64);
        let width = max_val.to_string().len() + 2;

        writeln!(f, "Magic Square of Order {}:", self.n)?;
        write!(f, "Magic Constant: {}", self.magic_constant())?;
        for row in self.rows() {
            writeln!(f)?;
            for v in row {
                write!(f, "{v:>width$}")?;
            }
        }
        Ok(())
    }
}
