//! Construction for orders divisible by four.

use crate::Square;

/// Returns true if `(i, j)` lies on a diagonal of its aligned 4x4 subgrid.
#[inline]
fn on_subgrid_diagonal(i: usize, j: usize) -> bool {
    let (a, b) = (i % 4, j % 4);
    a == b || a + b == 3
}

/// Builds the magic square of order `n` where `n % 4 == 0`.
///
/// Cells are numbered `1..=n²` in row-major order, then every cell on a
/// 4x4 subgrid diagonal is complemented to `n² + 1 - v`.
///
/// # Panics
/// Panics if `n` is not a positive multiple of 4.
pub(crate) fn build(n: usize) -> Square {
    assert!(
        n > 0 && n % 4 == 0,
        "doubly even construction needs a positive multiple of 4, got {n}"
    );

    let complement = (n * n + 1) as u32;
    let cells = (0..n)
        .flat_map(|i| {
            (0..n).map(move |j| {
                let v = (i * n + j + 1) as u32;
                if on_subgrid_diagonal(i, j) {
                    complement - v
                } else {
                    v
                }
            })
        })
        .collect();

    Square::from_cells(n, cells)
}
