//! Siamese (de la Loubère) construction for odd orders.
//!
//! Values are placed in order, stepping one row up and one column right on a
//! torus. When that cell is taken the walk drops one row below the current
//! cell instead. For odd `n` this visits every cell exactly once.

use crate::Square;

/// Builds the Siamese magic square of odd order `n`.
///
/// # Panics
/// Panics if `n` is even.
pub(crate) fn build(n: usize) -> Square {
    assert!(n % 2 == 1, "Siamese construction needs an odd order, got {n}");

    let mut sq = Square::empty(n);
    let (mut r, mut c) = (0, n / 2);
    let last = (n * n) as u32;

    sq.set(r, c, 1);
    for v in 2..=last {
        let up = (r + n - 1) % n;
        let right = (c + 1) % n;
        if sq.is_empty_at(up, right) {
            (r, c) = (up, right);
        } else {
            r = (r + 1) % n;
        }
        sq.set(r, c, v);
    }

    sq
}
