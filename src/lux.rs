//! Conway's LUX construction for singly even orders (`n = 4k + 2`).
//!
//! A Siamese square of order `n / 2` fixes the order in which the 2x2
//! blocks of the result are filled. Each block receives four consecutive
//! values laid out by one of three templates, chosen per block by a label
//! grid of L rows, one U row and X rows, with the U at the centre swapped
//! with the L above it.

use crate::{Square, siamese};

/// Which 2x2 template fills a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    L,
    U,
    X,
}

impl Label {
    /// Offsets `1..=4` of the block's four values, by `[row][col]`.
    const fn template(self) -> [[u32; 2]; 2] {
        match self {
            Label::L => [[4, 1], [2, 3]],
            Label::U => [[1, 4], [2, 3]],
            Label::X => [[1, 4], [3, 2]],
        }
    }
}

/// Labels the `size x size` block grid. `size` is odd and at least 3.
fn label_blocks(size: usize) -> Vec<Label> {
    let k = (size - 1) / 2;
    let mut labels: Vec<Label> = (0..size)
        .flat_map(|r| {
            let label = if r <= k {
                Label::L
            } else if r == k + 1 {
                Label::U
            } else {
                Label::X
            };
            std::iter::repeat_n(label, size)
        })
        .collect();

    // keeps the diagonals balanced through the central column
    labels[k * size + k] = Label::U;
    labels[(k + 1) * size + k] = Label::L;

    log::trace!("LUX labels for block grid of size {size}: {labels:?}");
    labels
}

/// Builds the LUX magic square of order `n` where `n % 4 == 2`.
///
/// # Panics
/// Panics if `n % 4 != 2` or `n < 6`.
pub(crate) fn build(n: usize) -> Square {
    assert!(
        n % 4 == 2 && n >= 6,
        "LUX construction needs n = 4k + 2 with n >= 6, got {n}"
    );

    let size = n / 2;
    let half = siamese::build(size);
    let labels = label_blocks(size);

    let mut sq = Square::empty(n);
    for r in 0..size {
        for c in 0..size {
            let start = 4 * (half.get(r, c) - 1);
            let template = labels[r * size + c].template();
            for (pr, offsets) in template.iter().enumerate() {
                for (pc, offset) in offsets.iter().enumerate() {
                    sq.set(2 * r + pr, 2 * c + pc, start + offset);
                }
            }
        }
    }

    sq
}
