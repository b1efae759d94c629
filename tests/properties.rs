//! Properties of generated squares, exercised through the public API only.

use magic_square::{Error, MAX_ORDER, Mismatch, Verification, generate, magic_constant, verify};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const ORDERS: [i64; 10] = [1, 3, 4, 5, 6, 7, 8, 9, 10, 12];

fn supported_orders(max: i64) -> impl Iterator<Item = i64> {
    (1..=max).filter(|&n| n != 2)
}

#[test]
fn listed_orders_verify() {
    for n in ORDERS {
        let sq = generate(n).unwrap();
        assert_eq!(verify(&sq), Verification::Magic, "order {}", n);
    }
}

#[test]
fn invalid_and_unsupported_orders() {
    assert_eq!(generate(2), Err(Error::UnsupportedOrder(2)));
    assert_eq!(generate(0), Err(Error::InvalidOrder(0)));
    assert_eq!(generate(-1), Err(Error::InvalidOrder(-1)));
    let too_large = MAX_ORDER as i64 + 1;
    assert_eq!(generate(too_large), Err(Error::OrderTooLarge(too_large)));
}

#[test]
fn values_are_exactly_one_to_n_squared() {
    for n in supported_orders(30) {
        let sq = generate(n).unwrap();
        let mut values = sq.cells().to_vec();
        values.sort_unstable();
        let expected: Vec<u32> = (1..=(n * n) as u32).collect();
        assert_eq!(values, expected, "order {}", n);
    }
}

#[test]
fn every_line_sums_to_magic_constant() {
    for n in supported_orders(30) {
        let sq = generate(n).unwrap();
        let n = n as usize;
        let m = magic_constant(n);

        for r in 0..n {
            let sum: u64 = sq.row(r).iter().map(|&v| u64::from(v)).sum();
            assert_eq!(sum, m, "row {} of order {}", r, n);
        }
        for c in 0..n {
            let sum: u64 = (0..n).map(|r| u64::from(sq.get(r, c))).sum();
            assert_eq!(sum, m, "column {} of order {}", c, n);
        }
        let main: u64 = (0..n).map(|i| u64::from(sq.get(i, i))).sum();
        let anti: u64 = (0..n).map(|i| u64::from(sq.get(i, n - 1 - i))).sum();
        assert_eq!(main, m, "main diagonal of order {}", n);
        assert_eq!(anti, m, "anti diagonal of order {}", n);
    }
}

#[test]
fn generation_is_deterministic() {
    for n in ORDERS {
        assert_eq!(generate(n).unwrap(), generate(n).unwrap(), "order {}", n);
    }
}

#[test]
fn order_three() {
    let sq = generate(3).unwrap();
    assert_eq!(sq.magic_constant(), 15);
    assert_eq!(
        sq.to_rows(),
        vec![vec![8, 1, 6], vec![3, 5, 7], vec![4, 9, 2]]
    );
    assert!(verify(&sq).is_magic());
}

#[test]
fn order_four_complements_subgrid_diagonals() {
    let sq = generate(4).unwrap();
    assert_eq!(sq.magic_constant(), 34);
    assert!(verify(&sq).is_magic());

    let diagonal_cells = [
        (0, 0),
        (0, 3),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 2),
        (3, 0),
        (3, 3),
    ];
    for (i, j) in diagonal_cells {
        let sequential = (i * 4 + j + 1) as u32;
        assert_eq!(sq.get(i, j), 17 - sequential, "cell ({}, {})", i, j);
    }
}

#[test]
fn order_six() {
    let sq = generate(6).unwrap();
    assert_eq!(sq.magic_constant(), 111);
    assert!(verify(&sq).is_magic());

    let half = generate(3).unwrap();
    assert_eq!(half.magic_constant(), 15);
    assert!(verify(&half).is_magic());
}

#[test]
fn altered_cell_names_row_and_sum() {
    let mut sq = generate(5).unwrap();
    let old = sq.get(2, 3);
    sq.set(2, 3, old + 1);

    let v = verify(&sq);
    assert_eq!(
        v.mismatch(),
        Some(&Mismatch::RowSum {
            row: 2,
            actual: 66,
            expected: 65
        })
    );
    assert_eq!(v.to_string(), "Row 2 sum is 66, expected 65");
}

#[test]
fn random_single_cell_changes_are_detected() {
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    for _ in 0..200 {
        let n = rng.random_range(3..=16usize);
        let mut sq = generate(n as i64).unwrap();
        let (r, c) = (rng.random_range(0..n), rng.random_range(0..n));
        let old = sq.get(r, c);
        let new = loop {
            let v = rng.random_range(1..=(n * n) as u32);
            if v != old {
                break v;
            }
        };
        sq.set(r, c, new);

        let expected = magic_constant(n);
        let actual = expected + u64::from(new) - u64::from(old);
        assert_eq!(
            verify(&sq),
            Verification::NotMagic(Mismatch::RowSum {
                row: r,
                actual,
                expected
            }),
            "order {} cell ({}, {})",
            n,
            r,
            c
        );
    }
}

#[test]
fn random_swaps_across_rows_are_detected() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for _ in 0..200 {
        let n = rng.random_range(3..=16usize);
        let mut sq = generate(n as i64).unwrap();
        let r1 = rng.random_range(0..n);
        let r2 = loop {
            let r = rng.random_range(0..n);
            if r != r1 {
                break r;
            }
        };
        let (c1, c2) = (rng.random_range(0..n), rng.random_range(0..n));

        let (a, b) = (sq.get(r1, c1), sq.get(r2, c2));
        sq.set(r1, c1, b);
        sq.set(r2, c2, a);

        let v = verify(&sq);
        assert!(!v.is_magic(), "order {}", n);
        match v.mismatch() {
            Some(Mismatch::RowSum { row, .. }) => assert_eq!(*row, r1.min(r2)),
            other => panic!("expected a row mismatch, got {:?}", other),
        }
    }
}
