//! Generate, print and verify magic squares of the given orders.
//!
//! Usage: cargo run --example generate -- [n...]
//!
//! Example:
//!   cargo run --example generate -- 3 4 6

use magic_square::{generate, verify};
use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let orders: Vec<i64> = if args.is_empty() {
        vec![3, 4, 6]
    } else {
        args.iter()
            .map(|s| {
                s.parse().unwrap_or_else(|_| {
                    eprintln!("Not an integer order: {}", s);
                    std::process::exit(1);
                })
            })
            .collect()
    };

    for n in orders {
        let sq = match generate(n) {
            Ok(sq) => sq,
            Err(e) => {
                eprintln!("Order {}: {}", n, e);
                continue;
            }
        };

        println!("{}", sq);
        println!("{}", "-".repeat(20));
        println!("Verification: {}", verify(&sq));
        println!();
    }
}
