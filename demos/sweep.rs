//! Generate and verify every supported order up to a limit.
//!
//! Usage: cargo run --release --example sweep -- [max_n]

use magic_square::{Method, generate, verify};
use std::env;
use std::time::{Duration, Instant};

fn main() {
    let args: Vec<String> = env::args().collect();
    let max_n: i64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);

    println!("=== Magic Square Sweep ===");
    println!("orders 1..={} (order 2 skipped)", max_n);
    println!();

    let mut per_method: Vec<(Method, usize, Duration)> = Vec::new();
    let mut failures = 0;
    let start = Instant::now();

    for n in 1..=max_n {
        let Some(method) = Method::for_order(n as usize) else {
            continue;
        };

        let t = Instant::now();
        let sq = generate(n).expect("supported order");
        let elapsed = t.elapsed();

        let verification = verify(&sq);
        if !verification.is_magic() {
            failures += 1;
            println!("order {:>4} ({}): {}", n, method, verification);
        }

        match per_method.iter_mut().find(|(m, _, _)| *m == method) {
            Some((_, count, total)) => {
                *count += 1;
                *total += elapsed;
            }
            None => per_method.push((method, 1, elapsed)),
        }
    }

    for (method, count, total) in &per_method {
        println!(
            "{:<12} {:>5} squares, {:>10.3?} total, {:>10.3?} mean",
            method.to_string(),
            count,
            total,
            *total / *count as u32
        );
    }
    println!();
    println!("{} failure(s), {:.3?} elapsed", failures, start.elapsed());

    if failures > 0 {
        std::process::exit(1);
    }
}
