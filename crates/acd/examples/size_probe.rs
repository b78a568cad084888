//! Timing probe for one enumeration size.
//!
//! Purpose
//! - Give a reproducible data point for "how long does size k take, and how
//!   does the split between sequential and pooled runs look?"
//!
//! Usage
//!   cargo run -p acd --release --example size_probe -- 5
//!
//! Prints one `key=value` line per variant.

use std::time::Instant;

use acd::api::*;

fn main() {
    let size: usize = std::env::args()
        .nth(1)
        .map(|s| s.parse().expect("size must be a positive integer"))
        .unwrap_or(4);

    for variant in Variant::ALL {
        let start = Instant::now();
        let est = compute_worst_case_estimates(variant, size, true).expect("estimates succeed");
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "variant={} size={} diagrams={} finite={:.9} limit={:.9} time_ms={elapsed_ms:.3}",
            variant.slug(),
            est.size,
            est.diagrams,
            est.finite_ratio(),
            est.limit_ratio().unwrap_or(f64::NAN),
        );
    }
}
