//! Trace buffer growth while pushing at both ends.
//!
//! Run with `RUST_LOG=trace` to see every reallocation, or `RUST_LOG=debug`
//! for the per-phase dumps only.

use numdeque::{destroy_all, num_arrays, NumericDeque};
use numdeque_bench::{alternating_ends_profile, sparse_set_profile};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    println!("=== numdeque growth profile ===\n");

    let mut d = NumericDeque::new();
    for i in 0..25 {
        if i % 2 == 0 {
            d.push_back(i as f64);
        } else {
            d.push_front(i as f64);
        }
        if i % 8 == 0 {
            d.print_debug_info();
        }
    }
    println!("mixed pushes:   size={:>5} capacity={:>5}", d.size(), d.capacity());

    let sparse = sparse_set_profile(8, 100);
    println!(
        "sparse writes:  size={:>5} capacity={:>5} sum={}",
        sparse.size(),
        sparse.capacity(),
        sparse.sum()
    );

    let churn = alternating_ends_profile(42, 5_000);
    println!(
        "seeded churn:   size={:>5} capacity={:>5} mean={:.5}",
        churn.size(),
        churn.capacity(),
        churn.mean()
    );

    let halves = churn.split(2);
    println!("split in two:   chunks={:?}", halves.chunk_sizes());

    println!("\nlive arrays before teardown: {}", num_arrays());
    let released = destroy_all();
    println!("released {released} buffers; live arrays now: {}", num_arrays());
    println!("handle after teardown renders as {d}");
}
