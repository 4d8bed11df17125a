use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use order_statistics::sort::{median, select_deterministic, select_random, select_random_with_rng};

fn main() {
    println!("Order-statistic selection demonstration");
    println!("=======================================");

    let a = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
    let mut sorted = a;
    sorted.sort();
    println!("\nArray:  {:?}", a);
    println!("Sorted: {:?}", sorted);

    println!("\nRandom-pivot selection:");
    for k in [0, 2, 4, 6, 9] {
        let mut copy = a;
        let found = select_random(&mut copy, k).unwrap();
        println!("  k={}: found {}, expected {}", k, found, sorted[k]);
    }

    println!("\nDeterministic (median-of-medians) selection:");
    let b = [50, 80, 90, 10, 30, 20, 70, 60];
    let mut b_sorted = b;
    b_sorted.sort();
    println!("  Array:  {:?}", b);
    for k in [0, 3, 5, 7] {
        let mut copy = b;
        let found = select_deterministic(&mut copy, k).unwrap();
        println!("  k={}: found {}, expected {}", k, found, b_sorted[k]);
    }

    println!("\nMedians:");
    println!("  median({:?}) = {}", [5, 3, 8, 1, 9], median(&[5, 3, 8, 1, 9]).unwrap());
    println!("  median({:?}) = {}", [10, 20, 30, 40], median(&[10, 20, 30, 40]).unwrap());

    println!("\nEdge cases:");
    let mut single = [42];
    println!("  single element, k=0: {}", select_random(&mut single, 0).unwrap());
    let mut dupes = [5, 5, 5, 5, 5];
    println!("  all duplicates, k=2: {}", select_random(&mut dupes, 2).unwrap());
    let mut rev = [5, 4, 3, 2, 1];
    println!("  reverse sorted, k=2: {}", select_random(&mut rev, 2).unwrap());

    println!("\nSeeded run (reproducible pivots):");
    let mut c: Vec<i32> = (0..50).rev().collect();
    let rng = ChaCha20Rng::seed_from_u64(42);
    let found = select_random_with_rng(&mut c, 25, rng).unwrap();
    println!("  k=25 over 0..50 reversed: {}", found);
}
