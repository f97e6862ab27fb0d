//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility
//! - Uniform range and degenerate ranges
//! - Sample statistics

use super::*;

#[test]
fn test_seed_reproducibility() {
    let mut rng1 = QuadRng::from_seed(12345);
    let mut rng2 = QuadRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = QuadRng::from_seed(1);
    let mut rng2 = QuadRng::from_seed(2);

    let a: Vec<f64> = (0..16).map(|_| rng1.gen_uniform()).collect();
    let b: Vec<f64> = (0..16).map(|_| rng2.gen_uniform()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_uniform_range() {
    let mut rng = QuadRng::from_seed(42);

    for _ in 0..10_000 {
        let value = rng.gen_uniform();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

#[test]
fn test_gen_range_bounds() {
    let mut rng = QuadRng::from_seed(7);

    for _ in 0..10_000 {
        let value = rng.gen_range(-3.0, 5.0);
        assert!((-3.0..=5.0).contains(&value));
    }
}

#[test]
fn test_gen_range_degenerate() {
    let mut rng = QuadRng::from_seed(7);
    assert_eq!(rng.gen_range(4.0, 4.0), 4.0);
}

#[test]
fn test_entropy_has_no_seed() {
    let mut rng = QuadRng::from_entropy();
    assert_eq!(rng.seed(), None);
    let value = rng.gen_uniform();
    assert!((0.0..1.0).contains(&value));
}

#[test]
fn test_sample_mean_near_half() {
    let mut rng = QuadRng::from_seed(2024);
    let n = 100_000;
    let mean = (0..n).map(|_| rng.gen_uniform()).sum::<f64>() / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "mean = {}", mean);
}
