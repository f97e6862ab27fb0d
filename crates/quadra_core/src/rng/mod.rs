//! # Random Number Generation
//!
//! Random number generation for Monte Carlo integration.
//!
//! All generators support seeding for deterministic sequences. Each Monte
//! Carlo call borrows its own generator, so no random state is shared between
//! calls or between integrators.
//!
//! ## Usage Example
//!
//! ```rust
//! use quadra_core::rng::QuadRng;
//!
//! let mut rng = QuadRng::from_seed(12345);
//! let x = rng.gen_range(0.0, 2.0);
//! assert!((0.0..=2.0).contains(&x));
//! ```

mod prng;

pub use prng::QuadRng;

#[cfg(test)]
mod tests;
