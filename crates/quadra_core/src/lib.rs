//! # quadra_core: Numerical Quadrature over a Bounded Interval
//!
//! quadra_core approximates definite integrals of a scalar function with four
//! classical techniques:
//! - Composite trapezoidal rule (`Integrator::trapezoidal`)
//! - Composite midpoint rule (`Integrator::midpoint`)
//! - Per-subinterval Simpson rule (`Integrator::simpson`)
//! - Accept/reject Monte Carlo sampling (`Integrator::montecarlo`)
//!
//! ## Modules
//!
//! - `integrator`: The [`Integrator`](integrator::Integrator) problem instance and its estimators
//! - `rng`: Seeded random number generation for Monte Carlo
//! - `types`: Error types: `IntegrationError`, `IntegrationResult`
//!
//! ## Dependencies
//!
//! - num-traits: Generic floating-point arithmetic
//! - rand: Pseudo-random number generation
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! The library performs no I/O and no logging; presentation belongs to
//! callers such as `quadra_cli`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use quadra_core::integrator::{Integrator, QuadratureMethod};
//! use quadra_core::rng::QuadRng;
//!
//! let integrator = Integrator::new(|x: f64| x * x, 0.0, 2.0, 1000).unwrap();
//! let exact = 8.0 / 3.0;
//!
//! let mut rng = QuadRng::from_seed(42);
//! for method in QuadratureMethod::ALL {
//!     let value = integrator.estimate(method, 10_000, &mut rng).unwrap();
//!     assert!((value - exact).abs() < 0.3, "{} = {}", method, value);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `QuadratureMethod`, `MonteCarloEstimate`
//!   and `IntegrationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod integrator;
pub mod rng;
pub mod types;
