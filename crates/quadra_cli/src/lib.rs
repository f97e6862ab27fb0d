//! Quadra CLI - Quadrature comparison driver
//!
//! Runs the four `quadra_core` estimators on a built-in integrand and
//! tabulates each result and its error against the closed-form integral.
//!
//! # Modules
//!
//! - `commands`: `compare` and `check` command implementations
//! - `config`: Layered configuration (CLI > environment > TOML file > defaults)
//! - `integrands`: Built-in integrands with known antiderivatives
//! - `report`: Table, CSV and JSON rendering

pub mod commands;
pub mod config;
pub mod error;
pub mod integrands;
pub mod report;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
