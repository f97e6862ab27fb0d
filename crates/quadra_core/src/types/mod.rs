//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for integrator construction and evaluation
//!
//! # Re-exports
//!
//! [`IntegrationError`] and [`IntegrationResult`] are re-exported at this
//! module level.

pub mod error;

pub use error::{IntegrationError, IntegrationResult};
