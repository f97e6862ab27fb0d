//! Numerical integration of a scalar function over a bounded interval.
//!
//! An [`Integrator`] binds an integrand, an interval `[a, b]` and a number of
//! subintervals `n`. The step `h = |b - a| / n` and the `n + 1` nodes
//! `xs[i] = a + i * h` are computed once at construction and never change.
//!
//! ## Available Estimators
//!
//! - [`Integrator::trapezoidal`]: composite trapezoidal rule
//! - [`Integrator::midpoint`]: composite midpoint rule
//! - [`Integrator::simpson`]: three-point Simpson rule on every subinterval
//! - [`Integrator::montecarlo`]: accept/reject sampling in the bounding rectangle
//!
//! ## Integrand Failures
//!
//! The integrand is a plain `Fn(T) -> T`. A NaN or infinite return value is
//! treated as an evaluation failure and reported as
//! [`IntegrationError::FunctionEvaluation`] with the failing abscissa.
//!
//! ## Examples
//!
//! ```
//! use quadra_core::integrator::Integrator;
//!
//! let integrator = Integrator::new(|x: f64| x * x, 0.0, 2.0, 1000).unwrap();
//!
//! let exact = 8.0 / 3.0;
//! assert!((integrator.trapezoidal().unwrap() - exact).abs() < 1e-3);
//! assert!((integrator.midpoint().unwrap() - exact).abs() < 1e-3);
//! assert!((integrator.simpson().unwrap() - exact).abs() < 1e-3);
//!
//! let mc = integrator.montecarlo_seeded(10_000, 42).unwrap();
//! assert!((mc - exact).abs() < 0.3);
//! ```

mod method;
mod monte_carlo;
mod newton_cotes;

pub use method::QuadratureMethod;
pub use monte_carlo::MonteCarloEstimate;

use std::fmt;

use num_traits::{Float, ToPrimitive};

use crate::rng::QuadRng;
use crate::types::{IntegrationError, IntegrationResult};

/// A fixed integration problem: integrand, interval and discretisation.
///
/// All estimators take `&self` and keep their intermediate state local, so a
/// single instance can be queried repeatedly, or from several threads when
/// `F` is `Sync`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
/// * `F` - Integrand, `Fn(T) -> T`
///
/// # Example
///
/// ```
/// use quadra_core::integrator::Integrator;
///
/// let integrator = Integrator::new(|x: f64| 3.0 * x, 1.0, 3.0, 4).unwrap();
///
/// assert_eq!(integrator.intervals(), 4);
/// assert_eq!(integrator.step(), 0.5);
/// assert_eq!(integrator.nodes(), &[1.0, 1.5, 2.0, 2.5, 3.0]);
/// assert!((integrator.trapezoidal().unwrap() - 12.0).abs() < 1e-12);
/// ```
pub struct Integrator<T: Float, F> {
    f: F,
    a: T,
    b: T,
    n: usize,
    h: T,
    xs: Vec<T>,
}

impl<T, F> Integrator<T, F>
where
    T: Float,
    F: Fn(T) -> T,
{
    /// Creates a new integration problem over `[a, b]` with `n` subintervals.
    ///
    /// The integrand is not evaluated here; evaluation failures surface when
    /// an estimator runs.
    ///
    /// # Arguments
    ///
    /// * `f` - Integrand
    /// * `a` - Lower bound
    /// * `b` - Upper bound, `b >= a`
    /// * `n` - Number of subintervals, at least 1
    ///
    /// # Returns
    ///
    /// * `Ok(Integrator)` - Problem instance with `n + 1` nodes
    /// * `Err(IntegrationError::InvalidDomain)` - `n == 0`, a non-finite
    ///   bound, `a > b`, or a width `b - a` that overflows
    ///
    /// # Example
    ///
    /// ```
    /// use quadra_core::integrator::Integrator;
    /// use quadra_core::types::IntegrationError;
    ///
    /// let err = Integrator::new(|x: f64| x, 0.0, 1.0, 0).err().unwrap();
    /// assert!(matches!(err, IntegrationError::InvalidDomain(_)));
    ///
    /// let err = Integrator::new(|x: f64| x, 2.0, 0.0, 10).err().unwrap();
    /// assert!(matches!(err, IntegrationError::InvalidDomain(_)));
    /// ```
    pub fn new(f: F, a: T, b: T, n: usize) -> IntegrationResult<Self> {
        if n == 0 {
            return Err(IntegrationError::InvalidDomain(
                "interval count must be at least 1".to_string(),
            ));
        }

        if !a.is_finite() || !b.is_finite() {
            return Err(IntegrationError::InvalidDomain(format!(
                "bounds must be finite, got [{}, {}]",
                as_f64(a),
                as_f64(b)
            )));
        }

        if a > b {
            return Err(IntegrationError::InvalidDomain(format!(
                "lower bound {} exceeds upper bound {}",
                as_f64(a),
                as_f64(b)
            )));
        }

        if !(b - a).is_finite() {
            return Err(IntegrationError::InvalidDomain(format!(
                "interval width of [{}, {}] is not representable",
                as_f64(a),
                as_f64(b)
            )));
        }

        let h = (b - a).abs() / cast::<T, _>(n)?;

        // Index-based nodes keep the drift of xs[n] to a single rounding.
        let xs = (0..=n)
            .map(|i| Ok(a + cast::<T, _>(i)? * h))
            .collect::<IntegrationResult<Vec<T>>>()?;

        Ok(Self { f, a, b, n, h, xs })
    }

    /// Lower bound `a`.
    #[inline]
    pub fn lower(&self) -> T {
        self.a
    }

    /// Upper bound `b`.
    #[inline]
    pub fn upper(&self) -> T {
        self.b
    }

    /// Signed interval width `b - a`.
    #[inline]
    pub fn width(&self) -> T {
        self.b - self.a
    }

    /// Number of subintervals `n`.
    #[inline]
    pub fn intervals(&self) -> usize {
        self.n
    }

    /// Step size `h = |b - a| / n`.
    #[inline]
    pub fn step(&self) -> T {
        self.h
    }

    /// The `n + 1` evenly spaced nodes, starting at `a`.
    ///
    /// The last node is within floating-point rounding of `b`, not
    /// necessarily equal to it.
    #[inline]
    pub fn nodes(&self) -> &[T] {
        &self.xs
    }

    /// Runs the estimator selected by `method`.
    ///
    /// `samples` and `rng` are only used by [`QuadratureMethod::MonteCarlo`].
    ///
    /// # Example
    ///
    /// ```
    /// use quadra_core::integrator::{Integrator, QuadratureMethod};
    /// use quadra_core::rng::QuadRng;
    ///
    /// let integrator = Integrator::new(|x: f64| x, 0.0, 1.0, 8).unwrap();
    /// let mut rng = QuadRng::from_seed(1);
    ///
    /// for method in QuadratureMethod::ALL {
    ///     let value = integrator.estimate(method, 1000, &mut rng).unwrap();
    ///     assert!((value - 0.5).abs() < 0.1);
    /// }
    /// ```
    pub fn estimate(
        &self,
        method: QuadratureMethod,
        samples: usize,
        rng: &mut QuadRng,
    ) -> IntegrationResult<T> {
        match method {
            QuadratureMethod::Trapezoidal => self.trapezoidal(),
            QuadratureMethod::Midpoint => self.midpoint(),
            QuadratureMethod::Simpson => self.simpson(),
            QuadratureMethod::MonteCarlo => self
                .montecarlo_with_rng(samples, rng)
                .map(|estimate| estimate.value()),
        }
    }

    /// Evaluates the integrand, rejecting non-finite values.
    #[inline]
    fn eval(&self, x: T) -> IntegrationResult<T> {
        let y = (self.f)(x);
        if y.is_finite() {
            Ok(y)
        } else {
            Err(IntegrationError::FunctionEvaluation {
                x: as_f64(x),
                value: as_f64(y),
            })
        }
    }
}

impl<T, F> fmt::Debug for Integrator<T, F>
where
    T: Float + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Integrator")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("n", &self.n)
            .field("h", &self.h)
            .finish_non_exhaustive()
    }
}

/// Converts a count or literal into the working float type.
#[inline]
pub(crate) fn cast<T, N>(value: N) -> IntegrationResult<T>
where
    T: Float,
    N: ToPrimitive + fmt::Display + Copy,
{
    T::from(value).ok_or_else(|| {
        IntegrationError::NumericConversion(format!("{} is not representable", value))
    })
}

#[inline]
fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
