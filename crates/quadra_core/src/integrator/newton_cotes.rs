//! Deterministic closed and open Newton-Cotes rules.

use num_traits::Float;

use super::{cast, Integrator};
use crate::types::IntegrationResult;

impl<T, F> Integrator<T, F>
where
    T: Float,
    F: Fn(T) -> T,
{
    /// Approximates the integral with the composite trapezoidal rule.
    ///
    /// Computes `Σ (f(xs[i]) + f(xs[i+1])) * h/2` over the `n` subintervals.
    /// Each node is evaluated once. Exact for linear integrands; the local
    /// error is `O(h³)` for smooth `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use quadra_core::integrator::Integrator;
    ///
    /// let integrator = Integrator::new(|x: f64| x, 0.0, 4.0, 3).unwrap();
    /// assert!((integrator.trapezoidal().unwrap() - 8.0).abs() < 1e-12);
    /// ```
    pub fn trapezoidal(&self) -> IntegrationResult<T> {
        let half_h = self.h / cast::<T, _>(2.0)?;

        let mut left = self.eval(self.xs[0])?;
        let mut res = T::zero();
        for &x in &self.xs[1..] {
            let right = self.eval(x)?;
            res = res + (right + left) * half_h;
            left = right;
        }
        Ok(res)
    }

    /// Approximates the integral with the composite midpoint rule.
    ///
    /// Computes `Σ h * f(a + h/2 + i*h)` for `i` in `0..n`. Exact for linear
    /// integrands and usually more accurate than the trapezoidal rule on
    /// convex or concave `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use quadra_core::integrator::Integrator;
    ///
    /// let integrator = Integrator::new(|x: f64| 2.0 * x + 1.0, 0.0, 1.0, 1).unwrap();
    /// assert!((integrator.midpoint().unwrap() - 2.0).abs() < 1e-12);
    /// ```
    pub fn midpoint(&self) -> IntegrationResult<T> {
        let half_h = self.h / cast::<T, _>(2.0)?;

        let mut res = T::zero();
        for i in 0..self.n {
            let x = self.a + half_h + cast::<T, _>(i)? * self.h;
            res = res + self.h * self.eval(x)?;
        }
        Ok(res)
    }

    /// Approximates the integral with Simpson's rule on every subinterval.
    ///
    /// Each of the `n` subintervals `[a+(i-1)h, a+ih]` gets its own
    /// three-point quadratic fit through its endpoints and its midpoint:
    ///
    /// `Σ_{i=1}^{n} h/6 * (f(a+(i-1)h) + 4 f(a+(i-1)h+h/2) + f(a+ih))`
    ///
    /// This differs from the global composite rule that weights the `n + 1`
    /// nodes `1, 4, 2, ..., 4, 1`; it uses `2n + 1` distinct abscissae and
    /// works for any `n >= 1`. Exact for polynomials up to degree 3.
    ///
    /// # Example
    ///
    /// ```
    /// use quadra_core::integrator::Integrator;
    ///
    /// // ∫₀² x³ dx = 4, exact with a single subinterval
    /// let integrator = Integrator::new(|x: f64| x * x * x, 0.0, 2.0, 1).unwrap();
    /// assert!((integrator.simpson().unwrap() - 4.0).abs() < 1e-12);
    /// ```
    pub fn simpson(&self) -> IntegrationResult<T> {
        let two = cast::<T, _>(2.0)?;
        let four = cast::<T, _>(4.0)?;
        let sixth_h = self.h / cast::<T, _>(6.0)?;

        let mut res = T::zero();
        for i in 1..=self.n {
            let right = self.a + cast::<T, _>(i)? * self.h;
            let left = right - self.h;
            let mid = right - self.h / two;
            res = res + sixth_h * (self.eval(left)? + four * self.eval(mid)? + self.eval(right)?);
        }
        Ok(res)
    }
}
