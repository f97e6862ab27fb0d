//! Accept/reject Monte Carlo estimation.
//!
//! The integrand is sampled on the node grid to find a bounding rectangle
//! `[a, b] × [low, up]`. Uniform points are then thrown into the rectangle and
//! the fraction landing on or below the curve scales the rectangle's area.
//!
//! ## Limitations
//!
//! - The vertical range comes from the grid samples, not from the true
//!   extrema of `f`. A sharp peak between two nodes pokes out of the
//!   rectangle and its area above `up` is never counted.
//! - Hits are counted as "below `f`", measured from the rectangle floor
//!   `low`, and the area is not offset by `low`. The estimate equals the
//!   integral only when `f` is non-negative and its grid minimum is zero.
//!   Functions taking negative values, or bounded well away from zero, are
//!   estimated with a bias.

use num_traits::Float;

use super::{as_f64, cast, Integrator};
use crate::rng::QuadRng;
use crate::types::{IntegrationError, IntegrationResult};

/// Outcome of one Monte Carlo run.
///
/// Holds the scratch quantities of the run (hit count, bounding rectangle)
/// so they stay local to the call rather than living on the integrator.
/// Only the sampler builds these, so `samples` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonteCarloEstimate<T> {
    value: T,
    hits: usize,
    samples: usize,
    bounding_area: T,
    lower_bound: T,
    upper_bound: T,
}

impl<T: Copy> MonteCarloEstimate<T> {
    /// Estimated integral, `hit_fraction * bounding_area`.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Number of samples that landed on or below the curve.
    #[inline]
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of samples drawn.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Area of the bounding rectangle, `|up - low| * |b - a|`.
    #[inline]
    pub fn bounding_area(&self) -> T {
        self.bounding_area
    }

    /// Smallest integrand value on the node grid.
    #[inline]
    pub fn lower_bound(&self) -> T {
        self.lower_bound
    }

    /// Largest integrand value on the node grid.
    #[inline]
    pub fn upper_bound(&self) -> T {
        self.upper_bound
    }

    /// Proportion of accepted samples, in `[0, 1]`.
    #[inline]
    pub fn hit_fraction(&self) -> f64 {
        self.hits as f64 / self.samples as f64
    }
}

impl<T, F> Integrator<T, F>
where
    T: Float,
    F: Fn(T) -> T,
{
    /// Estimates the integral by accept/reject sampling with `samples` draws.
    ///
    /// The generator is seeded from OS entropy, so repeated calls return
    /// different estimates. The standard error shrinks as `1/√samples`.
    ///
    /// Only meaningful for integrands that are non-negative on `[a, b]`; see
    /// the module documentation for the bias this formulation carries.
    ///
    /// # Errors
    ///
    /// * `IntegrationError::InvalidSampleCount` - `samples == 0`
    /// * `IntegrationError::FunctionEvaluation` - non-finite integrand value
    pub fn montecarlo(&self, samples: usize) -> IntegrationResult<T> {
        let mut rng = QuadRng::from_entropy();
        self.montecarlo_with_rng(samples, &mut rng)
            .map(|estimate| estimate.value())
    }

    /// Reproducible variant of [`montecarlo`](Self::montecarlo).
    ///
    /// # Example
    ///
    /// ```
    /// use quadra_core::integrator::Integrator;
    ///
    /// let integrator = Integrator::new(|x: f64| x * x, 0.0, 2.0, 1000).unwrap();
    ///
    /// let first = integrator.montecarlo_seeded(10_000, 7).unwrap();
    /// let second = integrator.montecarlo_seeded(10_000, 7).unwrap();
    /// assert_eq!(first, second);
    /// ```
    pub fn montecarlo_seeded(&self, samples: usize, seed: u64) -> IntegrationResult<T> {
        let mut rng = QuadRng::from_seed(seed);
        self.montecarlo_with_rng(samples, &mut rng)
            .map(|estimate| estimate.value())
    }

    /// Runs the Monte Carlo estimator with a caller-owned generator and
    /// returns the full [`MonteCarloEstimate`].
    ///
    /// # Algorithm
    ///
    /// 1. Evaluate `f` on every node; `up` and `low` are the extremes.
    /// 2. `bounding_area = |up - low| * |b - a|`.
    /// 3. Draw `x ~ U[a, b]`, `y ~ U[low, up]`; a hit when `y <= f(x)`.
    /// 4. Return `hits / samples * bounding_area`.
    ///
    /// # Example
    ///
    /// ```
    /// use quadra_core::integrator::Integrator;
    /// use quadra_core::rng::QuadRng;
    ///
    /// let integrator = Integrator::new(|x: f64| x * x, 0.0, 2.0, 1000).unwrap();
    /// let mut rng = QuadRng::from_seed(42);
    ///
    /// let estimate = integrator.montecarlo_with_rng(10_000, &mut rng).unwrap();
    /// assert_eq!(estimate.samples(), 10_000);
    /// assert_eq!(estimate.lower_bound(), 0.0);
    /// assert!((estimate.upper_bound() - 4.0).abs() < 1e-9);
    /// assert!((estimate.bounding_area() - 8.0).abs() < 1e-9);
    /// ```
    pub fn montecarlo_with_rng(
        &self,
        samples: usize,
        rng: &mut QuadRng,
    ) -> IntegrationResult<MonteCarloEstimate<T>> {
        if samples == 0 {
            return Err(IntegrationError::InvalidSampleCount(samples));
        }

        let ys = self
            .xs
            .iter()
            .map(|&x| self.eval(x))
            .collect::<IntegrationResult<Vec<T>>>()?;

        let (low, up) = ys
            .iter()
            .fold((T::infinity(), T::neg_infinity()), |(low, up), &y| {
                (low.min(y), up.max(y))
            });

        let bounding_area = (up - low).abs() * (self.b - self.a).abs();

        let (x_low, x_high) = (as_f64(self.a), as_f64(self.b));
        let (y_low, y_high) = (as_f64(low), as_f64(up));

        let mut hits = 0usize;
        for _ in 0..samples {
            let x = cast::<T, _>(rng.gen_range(x_low, x_high))?;
            let y = cast::<T, _>(rng.gen_range(y_low, y_high))?;
            if y <= self.eval(x)? {
                hits += 1;
            }
        }

        let value = cast::<T, _>(hits)? / cast::<T, _>(samples)? * bounding_area;

        Ok(MonteCarloEstimate {
            value,
            hits,
            samples,
            bounding_area,
            lower_bound: low,
            upper_bound: up,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EXACT_SQUARE: f64 = 8.0 / 3.0;

    fn square_integrator() -> Integrator<f64, fn(f64) -> f64> {
        fn square(x: f64) -> f64 {
            x * x
        }
        Integrator::new(square as fn(f64) -> f64, 0.0, 2.0, 1000).unwrap()
    }

    #[test]
    fn test_zero_samples_rejected() {
        let integrator = square_integrator();
        assert_eq!(
            integrator.montecarlo(0),
            Err(IntegrationError::InvalidSampleCount(0))
        );
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let integrator = square_integrator();
        let a = integrator.montecarlo_seeded(5_000, 123).unwrap();
        let b = integrator.montecarlo_seeded(5_000, 123).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_calls_do_not_share_state() {
        let integrator = square_integrator();
        let first = integrator.montecarlo_seeded(5_000, 11).unwrap();
        let _ = integrator.montecarlo_seeded(50, 99).unwrap();
        let _ = integrator.montecarlo(200).unwrap();
        let again = integrator.montecarlo_seeded(5_000, 11).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_estimate_fields_consistent() {
        let integrator = square_integrator();
        let mut rng = QuadRng::from_seed(5);
        let estimate = integrator.montecarlo_with_rng(10_000, &mut rng).unwrap();

        assert_eq!(estimate.samples(), 10_000);
        assert!(estimate.hits() <= estimate.samples());
        assert_relative_eq!(estimate.bounding_area(), 8.0, epsilon = 1e-9);
        assert_relative_eq!(
            estimate.value(),
            estimate.hit_fraction() * estimate.bounding_area(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_samples_drawn_from_bounding_rectangle() {
        let integrator = square_integrator();
        let estimate = integrator
            .montecarlo_with_rng(2_000, &mut QuadRng::from_seed(77))
            .unwrap();

        // Replaying the generator point by point reproduces the hit count.
        let mut rng = QuadRng::from_seed(77);
        let hits = (0..2_000)
            .filter(|_| {
                let x = rng.gen_range(integrator.lower(), integrator.upper());
                let y = rng.gen_range(estimate.lower_bound(), estimate.upper_bound());
                y <= x * x
            })
            .count();

        assert_eq!(estimate.hits(), hits);
        assert!((0.0..=1.0).contains(&estimate.hit_fraction()));
    }

    #[test]
    fn test_repeated_trials_within_ten_percent() {
        let integrator = square_integrator();
        let trials = 50;

        let within = (0..trials)
            .map(|seed| integrator.montecarlo_seeded(10_000, seed).unwrap())
            .filter(|value| (value - EXACT_SQUARE).abs() / EXACT_SQUARE < 0.10)
            .count();

        // Standard error is about 1.4% here, so 10% is roughly 7 sigma.
        assert!(within >= 48, "only {} of {} trials within 10%", within, trials);
    }

    #[test]
    fn test_mean_of_trials_converges() {
        let integrator = square_integrator();
        let trials = 20;
        let mean = (0..trials)
            .map(|seed| integrator.montecarlo_seeded(20_000, 1_000 + seed).unwrap())
            .sum::<f64>()
            / trials as f64;
        assert!((mean - EXACT_SQUARE).abs() < 0.03, "mean = {}", mean);
    }

    #[test]
    fn test_entropy_seeded_estimate_is_plausible() {
        let integrator = square_integrator();
        let value = integrator.montecarlo(10_000).unwrap();
        assert!(value > 0.0 && value < 8.0);
    }

    #[test]
    fn test_constant_integrand_has_zero_area_rectangle() {
        // up == low, so the bounding rectangle is flat and the estimate is 0.
        let integrator = Integrator::new(|_: f64| 2.0, 0.0, 3.0, 10).unwrap();
        let mut rng = QuadRng::from_seed(1);
        let estimate = integrator.montecarlo_with_rng(100, &mut rng).unwrap();

        assert_eq!(estimate.bounding_area(), 0.0);
        assert_eq!(estimate.hits(), 100);
        assert_eq!(estimate.value(), 0.0);
    }

    #[test]
    fn test_negative_integrand_is_biased() {
        // ∫₀¹ (x - 1) dx = -0.5, but accept/reject only measures area above
        // the rectangle floor, which is non-negative.
        let integrator = Integrator::new(|x: f64| x - 1.0, 0.0, 1.0, 100).unwrap();
        let value = integrator.montecarlo_seeded(10_000, 3).unwrap();
        assert!(value >= 0.0);
        assert!((value - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_peak_between_nodes_is_missed() {
        // Narrow spike centred between the two nodes of a single subinterval.
        let spike = |x: f64| {
            let d = x - 0.5;
            if d.abs() < 0.1 {
                10.0 * (1.0 - d.abs() / 0.1)
            } else {
                0.0
            }
        };
        let integrator = Integrator::new(spike, 0.0, 1.0, 1).unwrap();
        let mut rng = QuadRng::from_seed(8);
        let estimate = integrator.montecarlo_with_rng(1_000, &mut rng).unwrap();

        assert_eq!(estimate.upper_bound(), 0.0);
        assert_eq!(estimate.value(), 0.0);
    }

    #[test]
    fn test_evaluation_failure_on_grid() {
        let integrator = Integrator::new(|x: f64| 1.0 / x, 0.0, 1.0, 10).unwrap();
        let result = integrator.montecarlo_seeded(10, 0);
        assert!(matches!(
            result,
            Err(IntegrationError::FunctionEvaluation { x, .. }) if x == 0.0
        ));
    }
}
