//! Quadrature method selection.

use std::fmt;
use std::str::FromStr;

use crate::types::IntegrationError;

/// The four estimators an [`Integrator`](super::Integrator) exposes.
///
/// # Examples
///
/// ```
/// use quadra_core::integrator::QuadratureMethod;
///
/// let method: QuadratureMethod = "monte-carlo".parse().unwrap();
/// assert_eq!(method, QuadratureMethod::MonteCarlo);
/// assert_eq!(method.to_string(), "Monte Carlo");
/// assert!(!method.is_deterministic());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum QuadratureMethod {
    /// Composite trapezoidal rule.
    Trapezoidal,
    /// Composite midpoint rule.
    Midpoint,
    /// Three-point Simpson rule applied to every subinterval.
    Simpson,
    /// Accept/reject sampling inside the bounding rectangle.
    MonteCarlo,
}

impl QuadratureMethod {
    /// All methods in report order.
    pub const ALL: [QuadratureMethod; 4] = [
        QuadratureMethod::Trapezoidal,
        QuadratureMethod::Midpoint,
        QuadratureMethod::Simpson,
        QuadratureMethod::MonteCarlo,
    ];

    /// Human-readable column label.
    pub fn label(&self) -> &'static str {
        match self {
            QuadratureMethod::Trapezoidal => "Trapezoid",
            QuadratureMethod::Midpoint => "Midpoint",
            QuadratureMethod::Simpson => "Simpson",
            QuadratureMethod::MonteCarlo => "Monte Carlo",
        }
    }

    /// Returns `true` if repeated calls give bit-identical results.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, QuadratureMethod::MonteCarlo)
    }
}

impl fmt::Display for QuadratureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuadratureMethod {
    type Err = IntegrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trapezoid" | "trapezoidal" => Ok(QuadratureMethod::Trapezoidal),
            "midpoint" | "mid-point" => Ok(QuadratureMethod::Midpoint),
            "simpson" => Ok(QuadratureMethod::Simpson),
            "monte-carlo" | "montecarlo" | "monte carlo" | "mc" => {
                Ok(QuadratureMethod::MonteCarlo)
            }
            other => Err(IntegrationError::InvalidDomain(format!(
                "unknown quadrature method '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "Trapezoid".parse::<QuadratureMethod>().unwrap(),
            QuadratureMethod::Trapezoidal
        );
        assert_eq!(
            "trapezoidal".parse::<QuadratureMethod>().unwrap(),
            QuadratureMethod::Trapezoidal
        );
        assert_eq!(
            "MID-POINT".parse::<QuadratureMethod>().unwrap(),
            QuadratureMethod::Midpoint
        );
        assert_eq!(
            "simpson".parse::<QuadratureMethod>().unwrap(),
            QuadratureMethod::Simpson
        );
        assert_eq!(
            "mc".parse::<QuadratureMethod>().unwrap(),
            QuadratureMethod::MonteCarlo
        );
        assert!("romberg".parse::<QuadratureMethod>().is_err());
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for method in QuadratureMethod::ALL {
            assert_eq!(method.label().parse::<QuadratureMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_only_monte_carlo_is_stochastic() {
        let stochastic: Vec<_> = QuadratureMethod::ALL
            .iter()
            .filter(|m| !m.is_deterministic())
            .collect();
        assert_eq!(stochastic, vec![&QuadratureMethod::MonteCarlo]);
    }
}
