//! Built-in integrands with closed-form antiderivatives
//!
//! A command line cannot carry an arbitrary closure, so the CLI offers a
//! fixed catalogue of functions whose exact integral is known.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Catalogue of integrands selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinIntegrand {
    /// f(x) = 1
    Constant,
    /// f(x) = x
    Linear,
    /// f(x) = x²
    Square,
    /// f(x) = x³
    Cube,
    /// f(x) = sin(x)
    Sine,
    /// f(x) = eˣ
    Exp,
    /// f(x) = √x
    Sqrt,
}

impl BuiltinIntegrand {
    /// All integrands in display order
    pub const ALL: [BuiltinIntegrand; 7] = [
        BuiltinIntegrand::Constant,
        BuiltinIntegrand::Linear,
        BuiltinIntegrand::Square,
        BuiltinIntegrand::Cube,
        BuiltinIntegrand::Sine,
        BuiltinIntegrand::Exp,
        BuiltinIntegrand::Sqrt,
    ];

    /// Name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinIntegrand::Constant => "constant",
            BuiltinIntegrand::Linear => "linear",
            BuiltinIntegrand::Square => "square",
            BuiltinIntegrand::Cube => "cube",
            BuiltinIntegrand::Sine => "sin",
            BuiltinIntegrand::Exp => "exp",
            BuiltinIntegrand::Sqrt => "sqrt",
        }
    }

    /// Formula shown in reports
    pub fn formula(&self) -> &'static str {
        match self {
            BuiltinIntegrand::Constant => "f(x) = 1",
            BuiltinIntegrand::Linear => "f(x) = x",
            BuiltinIntegrand::Square => "f(x) = x^2",
            BuiltinIntegrand::Cube => "f(x) = x^3",
            BuiltinIntegrand::Sine => "f(x) = sin(x)",
            BuiltinIntegrand::Exp => "f(x) = exp(x)",
            BuiltinIntegrand::Sqrt => "f(x) = sqrt(x)",
        }
    }

    /// Evaluate the integrand
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            BuiltinIntegrand::Constant => 1.0,
            BuiltinIntegrand::Linear => x,
            BuiltinIntegrand::Square => x * x,
            BuiltinIntegrand::Cube => x * x * x,
            BuiltinIntegrand::Sine => x.sin(),
            BuiltinIntegrand::Exp => x.exp(),
            BuiltinIntegrand::Sqrt => x.sqrt(),
        }
    }

    fn antiderivative(&self, x: f64) -> f64 {
        match self {
            BuiltinIntegrand::Constant => x,
            BuiltinIntegrand::Linear => x * x / 2.0,
            BuiltinIntegrand::Square => x * x * x / 3.0,
            BuiltinIntegrand::Cube => x.powi(4) / 4.0,
            BuiltinIntegrand::Sine => -x.cos(),
            BuiltinIntegrand::Exp => x.exp(),
            BuiltinIntegrand::Sqrt => 2.0 / 3.0 * x.powf(1.5),
        }
    }

    /// Closed-form value of the integral over [a, b]
    pub fn exact(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }

    /// Comma-separated list of accepted names
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|i| i.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for BuiltinIntegrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinIntegrand {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "constant" | "one" => Ok(BuiltinIntegrand::Constant),
            "linear" | "x" => Ok(BuiltinIntegrand::Linear),
            "square" | "x^2" => Ok(BuiltinIntegrand::Square),
            "cube" | "x^3" => Ok(BuiltinIntegrand::Cube),
            "sin" | "sine" => Ok(BuiltinIntegrand::Sine),
            "exp" => Ok(BuiltinIntegrand::Exp),
            "sqrt" => Ok(BuiltinIntegrand::Sqrt),
            _ => Err(ConfigError::UnknownIntegrand(s.to_string(), Self::names())),
        }
    }
}
