//! Compare command implementation
//!
//! Runs every quadrature method on one built-in integrand and reports each
//! estimate against the closed-form integral.

use quadra_core::integrator::{Integrator, QuadratureMethod};
use quadra_core::rng::QuadRng;
use tracing::{debug, info};

use crate::config::CompareConfig;
use crate::report::{Comparison, ComparisonRow};
use crate::Result;

/// Run the compare command
pub fn run(config: &CompareConfig) -> Result<()> {
    let comparison = compare(config)?;
    let rendered = comparison.render(config.format)?;
    print!("{}", rendered);

    info!("Comparison complete");
    Ok(())
}

/// Evaluate all methods and collect the comparison
pub fn compare(config: &CompareConfig) -> Result<Comparison> {
    info!(
        integrand = %config.integrand,
        lower = config.lower,
        upper = config.upper,
        intervals = config.intervals,
        samples = config.samples,
        "Starting comparison"
    );

    let integrand = config.integrand;
    let integrator = Integrator::new(
        move |x: f64| integrand.eval(x),
        config.lower,
        config.upper,
        config.intervals,
    )?;
    debug!(step = integrator.step(), nodes = integrator.nodes().len(), "Grid built");

    let mut rng = match config.seed {
        Some(seed) => QuadRng::from_seed(seed),
        None => QuadRng::from_entropy(),
    };
    debug!(seed = ?rng.seed(), "Monte Carlo generator initialised");

    let exact = integrand.exact(config.lower, config.upper);

    let rows = QuadratureMethod::ALL
        .iter()
        .map(|&method| -> Result<ComparisonRow> {
            let result = integrator.estimate(method, config.samples, &mut rng)?;
            debug!(method = %method, result, "Estimate computed");
            Ok(ComparisonRow::new(method, result, exact))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Comparison {
        integrand: integrand.name().to_string(),
        formula: integrand.formula().to_string(),
        lower: config.lower,
        upper: config.upper,
        intervals: config.intervals,
        samples: config.samples,
        seed: config.seed,
        exact,
        rows,
    })
}
