//! Check command implementation
//!
//! Prints the resolved configuration and the integrand catalogue.

use tracing::info;

use crate::config::CompareConfig;
use crate::integrands::BuiltinIntegrand;
use crate::Result;

/// Run the check command
pub fn run(config: &CompareConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    println!("quadra {}", crate::VERSION);
    println!();
    println!("Resolved configuration:");
    println!("  integrand : {} ({})", config.integrand, config.integrand.formula());
    println!("  interval  : [{}, {}]", config.lower, config.upper);
    println!("  intervals : {}", config.intervals);
    println!("  samples   : {}", config.samples);
    match config.seed {
        Some(seed) => println!("  seed      : {}", seed),
        None => println!("  seed      : (entropy)"),
    }
    println!("  format    : {}", config.format);
    println!("  log level : {}", config.log_level);
    println!();
    println!("Available integrands:");
    for integrand in BuiltinIntegrand::ALL {
        println!("  {:<9} {}", integrand.name(), integrand.formula());
    }

    info!("Configuration OK");
    Ok(())
}
