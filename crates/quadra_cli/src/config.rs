//! Comparison run configuration
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::integrands::BuiltinIntegrand;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid interval count: {0}. Must be at least 1")]
    InvalidIntervals(usize),

    #[error("Invalid sample count: {0}. Must be at least 1")]
    InvalidSamples(usize),

    #[error("Invalid bounds: [{lower}, {upper}]. Bounds must be finite with lower <= upper")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("Unknown integrand: {0}. Must be one of: {1}")]
    UnknownIntegrand(String, String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, csv, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for the comparison report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Comparison run configuration
///
/// Defaults reproduce the reference comparison: x² on [0, 2] with 1000
/// subintervals and 10 000 Monte Carlo samples.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Built-in integrand name
    #[serde(deserialize_with = "deserialize_integrand")]
    pub integrand: BuiltinIntegrand,
    /// Lower integration bound
    pub lower: f64,
    /// Upper integration bound
    pub upper: f64,
    /// Number of subintervals
    pub intervals: usize,
    /// Number of Monte Carlo samples
    pub samples: usize,
    /// Monte Carlo seed; entropy when absent
    pub seed: Option<u64>,
    /// Report format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_integrand<'de, D>(deserializer: D) -> Result<BuiltinIntegrand, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BuiltinIntegrand::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            integrand: BuiltinIntegrand::Square,
            lower: 0.0,
            upper: 2.0,
            intervals: 1000,
            samples: 10_000,
            seed: None,
            format: OutputFormat::Table,
            log_level: LogLevel::Warn,
        }
    }
}

impl CompareConfig {
    /// Load configuration from environment variables
    ///
    /// Only variables that are set override the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("QUADRA_INTEGRAND") {
            config.integrand = BuiltinIntegrand::from_str(&name)?;
        }

        if let Ok(lower) = std::env::var("QUADRA_LOWER") {
            config.lower = parse_env("QUADRA_LOWER", &lower)?;
        }

        if let Ok(upper) = std::env::var("QUADRA_UPPER") {
            config.upper = parse_env("QUADRA_UPPER", &upper)?;
        }

        if let Ok(intervals) = std::env::var("QUADRA_INTERVALS") {
            config.intervals = parse_env("QUADRA_INTERVALS", &intervals)?;
        }

        if let Ok(samples) = std::env::var("QUADRA_SAMPLES") {
            config.samples = parse_env("QUADRA_SAMPLES", &samples)?;
        }

        if let Ok(seed) = std::env::var("QUADRA_SEED") {
            config.seed = Some(parse_env("QUADRA_SEED", &seed)?);
        }

        if let Ok(format) = std::env::var("QUADRA_FORMAT") {
            config.format = OutputFormat::from_str(&format)?;
        }

        if let Ok(log_level) = std::env::var("QUADRA_LOG_LEVEL") {
            config.log_level = LogLevel::from_str(&log_level)?;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CompareConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intervals == 0 {
            return Err(ConfigError::InvalidIntervals(self.intervals));
        }

        if self.samples == 0 {
            return Err(ConfigError::InvalidSamples(self.samples));
        }

        if !self.lower.is_finite() || !self.upper.is_finite() || self.lower > self.upper {
            return Err(ConfigError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(integrand) = cli.integrand {
            self.integrand = integrand;
        }
        if let Some(lower) = cli.lower {
            self.lower = lower;
        }
        if let Some(upper) = cli.upper {
            self.upper = upper;
        }
        if let Some(intervals) = cli.intervals {
            self.intervals = intervals;
        }
        if let Some(samples) = cli.samples {
            self.samples = samples;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not valid", name, value)))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Integrand override
    pub integrand: Option<BuiltinIntegrand>,
    /// Lower bound override
    pub lower: Option<f64>,
    /// Upper bound override
    pub upper: Option<f64>,
    /// Interval count override
    pub intervals: Option<usize>,
    /// Sample count override
    pub samples: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Log level override
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CompareConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        CompareConfig::from_file(config_path)?
    } else {
        CompareConfig::default()
    };

    let env_config = CompareConfig::from_env()?;
    if std::env::var("QUADRA_INTEGRAND").is_ok() {
        config.integrand = env_config.integrand;
    }
    if std::env::var("QUADRA_LOWER").is_ok() {
        config.lower = env_config.lower;
    }
    if std::env::var("QUADRA_UPPER").is_ok() {
        config.upper = env_config.upper;
    }
    if std::env::var("QUADRA_INTERVALS").is_ok() {
        config.intervals = env_config.intervals;
    }
    if std::env::var("QUADRA_SAMPLES").is_ok() {
        config.samples = env_config.samples;
    }
    if std::env::var("QUADRA_SEED").is_ok() {
        config.seed = env_config.seed;
    }
    if std::env::var("QUADRA_FORMAT").is_ok() {
        config.format = env_config.format;
    }
    if std::env::var("QUADRA_LOG_LEVEL").is_ok() {
        config.log_level = env_config.log_level;
    }

    config.merge_with_cli(cli);

    config.validate()?;

    Ok(config)
}
