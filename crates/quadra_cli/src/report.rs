//! Comparison report rendering
//!
//! Lays out one column per quadrature method and two rows: the estimate and
//! its absolute error against the closed-form value.

use quadra_core::integrator::QuadratureMethod;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

const CELL_WIDTH: usize = 14;
const LABEL_WIDTH: usize = 8;

/// One method's estimate
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    /// Quadrature method
    pub method: QuadratureMethod,
    /// Estimated integral
    pub result: f64,
    /// Absolute error against the exact value
    pub error: f64,
}

impl ComparisonRow {
    /// Build a row from an estimate and the exact value
    pub fn new(method: QuadratureMethod, result: f64, exact: f64) -> Self {
        Self {
            method,
            result,
            error: (exact - result).abs(),
        }
    }
}

/// Full comparison of all methods on one problem
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Integrand name
    pub integrand: String,
    /// Integrand formula
    pub formula: String,
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
    /// Number of subintervals
    pub intervals: usize,
    /// Number of Monte Carlo samples
    pub samples: usize,
    /// Seed used for Monte Carlo, if any
    pub seed: Option<u64>,
    /// Closed-form integral
    pub exact: f64,
    /// One row per method
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Csv => Ok(self.to_csv()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Box-drawn table, methods as columns
    pub fn to_table(&self) -> String {
        let border = |left: &str, mid: &str, right: &str| {
            let mut line = String::from(left);
            line.push_str(&"─".repeat(LABEL_WIDTH + 2));
            for _ in &self.rows {
                line.push_str(mid);
                line.push_str(&"─".repeat(CELL_WIDTH + 2));
            }
            line.push_str(right);
            line.push('\n');
            line
        };

        let row = |label: &str, cells: Vec<String>| {
            let mut line = format!("│ {:<width$} ", label, width = LABEL_WIDTH);
            for cell in cells {
                line.push_str(&format!("│ {:<width$} ", cell, width = CELL_WIDTH));
            }
            line.push_str("│\n");
            line
        };

        let mut out = format!(
            "{} on [{}, {}], n = {}, N = {}, exact = {:.6}\n\n",
            self.formula, self.lower, self.upper, self.intervals, self.samples, self.exact
        );
        out.push_str(&border("┌", "┬", "┐"));
        out.push_str(&row(
            "Metrics",
            self.rows.iter().map(|r| r.method.to_string()).collect(),
        ));
        out.push_str(&border("├", "┼", "┤"));
        out.push_str(&row(
            "result",
            self.rows.iter().map(|r| format!("{:.8}", r.result)).collect(),
        ));
        out.push_str(&row(
            "error",
            self.rows.iter().map(|r| format!("{:.3e}", r.error)).collect(),
        ));
        out.push_str(&border("└", "┴", "┘"));
        out
    }

    /// Comma-separated rows, methods as columns
    pub fn to_csv(&self) -> String {
        let header = self
            .rows
            .iter()
            .map(|r| r.method.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let results = self
            .rows
            .iter()
            .map(|r| r.result.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let errors = self
            .rows
            .iter()
            .map(|r| r.error.to_string())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "metric,{}\nresult,{}\nerror,{}\n",
            header, results, errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_comparison() -> Comparison {
        let exact = 8.0 / 3.0;
        Comparison {
            integrand: "square".to_string(),
            formula: "f(x) = x^2".to_string(),
            lower: 0.0,
            upper: 2.0,
            intervals: 1000,
            samples: 10_000,
            seed: Some(42),
            exact,
            rows: vec![
                ComparisonRow::new(QuadratureMethod::Trapezoidal, 2.666668, exact),
                ComparisonRow::new(QuadratureMethod::Midpoint, 2.666665, exact),
                ComparisonRow::new(QuadratureMethod::Simpson, exact, exact),
                ComparisonRow::new(QuadratureMethod::MonteCarlo, 2.7, exact),
            ],
        }
    }

    #[test]
    fn test_row_error_is_absolute() {
        let row = ComparisonRow::new(QuadratureMethod::Midpoint, 1.5, 2.0);
        assert_eq!(row.error, 0.5);
        let row = ComparisonRow::new(QuadratureMethod::Midpoint, 2.5, 2.0);
        assert_eq!(row.error, 0.5);
    }

    #[test]
    fn test_table_layout() {
        let table = sample_comparison().to_table();

        assert!(table.contains("Trapezoid"));
        assert!(table.contains("Midpoint"));
        assert!(table.contains("Simpson"));
        assert!(table.contains("Monte Carlo"));
        assert!(table.contains("│ result"));
        assert!(table.contains("│ error"));
        assert!(table.contains("2.70000000"));

        // Header line, 4 borders/rows after the blank line, all the same width
        let lines: Vec<&str> = table.lines().skip(2).collect();
        assert_eq!(lines.len(), 6);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_csv_layout() {
        let csv = sample_comparison().to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "metric,Trapezoid,Midpoint,Simpson,Monte Carlo");
        assert!(lines[1].starts_with("result,2.666668,"));
        assert!(lines[2].starts_with("error,"));
    }

    #[test]
    fn test_json_render() {
        let json = sample_comparison().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["integrand"], "square");
        assert_eq!(value["seed"], 42);
        assert_eq!(value["rows"].as_array().unwrap().len(), 4);
        assert_eq!(value["rows"][3]["method"], "monte-carlo");
    }
}
