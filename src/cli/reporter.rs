// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use super::config::{OutputConfig, OutputFormat};
use super::job::{JobOutput, JobReport};
use crate::dimension::Axis;
use anyhow::{Context, Result};
use colored::*;
use std::fmt::{self, Write};

/// CLI reporter for formatted output
pub struct Reporter {
    format: OutputFormat,
    precision: usize,
}

impl Reporter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            format: config.format,
            precision: config.precision,
        }
    }

    /// Print job results in the configured format
    pub fn report_jobs(&self, reports: &[JobReport]) -> Result<()> {
        print!("{}", self.render_jobs(reports)?);
        Ok(())
    }

    /// Render job results in the configured format
    pub fn render_jobs(&self, reports: &[JobReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(reports).context("Failed to serialize results")?;
                Ok(format!("{}\n", json))
            }
            OutputFormat::Table => {
                let mut out = String::new();
                for report in reports {
                    self.render_table(&mut out, report)
                        .with_context(|| format!("Failed to format job '{}'", report.name))?;
                }
                Ok(out)
            }
        }
    }

    fn render_table(&self, out: &mut String, report: &JobReport) -> fmt::Result {
        let p = self.precision;
        let output = &report.output;
        writeln!(out, "\n{}", "━".repeat(60).bright_black())?;
        writeln!(
            out,
            "{} {} {}",
            "Job:".bold(),
            report.name.cyan(),
            format!("({})", report.kind).bright_black()
        )?;
        writeln!(out, "{}", "━".repeat(60).bright_black())?;

        match output {
            JobOutput::Intervals(intervals) => {
                for (axis, interval) in Axis::ALL.iter().zip(intervals) {
                    writeln!(
                        out,
                        "  {} [{:.p$}, {:.p$}]  {} {:.p$}",
                        format!("{}:", axis).bright_black(),
                        interval.min(),
                        interval.max(),
                        "size".bright_black(),
                        interval.size(),
                    )?;
                }
            }
            JobOutput::Points(points) => {
                writeln!(
                    out,
                    "  {:>5} {:>14} {:>14}",
                    "#".bright_black(),
                    "x".bold(),
                    "y".bold()
                )?;
                for (i, point) in points.iter().enumerate() {
                    writeln!(out, "  {:>5} {:>14.p$} {:>14.p$}", i, point.x, point.y)?;
                }
            }
            JobOutput::Tiles(tiles) => {
                writeln!(
                    out,
                    "  {:>5} {:>12} {:>12} {:>12} {:>12}",
                    "#".bright_black(),
                    "min_x".bold(),
                    "max_x".bold(),
                    "min_y".bold(),
                    "max_y".bold()
                )?;
                for (i, tile) in tiles.iter().enumerate() {
                    writeln!(
                        out,
                        "  {:>5} {:>12.p$} {:>12.p$} {:>12.p$} {:>12.p$}",
                        i,
                        tile.min_x(),
                        tile.max_x(),
                        tile.min_y(),
                        tile.max_y()
                    )?;
                }
            }
        }

        let count = output.len().to_string();
        if output.is_empty() {
            writeln!(out, "  {} {}", "Items:".bright_black(), count.yellow())?;
        } else {
            writeln!(out, "  {} {}", "Items:".bright_black(), count.green())?;
        }
        Ok(())
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::{Interval1D, Interval2D};
    use nalgebra::Point2;

    fn reporter(format: OutputFormat, precision: usize) -> Reporter {
        Reporter::new(&OutputConfig { format, precision })
    }

    #[test]
    fn test_json_output_parses_back() {
        let reports = vec![JobReport {
            name: "corners".to_string(),
            kind: "rect",
            output: JobOutput::Points(vec![Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)]),
        }];
        let json = reporter(OutputFormat::Json, 4).render_jobs(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "corners");
        assert_eq!(value[0]["output"]["points"][1][1], 1.0);
    }

    #[test]
    fn test_table_uses_precision() {
        colored::control::set_override(false);
        let reports = vec![
            JobReport {
                name: "dims".to_string(),
                kind: "dims",
                output: JobOutput::Intervals(vec![Interval1D::new(-1.0, 1.0)]),
            },
            JobReport {
                name: "tiles".to_string(),
                kind: "stretch",
                output: JobOutput::Tiles(vec![Interval2D::new(0.0, 2.5, 0.0, 1.0)]),
            },
        ];
        let table = reporter(OutputFormat::Table, 2).render_jobs(&reports).unwrap();
        assert!(table.contains("[-1.00, 1.00]"));
        assert!(table.contains("2.50"));
        assert!(table.contains("Items: 1"));
        assert!(table.contains("Job: tiles (stretch)"));
    }

    #[test]
    fn test_table_reports_empty_output() {
        colored::control::set_override(false);
        let reports = vec![JobReport {
            name: "none".to_string(),
            kind: "distribute",
            output: JobOutput::Points(Vec::new()),
        }];
        let table = reporter(OutputFormat::Table, 3).render_jobs(&reports).unwrap();
        assert!(table.contains("Job: none (distribute)"));
        assert!(table.contains("Items: 0"));
    }
}
