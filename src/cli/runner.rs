// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Job runner: evaluates layout jobs and job files

use super::job::{JobFile, JobOutput, JobReport, LayoutJob};
use crate::dimension::resolve_dimensions;
use crate::pattern::{pattern_distribute, pattern_distribute_stretch, pattern_grid, pattern_rect};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Evaluate a single job
pub fn run_job(job: &LayoutJob) -> crate::Result<JobOutput> {
    let output = match job {
        LayoutJob::Dims(dims) => {
            let intervals = resolve_dimensions(dims.specs.iter().copied(), &dims.center)?;
            JobOutput::Intervals(intervals.collect())
        }
        LayoutJob::Rect(rect) => {
            JobOutput::Points(pattern_rect(rect.size_x, rect.size_y, &rect.center)?)
        }
        LayoutJob::Grid(grid) => JobOutput::Points(pattern_grid(grid)?),
        LayoutJob::Distribute(distribute) => JobOutput::Points(pattern_distribute(distribute)?),
        LayoutJob::Stretch(stretch) => JobOutput::Tiles(pattern_distribute_stretch(stretch)?),
    };
    debug!(kind = job.kind(), items = output.len(), "job evaluated");
    Ok(output)
}

/// Read a job file, choosing the parser by extension (`.toml` or `.json`)
pub fn load_job_file(path: impl AsRef<Path>) -> Result<JobFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file: {:?}", path))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let file = match extension.as_deref() {
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("Failed to parse job file: {:?}", path))?,
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse job file: {:?}", path))?,
        _ => bail!("Unsupported job file extension: {:?} (expected .toml or .json)", path),
    };
    Ok(file)
}

/// Evaluate every job of a file in order, stopping at the first failure
pub fn run_job_file(path: impl AsRef<Path>) -> Result<Vec<JobReport>> {
    let file = load_job_file(path.as_ref())?;
    info!(jobs = file.jobs.len(), path = ?path.as_ref(), "running job file");

    file.jobs
        .iter()
        .map(|named| -> Result<JobReport> {
            let output = run_job(&named.job)
                .with_context(|| format!("Job '{}' ({}) failed", named.name, named.job.kind()))?;
            Ok(JobReport {
                name: named.name.clone(),
                kind: named.job.kind(),
                output,
            })
        })
        .collect()
}
