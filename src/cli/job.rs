// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Layout jobs: one resolver or pattern call described as data

use crate::dimension::{CenterSpec, DimensionSpec};
use crate::interval::{Interval1D, Interval2D};
use crate::pattern::{DistributePattern, GridPattern, StretchPattern};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Resolve up to three dimensions against one center spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimsJob {
    pub specs: Vec<DimensionSpec>,
    #[serde(default)]
    pub center: CenterSpec,
}

/// Corners of a resolved rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectJob {
    pub size_x: DimensionSpec,
    pub size_y: DimensionSpec,
    #[serde(default)]
    pub center: CenterSpec,
}

/// A single layout computation, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutJob {
    Dims(DimsJob),
    Rect(RectJob),
    Grid(GridPattern),
    Distribute(DistributePattern),
    Stretch(StretchPattern),
}

impl LayoutJob {
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutJob::Dims(_) => "dims",
            LayoutJob::Rect(_) => "rect",
            LayoutJob::Grid(_) => "grid",
            LayoutJob::Distribute(_) => "distribute",
            LayoutJob::Stretch(_) => "stretch",
        }
    }
}

/// Job file entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedJob {
    pub name: String,
    #[serde(flatten)]
    pub job: LayoutJob,
}

/// Contents of a TOML or JSON job file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobFile {
    #[serde(default)]
    pub jobs: Vec<NamedJob>,
}

/// Result of a layout job
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobOutput {
    Intervals(Vec<Interval1D>),
    Points(Vec<Point2<f64>>),
    Tiles(Vec<Interval2D>),
}

impl JobOutput {
    pub fn len(&self) -> usize {
        match self {
            JobOutput::Intervals(items) => items.len(),
            JobOutput::Points(items) => items.len(),
            JobOutput::Tiles(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named job together with its output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobReport {
    pub name: String,
    pub kind: &'static str,
    pub output: JobOutput,
}
