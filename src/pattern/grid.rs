// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Regular point grid pattern

use super::{checked_count, checked_total};
use crate::dimension::{
    resolve_center, resolve_dimension, Axis, CenterSpec, DimensionSpec, Dimensionality,
};
use crate::error::{LayoutError, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters of a point grid.
///
/// Each axis with more than one point needs exactly one of `spacing_*`
/// (distance between neighbours) or `size_*` (total span, resolved with the
/// axis' center flag). An axis with a single point ignores both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPattern {
    pub count_x: usize,
    pub count_y: usize,
    #[serde(default)]
    pub spacing_x: Option<f64>,
    #[serde(default)]
    pub spacing_y: Option<f64>,
    #[serde(default)]
    pub size_x: Option<DimensionSpec>,
    #[serde(default)]
    pub size_y: Option<DimensionSpec>,
    #[serde(default)]
    pub center: CenterSpec,
}

impl GridPattern {
    pub fn new(count_x: usize, count_y: usize) -> Self {
        Self {
            count_x,
            count_y,
            spacing_x: None,
            spacing_y: None,
            size_x: None,
            size_y: None,
            center: CenterSpec::default(),
        }
    }

    pub fn spacing(self, spacing_x: f64, spacing_y: f64) -> Self {
        self.spacing_x(spacing_x).spacing_y(spacing_y)
    }

    pub fn spacing_x(mut self, spacing: f64) -> Self {
        self.spacing_x = Some(spacing);
        self
    }

    pub fn spacing_y(mut self, spacing: f64) -> Self {
        self.spacing_y = Some(spacing);
        self
    }

    pub fn size(self, size_x: impl Into<DimensionSpec>, size_y: impl Into<DimensionSpec>) -> Self {
        self.size_x(size_x).size_y(size_y)
    }

    pub fn size_x(mut self, size: impl Into<DimensionSpec>) -> Self {
        self.size_x = Some(size.into());
        self
    }

    pub fn size_y(mut self, size: impl Into<DimensionSpec>) -> Self {
        self.size_y = Some(size.into());
        self
    }

    pub fn center(mut self, center: impl Into<CenterSpec>) -> Self {
        self.center = center.into();
        self
    }

    pub fn points(&self) -> Result<Vec<Point2<f64>>> {
        pattern_grid(self)
    }
}

/// Generate the `count_x * count_y` grid points, x-major
pub fn pattern_grid(grid: &GridPattern) -> Result<Vec<Point2<f64>>> {
    if grid.count_x == 0 {
        return Err(LayoutError::InvalidCount { axis: Axis::X });
    }
    if grid.count_y == 0 {
        return Err(LayoutError::InvalidCount { axis: Axis::Y });
    }
    checked_count(Axis::X, grid.count_x)?;
    checked_count(Axis::Y, grid.count_y)?;
    let total = checked_total(grid.count_x, grid.count_y)?;
    let flags = resolve_center(&grid.center, Dimensionality::Two)?;
    let (spacing_x, offset_x) =
        axis_step(Axis::X, grid.count_x, grid.spacing_x, grid.size_x, flags.x())?;
    let (spacing_y, offset_y) =
        axis_step(Axis::Y, grid.count_y, grid.spacing_y, grid.size_y, flags.y())?;
    debug!(
        count_x = grid.count_x,
        count_y = grid.count_y,
        spacing_x,
        spacing_y,
        "grid pattern"
    );

    let mut points = Vec::with_capacity(total);
    for i in 0..grid.count_x {
        for j in 0..grid.count_y {
            points.push(Point2::new(
                i as f64 * spacing_x + offset_x,
                j as f64 * spacing_y + offset_y,
            ));
        }
    }
    Ok(points)
}

/// Spacing and first-point offset on one axis
fn axis_step(
    axis: Axis,
    count: usize,
    spacing: Option<f64>,
    size: Option<DimensionSpec>,
    center: bool,
) -> Result<(f64, f64)> {
    if count == 1 {
        return Ok((0.0, 0.0));
    }
    let gaps = (count - 1) as f64;
    match (spacing, size) {
        (Some(_), Some(_)) => Err(LayoutError::SpacingConflict { axis }),
        (None, None) => Err(LayoutError::SpacingMissing { axis }),
        (None, Some(size)) => {
            let extent = resolve_dimension(size, center);
            Ok((extent.size() / gaps, extent.min()))
        }
        (Some(spacing), None) => {
            let offset = if center { -spacing * gaps / 2.0 } else { 0.0 };
            Ok((spacing, offset))
        }
    }
}
