// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rectangle outline pattern

use crate::dimension::{resolve_dimensions_2d, CenterSpec, DimensionSpec};
use crate::error::Result;
use nalgebra::Point2;

/// Corners of a rectangle, clockwise from the min corner:
/// `(min_x, min_y), (min_x, max_y), (max_x, max_y), (max_x, min_y)`
pub fn pattern_rect(
    size_x: impl Into<DimensionSpec>,
    size_y: impl Into<DimensionSpec>,
    center: &CenterSpec,
) -> Result<Vec<Point2<f64>>> {
    let rect = resolve_dimensions_2d(size_x.into(), size_y.into(), center)?;
    Ok(rect.corners().to_vec())
}
