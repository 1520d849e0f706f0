// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Even distribution of fixed-size tiles over a rectangle

use super::{checked_count, checked_total, count_from};
use crate::dimension::{resolve_dimensions_2d, Axis, CenterSpec, DimensionSpec};
use crate::error::{LayoutError, Result};
use crate::interval::Interval1D;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which point of a placed tile is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultPos {
    /// Tile center
    #[default]
    Center,
    /// Tile min corner
    Origin,
}

impl FromStr for ResultPos {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "center" => Ok(ResultPos::Center),
            "origin" => Ok(ResultPos::Origin),
            _ => Err(LayoutError::InvalidResultPos(s.to_string())),
        }
    }
}

impl fmt::Display for ResultPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultPos::Center => write!(f, "center"),
            ResultPos::Origin => write!(f, "origin"),
        }
    }
}

/// Parameters for distributing `tile_size_x × tile_size_y` tiles over the
/// region `size_x × size_y`.
///
/// Without an explicit count an axis gets as many tiles as fit when each
/// needs its size plus `min_spacing_*` of clearance. With an explicit count
/// the tiles are spread over the whole extent and `min_spacing_*` is not
/// consulted, so keeping them apart is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributePattern {
    pub size_x: DimensionSpec,
    pub size_y: DimensionSpec,
    pub tile_size_x: f64,
    pub tile_size_y: f64,
    #[serde(default)]
    pub count_x: Option<usize>,
    #[serde(default)]
    pub count_y: Option<usize>,
    #[serde(default)]
    pub center: CenterSpec,
    #[serde(default)]
    pub result_pos: ResultPos,
    #[serde(default)]
    pub min_spacing_x: f64,
    #[serde(default)]
    pub min_spacing_y: f64,
}

impl DistributePattern {
    pub fn new(
        size_x: impl Into<DimensionSpec>,
        size_y: impl Into<DimensionSpec>,
        tile_size_x: f64,
        tile_size_y: f64,
    ) -> Self {
        Self {
            size_x: size_x.into(),
            size_y: size_y.into(),
            tile_size_x,
            tile_size_y,
            count_x: None,
            count_y: None,
            center: CenterSpec::default(),
            result_pos: ResultPos::default(),
            min_spacing_x: 0.0,
            min_spacing_y: 0.0,
        }
    }

    pub fn count(self, count_x: usize, count_y: usize) -> Self {
        self.count_x(count_x).count_y(count_y)
    }

    pub fn count_x(mut self, count: usize) -> Self {
        self.count_x = Some(count);
        self
    }

    pub fn count_y(mut self, count: usize) -> Self {
        self.count_y = Some(count);
        self
    }

    pub fn center(mut self, center: impl Into<CenterSpec>) -> Self {
        self.center = center.into();
        self
    }

    pub fn result_pos(mut self, result_pos: ResultPos) -> Self {
        self.result_pos = result_pos;
        self
    }

    pub fn min_spacing(mut self, min_spacing_x: f64, min_spacing_y: f64) -> Self {
        self.min_spacing_x = min_spacing_x;
        self.min_spacing_y = min_spacing_y;
        self
    }

    pub fn points(&self) -> Result<Vec<Point2<f64>>> {
        pattern_distribute(self)
    }
}

/// Tile positions, x-major. Empty when no tile fits on either axis.
pub fn pattern_distribute(pattern: &DistributePattern) -> Result<Vec<Point2<f64>>> {
    if pattern.tile_size_x <= 0.0 {
        return Err(LayoutError::InvalidTileSize {
            axis: Axis::X,
            size: pattern.tile_size_x,
        });
    }
    if pattern.tile_size_y <= 0.0 {
        return Err(LayoutError::InvalidTileSize {
            axis: Axis::Y,
            size: pattern.tile_size_y,
        });
    }
    let region = resolve_dimensions_2d(pattern.size_x, pattern.size_y, &pattern.center)?;
    let xs = distribute_axis(
        Axis::X,
        region.x,
        pattern.tile_size_x,
        pattern.count_x,
        pattern.min_spacing_x,
        pattern.result_pos,
    )?;
    let ys = distribute_axis(
        Axis::Y,
        region.y,
        pattern.tile_size_y,
        pattern.count_y,
        pattern.min_spacing_y,
        pattern.result_pos,
    )?;
    checked_total(xs.len(), ys.len())?;
    debug!(
        count_x = xs.len(),
        count_y = ys.len(),
        region = %region,
        "distribute pattern"
    );

    Ok(xs
        .iter()
        .flat_map(|&x| ys.iter().map(move |&y| Point2::new(x, y)))
        .collect())
}

/// Tile positions along one axis
fn distribute_axis(
    axis: Axis,
    extent: Interval1D,
    tile_size: f64,
    count: Option<usize>,
    min_spacing: f64,
    result_pos: ResultPos,
) -> Result<Vec<f64>> {
    let count = match count {
        Some(count) => checked_count(axis, count)?,
        None => count_from(
            axis,
            ((extent.size() + min_spacing) / (tile_size + min_spacing)).floor(),
        )?,
    };
    let positions = match count {
        0 => Vec::new(),
        1 => {
            let offset = match result_pos {
                ResultPos::Center => 0.0,
                ResultPos::Origin => -tile_size / 2.0,
            };
            vec![extent.center() + offset]
        }
        _ => {
            let delta = (extent.size() - tile_size) / (count - 1) as f64;
            let offset = match result_pos {
                ResultPos::Center => tile_size / 2.0,
                ResultPos::Origin => 0.0,
            };
            (0..count)
                .map(|k| extent.min() + k as f64 * delta + offset)
                .collect()
        }
    };
    Ok(positions)
}
