// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stretched tiles that exactly fill a rectangle
//!
//! Here the tile size is the unknown: a count is chosen per axis (given
//! directly, or derived from tile size bounds) and the tile size is stretched
//! so that `count` tiles plus `count - 1` gaps span the region exactly.

use super::{checked_count, count_from};
use super::distribute::{pattern_distribute, DistributePattern, ResultPos};
use crate::dimension::{resolve_dimensions_2d, Axis, CenterSpec, DimensionSpec};
use crate::error::{LayoutError, Result};
use crate::interval::{Interval1D, Interval2D};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters of a stretch distribution.
///
/// Per axis, an explicit count wins and is never checked against the size
/// bounds. Otherwise `max_tile_size_*` yields the fewest tiles no larger than
/// it and `min_tile_size_*` alone yields the most tiles no smaller than it. A
/// region smaller than `min_tile_size_*` gets no tiles at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StretchPattern {
    pub size_x: DimensionSpec,
    pub size_y: DimensionSpec,
    #[serde(default)]
    pub count_x: Option<usize>,
    #[serde(default)]
    pub count_y: Option<usize>,
    #[serde(default)]
    pub min_tile_size_x: Option<f64>,
    #[serde(default)]
    pub max_tile_size_x: Option<f64>,
    #[serde(default)]
    pub min_tile_size_y: Option<f64>,
    #[serde(default)]
    pub max_tile_size_y: Option<f64>,
    #[serde(default)]
    pub spacing_x: f64,
    #[serde(default)]
    pub spacing_y: f64,
    #[serde(default)]
    pub center: CenterSpec,
}

impl StretchPattern {
    pub fn new(size_x: impl Into<DimensionSpec>, size_y: impl Into<DimensionSpec>) -> Self {
        Self {
            size_x: size_x.into(),
            size_y: size_y.into(),
            count_x: None,
            count_y: None,
            min_tile_size_x: None,
            max_tile_size_x: None,
            min_tile_size_y: None,
            max_tile_size_y: None,
            spacing_x: 0.0,
            spacing_y: 0.0,
            center: CenterSpec::default(),
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

    pub fn min_tile_size_x(mut self, size: f64) -> Self {
        self.min_tile_size_x = Some(size);
        self
    }

    pub fn max_tile_size_x(mut self, size: f64) -> Self {
        self.max_tile_size_x = Some(size);
        self
    }

    pub fn min_tile_size_y(mut self, size: f64) -> Self {
        self.min_tile_size_y = Some(size);
        self
    }

    pub fn max_tile_size_y(mut self, size: f64) -> Self {
        self.max_tile_size_y = Some(size);
        self
    }

    pub fn spacing(mut self, spacing_x: f64, spacing_y: f64) -> Self {
        self.spacing_x = spacing_x;
        self.spacing_y = spacing_y;
        self
    }

    pub fn center(mut self, center: impl Into<CenterSpec>) -> Self {
        self.center = center.into();
        self
    }

    pub fn tiles(&self) -> Result<Vec<Interval2D>> {
        pattern_distribute_stretch(self)
    }
}

/// Count and stretched size of the tiles on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisFill {
    count: usize,
    tile_size: f64,
}

impl AxisFill {
    const EMPTY: AxisFill = AxisFill {
        count: 0,
        tile_size: 0.0,
    };

    fn stretched(count: usize, extent: f64, spacing: f64) -> Self {
        if count == 0 {
            return Self::EMPTY;
        }
        AxisFill {
            count,
            tile_size: (spacing + extent) / count as f64 - spacing,
        }
    }

    /// Stretched fill for a count derived from tile size bounds. A region
    /// with no room for a positive tile gets no tiles.
    fn inferred(count: usize, extent: f64, spacing: f64) -> Self {
        let fill = Self::stretched(count, extent, spacing);
        if extent <= 0.0 || fill.tile_size <= 0.0 {
            Self::EMPTY
        } else {
            fill
        }
    }
}

/// Generate the stretched tiles, x-major. Empty when either axis gets no tiles.
///
/// The X axis is settled first: when no tile fits on X the result is empty
/// without consulting the Y parameters.
pub fn pattern_distribute_stretch(pattern: &StretchPattern) -> Result<Vec<Interval2D>> {
    let region = resolve_dimensions_2d(pattern.size_x, pattern.size_y, &pattern.center)?;
    let fill_x = fill_axis(
        Axis::X,
        region.x,
        pattern.count_x,
        pattern.min_tile_size_x,
        pattern.max_tile_size_x,
        pattern.spacing_x,
    )?;
    if fill_x.count == 0 {
        debug!(?fill_x, "stretch pattern: no tiles fit on x");
        return Ok(Vec::new());
    }
    let fill_y = fill_axis(
        Axis::Y,
        region.y,
        pattern.count_y,
        pattern.min_tile_size_y,
        pattern.max_tile_size_y,
        pattern.spacing_y,
    )?;
    debug!(?fill_x, ?fill_y, "stretch pattern");
    if fill_y.count == 0 {
        return Ok(Vec::new());
    }

    let origins = pattern_distribute(&DistributePattern {
        size_x: pattern.size_x,
        size_y: pattern.size_y,
        tile_size_x: fill_x.tile_size,
        tile_size_y: fill_y.tile_size,
        count_x: Some(fill_x.count),
        count_y: Some(fill_y.count),
        center: pattern.center.clone(),
        result_pos: ResultPos::Origin,
        min_spacing_x: 0.0,
        min_spacing_y: 0.0,
    })?;

    Ok(origins
        .into_iter()
        .map(|origin| {
            Interval2D::new(
                origin.x,
                origin.x + fill_x.tile_size,
                origin.y,
                origin.y + fill_y.tile_size,
            )
        })
        .collect())
}

fn fill_axis(
    axis: Axis,
    extent: Interval1D,
    count: Option<usize>,
    min_tile_size: Option<f64>,
    max_tile_size: Option<f64>,
    spacing: f64,
) -> Result<AxisFill> {
    let extent = extent.size();
    if let Some(count) = count {
        let count = checked_count(axis, count)?;
        return Ok(AxisFill::stretched(count, extent, spacing));
    }
    match (min_tile_size, max_tile_size) {
        (None, None) => Err(LayoutError::StretchUnconstrained { axis }),
        (Some(min), _) if extent < min => Ok(AxisFill::EMPTY),
        // fewest tiles that stay at or below the maximum
        (_, Some(max)) => {
            let count = count_from(axis, ((extent + spacing) / (max + spacing)).ceil())?;
            Ok(AxisFill::inferred(count, extent, spacing))
        }
        // most tiles that stay at or above the minimum
        (Some(min), None) => {
            let count = count_from(axis, ((extent + spacing) / (min + spacing)).floor())?;
            Ok(AxisFill::inferred(count, extent, spacing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_explicit_count_fills_exactly() {
        let tiles = StretchPattern::new(6.0, 4.0).count(2, 1).tiles().unwrap();
        assert_eq!(
            tiles,
            vec![
                Interval2D::new(-3.0, 0.0, -2.0, 2.0),
                Interval2D::new(0.0, 3.0, -2.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_region_below_minimum_is_empty() {
        let tiles = StretchPattern::new(2.0, 2.0)
            .min_tile_size_x(3.0)
            .max_tile_size_x(5.0)
            .count_y(1)
            .tiles()
            .unwrap();
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_empty_x_does_not_need_y_constraints() {
        let tiles = StretchPattern::new(2.0, 2.0)
            .min_tile_size_x(3.0)
            .max_tile_size_x(5.0)
            .tiles()
            .unwrap();
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_max_tile_size_minimizes_count() {
        // ceil(10 / 3) = 4 tiles of 2.5
        let tiles = StretchPattern::new(10.0, 1.0)
            .max_tile_size_x(3.0)
            .count_y(1)
            .center(false)
            .tiles()
            .unwrap();
        assert_eq!(tiles.len(), 4);
        for (k, tile) in tiles.iter().enumerate() {
            assert_relative_eq!(tile.size_x(), 2.5, epsilon = 1e-12);
            assert_relative_eq!(tile.min_x(), 2.5 * k as f64, epsilon = 1e-12);
            assert!(tile.size_x() <= 3.0);
        }
    }

    #[test]
    fn test_min_tile_size_maximizes_count() {
        // floor(10 / 3) = 3 tiles of 3.33
        let tiles = StretchPattern::new(10.0, 1.0)
            .min_tile_size_x(3.0)
            .count_y(1)
            .center(false)
            .tiles()
            .unwrap();
        assert_eq!(tiles.len(), 3);
        for tile in &tiles {
            assert_relative_eq!(tile.size_x(), 10.0 / 3.0, epsilon = 1e-12);
            assert!(tile.size_x() >= 3.0);
        }
        assert_relative_eq!(tiles[2].max_x(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_min_and_max_prefer_fewest_tiles() {
        let tiles = StretchPattern::new(10.0, 1.0)
            .min_tile_size_x(1.0)
            .max_tile_size_x(4.0)
            .count_y(1)
            .center(false)
            .tiles()
            .unwrap();
        assert_eq!(tiles.len(), 3);
    }

    #[test]
    fn test_spacing_leaves_gaps() {
        // (10 + 1) / 3 - 1 = 8/3 per tile
        let tiles = StretchPattern::new(10.0, 4.0)
            .count(3, 1)
            .spacing(1.0, 0.0)
            .center(false)
            .tiles()
            .unwrap();
        let expected = [
            Interval2D::new(0.0, 8.0 / 3.0, 0.0, 4.0),
            Interval2D::new(11.0 / 3.0, 19.0 / 3.0, 0.0, 4.0),
            Interval2D::new(22.0 / 3.0, 10.0, 0.0, 4.0),
        ];
        assert_eq!(tiles.len(), expected.len());
        for (tile, expected) in tiles.iter().zip(&expected) {
            assert!(tile.approx_eq(expected, 1e-9), "{} != {}", tile, expected);
        }
    }

    #[test]
    fn test_zero_extent_is_empty_with_spacing() {
        let tiles = StretchPattern::new(0.0, 4.0)
            .max_tile_size_x(5.0)
            .count_y(1)
            .spacing(1.0, 0.0)
            .tiles();
        assert_eq!(tiles, Ok(vec![]));

        let tiles = StretchPattern::new(4.0, 0.0)
            .count_x(2)
            .min_tile_size_y(0.0)
            .spacing(0.0, 2.0)
            .tiles();
        assert_eq!(tiles, Ok(vec![]));
    }

    #[test]
    fn test_huge_region_is_rejected() {
        let err = StretchPattern::new(1e30, 1.0)
            .max_tile_size_x(1.0)
            .count_y(1)
            .tiles();
        assert!(matches!(
            err,
            Err(LayoutError::CountTooLarge { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_explicit_count_skips_bounds() {
        let tiles = StretchPattern::new(4.0, 1.0)
            .count(4, 1)
            .min_tile_size_x(3.0)
            .tiles()
            .unwrap();
        assert_eq!(tiles.len(), 4);
        assert_relative_eq!(tiles[0].size_x(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let tiles = StretchPattern::new(4.0, 4.0).count(0, 2).tiles().unwrap();
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_unconstrained_axis_is_rejected() {
        assert_eq!(
            StretchPattern::new(4.0, 4.0).count_y(2).tiles(),
            Err(LayoutError::StretchUnconstrained { axis: Axis::X })
        );
        assert_eq!(
            StretchPattern::new(4.0, 4.0).count_x(2).tiles(),
            Err(LayoutError::StretchUnconstrained { axis: Axis::Y })
        );
    }

    #[test]
    fn test_spacing_wider_than_tiles_is_rejected() {
        // (1 + 2) / 2 - 2 < 0
        let err = StretchPattern::new(1.0, 1.0)
            .count(2, 1)
            .spacing(2.0, 0.0)
            .tiles()
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidTileSize { axis: Axis::X, .. }));
    }
}
