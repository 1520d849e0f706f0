// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyframe Layout
//!
//! Dimension resolution and 2D layout patterns for sketch-based CAD scripts.
//! Sizes or explicit ranges are resolved into intervals, optionally centered
//! per axis, and rectangles are filled with point grids, evenly distributed
//! tiles or stretched tiles.

pub mod cli;
pub mod dimension;
pub mod error;
pub mod interval;
pub mod pattern;

pub use dimension::{
    resolve_center, resolve_dimension, resolve_dimensions, resolve_dimensions_2d,
    resolve_dimensions_3d, Axis, CenterFlags, CenterSpec, DimensionSpec, Dimensionality,
};
pub use error::{LayoutError, Result};
pub use interval::{Interval1D, Interval2D, Interval3D};
pub use pattern::{
    pattern_distribute, pattern_distribute_stretch, pattern_grid, pattern_rect,
    DistributePattern, GridPattern, ResultPos, StretchPattern,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_layout() {
        let corners = pattern_rect(10.0, 4.0, &CenterSpec::default()).unwrap();
        assert_eq!(corners.len(), 4);

        let points = GridPattern::new(2, 2).spacing(1.0, 1.0).points().unwrap();
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_value_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Interval1D>();
        assert_send_sync::<Interval2D>();
        assert_send_sync::<Interval3D>();
        assert_send_sync::<CenterSpec>();
        assert_send_sync::<GridPattern>();
        assert_send_sync::<DistributePattern>();
        assert_send_sync::<StretchPattern>();
        assert_send_sync::<LayoutError>();
    }
}
