// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for dimension resolution and layout patterns

use crate::dimension::Axis;
use thiserror::Error;

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised by the resolvers and pattern generators.
///
/// Every variant is an invalid-argument condition: the inputs were malformed
/// and calling again with the same arguments fails the same way. Inputs that
/// are valid but degenerate (a tile that does not fit, a zero-size region)
/// produce an empty result instead of an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Center string is empty or names an axis outside the allowed set
    #[error("invalid center specification {spec:?}: expected a bool or a combination of {allowed}")]
    InvalidCenter { spec: String, allowed: &'static str },

    /// Grid count below one
    #[error("count_{axis} must be greater than 0")]
    InvalidCount { axis: Axis },

    /// Grid axis given both spacing and size
    #[error("only one of spacing_{axis} or size_{axis} may be specified")]
    SpacingConflict { axis: Axis },

    /// Grid axis with several points but neither spacing nor size
    #[error("either spacing_{axis} or size_{axis} must be specified")]
    SpacingMissing { axis: Axis },

    /// Tile size not strictly positive
    #[error("tile_size_{axis} must be greater than 0, got {size}")]
    InvalidTileSize { axis: Axis, size: f64 },

    /// Stretch axis without count and without tile size bounds
    #[error("either count_{axis} or min_tile_size_{axis}/max_tile_size_{axis} must be specified")]
    StretchUnconstrained { axis: Axis },

    /// More positions on one axis than a pattern will generate
    #[error("count_{axis} exceeds the limit of {limit} positions")]
    CountTooLarge { axis: Axis, limit: usize },

    /// Pattern whose total number of positions exceeds the limit
    #[error("pattern of {count_x} x {count_y} positions exceeds the limit of {limit}")]
    TooManyPositions {
        count_x: usize,
        count_y: usize,
        limit: usize,
    },

    /// Dimension string that is neither a size nor a `lo,hi` range
    #[error("invalid dimension {0:?}: expected a size like `10` or a range like `-5,5`")]
    InvalidDimension(String),

    /// Unknown tile anchor name
    #[error("invalid result position {0:?}: expected `center` or `origin`")]
    InvalidResultPos(String),
}

impl LayoutError {
    /// All layout errors are invalid-argument errors
    pub fn is_invalid_argument(&self) -> bool {
        true
    }

    /// The axis the error refers to, if any
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Self::InvalidCount { axis }
            | Self::SpacingConflict { axis }
            | Self::SpacingMissing { axis }
            | Self::InvalidTileSize { axis, .. }
            | Self::StretchUnconstrained { axis }
            | Self::CountTooLarge { axis, .. } => Some(*axis),
            Self::InvalidCenter { .. }
            | Self::TooManyPositions { .. }
            | Self::InvalidDimension(_)
            | Self::InvalidResultPos(_) => None,
        }
    }
}
