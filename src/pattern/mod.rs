// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Pattern module - point and tile layouts over sketch rectangles

mod distribute;
mod grid;
mod rect;
mod stretch;

pub use distribute::{pattern_distribute, DistributePattern, ResultPos};
pub use grid::{pattern_grid, GridPattern};
pub use rect::pattern_rect;
pub use stretch::{pattern_distribute_stretch, StretchPattern};

use crate::dimension::Axis;
use crate::error::{LayoutError, Result};

/// Largest number of positions a pattern generates, per axis and in total
pub const MAX_POSITIONS: usize = 1 << 24;

/// Truncate a floored or ceiled count; NaN and sub-unit values give 0
pub(crate) fn count_from(axis: Axis, value: f64) -> Result<usize> {
    if value.is_nan() || value < 1.0 {
        return Ok(0);
    }
    if value > MAX_POSITIONS as f64 {
        return Err(LayoutError::CountTooLarge {
            axis,
            limit: MAX_POSITIONS,
        });
    }
    Ok(value as usize)
}

pub(crate) fn checked_count(axis: Axis, count: usize) -> Result<usize> {
    if count > MAX_POSITIONS {
        return Err(LayoutError::CountTooLarge {
            axis,
            limit: MAX_POSITIONS,
        });
    }
    Ok(count)
}

pub(crate) fn checked_total(count_x: usize, count_y: usize) -> Result<usize> {
    count_x
        .checked_mul(count_y)
        .filter(|&total| total <= MAX_POSITIONS)
        .ok_or(LayoutError::TooManyPositions {
            count_x,
            count_y,
            limit: MAX_POSITIONS,
        })
}
