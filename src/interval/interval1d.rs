// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed interval on a single axis

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed interval `[min, max]` with `min <= max`.
///
/// Serialized as a two-element array. Deserialization goes through
/// [`Interval1D::new`], so reversed input is normalized there as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Interval1D {
    min: f64,
    max: f64,
}

impl Interval1D {
    /// Create an interval from two bounds in either order
    pub fn new(a: f64, b: f64) -> Self {
        if a > b {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    pub fn from_tuple(extent: (f64, f64)) -> Self {
        Self::new(extent.0, extent.1)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Inclusive containment check
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Grow both ends outward by `amount`
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(self.min - amount, self.max + amount)
    }

    /// Pull both ends inward by `amount`
    pub fn shrink(&self, amount: f64) -> Self {
        self.expand(-amount)
    }

    pub fn translate(&self, offset: f64) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Check if two intervals are approximately equal within tolerance
    pub fn approx_eq(&self, other: &Interval1D, tolerance: f64) -> bool {
        (self.min - other.min).abs() < tolerance && (self.max - other.max).abs() < tolerance
    }
}

impl From<(f64, f64)> for Interval1D {
    fn from(extent: (f64, f64)) -> Self {
        Self::from_tuple(extent)
    }
}

impl From<Interval1D> for (f64, f64) {
    fn from(interval: Interval1D) -> Self {
        interval.tuple()
    }
}

impl fmt::Display for Interval1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
