// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Axis-aligned 3D interval

use super::{Interval1D, Interval2D};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned box, the resolved extent of a box primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval3D {
    pub x: Interval1D,
    pub y: Interval1D,
    pub z: Interval1D,
}

impl Interval3D {
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64, z1: f64, z2: f64) -> Self {
        Self {
            x: Interval1D::new(x1, x2),
            y: Interval1D::new(y1, y2),
            z: Interval1D::new(z1, z2),
        }
    }

    pub fn from_extents(x: Interval1D, y: Interval1D, z: Interval1D) -> Self {
        Self { x, y, z }
    }

    pub fn from_tuples(x: (f64, f64), y: (f64, f64), z: (f64, f64)) -> Self {
        Self::from_extents(x.into(), y.into(), z.into())
    }

    pub fn min_x(&self) -> f64 {
        self.x.min()
    }

    pub fn max_x(&self) -> f64 {
        self.x.max()
    }

    pub fn min_y(&self) -> f64 {
        self.y.min()
    }

    pub fn max_y(&self) -> f64 {
        self.y.max()
    }

    pub fn min_z(&self) -> f64 {
        self.z.min()
    }

    pub fn max_z(&self) -> f64 {
        self.z.max()
    }

    pub fn size_x(&self) -> f64 {
        self.x.size()
    }

    pub fn size_y(&self) -> f64 {
        self.y.size()
    }

    pub fn size_z(&self) -> f64 {
        self.z.size()
    }

    pub fn size(&self) -> Vector3<f64> {
        Vector3::new(self.size_x(), self.size_y(), self.size_z())
    }

    pub fn volume(&self) -> f64 {
        self.size_x() * self.size_y() * self.size_z()
    }

    pub fn center(&self) -> Point3<f64> {
        Point3::new(self.x.center(), self.y.center(), self.z.center())
    }

    pub fn min_corner(&self) -> Point3<f64> {
        Point3::new(self.min_x(), self.min_y(), self.min_z())
    }

    pub fn max_corner(&self) -> Point3<f64> {
        Point3::new(self.max_x(), self.max_y(), self.max_z())
    }

    pub fn tuple_xyz(&self) -> ((f64, f64), (f64, f64), (f64, f64)) {
        (self.x.tuple(), self.y.tuple(), self.z.tuple())
    }

    /// Footprint on the XY plane
    pub fn xy(&self) -> Interval2D {
        Interval2D::from_extents(self.x, self.y)
    }

    pub fn contains(&self, point: &Point3<f64>) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y) && self.z.contains(point.z)
    }

    pub fn expand(&self, amount: f64) -> Self {
        Self::from_extents(
            self.x.expand(amount),
            self.y.expand(amount),
            self.z.expand(amount),
        )
    }

    pub fn expand_x(&self, amount: f64) -> Self {
        Self::from_extents(self.x.expand(amount), self.y, self.z)
    }

    pub fn expand_y(&self, amount: f64) -> Self {
        Self::from_extents(self.x, self.y.expand(amount), self.z)
    }

    pub fn expand_z(&self, amount: f64) -> Self {
        Self::from_extents(self.x, self.y, self.z.expand(amount))
    }

    pub fn shrink(&self, amount: f64) -> Self {
        self.expand(-amount)
    }

    pub fn shrink_x(&self, amount: f64) -> Self {
        self.expand_x(-amount)
    }

    pub fn shrink_y(&self, amount: f64) -> Self {
        self.expand_y(-amount)
    }

    pub fn shrink_z(&self, amount: f64) -> Self {
        self.expand_z(-amount)
    }

    pub fn translate(&self, offset: &Vector3<f64>) -> Self {
        Self::from_extents(
            self.x.translate(offset.x),
            self.y.translate(offset.y),
            self.z.translate(offset.z),
        )
    }

    /// Check if two boxes are approximately equal within tolerance
    pub fn approx_eq(&self, other: &Interval3D, tolerance: f64) -> bool {
        self.x.approx_eq(&other.x, tolerance)
            && self.y.approx_eq(&other.y, tolerance)
            && self.z.approx_eq(&other.z, tolerance)
    }
}

impl fmt::Display for Interval3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} x {}", self.x, self.y, self.z)
    }
}
