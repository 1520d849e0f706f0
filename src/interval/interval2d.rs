// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Axis-aligned 2D interval, used for sketch rectangles and placed tiles

use super::Interval1D;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned rectangle `[min_x, max_x] × [min_y, max_y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval2D {
    pub x: Interval1D,
    pub y: Interval1D,
}

impl Interval2D {
    /// Create from raw bounds; each axis is normalized independently
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self {
            x: Interval1D::new(x1, x2),
            y: Interval1D::new(y1, y2),
        }
    }

    pub fn from_extents(x: Interval1D, y: Interval1D) -> Self {
        Self { x, y }
    }

    pub fn from_tuples(x: (f64, f64), y: (f64, f64)) -> Self {
        Self::from_extents(x.into(), y.into())
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

    pub fn size_x(&self) -> f64 {
        self.x.size()
    }

    pub fn size_y(&self) -> f64 {
        self.y.size()
    }

    pub fn extent_x(&self) -> Interval1D {
        self.x
    }

    pub fn extent_y(&self) -> Interval1D {
        self.y
    }

    pub fn center_x(&self) -> f64 {
        self.x.center()
    }

    pub fn center_y(&self) -> f64 {
        self.y.center()
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.center_x(), self.center_y())
    }

    pub fn min_corner(&self) -> Point2<f64> {
        Point2::new(self.min_x(), self.min_y())
    }

    pub fn max_corner(&self) -> Point2<f64> {
        Point2::new(self.max_x(), self.max_y())
    }

    pub fn tuple_xy(&self) -> ((f64, f64), (f64, f64)) {
        (self.x.tuple(), self.y.tuple())
    }

    /// The four corners, clockwise starting at the min corner:
    /// `(min_x, min_y), (min_x, max_y), (max_x, max_y), (max_x, min_y)`
    pub fn corners(&self) -> [Point2<f64>; 4] {
        [
            Point2::new(self.min_x(), self.min_y()),
            Point2::new(self.min_x(), self.max_y()),
            Point2::new(self.max_x(), self.max_y()),
            Point2::new(self.max_x(), self.min_y()),
        ]
    }

    pub fn area(&self) -> f64 {
        self.size_x() * self.size_y()
    }

    pub fn contains(&self, point: &Point2<f64>) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    pub fn expand(&self, amount: f64) -> Self {
        Self::from_extents(self.x.expand(amount), self.y.expand(amount))
    }

    pub fn expand_x(&self, amount: f64) -> Self {
        Self::from_extents(self.x.expand(amount), self.y)
    }

    pub fn expand_y(&self, amount: f64) -> Self {
        Self::from_extents(self.x, self.y.expand(amount))
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

    pub fn translate(&self, offset: &Vector2<f64>) -> Self {
        Self::from_extents(self.x.translate(offset.x), self.y.translate(offset.y))
    }

    /// Check if two rectangles are approximately equal within tolerance
    pub fn approx_eq(&self, other: &Interval2D, tolerance: f64) -> bool {
        self.x.approx_eq(&other.x, tolerance) && self.y.approx_eq(&other.y, tolerance)
    }
}

impl fmt::Display for Interval2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval2d_properties() {
        let rect = Interval2D::new(1.0, 3.0, 4.0, 5.0);
        assert_eq!(rect.min_corner(), Point2::new(1.0, 4.0));
        assert_eq!(rect.max_corner(), Point2::new(3.0, 5.0));
        assert_eq!(rect.size_x(), 2.0);
        assert_eq!(rect.size_y(), 1.0);
        assert_eq!(rect.extent_x(), Interval1D::new(1.0, 3.0));
        assert_eq!(rect.extent_y(), Interval1D::new(4.0, 5.0));
        assert_eq!(rect.center(), Point2::new(2.0, 4.5));
        assert_eq!(rect.tuple_xy(), ((1.0, 3.0), (4.0, 5.0)));
    }

    #[test]
    fn test_from_tuples_normalizes_each_axis() {
        let rect = Interval2D::from_tuples((3.0, 1.0), (4.0, 5.0));
        assert_eq!(rect, Interval2D::new(1.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn test_corners_are_clockwise() {
        let corners = Interval2D::new(0.0, 2.0, 0.0, 1.0).corners();
        assert_eq!(
            corners,
            [
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(2.0, 1.0),
                Point2::new(2.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_per_axis_expand_and_shrink() {
        let rect = Interval2D::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.expand(1.0), Interval2D::new(9.0, 21.0, 29.0, 41.0));
        assert_eq!(rect.expand_x(1.0), Interval2D::new(9.0, 21.0, 30.0, 40.0));
        assert_eq!(rect.expand_y(1.0), Interval2D::new(10.0, 20.0, 29.0, 41.0));
        assert_eq!(rect.shrink(1.0), Interval2D::new(11.0, 19.0, 31.0, 39.0));
        assert_eq!(rect.shrink_x(1.0), Interval2D::new(11.0, 19.0, 30.0, 40.0));
        assert_eq!(rect.shrink_y(1.0), Interval2D::new(10.0, 20.0, 31.0, 39.0));
    }

    #[test]
    fn test_translate() {
        let rect = Interval2D::new(10.0, 20.0, 30.0, 40.0).translate(&Vector2::new(1.0, 2.0));
        assert_eq!(rect, Interval2D::new(11.0, 21.0, 32.0, 42.0));
    }

    #[test]
    fn test_contains_and_area() {
        let rect = Interval2D::new(-1.0, 1.0, -2.0, 2.0);
        assert!(rect.contains(&Point2::new(0.0, 2.0)));
        assert!(!rect.contains(&Point2::new(1.5, 0.0)));
        assert_eq!(rect.area(), 8.0);
    }
}
