// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Interval module - closed ranges on one, two and three axes

mod interval1d;
mod interval2d;
mod interval3d;

pub use interval1d::Interval1D;
pub use interval2d::Interval2D;
pub use interval3d::Interval3D;
