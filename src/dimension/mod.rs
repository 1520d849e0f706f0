// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Dimension module - center flags and size/range resolution

mod axis;
mod center;
mod resolve;
mod spec;

pub use axis::{Axis, Dimensionality};
pub use center::{resolve_center, CenterFlags, CenterSpec};
pub use resolve::{
    resolve_dimension, resolve_dimensions, resolve_dimensions_2d, resolve_dimensions_3d,
};
pub use spec::DimensionSpec;
