// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Dimension resolution: size or range plus center flag to a concrete interval

use super::{resolve_center, CenterSpec, DimensionSpec, Dimensionality};
use crate::error::Result;
use crate::interval::{Interval1D, Interval2D, Interval3D};

/// Resolve a single dimension.
///
/// A size spans `[0, size]`, or `[-size/2, size/2]` when `center` is set.
/// A range is returned as-is (bounds sorted) and ignores `center`.
pub fn resolve_dimension(spec: DimensionSpec, center: bool) -> Interval1D {
    match spec {
        DimensionSpec::Range(lo, hi) => Interval1D::new(lo, hi),
        DimensionSpec::Size(size) if center => Interval1D::new(-size / 2.0, size / 2.0),
        DimensionSpec::Size(size) => Interval1D::new(0.0, size),
    }
}

/// Resolve up to three dimensions against one center spec.
///
/// Specs are paired with the X, Y and Z flags by position and resolved
/// lazily in input order. Specs beyond the third are ignored.
pub fn resolve_dimensions<I>(
    specs: I,
    center: &CenterSpec,
) -> Result<impl Iterator<Item = Interval1D>>
where
    I: IntoIterator<Item = DimensionSpec>,
{
    let flags = resolve_center(center, Dimensionality::Three)?;
    Ok(specs
        .into_iter()
        .zip(flags.iter(Dimensionality::Three).collect::<Vec<_>>())
        .map(|(spec, flag)| resolve_dimension(spec, flag)))
}

/// Resolve a sketch rectangle; the center spec may only name X and Y
pub fn resolve_dimensions_2d(
    size_x: DimensionSpec,
    size_y: DimensionSpec,
    center: &CenterSpec,
) -> Result<Interval2D> {
    let flags = resolve_center(center, Dimensionality::Two)?;
    Ok(Interval2D::from_extents(
        resolve_dimension(size_x, flags.x()),
        resolve_dimension(size_y, flags.y()),
    ))
}

/// Resolve a box extent
pub fn resolve_dimensions_3d(
    size_x: DimensionSpec,
    size_y: DimensionSpec,
    size_z: DimensionSpec,
    center: &CenterSpec,
) -> Result<Interval3D> {
    let flags = resolve_center(center, Dimensionality::Three)?;
    Ok(Interval3D::from_extents(
        resolve_dimension(size_x, flags.x()),
        resolve_dimension(size_y, flags.y()),
        resolve_dimension(size_z, flags.z()),
    ))
}
