// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Center specifications and their per-axis resolution
//!
//! A center spec is either a bool applying to every axis, or a string of axis
//! letters (`"X"`, `"xz"`, `"XYZ"`, ...) naming the axes to center. Strings are
//! validated at resolution time against the axes of the calling context, so
//! `"Z"` is accepted for a box but rejected for a sketch rectangle.

use super::{Axis, Dimensionality};
use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// User-facing centering argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CenterSpec {
    /// Center on every axis, or on none
    Flag(bool),
    /// Center on the named axes only
    Axes(String),
}

impl CenterSpec {
    pub fn resolve(&self, dims: Dimensionality) -> Result<CenterFlags> {
        resolve_center(self, dims)
    }
}

impl Default for CenterSpec {
    fn default() -> Self {
        CenterSpec::Flag(true)
    }
}

impl From<bool> for CenterSpec {
    fn from(value: bool) -> Self {
        CenterSpec::Flag(value)
    }
}

impl From<&str> for CenterSpec {
    fn from(value: &str) -> Self {
        CenterSpec::Axes(value.to_string())
    }
}

impl From<String> for CenterSpec {
    fn from(value: String) -> Self {
        CenterSpec::Axes(value)
    }
}

/// Parses `true`/`false` as flags and anything else as axis letters.
/// Letter validation happens in [`resolve_center`].
impl FromStr for CenterSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "true" => CenterSpec::Flag(true),
            "false" => CenterSpec::Flag(false),
            _ => CenterSpec::Axes(s.to_string()),
        })
    }
}

/// Per-axis center flags, one bit per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CenterFlags(u8);

impl CenterFlags {
    pub const NONE: CenterFlags = CenterFlags(0);

    fn bit(axis: Axis) -> u8 {
        1 << axis.index()
    }

    /// Flags set on every axis of `dims`
    pub fn all(dims: Dimensionality) -> Self {
        dims.axes()
            .iter()
            .fold(Self::NONE, |flags, &axis| flags.with(axis))
    }

    pub fn with(self, axis: Axis) -> Self {
        CenterFlags(self.0 | Self::bit(axis))
    }

    pub fn get(&self, axis: Axis) -> bool {
        self.0 & Self::bit(axis) != 0
    }

    pub fn x(&self) -> bool {
        self.get(Axis::X)
    }

    pub fn y(&self) -> bool {
        self.get(Axis::Y)
    }

    pub fn z(&self) -> bool {
        self.get(Axis::Z)
    }

    /// Flags of the axes of `dims`, in axis order
    pub fn iter(&self, dims: Dimensionality) -> impl Iterator<Item = bool> + '_ {
        dims.axes().iter().map(move |&axis| self.get(axis))
    }

    pub fn to_vec(&self, dims: Dimensionality) -> Vec<bool> {
        self.iter(dims).collect()
    }
}

/// Resolve a center spec into per-axis flags for a 2D or 3D context.
///
/// Fails with [`LayoutError::InvalidCenter`] when the string is empty or
/// contains anything but the axis letters of `dims` (case-insensitive).
pub fn resolve_center(spec: &CenterSpec, dims: Dimensionality) -> Result<CenterFlags> {
    match spec {
        CenterSpec::Flag(true) => Ok(CenterFlags::all(dims)),
        CenterSpec::Flag(false) => Ok(CenterFlags::NONE),
        CenterSpec::Axes(letters) => {
            let upper = letters.to_ascii_uppercase();
            let allowed = dims.letters();
            if upper.is_empty() || !upper.chars().all(|c| allowed.contains(c)) {
                return Err(LayoutError::InvalidCenter {
                    spec: letters.clone(),
                    allowed,
                });
            }
            Ok(dims
                .axes()
                .iter()
                .filter(|axis| upper.contains(axis.letter()))
                .fold(CenterFlags::NONE, |flags, &axis| flags.with(axis)))
        }
    }
}
