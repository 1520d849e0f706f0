// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Axis identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cartesian axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in coordinate order
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Upper-case letter used in center strings
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Number of axes a center specification is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensionality {
    Two,
    Three,
}

impl Dimensionality {
    pub fn axes(self) -> &'static [Axis] {
        match self {
            Dimensionality::Two => &Axis::ALL[..2],
            Dimensionality::Three => &Axis::ALL[..],
        }
    }

    /// Axis letters accepted in a center string
    pub fn letters(self) -> &'static str {
        match self {
            Dimensionality::Two => "XY",
            Dimensionality::Three => "XYZ",
        }
    }
}
