// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Size-or-range dimension arguments

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dimension as the user writes it.
///
/// Deserializes from a plain number (`10`) or a two-element array
/// (`[-5, 5]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionSpec {
    /// Span of this length, starting at 0 or centered on 0
    Size(f64),
    /// Explicit bounds, taken literally and never centered
    Range(f64, f64),
}

impl From<f64> for DimensionSpec {
    fn from(size: f64) -> Self {
        DimensionSpec::Size(size)
    }
}

impl From<(f64, f64)> for DimensionSpec {
    fn from((lo, hi): (f64, f64)) -> Self {
        DimensionSpec::Range(lo, hi)
    }
}

/// Parses `10` as a size and `-5,5` as a range.
impl FromStr for DimensionSpec {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LayoutError::InvalidDimension(s.to_string());
        match s.split_once(',') {
            Some((lo, hi)) => {
                let lo = lo.trim().parse::<f64>().map_err(|_| invalid())?;
                let hi = hi.trim().parse::<f64>().map_err(|_| invalid())?;
                Ok(DimensionSpec::Range(lo, hi))
            }
            None => s
                .trim()
                .parse::<f64>()
                .map(DimensionSpec::Size)
                .map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for DimensionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionSpec::Size(size) => write!(f, "{}", size),
            DimensionSpec::Range(lo, hi) => write!(f, "{},{}", lo, hi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("10".parse::<DimensionSpec>().unwrap(), DimensionSpec::Size(10.0));
        assert_eq!(
            "-5, 2.5".parse::<DimensionSpec>().unwrap(),
            DimensionSpec::Range(-5.0, 2.5)
        );
        assert!(matches!(
            "ten".parse::<DimensionSpec>(),
            Err(LayoutError::InvalidDimension(_))
        ));
        assert!("1,2,3".parse::<DimensionSpec>().is_err());
    }

    #[test]
    fn test_deserialize_number_or_pair() {
        let specs: Vec<DimensionSpec> = serde_json::from_str("[4, [1.5, -2]]").unwrap();
        assert_eq!(
            specs,
            vec![DimensionSpec::Size(4.0), DimensionSpec::Range(1.5, -2.0)]
        );
    }
}
