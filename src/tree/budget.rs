//! Defines the per-layer privacy-budget policies.
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::PrivTreeError;


/// Per-layer privacy-budget policy.
/// A policy is a pure function mapping
/// `(m, n, d)` to the fraction of the total budget `epsilon`
/// spent by every recursive call at depth `n`,
/// where `m > 1` is the scaling factor,
/// the root is at depth `n = 0`,
/// and `d = max_depth + 1` is the total layer count.
///
/// Each policy is normalized in closed form so that the fractions over
/// `n = 0..d` sum to `1`. Calls at the same depth operate on mutually
/// exclusive partitions, so they compose in parallel for free; only the
/// sequence of depths consumes budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerPolicy {
    /// Uniform allocation, `1/d` per layer.
    EvenSplit,
    /// Geometric allocation `(m-1) m^n / (m^d - 1)`.
    /// Deeper layers get more budget,
    /// on the calibration intent that they query smaller partitions.
    BoundedExponential,
    /// The mirror image of [`LayerPolicy::BoundedExponential`]:
    /// budget shrinks with depth.
    ReversedBoundedExponential,
}


impl LayerPolicy {
    /// The fraction of the total budget assigned to depth `n`
    /// out of `d` layers, with scaling factor `m`.
    ///
    /// Requires `m > 1` and `d >= 1`;
    /// `m == 1` divides by zero in the exponential policies
    /// and is rejected by configuration validation.
    #[inline]
    pub fn fraction(&self, m: f64, n: usize, d: usize) -> f64 {
        match self {
            Self::EvenSplit => 1.0 / d as f64,
            Self::BoundedExponential => {
                (m - 1.0) * m.powi(n as i32) / (m.powi(d as i32) - 1.0)
            },
            Self::ReversedBoundedExponential => {
                let n = d - n - 1;
                (m - 1.0) * m.powi(n as i32) / (m.powi(d as i32) - 1.0)
            },
        }
    }
}


impl fmt::Display for LayerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EvenSplit => "evenSplit",
            Self::BoundedExponential => "boundedExponential",
            Self::ReversedBoundedExponential => "reversedBoundedExponential",
        };

        write!(f, "{name}")
    }
}


impl FromStr for LayerPolicy {
    type Err = PrivTreeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "evenSplit" => Ok(Self::EvenSplit),
            "boundedExponential" => Ok(Self::BoundedExponential),
            "reversedBoundedExponential" => Ok(Self::ReversedBoundedExponential),
            other => Err(PrivTreeError::UnknownLayerPolicy(other.to_string())),
        }
    }
}
