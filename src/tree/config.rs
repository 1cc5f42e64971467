//! Defines the validated configuration of one private training run.
use std::str::FromStr;
use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::PrivTreeError;
use super::budget::LayerPolicy;


/// A numeric parameter literal.
/// Either a fixed value, or `rand(a, b)` which resolves to one uniform
/// draw in `[a, b]` at configuration-construction time.
/// The draw happens exactly once and the result is frozen,
/// so sweeps are reproducible in distribution, not in exact value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Param {
    /// A fixed value.
    Fixed(f64),
    /// A uniform draw in `[a, b]`, resolved once.
    Uniform(f64, f64),
}


impl Param {
    /// Resolve this parameter to a concrete value.
    #[inline]
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            Self::Fixed(value) => value,
            Self::Uniform(lo, hi) => rng.gen_range(lo..=hi),
        }
    }
}


impl FromStr for Param {
    type Err = PrivTreeError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        static RAND_RE: OnceLock<Regex> = OnceLock::new();
        let re = RAND_RE.get_or_init(|| {
            Regex::new(r"^rand\(([\d.]+),\s*([\d.]+)\)$").unwrap()
        });

        if let Some(caps) = re.captures(literal.trim()) {
            let lo = caps[1].parse::<f64>()
                .map_err(|_| PrivTreeError::MalformedParam(literal.to_string()))?;
            let hi = caps[2].parse::<f64>()
                .map_err(|_| PrivTreeError::MalformedParam(literal.to_string()))?;
            if lo > hi {
                return Err(PrivTreeError::MalformedParam(literal.to_string()));
            }
            return Ok(Self::Uniform(lo, hi));
        }

        literal.trim()
            .parse::<f64>()
            .map(Self::Fixed)
            .map_err(|_| PrivTreeError::MalformedParam(literal.to_string()))
    }
}


/// Validated parameters governing one private training run.
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Id3Config {
    pub(crate) epsilon: f64,
    pub(crate) max_depth: usize,
    pub(crate) m_value: f64,
    pub(crate) a_proportion: f64,
    pub(crate) layer_policy: LayerPolicy,
}


impl Id3Config {
    /// Construct a validated configuration.
    ///
    /// * `epsilon`: total privacy budget for one full tree. Must be `> 0`.
    /// * `max_depth`: deepest split layer. The root is at depth `0`,
    ///   so a tree spans at most `max_depth + 1` layers.
    /// * `m_value`: scaling factor for the exponential layer policies.
    ///   Must be `> 1`.
    /// * `a_proportion`: fraction of each layer's budget spent on the
    ///   noisy row-count feasibility check. Must be in `[0, 1]`.
    /// * `layer_policy`: how the total budget is divided across layers.
    pub fn new(
        epsilon: f64,
        max_depth: usize,
        m_value: f64,
        a_proportion: f64,
        layer_policy: LayerPolicy,
    ) -> Result<Self, PrivTreeError>
    {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(PrivTreeError::NonPositiveEpsilon(epsilon));
        }
        if !m_value.is_finite() || m_value <= 1.0 {
            return Err(PrivTreeError::InvalidMValue(m_value));
        }
        if !(0.0..=1.0).contains(&a_proportion) {
            return Err(PrivTreeError::InvalidAProportion(a_proportion));
        }

        Ok(Self { epsilon, max_depth, m_value, a_proportion, layer_policy, })
    }


    /// Construct a configuration from parameter literals,
    /// resolving any `rand(a, b)` draw with the given generator.
    /// This mirrors the command-line surface of experiment sweeps.
    pub fn from_literals<R: Rng>(
        epsilon: &str,
        max_depth: &str,
        m_value: &str,
        a_proportion: &str,
        layer_policy: &str,
        rng: &mut R,
    ) -> Result<Self, PrivTreeError>
    {
        let epsilon = epsilon.parse::<Param>()?.resolve(rng);
        let max_depth = max_depth.parse::<Param>()?.resolve(rng);
        let m_value = m_value.parse::<Param>()?.resolve(rng);
        let a_proportion = a_proportion.parse::<Param>()?.resolve(rng);
        let layer_policy = layer_policy.parse::<LayerPolicy>()?;

        if max_depth < 0.0 || !max_depth.is_finite() {
            return Err(
                PrivTreeError::MalformedParam(format!("maxDepth = {max_depth}"))
            );
        }

        Self::new(
            epsilon,
            max_depth as usize,
            m_value,
            a_proportion,
            layer_policy,
        )
    }


    /// Total privacy budget for one full tree.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }


    /// Deepest split layer. The root is at depth `0`.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }


    /// Scaling factor of the exponential layer policies.
    #[inline]
    pub fn m_value(&self) -> f64 {
        self.m_value
    }


    /// Fraction of each layer's budget spent on the row-count query.
    #[inline]
    pub fn a_proportion(&self) -> f64 {
        self.a_proportion
    }


    /// The per-layer budget policy.
    #[inline]
    pub fn layer_policy(&self) -> LayerPolicy {
        self.layer_policy
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;


    #[test]
    fn parses_fixed_and_rand_literals() {
        assert_eq!("0.5".parse::<Param>().unwrap(), Param::Fixed(0.5));
        assert_eq!(
            "rand(0.5, 2)".parse::<Param>().unwrap(),
            Param::Uniform(0.5, 2.0),
        );

        assert!("rand(2, 0.5)".parse::<Param>().is_err());
        assert!("rand(a, b)".parse::<Param>().is_err());
        assert!("half".parse::<Param>().is_err());
    }


    #[test]
    fn uniform_draw_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let param = "rand(0.25,0.75)".parse::<Param>().unwrap();
        for _ in 0..100 {
            let v = param.resolve(&mut rng);
            assert!((0.25..=0.75).contains(&v));
        }
    }
}
