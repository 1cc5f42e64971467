//! The Laplace mechanism.
//! Every statistic the induction algorithm reads from the data
//! passes through [`laplace`] before it is compared or ranked.
use rand::Rng;
use rand_distr::Open01;


/// Draw one sample from a zero-centered Laplace distribution
/// with the given scale, by inverting the CDF.
/// Adding `laplace(rng, 1.0 / eps)` to a count of sensitivity 1
/// makes the released count `eps`-differentially private.
///
/// The scale must be positive. An infinite scale
/// (a zero budget slice, reachable from `a_proportion` at an extreme)
/// yields infinite draws rather than a panic,
/// which downstream comparisons absorb.
#[inline]
pub fn laplace<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> f64 {
    debug_assert!(!scale.is_nan() && scale > 0.0);

    // `Open01` excludes both endpoints so the log argument stays in (0, 1].
    let u: f64 = rng.sample::<f64, _>(Open01) - 0.5;
    -scale * u.signum() * (1.0 - 2.0 * u.abs()).ln()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;


    #[test]
    fn laplace_draws_are_finite_and_centered() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10_000;
        let scale = 2.0;

        let sum = (0..n)
            .map(|_| {
                let z = laplace(&mut rng, scale);
                assert!(z.is_finite());
                z
            })
            .sum::<f64>();

        let mean = sum / n as f64;
        // Standard deviation of the mean is scale * sqrt(2 / n) ~ 0.028.
        assert!(mean.abs() < 0.15, "sample mean too far from 0: {mean}");
    }


    #[test]
    fn laplace_spread_follows_the_scale() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 10_000;

        let spread = |rng: &mut StdRng, scale: f64| {
            (0..n).map(|_| laplace(rng, scale).abs()).sum::<f64>() / n as f64
        };

        let tight = spread(&mut rng, 0.01);
        let loose = spread(&mut rng, 10.0);
        assert!(tight < loose);
    }
}
