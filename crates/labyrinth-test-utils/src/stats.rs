//! Acceptance intervals for binomial trial counts.

/// Two-sided normal-approximation interval for the number of successes
/// in `n` Bernoulli(`p`) trials, at `z` standard deviations.
///
/// Returns `(low, high)` as success counts.
pub fn binomial_interval(n: u64, p: f64, z: f64) -> (f64, f64) {
    let mean = n as f64 * p;
    let sd = (n as f64 * p * (1.0 - p)).sqrt();
    (mean - z * sd, mean + z * sd)
}

/// Whether `successes` lies within [`binomial_interval`].
pub fn binomial_accepts(successes: u64, n: u64, p: f64, z: f64) -> bool {
    let (lo, hi) = binomial_interval(n, p, z);
    let s = successes as f64;
    lo <= s && s <= hi
}
