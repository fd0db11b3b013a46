//! Numeric helpers used when initializing networks.

use std::convert::TryFrom;

use rand::Rng;

/// Returns a uniformly distributed value in `[0, 1)` from the thread-local generator.
pub fn rnd() -> f64 {
    rnd_with(&mut rand::thread_rng())
}

/// Returns a uniformly distributed value in `[0, 1)` from `rng`.
pub fn rnd_with<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// Returns `n!`, or `None` if it does not fit in a `u64` (`n > 20`).
pub fn factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1u64, |product, i| product.checked_mul(i))
}

/// Returns the binomial coefficient `n` choose `k`, or `None` if `k > n` or the result does not
/// fit in a `u64`.
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return None;
    }

    // C(n, k) == C(n, n - k)
    let k = k.min(n - k);

    // Each partial product is C(n, i + 1), so the division is always exact
    (0..k).try_fold(1u64, |c, i| {
        let next = u128::from(c) * u128::from(n - i) / u128::from(i + 1);
        u64::try_from(next).ok()
    })
}
