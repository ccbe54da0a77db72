//! Brute-force discrete logarithm for small groups.
//!
//! Given `g`, `y` and `p`, find the smallest `x` in `[1, p-1]` with `g^x mod p == y`.
//!
//! # Complexity
//! O(p) exponentiations, each O(log p) multiplications. This is a linear search on
//! purpose: it only exists to recover keys in toy groups (p below ~10^6) and is
//! hopeless for real parameters.

use crate::error::{Error, Result};
use crate::security::modular::modexp;
use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use rayon::prelude::*;

/// Moduli above this size get a warning; the search would take years.
const LARGE_MODULUS_BITS: u64 = 32;

fn check_modulus(p: &BigUint) -> Result<()> {
    if p.is_zero() {
        return Err(Error::InvalidParameters("modulus must be positive".into()));
    }
    if p.bits() > LARGE_MODULUS_BITS {
        warn!("brute-force discrete log over a {}-bit modulus", p.bits());
    }
    Ok(())
}

/// Find `x` with `g^x mod p == y` by trying `x = 1, 2, ..., p-1` in order.
///
/// Returns the first match, or [`Error::NotFound`] once the range is exhausted.
/// `y` is not reduced, so any `y >= p` is never found.
pub fn solve(y: &BigUint, g: &BigUint, p: &BigUint) -> Result<BigUint> {
    check_modulus(p)?;

    // walk g^1, g^2, ... by one multiplication per step
    let base = g % p;
    let mut power = BigUint::one() % p;
    let mut x = BigUint::one();
    while &x < p {
        power = (&power * &base) % p;
        if &power == y {
            debug!("discrete log found after {} steps", x);
            return Ok(x);
        }
        x += 1u32;
    }

    Err(Error::NotFound {
        target: y.clone(),
        modulus: p.clone(),
    })
}

/// [`solve`] with the candidates split across the rayon thread pool.
///
/// Still O(p) work; `find_first` keeps the answer identical to the sequential
/// search. `p` must fit in a `u64`.
pub fn solve_parallel(y: &BigUint, g: &BigUint, p: &BigUint) -> Result<BigUint> {
    check_modulus(p)?;
    let bound = p
        .to_u64()
        .ok_or_else(|| Error::InvalidParameters("modulus too large for a parallel search".into()))?;

    let found = (1..bound)
        .into_par_iter()
        .map(|x| -> Result<Option<u64>> {
            let power = modexp(g, &BigUint::from(x), p)?;
            Ok((&power == y).then_some(x))
        })
        .find_first(|candidate| !matches!(candidate, Ok(None)));

    match found {
        Some(Ok(Some(x))) => {
            debug!("discrete log found in parallel search");
            Ok(BigUint::from(x))
        }
        Some(Err(err)) => Err(err),
        _ => Err(Error::NotFound {
            target: y.clone(),
            modulus: p.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_solve_toy_group() {
        let x = solve(&big(31_377), &big(21_947), &big(103_687)).unwrap();
        assert_eq!(x, big(602));
        assert_eq!(big(21_947).modpow(&x, &big(103_687)), big(31_377));
    }

    #[test]
    fn test_solve_small_values() {
        // 3 is a primitive root mod 7: 3^1..3^6 = 3, 2, 6, 4, 5, 1
        let expected = [(3u64, 1u64), (2, 2), (6, 3), (4, 4), (5, 5), (1, 6)];
        for (y, x) in expected {
            assert_eq!(solve(&big(y), &big(3), &big(7)).unwrap(), big(x));
        }
    }

    #[test]
    fn test_solve_returns_smallest_exponent() {
        // 2 has order 3 mod 7, so 2^1 = 2^4 = 2
        assert_eq!(solve(&big(2), &big(2), &big(7)).unwrap(), big(1));
        assert_eq!(solve(&big(1), &big(2), &big(7)).unwrap(), big(3));
    }

    #[test]
    fn test_solve_not_found() {
        // 3 is not a power of 2 mod 7
        assert_eq!(
            solve(&big(3), &big(2), &big(7)).unwrap_err(),
            Error::NotFound {
                target: big(3),
                modulus: big(7)
            }
        );
        assert!(solve(&big(0), &big(3), &big(7)).is_err());
    }

    #[test]
    fn test_unreduced_target_not_found() {
        // 31377 + p is congruent to g^602 but no power of g equals it
        let y = big(31_377 + 103_687);
        assert!(matches!(
            solve(&y, &big(21_947), &big(103_687)),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            solve_parallel(&y, &big(21_947), &big(103_687)),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_solve_rejects_zero_modulus() {
        assert!(matches!(
            solve(&big(1), &big(2), &BigUint::zero()),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        for (y, g, p) in [(31_377u64, 21_947u64, 103_687u64), (2, 2, 7), (5, 3, 7)] {
            assert_eq!(
                solve_parallel(&big(y), &big(g), &big(p)).unwrap(),
                solve(&big(y), &big(g), &big(p)).unwrap()
            );
        }
        assert!(matches!(
            solve_parallel(&big(3), &big(2), &big(7)),
            Err(Error::NotFound { .. })
        ));
    }
}
