//! Modular arithmetic over arbitrary-precision unsigned integers.
//!
//! Everything else in the crate is built on the three functions here:
//! - [`modexp`]: `base^exponent mod modulus` by square-and-multiply
//! - [`modinv`]: multiplicative inverse through the extended Euclidean algorithm
//! - [`mod_sub`]: `(a - b) mod modulus` without leaving the unsigned domain

use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Modular exponentiation: `base^exponent mod modulus`.
///
/// Exact for operands of any size. `modexp(a, 0, m) == 1` for every `m > 1`.
pub fn modexp(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidParameters("modexp with modulus = 0".into()));
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let bits = exponent.bits();
    for i in 0..bits {
        if exponent.bit(i) {
            result = (&result * &base) % modulus;
        }
        // skip the last squaring, it is never used
        if i + 1 < bits {
            base = (&base * &base) % modulus;
        }
    }
    Ok(result)
}

/// Extended Euclidean algorithm on signed integers.
/// Returns `(gcd, x, y)` with `a*x + b*y = gcd`.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_x = BigInt::one();
    let mut x = BigInt::zero();
    let mut old_y = BigInt::zero();
    let mut y = BigInt::one();

    while !r.is_zero() {
        let (quotient, remainder) = old_r.div_rem(&r);
        old_r = std::mem::replace(&mut r, remainder);

        let next_x = &old_x - &quotient * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &quotient * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }
    (old_r, old_x, old_y)
}

/// Modular multiplicative inverse of `a` modulo `modulus`.
///
/// Returns the unique `b` in `[0, modulus-1]` with `a*b ≡ 1 (mod modulus)`, or
/// [`Error::NoInverse`] when `gcd(a, modulus) != 1`.
pub fn modinv(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let no_inverse = || Error::NoInverse {
        value: a.clone(),
        modulus: modulus.clone(),
    };
    if modulus.is_zero() {
        return Err(no_inverse());
    }
    if modulus.is_one() {
        // every integer is congruent to 0 = 0^-1 modulo 1
        return Ok(BigUint::zero());
    }

    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let reduced = BigInt::from_biguint(Sign::Plus, a % modulus);
    let (gcd, x, _) = extended_gcd(&reduced, &m);
    if !gcd.is_one() {
        return Err(no_inverse());
    }

    // mod_floor keeps the coefficient in [0, m-1] even when x is negative
    x.mod_floor(&m).to_biguint().ok_or_else(no_inverse)
}

/// `(a - b) mod modulus` for unsigned operands.
pub fn mod_sub(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidParameters("mod_sub with modulus = 0".into()));
    }
    let a = a % modulus;
    let b = b % modulus;
    Ok(if a >= b { a - b } else { modulus - (b - a) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_modexp_small() {
        assert_eq!(modexp(&big(4), &big(13), &big(497)).unwrap(), big(445));
        assert_eq!(modexp(&big(2), &big(10), &big(1000)).unwrap(), big(24));
    }

    #[test]
    fn test_modexp_zero_exponent() {
        for m in [2u64, 7, 1571, 103687] {
            assert_eq!(modexp(&big(12345), &BigUint::zero(), &big(m)).unwrap(), big(1));
        }
    }

    #[test]
    fn test_modexp_matches_modpow() {
        let base = BigUint::parse_bytes(b"d29d5121b0423c2769ab21843e5a3240", 16).unwrap();
        let exponent = BigUint::parse_bytes(b"e950511eab424b9a19a2aeb4e159b784", 16).unwrap();
        let modulus = BigUint::parse_bytes(b"e0a67598cd1b763bc98c8abb333e5ddb", 16).unwrap();
        assert_eq!(
            modexp(&base, &exponent, &modulus).unwrap(),
            base.modpow(&exponent, &modulus)
        );
    }

    #[test]
    fn test_modexp_rejects_zero_modulus() {
        assert!(matches!(
            modexp(&big(3), &big(3), &BigUint::zero()),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_modinv_known_values() {
        assert_eq!(modinv(&big(3), &big(7)).unwrap(), big(5));
        assert_eq!(modinv(&big(17), &big(3120)).unwrap(), big(2753));
    }

    #[test]
    fn test_modinv_product_is_one() {
        let m = big(1571);
        for a in [1u64, 2, 602, 1305, 1570, 3000] {
            let inv = modinv(&big(a), &m).unwrap();
            assert!(inv < m);
            assert_eq!((big(a) * inv) % &m, big(1));
        }
    }

    #[test]
    fn test_modinv_not_coprime() {
        let err = modinv(&big(6), &big(9)).unwrap_err();
        assert_eq!(
            err,
            Error::NoInverse {
                value: big(6),
                modulus: big(9)
            }
        );
        assert!(modinv(&BigUint::zero(), &big(1571)).is_err());
    }

    #[test]
    fn test_mod_sub_wraps() {
        assert_eq!(mod_sub(&big(3), &big(5), &big(7)).unwrap(), big(5));
        assert_eq!(mod_sub(&big(5), &big(3), &big(7)).unwrap(), big(2));
        assert_eq!(mod_sub(&big(20), &big(6), &big(7)).unwrap(), big(0));
    }

    #[test]
    fn test_mod_sub_rejects_zero_modulus() {
        assert!(matches!(
            mod_sub(&big(3), &big(5), &BigUint::zero()),
            Err(Error::InvalidParameters(_))
        ));
    }
}
