//! DISCLAIMER: This library is a **toy** example of DSA domain parameters in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! The built-in parameter sets are fixed published constants; nothing here follows
//! FIPS 186-4 parameter generation.

use crate::error::{Error, Result};
use crate::security::modular::modexp;
use hex_literal::hex;
use num_bigint::{BigUint, RandBigInt};
use num_prime::nt_funcs::is_prime;
use num_traits::{One, Zero};
use rand::Rng;

/// 1024-bit prime modulus from the NIST DSA example vectors (DSA2_All).
const NIST_1024_P: [u8; 128] = hex!(
    "E0A67598 CD1B763B C98C8ABB 333E5DDA 0CD3AA0E 5E1FB5BA 8A7B4EAB C10BA338"
    "FAE06DD4 B90FDA70 D7CF0CB0 C638BE33 41BEC0AF 8A7330A3 307DED22 99A0EE60"
    "6DF03517 7A239C34 A912C202 AA5F83B9 C4A7CF02 35B5316B FC6EFB9A 24841125"
    "8B30B839 AF172440 F3256305 6CB67A86 1158DDD9 0E6A894C 72A5BBEF 9E286C6B"
);

/// 160-bit prime divisor of `p - 1` from the same vectors.
const NIST_160_Q: [u8; 20] = hex!("E950511E AB424B9A 19A2AEB4 E159B784 4C589C4F");

/// Generator of the order-q subgroup, `g = 2^((p-1)/q) mod p`.
const NIST_1024_G: [u8; 128] = hex!(
    "D29D5121 B0423C27 69AB2184 3E5A3240 FF19CACC 792264E3 BB6BE4F7 8EDD1B15"
    "C4DFF7F1 D905431F 0AB16790 E1F773B5 CE01C804 E509066A 9919F519 5F4ABC58"
    "189FD9FF 987389CB 5BEDF21B 4DAB4F8B 76A055FF E2770988 FE2EC2DE 11AD9221"
    "9F0B3518 69AC24DA 3D7BA870 11A701CE 8EE7BFE4 9486ED45 27B7186C A4610A75"
);

/// DSA domain parameters: prime `p`, prime `q` dividing `p - 1`, and `g` of order `q`.
///
/// Immutable once built. Key pairs share one instance through an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaParams {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl DsaParams {
    /// Store `(p, q, g)` verbatim, trusting pre-vetted constants.
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Self {
        DsaParams { p, q, g }
    }

    /// Build the triple and run [`DsaParams::validate`] on it.
    pub fn validated(p: BigUint, q: BigUint, g: BigUint) -> Result<Self> {
        let params = DsaParams::new(p, q, g);
        params.validate()?;
        Ok(params)
    }

    /// The 1024-bit `p` / 160-bit `q` parameter set from the NIST DSA examples.
    pub fn nist_1024_160() -> Self {
        DsaParams::new(
            BigUint::from_bytes_be(&NIST_1024_P),
            BigUint::from_bytes_be(&NIST_160_Q),
            BigUint::from_bytes_be(&NIST_1024_G),
        )
    }

    /// A group small enough for [`crate::security::discrete_log::solve`]:
    /// `(p, q, g) = (103687, 1571, 21947)`.
    pub fn toy() -> Self {
        DsaParams::new(
            BigUint::from(103_687u32),
            BigUint::from(1_571u32),
            BigUint::from(21_947u32),
        )
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Check that `p` and `q` are probable primes, `q | p - 1`, `1 < g < p`
    /// and `g^q mod p == 1`.
    ///
    /// # Warnings
    /// Passing these checks does not make the parameters safe; it only rules out
    /// triples on which the DSA equations break.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Err(Error::InvalidParameters(reason.to_string()));

        if self.p <= BigUint::one() || !is_prime(&self.p, None).probably() {
            return invalid("p is not prime");
        }
        if self.q <= BigUint::one() || !is_prime(&self.q, None).probably() {
            return invalid("q is not prime");
        }
        if !((&self.p - 1u32) % &self.q).is_zero() {
            return invalid("q does not divide p - 1");
        }
        if self.g <= BigUint::one() || self.g >= self.p {
            return invalid("g must satisfy 1 < g < p");
        }
        if !modexp(&self.g, &self.q, &self.p)?.is_one() {
            return invalid("g does not have order q");
        }
        Ok(())
    }

    /// Draw a scalar uniformly from `[1, q-1]`.
    ///
    /// Used for both private keys and per-message nonces.
    pub fn random_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        if self.q <= BigUint::one() {
            return Err(Error::InvalidParameters("q must be greater than 1".into()));
        }
        Ok(rng.gen_biguint_range(&BigUint::one(), &self.q))
    }

    /// `true` when `1 <= value <= q - 1`.
    pub fn is_scalar(&self, value: &BigUint) -> bool {
        !value.is_zero() && value < &self.q
    }
}
