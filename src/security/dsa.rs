//! DISCLAIMER: This library is a **toy** example of the Digital Signature Algorithm (DSA)
//! implemented in pure Rust. It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive operations.
//! It is not audited, not vetted, and very likely insecure in practice. If you need DSA or
//! any cryptographic operations in production, please use a vetted, well-reviewed cryptography library.
//!
//! Signing over a message `M` with key `(x, y)` and nonce `k`:
//!
//! ```text
//! r = (g^k mod p) mod q
//! s = k^-1 * (H(M) + x*r) mod q
//! ```
//!
//! Verification recomputes
//!
//! ```text
//! w  = s^-1 mod q
//! u1 = H(M)*w mod q,  u2 = r*w mod q
//! v  = ((g^u1 * y^u2) mod p) mod q
//! ```
//!
//! and the signature is valid iff `v == r`. `H` is SHA-1.

use crate::error::{Error, Result};
use crate::security::encoding::sha1_hash;
use crate::security::keys::{DsaKeyPair, DsaPublicKey};
use crate::security::modular::{modexp, modinv};
use crate::security::seeded_rng;
use log::{debug, trace, warn};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

/// A DSA signature `(r, s)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DsaSignature {
    pub r: BigUint,
    pub s: BigUint,
}

/// Configuration for [`sign_with_config`].
#[derive(Debug, Clone)]
pub struct DsaSignConfig {
    /// Optional RNG seed for reproducible nonces in tests and demos.
    pub seed: Option<u64>,
    /// How many nonces to draw before giving up on a degenerate signature.
    pub max_attempts: u32,
}

impl Default for DsaSignConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// Sign an already hashed message `h` with the explicit nonce `k`.
///
/// Fails with [`Error::InvalidNonce`] unless `1 <= k <= q-1`, and with
/// [`Error::DegenerateNonce`] if `r` or `s` comes out as zero. Never retries.
pub fn sign_prehashed(key_pair: &DsaKeyPair, h: &BigUint, k: &BigUint) -> Result<DsaSignature> {
    let params = key_pair.params();
    let (p, q, g) = (params.p(), params.q(), params.g());
    if !params.is_scalar(k) {
        return Err(Error::InvalidNonce);
    }

    // r = (g^k mod p) mod q
    let r = modexp(g, k, p)? % q;
    if r.is_zero() {
        return Err(Error::DegenerateNonce { component: "r" });
    }

    // s = k^-1 * (h + x*r) mod q
    let k_inv = modinv(k, q)?;
    let xr = (key_pair.private_scalar() * &r) % q;
    let s = (k_inv * ((h + xr) % q)) % q;
    if s.is_zero() {
        return Err(Error::DegenerateNonce { component: "s" });
    }

    Ok(DsaSignature { r, s })
}

/// Sign `message` with an explicit nonce `k`.
///
/// # Warnings
/// Reusing `k` for two different messages hands the private key to anyone who
/// sees both signatures, see [`crate::security::nonce_reuse`].
pub fn sign_with_nonce(key_pair: &DsaKeyPair, message: &[u8], k: &BigUint) -> Result<DsaSignature> {
    let signature = sign_prehashed(key_pair, &sha1_hash(message), k)?;
    debug!("signed {} byte message with caller-supplied nonce", message.len());
    Ok(signature)
}

/// Sign `message` and hand back the nonce that was used alongside the signature.
///
/// When `nonce` is `None` a fresh `k` is drawn from `[1, q-1]`; when it is `Some`
/// that exact value is used, which allows deliberately reusing it. Degenerate
/// nonces are reported as [`Error::DegenerateNonce`] rather than retried.
///
/// Exposing `k` exists for demonstrations of the nonce-reuse attack only. Use
/// [`sign`] everywhere else.
pub fn sign_exposing_nonce<R: Rng + ?Sized>(
    key_pair: &DsaKeyPair,
    message: &[u8],
    nonce: Option<&BigUint>,
    rng: &mut R,
) -> Result<(BigUint, DsaSignature)> {
    let k = match nonce {
        Some(k) => k.clone(),
        None => key_pair.params().random_scalar(rng)?,
    };
    let signature = sign_with_nonce(key_pair, message, &k)?;
    Ok((k, signature))
}

/// Sign `message` with a fresh secret nonce drawn from `rng`.
///
/// The nonce never leaves this function. If it yields `r == 0` or `s == 0`
/// another one is drawn, up to 16 attempts, after which the last
/// [`Error::DegenerateNonce`] is returned.
pub fn sign<R: Rng + ?Sized>(key_pair: &DsaKeyPair, message: &[u8], rng: &mut R) -> Result<DsaSignature> {
    sign_with_attempts(key_pair, message, rng, DEFAULT_MAX_ATTEMPTS)
}

/// [`sign`] with the RNG seed and attempt limit taken from `config`.
pub fn sign_with_config(
    key_pair: &DsaKeyPair,
    message: &[u8],
    config: &DsaSignConfig,
) -> Result<DsaSignature> {
    let mut rng = seeded_rng(config.seed);
    sign_with_attempts(key_pair, message, &mut rng, config.max_attempts)
}

fn sign_with_attempts<R: Rng + ?Sized>(
    key_pair: &DsaKeyPair,
    message: &[u8],
    rng: &mut R,
    max_attempts: u32,
) -> Result<DsaSignature> {
    let h = sha1_hash(message);
    let mut last_err = Error::DegenerateNonce { component: "r" };

    for attempt in 1..=max_attempts.max(1) {
        let k = key_pair.params().random_scalar(rng)?;
        match sign_prehashed(key_pair, &h, &k) {
            Ok(signature) => {
                debug!("signed {} byte message on attempt {}", message.len(), attempt);
                return Ok(signature);
            }
            Err(err @ Error::DegenerateNonce { .. }) => {
                warn!("degenerate nonce on attempt {}, drawing another", attempt);
                last_err = err;
            }
            Err(err) => return Err(err),
        }
    }
    Err(last_err)
}

/// Recompute `v` for an already hashed message. The signature is valid iff `v == r`.
pub fn verify_prehashed(public_key: &DsaPublicKey, h: &BigUint, signature: &DsaSignature) -> Result<BigUint> {
    let params = public_key.params();
    let (p, q, g) = (params.p(), params.q(), params.g());
    debug!("verifying signature with r = {}", signature.r);

    // w = s^-1 mod q
    let w = modinv(&signature.s, q)?;

    // u1 = h*w mod q, u2 = r*w mod q
    let u1 = (h * &w) % q;
    let u2 = (&signature.r * &w) % q;
    trace!("u1 = {}, u2 = {}", u1, u2);

    // v = ((g^u1 mod p) * (y^u2 mod p) mod p) mod q
    let v = ((modexp(g, &u1, p)? * modexp(public_key.y(), &u2, p)?) % p) % q;
    debug!("verification computed v = {}", v);
    Ok(v)
}

/// Recompute `v` for `message`. The caller compares it with `signature.r`.
///
/// Fails with [`Error::NoInverse`] when `s` has no inverse modulo `q`.
pub fn verify(public_key: &DsaPublicKey, message: &[u8], signature: &DsaSignature) -> Result<BigUint> {
    verify_prehashed(public_key, &sha1_hash(message), signature)
}

/// Strict boolean verification: `0 < r < q`, `0 < s < q`, and `v == r`.
pub fn verify_signature(public_key: &DsaPublicKey, message: &[u8], signature: &DsaSignature) -> bool {
    let params = public_key.params();
    if !params.is_scalar(&signature.r) || !params.is_scalar(&signature.s) {
        debug!("signature component out of range");
        return false;
    }
    match verify(public_key, message, signature) {
        Ok(v) => v == signature.r,
        Err(_) => false,
    }
}
