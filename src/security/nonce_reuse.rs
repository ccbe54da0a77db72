//! Private key recovery from two DSA signatures that share a nonce.
//!
//! If `k` signs two messages, both signatures carry the same `r` and
//!
//! ```text
//! s1 = k^-1 * (h1 + x*r) mod q
//! s2 = k^-1 * (h2 + x*r) mod q
//! ```
//!
//! Subtracting eliminates `x`:
//!
//! ```text
//! k = (h1 - h2) * (s1 - s2)^-1 mod q
//! ```
//!
//! and either signature then yields the private key:
//!
//! ```text
//! x = (s*k - h) * r^-1 mod q
//! ```
//!
//! Nothing here needs the private key in advance, only public data.

use crate::error::{Error, Result};
use crate::security::dsa::DsaSignature;
use crate::security::encoding::sha1_hash;
use crate::security::keys::{DsaKeyPair, DsaPublicKey};
use crate::security::modular::{mod_sub, modinv};
use crate::security::params::DsaParams;
use log::debug;
use num_bigint::BigUint;
use std::collections::HashMap;
use std::sync::Arc;

/// Secrets recovered from a nonce-reuse pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered {
    /// The nonce shared by both signatures.
    pub k: BigUint,
    /// The signer's private scalar.
    pub x: BigUint,
}

impl Recovered {
    /// Rebuild the victim's key pair from the recovered scalar.
    pub fn into_key_pair(self, params: Arc<DsaParams>) -> Result<DsaKeyPair> {
        DsaKeyPair::from_private(params, self.x)
    }

    /// `true` if the recovered scalar reproduces the published public key.
    pub fn matches(&self, public_key: &DsaPublicKey) -> bool {
        let params = public_key.params();
        &params.g().modpow(&self.x, params.p()) == public_key.y()
    }
}

/// Given the nonce `k` behind a signature over hash `h`, return the private key.
pub fn recover_from_nonce(
    params: &DsaParams,
    h: &BigUint,
    signature: &DsaSignature,
    k: &BigUint,
) -> Result<BigUint> {
    let q = params.q();
    let r_inv = modinv(&signature.r, q)?;
    let sk = (&signature.s * k) % q;
    Ok((mod_sub(&sk, h, q)? * r_inv) % q)
}

/// Recover `k` and `x` from two signatures over different messages made with the same nonce.
///
/// Fails with [`Error::NotSameNonce`] when `r1 != r2` and with [`Error::NoInverse`]
/// when `s1 ≡ s2 (mod q)`. Both signatures are solved for `x`, and a disagreement
/// is reported as [`Error::Inconsistent`]; to check the result against a known
/// signer use [`recover_for_public_key`].
pub fn recover_private_key(
    params: &DsaParams,
    m1: &[u8],
    sig1: &DsaSignature,
    m2: &[u8],
    sig2: &DsaSignature,
) -> Result<Recovered> {
    recover_prehashed(params, &sha1_hash(m1), sig1, &sha1_hash(m2), sig2)
}

/// [`recover_private_key`] on already hashed messages.
pub fn recover_prehashed(
    params: &DsaParams,
    h1: &BigUint,
    sig1: &DsaSignature,
    h2: &BigUint,
    sig2: &DsaSignature,
) -> Result<Recovered> {
    if sig1.r != sig2.r {
        return Err(Error::NotSameNonce);
    }
    let q = params.q();
    debug!("recovering nonce from two signatures sharing r");

    // k = (h1 - h2) * (s1 - s2)^-1 mod q
    let s_diff_inv = modinv(&mod_sub(&sig1.s, &sig2.s, q)?, q)?;
    let k = (mod_sub(h1, h2, q)? * s_diff_inv) % q;

    let x1 = recover_from_nonce(params, h1, sig1, &k)?;
    let x2 = recover_from_nonce(params, h2, sig2, &k)?;
    if x1 != x2 {
        return Err(Error::Inconsistent);
    }

    debug!("recovered nonce and private key from signatures sharing r");
    Ok(Recovered { k, x: x1 })
}

/// [`recover_private_key`] followed by a check against the signer's public key.
///
/// A recovered scalar that does not reproduce `y` means the inputs were not two
/// honest same-nonce signatures by that key, and fails with [`Error::Inconsistent`].
pub fn recover_for_public_key(
    public_key: &DsaPublicKey,
    m1: &[u8],
    sig1: &DsaSignature,
    m2: &[u8],
    sig2: &DsaSignature,
) -> Result<Recovered> {
    let recovered = recover_private_key(public_key.params(), m1, sig1, m2, sig2)?;
    if !recovered.matches(public_key) {
        return Err(Error::Inconsistent);
    }
    Ok(recovered)
}

/// Scan a batch of signed messages for two signatures sharing `r` and attack that pair.
///
/// Returns `Ok(None)` when every `r` is distinct. Pairs with identical `s` (the same
/// message signed twice) are skipped, they carry no information.
pub fn find_reused_nonce(
    params: &DsaParams,
    signed: &[(&[u8], DsaSignature)],
) -> Result<Option<Recovered>> {
    let mut seen: HashMap<&BigUint, Vec<(BigUint, &DsaSignature)>> = HashMap::new();

    for (message, signature) in signed {
        let h = sha1_hash(message);
        let earlier = seen.entry(&signature.r).or_default();
        for (earlier_h, earlier_sig) in earlier.iter() {
            if earlier_sig.s == signature.s {
                continue;
            }
            let recovered = recover_prehashed(params, earlier_h, earlier_sig, &h, signature)?;
            return Ok(Some(recovered));
        }
        earlier.push((h, signature));
    }
    Ok(None)
}
