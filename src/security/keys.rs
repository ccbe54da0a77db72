//! DISCLAIMER: This library is a **toy** example of DSA key pairs in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive operations.

use crate::error::{Error, Result};
use crate::security::discrete_log;
use crate::security::modular::modexp;
use crate::security::params::DsaParams;
use crate::security::seeded_rng;
use log::debug;
use num_bigint::BigUint;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Public half of a DSA key: the shared domain parameters and `y = g^x mod p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaPublicKey {
    params: Arc<DsaParams>,
    y: BigUint,
}

impl DsaPublicKey {
    /// Wrap a public value received from a signer. `y` is taken as given.
    pub fn new(params: Arc<DsaParams>, y: BigUint) -> Self {
        DsaPublicKey { params, y }
    }

    pub fn params(&self) -> &DsaParams {
        &self.params
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

/// DSA key pair: private `x` in `[1, q-1]` and public `y = g^x mod p`.
///
/// `y` is always recomputed from `x`, it is cached rather than trusted.
#[derive(Clone, PartialEq, Eq)]
pub struct DsaKeyPair {
    public: DsaPublicKey,
    x: BigUint,
}

/// Configuration for key generation.
#[derive(Debug, Clone, Default)]
pub struct DsaKeyGenConfig {
    /// Optional RNG seed for reproducible keys in tests and demos.
    pub seed: Option<u64>,
}

impl DsaKeyPair {
    /// Generate a key pair: pick `x` uniformly in `[1, q-1]`, compute `y = g^x mod p`.
    pub fn generate<R: Rng + ?Sized>(params: Arc<DsaParams>, rng: &mut R) -> Result<Self> {
        let x = params.random_scalar(rng)?;
        let key_pair = DsaKeyPair::from_private(params, x)?;
        debug!("generated DSA key pair, q has {} bits", key_pair.params().q().bits());
        Ok(key_pair)
    }

    /// Generate a key pair with an RNG built from `config.seed`.
    pub fn generate_with_config(params: Arc<DsaParams>, config: &DsaKeyGenConfig) -> Result<Self> {
        let mut rng = seeded_rng(config.seed);
        DsaKeyPair::generate(params, &mut rng)
    }

    /// Rebuild a key pair from a known or recovered private scalar.
    pub fn from_private(params: Arc<DsaParams>, x: BigUint) -> Result<Self> {
        if !params.is_scalar(&x) {
            return Err(Error::InvalidPrivateKey);
        }
        let y = modexp(params.g(), &x, params.p())?;
        Ok(DsaKeyPair {
            public: DsaPublicKey { params, y },
            x,
        })
    }

    /// Recover the private key behind `y` by brute force, then rebuild the pair.
    ///
    /// Runs [`discrete_log::solve`], which is O(p). Only usable on toy groups.
    pub fn from_public_by_brute_force(params: Arc<DsaParams>, y: &BigUint) -> Result<Self> {
        let x = discrete_log::solve(y, params.g(), params.p())?;
        DsaKeyPair::from_private(params, x)
    }

    pub fn params(&self) -> &DsaParams {
        self.public.params()
    }

    pub fn public_key(&self) -> &DsaPublicKey {
        &self.public
    }

    /// The secret scalar `x`.
    pub fn private_scalar(&self) -> &BigUint {
        &self.x
    }
}

impl fmt::Debug for DsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DsaKeyPair")
            .field("public", &self.public)
            .field("x", &"<redacted>")
            .finish()
    }
}
