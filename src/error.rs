//! Error type shared by every module of the crate.

use num_bigint::BigUint;
use thiserror::Error;

/// Result type for DSA, cryptanalysis, discrete log and HMAC operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the crate. All of them are local and recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Domain parameters failed validation, or a modulus is unusable.
    #[error("invalid domain parameters: {0}")]
    InvalidParameters(String),

    /// A modular inverse was requested for an element sharing a factor with the modulus.
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: BigUint, modulus: BigUint },

    /// The nonce produced `r == 0` or `s == 0`; a new nonce must be drawn.
    #[error("nonce produced a degenerate signature ({component} = 0)")]
    DegenerateNonce { component: &'static str },

    /// A caller-supplied nonce lies outside `[1, q-1]`.
    #[error("nonce must lie in [1, q-1]")]
    InvalidNonce,

    /// A private scalar lies outside `[1, q-1]`.
    #[error("private key must lie in [1, q-1]")]
    InvalidPrivateKey,

    /// The two signatures handed to the nonce-reuse attack do not share `r`.
    #[error("signatures do not share r, the nonce-reuse attack does not apply")]
    NotSameNonce,

    /// The private keys recovered from each signature disagree.
    #[error("private keys recovered from the two signatures disagree")]
    Inconsistent,

    /// The brute-force discrete log search exhausted `[1, p-1]`.
    #[error("no discrete logarithm of {target} found modulo {modulus}")]
    NotFound { target: BigUint, modulus: BigUint },

    /// Block size, digest size and hash output are not compatible.
    #[error("invalid HMAC configuration: {0}")]
    InvalidHmacConfig(String),
}
