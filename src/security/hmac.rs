//! DISCLAIMER: This library is a toy example of HMAC in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Tag comparison is not constant time. If you need a MAC in production, use the
//! RustCrypto `hmac` crate.
//!
//! ```text
//! HMAC(K, M) = H((K+ ⊕ opad) || H((K+ ⊕ ipad) || M))
//! ```
//!
//! `K+` is the key right-padded with zero bytes to the block size `b`, or `H(K)`
//! padded the same way when the key is longer than `b`. `ipad` is `0x36` and
//! `opad` is `0x5C`, each repeated `b` times. Only the underlying hash is borrowed
//! from a library; the construction itself lives here.

use crate::error::{Error, Result};
use digest::core_api::BlockSizeUser;
use digest::Digest;
use sha2::Sha512;

/// Inner pad byte.
pub const IPAD: u8 = 0x36;
/// Outer pad byte.
pub const OPAD: u8 = 0x5C;

/// Block size of SHA-512 in bytes (1024 bits).
pub const SHA512_BLOCK_SIZE: usize = 128;
/// Output size of SHA-512 in bytes.
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// HMAC over an arbitrary hash function.
///
/// `hash_fn` must return exactly `digest_size` bytes and `digest_size` may not
/// exceed `block_size`, otherwise [`Error::InvalidHmacConfig`] is returned.
pub fn hmac<F>(
    key: &[u8],
    message: &[u8],
    hash_fn: F,
    block_size: usize,
    digest_size: usize,
) -> Result<Vec<u8>>
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    if block_size == 0 {
        return Err(Error::InvalidHmacConfig("block size must be positive".into()));
    }
    if digest_size > block_size {
        return Err(Error::InvalidHmacConfig(format!(
            "digest size {} exceeds block size {}",
            digest_size, block_size
        )));
    }
    let hash = |data: &[u8]| -> Result<Vec<u8>> {
        let out = hash_fn(data);
        if out.len() != digest_size {
            return Err(Error::InvalidHmacConfig(format!(
                "hash returned {} bytes, expected {}",
                out.len(),
                digest_size
            )));
        }
        Ok(out)
    };

    // K+: long keys are hashed first, then everything is right-padded with zeros
    let mut key_block = if key.len() > block_size {
        hash(key)?
    } else {
        key.to_vec()
    };
    key_block.resize(block_size, 0);

    let mut inner_input: Vec<u8> = key_block.iter().map(|b| b ^ IPAD).collect();
    inner_input.extend_from_slice(message);
    let inner = hash(&inner_input)?;

    let mut outer_input: Vec<u8> = key_block.iter().map(|b| b ^ OPAD).collect();
    outer_input.extend_from_slice(&inner);
    hash(&outer_input)
}

/// HMAC over a RustCrypto hash, block and output sizes taken from `D`.
pub fn hmac_digest<D>(key: &[u8], message: &[u8]) -> Result<Vec<u8>>
where
    D: Digest + BlockSizeUser,
{
    hmac(
        key,
        message,
        |data| D::digest(data).to_vec(),
        <D as BlockSizeUser>::block_size(),
        <D as Digest>::output_size(),
    )
}

/// HMAC-SHA-512: 128-byte blocks, 64-byte tag.
pub fn hmac_sha512(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    hmac(
        key,
        message,
        |data| Sha512::digest(data).to_vec(),
        SHA512_BLOCK_SIZE,
        SHA512_OUTPUT_SIZE,
    )
}

/// Recompute HMAC-SHA-512 and compare with `tag`.
pub fn verify_tag(key: &[u8], message: &[u8], tag: &[u8]) -> Result<bool> {
    Ok(hmac_sha512(key, message)? == tag)
}
