pub mod discrete_log;
pub mod dsa;
pub mod encoding;
pub mod hmac;
pub mod keys;
pub mod modular;
pub mod nonce_reuse;
pub mod params;


use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// Re-export modular arithmetic
pub use modular::{mod_sub, modexp, modinv};

// Re-export DSA functionality
pub use dsa::{
    sign, sign_exposing_nonce, sign_prehashed, sign_with_config, sign_with_nonce, verify,
    verify_prehashed, verify_signature, DsaSignConfig, DsaSignature,
};
pub use keys::{DsaKeyGenConfig, DsaKeyPair, DsaPublicKey};
pub use params::DsaParams;

// Re-export cryptanalysis
pub use discrete_log::{solve, solve_parallel};
pub use nonce_reuse::{
    find_reused_nonce, recover_for_public_key, recover_from_nonce, recover_private_key,
    Recovered,
};

// Re-export HMAC functionality
pub use self::hmac::{hmac, hmac_digest, hmac_sha512, verify_tag, SHA512_BLOCK_SIZE, SHA512_OUTPUT_SIZE};

// Re-export encoding helpers
pub use encoding::{digest_to_int, encode_u64, message_hash, sha1_hash};

/// Build the RNG every seeded operation uses: a ChaCha20 stream from `seed`,
/// or one seeded from OS entropy when `seed` is `None`.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_entropy(),
    }
}
