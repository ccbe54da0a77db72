pub mod error;
pub mod security;

pub use error::{Error, Result};
pub use security::{DsaKeyPair, DsaParams, DsaPublicKey, DsaSignature};
