//! Conversions between messages, digests and integers.

use digest::Digest;
use num_bigint::BigUint;
use sha1::Sha1;

/// Width, in bytes, of an integer message.
pub const INTEGER_MESSAGE_WIDTH: usize = 8;

/// Encode an integer message as a fixed-width big-endian byte string.
pub fn encode_u64(value: u64) -> [u8; INTEGER_MESSAGE_WIDTH] {
    value.to_be_bytes()
}

/// Interpret raw digest bytes as a big-endian unsigned integer.
pub fn digest_to_int(digest: &[u8]) -> BigUint {
    BigUint::from_bytes_be(digest)
}

/// Hash `message` with `D` and return the digest as an integer.
pub fn message_hash<D: Digest>(message: &[u8]) -> BigUint {
    digest_to_int(&D::digest(message))
}

/// SHA-1 digest of `message` as an integer, the `H(M)` of DSA.
pub fn sha1_hash(message: &[u8]) -> BigUint {
    message_hash::<Sha1>(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_u64_is_big_endian() {
        assert_eq!(encode_u64(610), [0, 0, 0, 0, 0, 0, 0x02, 0x62]);
        assert_eq!(encode_u64(0), [0; 8]);
    }

    #[test]
    fn test_digest_to_int() {
        assert_eq!(digest_to_int(&[0x01, 0x00]), BigUint::from(256u32));
        assert_eq!(digest_to_int(&[]), BigUint::from(0u32));
    }

    #[test]
    fn test_sha1_hash_of_integer_message() {
        let expected =
            BigUint::parse_bytes(b"f14bba2e850e7a61efae4919aed8e3eddbe4e840", 16).unwrap();
        assert_eq!(sha1_hash(&encode_u64(610)), expected);
    }

    #[test]
    fn test_sha1_hash_abc() {
        let expected =
            BigUint::parse_bytes(b"a9993e364706816aba3e25717850c26c9cd0d89d", 16).unwrap();
        assert_eq!(sha1_hash(b"abc"), expected);
    }
}
