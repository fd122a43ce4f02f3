//! Digest type and hashing rules.
//!
//! Every hash in the system is an Ethereum-style keccak-256 over tightly
//! packed input:
//!
//! - a leaf is the `uint256` big-endian encoding of its value, hashed once
//!   (`keccak256(abi.encodePacked(uint256(value)))`);
//! - an internal node is the hash of two `bytes32` children concatenated in
//!   ascending byte order (`keccak256(abi.encodePacked(min, max))`).
//!
//! These rules must match the on-chain verifier bit for bit.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Size of a digest and of a leaf encoding, in bytes.
pub const HASH_SIZE: usize = 32;

/// Canonical leaf encoding: a `uint256` in big-endian byte order.
pub type LeafBytes = [u8; HASH_SIZE];

/// A 32-byte keccak digest.
///
/// Ordering is lexicographic over the bytes, which is the same as comparing
/// the digests as big-endian `uint256` values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hash256(pub [u8; HASH_SIZE]);

impl Hash256 {
    /// Parse a digest from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        parse_bytes32(s).map(Hash256).map_err(Error::InvalidDigest)
    }

    /// `0x`-prefixed lowercase hex, the form contract calls expect.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; HASH_SIZE]> for Hash256 {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash256(bytes)
    }
}

impl From<Hash256> for [u8; HASH_SIZE] {
    fn from(hash: Hash256) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self)
    }
}

impl FromStr for Hash256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Hash256::from_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash256::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Decode a 32-byte value from hex, accepting an optional `0x` prefix.
pub fn parse_bytes32(s: &str) -> std::result::Result<[u8; HASH_SIZE], String> {
    let trimmed = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(trimmed).map_err(|e| format!("'{}': {}", s, e))?;
    <[u8; HASH_SIZE]>::try_from(bytes.as_slice())
        .map_err(|_| format!("'{}': expected {} bytes, got {}", s, HASH_SIZE, bytes.len()))
}

/// Compute the keccak256 hash of the given data.
pub fn keccak256(data: &[u8]) -> Hash256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    Hash256(hasher.finalize().into())
}

/// Encode a leaf value as a big-endian `uint256`.
pub fn encode_leaf(value: u64) -> LeafBytes {
    let mut bytes = [0u8; HASH_SIZE];
    bytes[HASH_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
    bytes
}

/// Decode a big-endian `uint256` leaf encoding back to its value.
///
/// Fails if the slice is not 32 bytes or the value does not fit in a `u64`.
pub fn decode_leaf(bytes: &[u8]) -> Result<u64> {
    if bytes.len() != HASH_SIZE {
        return Err(Error::InvalidLeafEncoding(format!(
            "expected {} bytes, got {}",
            HASH_SIZE,
            bytes.len()
        )));
    }

    let (high, low) = bytes.split_at(HASH_SIZE - 8);
    if high.iter().any(|b| *b != 0) {
        return Err(Error::InvalidLeafEncoding(format!(
            "0x{} does not fit in 64 bits",
            hex::encode(bytes)
        )));
    }

    let mut value = [0u8; 8];
    value.copy_from_slice(low);
    Ok(u64::from_be_bytes(value))
}

/// Hash an already-encoded leaf. This is the step the verifier performs.
pub fn hash_leaf_bytes(leaf: &LeafBytes) -> Hash256 {
    keccak256(leaf)
}

/// Leaf digest of a value: `keccak256(uint256(value))`.
pub fn leaf_digest(value: u64) -> Hash256 {
    hash_leaf_bytes(&encode_leaf(value))
}

/// Combine two child digests into their parent.
///
/// The smaller digest is hashed first, so `combine(a, b) == combine(b, a)`.
pub fn combine(a: &Hash256, b: &Hash256) -> Hash256 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    let mut data = [0u8; 2 * HASH_SIZE];
    data[..HASH_SIZE].copy_from_slice(&first.0);
    data[HASH_SIZE..].copy_from_slice(&second.0);

    keccak256(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_keccak_empty_input() {
        assert_eq!(
            keccak256(&[]),
            Hash256(hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"))
        );
    }

    #[test]
    fn test_leaf_digest_matches_solidity_packing() {
        assert_eq!(
            leaf_digest(2),
            Hash256(hex!("405787fa12a823e0f2b7631cc41b3ba8828b3321ca811111fa75cd3aa3bb5ace"))
        );
        assert_eq!(leaf_digest(2), hash_leaf_bytes(&encode_leaf(2)));
    }

    #[test]
    fn test_combine_is_order_independent() {
        let a = leaf_digest(2);
        let b = leaf_digest(3);
        let expected =
            Hash256(hex!("c5fd106a8e5214837c622e5fdef112b1d83ad6de66beafb53451c77843c9d04e"));

        assert_eq!(combine(&a, &b), expected);
        assert_eq!(combine(&b, &a), expected);
    }

    #[test]
    fn test_ordering_is_big_endian() {
        let mut low = [0u8; 32];
        low[31] = 0xff;
        let mut high = [0u8; 32];
        high[0] = 0x01;

        assert!(Hash256(low) < Hash256(high));
    }

    #[test]
    fn test_encode_leaf_is_left_padded() {
        let bytes = encode_leaf(7639);
        assert!(bytes[..30].iter().all(|b| *b == 0));
        assert_eq!(&bytes[30..], &[0x1d, 0xd7]);
        assert_eq!(decode_leaf(&bytes).unwrap(), 7639);
    }

    #[test]
    fn test_decode_leaf_rejects_wide_values() {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        assert!(matches!(decode_leaf(&bytes), Err(Error::InvalidLeafEncoding(_))));
        assert!(matches!(decode_leaf(&bytes[..31]), Err(Error::InvalidLeafEncoding(_))));
    }

    #[test]
    fn test_hex_parsing() {
        let digest = leaf_digest(11);
        let printed = digest.to_string();

        assert!(printed.starts_with("0x"));
        assert_eq!(printed.parse::<Hash256>().unwrap(), digest);
        assert_eq!(Hash256::from_hex(&printed[2..]).unwrap(), digest);
        assert!(matches!(Hash256::from_hex("0x1234"), Err(Error::InvalidDigest(_))));
        assert!(matches!(Hash256::from_hex("zz"), Err(Error::InvalidDigest(_))));
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let digest = leaf_digest(5);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", digest.to_hex()));

        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
