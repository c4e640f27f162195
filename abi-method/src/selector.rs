use crate::error::Error;
use serde::{Serialize, Serializer};
use sha3::Digest;
use std::{fmt, str::FromStr};

pub const SELECTOR_LEN: usize = 4;

pub type Bytes32 = [u8; 32];

/// A digest function the selector of a method is derived from.
///
/// Every party that has to agree on a selector must use the same one; [Keccak256]
/// is the interoperable choice. Plain closures implement this trait too, which
/// makes it easy to swap in a fixed digest.
pub trait SelectorHasher {
    fn digest(&self, data: &[u8]) -> Bytes32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256;

impl SelectorHasher for Keccak256 {
    fn digest(&self, data: &[u8]) -> Bytes32 {
        let mut hasher = sha3::Keccak256::new();
        hasher.update(data);
        let mut output = [0u8; 32];
        output.copy_from_slice(&hasher.finalize());
        output
    }
}

/// SHA-256, the digest Fuel contracts build their selectors from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl SelectorHasher for Sha256 {
    fn digest(&self, data: &[u8]) -> Bytes32 {
        let mut hasher = sha2::Sha256::new();
        hasher.update(data);
        let mut output = [0u8; 32];
        output.copy_from_slice(&hasher.finalize());
        output
    }
}

impl<F> SelectorHasher for F
where
    F: Fn(&[u8]) -> Bytes32,
{
    fn digest(&self, data: &[u8]) -> Bytes32 {
        self(data)
    }
}

/// The 4-byte identifier of a method within its interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector([u8; SELECTOR_LEN]);

impl Selector {
    pub const fn new(bytes: [u8; SELECTOR_LEN]) -> Self {
        Self(bytes)
    }

    /// Takes the leading bytes of `digest`, in digest order.
    pub fn from_digest(digest: &Bytes32) -> Self {
        let mut output = [0u8; SELECTOR_LEN];
        output.copy_from_slice(&digest[..SELECTOR_LEN]);
        Self(output)
    }

    pub const fn as_bytes(&self) -> &[u8; SELECTOR_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Selector {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Selector {
    type Err = Error;

    /// Accepts 8 hex digits, with or without a `0x`/`0X` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let mut output = [0u8; SELECTOR_LEN];
        hex::decode_to_slice(digits, &mut output)
            .map_err(|_| Error::InvalidSelector(s.to_string()))?;
        Ok(Self(output))
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
