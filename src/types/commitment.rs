// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! 32-byte commitment digest.

use core::fmt;
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{COMMITMENT_LEN, FIELD_MODULUS, TAG_HASH};
use crate::error::{FormatError, RangeError};
use crate::types::tagged::{self, TaggedBase64};
use crate::types::u256::U256;

/// A Keccak-256 digest produced by [`crate::hasher::RawCommitmentBuilder`].
///
/// Text and JSON forms use the `HASH` tag.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Commitment([u8; COMMITMENT_LEN]);

impl Commitment {
    pub const fn from_bytes(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Commitment(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, FormatError> {
        let arr: [u8; COMMITMENT_LEN] =
            bytes.try_into().map_err(|_| FormatError::InvalidLength {
                expected: COMMITMENT_LEN,
                found: bytes.len(),
            })?;
        Ok(Commitment(arr))
    }

    pub const fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; COMMITMENT_LEN] {
        self.0
    }

    /// The digest read as a little-endian integer.
    pub fn uint256(&self) -> U256 {
        U256::from_le_bytes(self.0)
    }

    /// Inverse of [`Commitment::uint256`]. Fails unless `n` is below [`FIELD_MODULUS`].
    pub fn from_uint256(n: &U256) -> Result<Self, RangeError> {
        if *n >= FIELD_MODULUS {
            return Err(RangeError::NotInField(n.to_string()));
        }
        Ok(Commitment(n.to_le_bytes()))
    }

    pub fn is_field_element(&self) -> bool {
        self.uint256() < FIELD_MODULUS
    }

    pub fn to_tagged(&self, tag: &str) -> Result<TaggedBase64, FormatError> {
        TaggedBase64::new(tag, &self.0)
    }

    /// Parses tagged text of any tag whose value is exactly 32 bytes and whose checksum holds.
    pub fn from_tagged(text: &str) -> Result<(String, Self), FormatError> {
        let tb = TaggedBase64::parse(text)?;
        tb.verify_checksum()?;
        let commitment = Self::from_slice(tb.value())?;
        Ok((tb.tag().to_string(), commitment))
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; COMMITMENT_LEN]> for Commitment {
    fn from(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Commitment(bytes)
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tagged::encode(TAG_HASH, &self.0))
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", self.to_hex())
    }
}

impl FromStr for Commitment {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tb = TaggedBase64::parse_with_tag(s, TAG_HASH)?;
        tb.verify_checksum()?;
        Self::from_slice(tb.value())
    }
}

impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
