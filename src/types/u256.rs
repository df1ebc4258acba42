// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! 256-bit unsigned integer with a canonical `0x` hex text form.

use core::fmt;
use core::str::FromStr;

use alloy_primitives::U256 as Limbs;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormatError;

/// Unsigned integer in `[0, 2^256)`.
///
/// Text form is `0x` followed by lowercase hex without leading zeros; zero is `0x0`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct U256(Limbs);

impl U256 {
    pub const ZERO: U256 = U256(Limbs::ZERO);
    pub const MAX: U256 = U256(Limbs::MAX);

    /// Builds a value from little-endian 64-bit limbs.
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        U256(Limbs::from_limbs(limbs))
    }

    /// Big-endian bytes, at most 32, left-padded with zeros.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() > 32 {
            return Err(FormatError::InvalidLength {
                expected: 32,
                found: bytes.len(),
            });
        }
        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(bytes);
        Ok(U256(Limbs::from_be_bytes(buf)))
    }

    /// Little-endian bytes, at most 32, right-padded with zeros.
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() > 32 {
            return Err(FormatError::InvalidLength {
                expected: 32,
                found: bytes.len(),
            });
        }
        let mut buf = [0u8; 32];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(U256(Limbs::from_le_bytes(buf)))
    }

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        U256(Limbs::from_le_bytes(bytes))
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        U256(Limbs::from_be_bytes(bytes))
    }

    pub fn to_le_bytes(&self) -> [u8; 32] {
        self.0.to_le_bytes::<32>()
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }

    pub fn checked_add(self, rhs: U256) -> Option<U256> {
        self.0.checked_add(rhs.0).map(U256)
    }
}

impl From<u64> for U256 {
    fn from(n: u64) -> Self {
        U256(Limbs::from(n))
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = hex::encode(self.to_be_bytes());
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            f.write_str("0x0")
        } else {
            write!(f, "0x{trimmed}")
        }
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({self})")
    }
}

impl FromStr for U256 {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").ok_or(FormatError::MissingHexPrefix)?;
        if digits.is_empty() {
            return Err(FormatError::EmptyHex);
        }
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(FormatError::InvalidHexDigit(c));
        }

        let significant = digits.trim_start_matches('0');
        if significant.len() > 64 {
            return Err(FormatError::Overflow);
        }

        let padded = format!("{significant:0>64}");
        let mut buf = [0u8; 32];
        hex::decode_to_slice(&padded, &mut buf).map_err(|_| FormatError::Overflow)?;
        Ok(U256::from_be_bytes(buf))
    }
}

impl Serialize for U256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
