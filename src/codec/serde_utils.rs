// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Serde adapters for record fields with a strict text form.

/// 32-byte value as `0x` followed by exactly 64 hex digits.
pub mod hex32 {
    use alloy_primitives::B256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::error::FormatError;

    pub fn serialize<S>(value: &B256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(value.as_slice())))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<B256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<B256, FormatError> {
        let digits = s.strip_prefix("0x").ok_or(FormatError::MissingHexPrefix)?;
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(FormatError::InvalidHexDigit(c));
        }
        if digits.len() != 64 {
            return Err(FormatError::InvalidLength {
                expected: 32,
                found: digits.len() / 2,
            });
        }
        let mut out = [0u8; 32];
        hex::decode_to_slice(digits, &mut out).map_err(|_| FormatError::InvalidLength {
            expected: 32,
            found: digits.len() / 2,
        })?;
        Ok(B256::from(out))
    }
}

/// Merkle tree commitment, tagged `MERKLE_COMM`.
pub mod merkle_comm {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::config::TAG_MERKLE_COMM;
    use crate::types::tagged::TaggedBase64;

    pub fn serialize<S>(value: &TaggedBase64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TaggedBase64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TaggedBase64::parse_with_tag(&s, TAG_MERKLE_COMM).map_err(de::Error::custom)
    }
}

/// Commitment text tagged `HASH` with a 32-byte value. The received checksum byte is kept.
pub mod hash_comm {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::config::{COMMITMENT_LEN, TAG_HASH};
    use crate::error::FormatError;
    use crate::types::tagged::TaggedBase64;

    pub fn serialize<S>(value: &TaggedBase64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TaggedBase64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<TaggedBase64, FormatError> {
        let tb = TaggedBase64::parse_with_tag(s, TAG_HASH)?;
        if tb.value().len() != COMMITMENT_LEN {
            return Err(FormatError::InvalidLength {
                expected: COMMITMENT_LEN,
                found: tb.value().len(),
            });
        }
        Ok(tb)
    }
}
