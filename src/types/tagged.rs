// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Tagged base64 text: `TAG~<base64url(value || checksum)>`.
//!
//! The payload is unpadded URL-safe base64 and its last byte is a checksum. Values built
//! here get a CRC-8/SMBUS checksum (poly `0x07`, init `0`) over the value bytes. Parsed values
//! keep the checksum byte they arrived with and write it back unchanged, so text produced by
//! other encoders re-encodes byte for byte. [`TaggedBase64::verify_checksum`] checks it.

use core::fmt;
use core::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use crc::{Crc, CRC_8_SMBUS};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::config::TB64_DELIM;
use crate::error::FormatError;

const CRC8: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);

/// A role tag paired with an opaque byte value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TaggedBase64 {
    tag: String,
    value: Vec<u8>,
    checksum: u8,
}

impl TaggedBase64 {
    pub fn new(tag: &str, value: &[u8]) -> Result<Self, FormatError> {
        if !is_safe_tag(tag) {
            return Err(FormatError::InvalidTag(tag.to_string()));
        }
        Ok(Self {
            tag: tag.to_string(),
            value: value.to_vec(),
            checksum: checksum(value),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// The checksum byte carried by this value.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// CRC-8 of the value bytes.
    pub fn expected_checksum(&self) -> u8 {
        checksum(&self.value)
    }

    pub fn verify_checksum(&self) -> Result<(), FormatError> {
        let expected = self.expected_checksum();
        if self.checksum != expected {
            return Err(FormatError::ChecksumMismatch {
                expected,
                found: self.checksum,
            });
        }
        Ok(())
    }

    /// Parses tagged text. The trailing checksum byte is kept as received.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let (tag, payload) = text
            .split_once(TB64_DELIM)
            .ok_or(FormatError::MissingDelimiter)?;
        if !is_safe_tag(tag) {
            return Err(FormatError::InvalidTag(tag.to_string()));
        }

        let mut bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| FormatError::InvalidBase64(e.to_string()))?;
        let checksum = bytes.pop().ok_or(FormatError::MissingChecksum)?;

        Ok(Self {
            tag: tag.to_string(),
            value: bytes,
            checksum,
        })
    }

    /// Parses tagged text and requires a specific tag.
    pub fn parse_with_tag(text: &str, expected: &str) -> Result<Self, FormatError> {
        let tb = Self::parse(text)?;
        tb.expect_tag(expected)?;
        Ok(tb)
    }

    pub fn expect_tag(&self, expected: &str) -> Result<(), FormatError> {
        if self.tag != expected {
            return Err(FormatError::UnexpectedTag {
                expected: expected.to_string(),
                found: self.tag.clone(),
            });
        }
        Ok(())
    }
}

/// Tags may contain ASCII letters, digits, `-` and `_`. The empty tag is allowed.
pub fn is_safe_tag(tag: &str) -> bool {
    tag.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn checksum(value: &[u8]) -> u8 {
    CRC8.checksum(value)
}

fn render(tag: &str, value: &[u8], checksum: u8) -> String {
    let mut buf = Vec::with_capacity(value.len() + 1);
    buf.extend_from_slice(value);
    buf.push(checksum);
    format!("{tag}{TB64_DELIM}{}", URL_SAFE_NO_PAD.encode(buf))
}

/// Renders `tag` and `value` as tagged text with a fresh checksum, without validating the tag.
pub(crate) fn encode(tag: &str, value: &[u8]) -> String {
    render(tag, value, checksum(value))
}

impl fmt::Display for TaggedBase64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.tag, &self.value, self.checksum))
    }
}

impl fmt::Debug for TaggedBase64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaggedBase64({self})")
    }
}

impl FromStr for TaggedBase64 {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TaggedBase64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaggedBase64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
