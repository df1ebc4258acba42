// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

/// Malformed text: hex, base64, tagged text, or a byte string of the wrong length.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing 0x prefix")]
    MissingHexPrefix,

    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),

    #[error("empty hex string")]
    EmptyHex,

    #[error("value does not fit in 256 bits")]
    Overflow,

    #[error("invalid length: expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("missing tag delimiter '~'")]
    MissingDelimiter,

    #[error("invalid tag {0:?}")]
    InvalidTag(String),

    #[error("unexpected tag: expected {expected:?}, found {found:?}")]
    UnexpectedTag { expected: String, found: String },

    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("missing checksum byte")]
    MissingChecksum,

    #[error("checksum mismatch: expected {expected:#04x}, found {found:#04x}")]
    ChecksumMismatch { expected: u8, found: u8 },
}

/// A 256-bit value that is not a valid field element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("value {0} is not below the field modulus")]
    NotInField(String),
}

/// A JSON document that does not describe a valid record.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("{record}: expected a JSON object")]
    NotAnObject { record: &'static str },

    #[error("{record}: missing required field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("{record}: {source}")]
    InvalidField {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("range error: {0}")]
    Range(#[from] RangeError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
