// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Strict JSON codec shared by every record type.
//!
//! Encoding follows struct field order. Decoding first checks the raw object
//! against the record's [`Schema`], then populates the typed record, so a
//! missing key is always reported as [`DecodeError::MissingField`].

pub mod schema;
pub mod serde_utils;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{CodecError, DecodeError, Result};
use crate::hasher::Committable;

pub use schema::{Field, Schema};

/// A committable record with a strict JSON form.
pub trait Record: Serialize + DeserializeOwned + Committable {
    fn schema() -> &'static Schema;

    fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CodecError::Encode)
    }

    fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(CodecError::Encode)
    }

    fn to_json_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(CodecError::Encode)
    }

    fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(DecodeError::Json)?;
        Self::from_json_value(value)
    }

    fn from_json_value(value: Value) -> Result<Self> {
        let schema = Self::schema();
        schema.check(&value)?;
        serde_json::from_value(value).map_err(|source| {
            DecodeError::InvalidField {
                record: schema.record,
                source,
            }
            .into()
        })
    }
}
