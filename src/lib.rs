// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! sequencer-commit: canonical commitments and strict JSON for sequencer records.
//!
//! Every record hashes to a [`Commitment`] that must match other implementations bit for bit,
//! and decodes only from JSON carrying all of its required keys.

pub mod config;
pub mod error;
pub mod types;
pub mod hasher;
pub mod codec;
pub mod records;

pub use codec::{Record, Schema};
pub use error::{CodecError, DecodeError, FormatError, RangeError, Result};
pub use hasher::{Committable, RawCommitmentBuilder};
pub use records::{Header, L1BlockInfo, Transaction};
pub use types::{Commitment, TaggedBase64, U256};

#[cfg(test)]
pub mod tests;
