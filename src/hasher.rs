// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Domain-separated commitment hashing.
//!
//! Encoding fed to Keccak-256:
//! - constant strings (tag and field names): ASCII bytes followed by `0xC0 0x7F`
//! - `u64`: 8 bytes little-endian
//! - `U256`: 32 bytes little-endian
//! - fixed-size bytes: raw
//! - variable-size bytes: `u64` little-endian length, then the bytes
//! - optional nested commitment: presence byte (`0`/`1`), then the commitment if present
//!
//! Every record starts with its domain tag, and every field is its name followed by its value.

use alloy_primitives::Keccak256;

use crate::config::STRING_TERMINATOR;
use crate::types::commitment::Commitment;
use crate::types::u256::U256;

/// A record with a canonical commitment.
pub trait Committable {
    /// Domain tag written first into the hash.
    const TAG: &'static str;

    fn commit(&self) -> Commitment;
}

/// Incremental commitment builder. Field order is part of the contract.
pub struct RawCommitmentBuilder {
    hasher: Keccak256,
}

impl RawCommitmentBuilder {
    /// Starts a builder and writes the domain tag.
    pub fn new(tag: &str) -> Self {
        Self {
            hasher: Keccak256::new(),
        }
        .constant_str(tag)
    }

    pub fn constant_str(mut self, s: &str) -> Self {
        debug_assert!(s.is_ascii(), "constant strings must be ASCII");
        self.hasher.update(s.as_bytes());
        self.hasher.update(STRING_TERMINATOR);
        self
    }

    pub fn fixed_size_bytes(mut self, bytes: &[u8]) -> Self {
        self.hasher.update(bytes);
        self
    }

    pub fn u64(mut self, n: u64) -> Self {
        self.hasher.update(n.to_le_bytes());
        self
    }

    pub fn u256(mut self, n: &U256) -> Self {
        self.hasher.update(n.to_le_bytes());
        self
    }

    /// Length-prefixed bytes.
    pub fn var_size_bytes(self, bytes: &[u8]) -> Self {
        self.u64(bytes.len() as u64).fixed_size_bytes(bytes)
    }

    pub fn u64_field(self, name: &str, n: u64) -> Self {
        self.constant_str(name).u64(n)
    }

    pub fn u256_field(self, name: &str, n: &U256) -> Self {
        self.constant_str(name).u256(n)
    }

    pub fn fixed_size_field(self, name: &str, bytes: &[u8]) -> Self {
        self.constant_str(name).fixed_size_bytes(bytes)
    }

    pub fn var_size_field(self, name: &str, bytes: &[u8]) -> Self {
        self.constant_str(name).var_size_bytes(bytes)
    }

    /// A nested commitment under `name`.
    pub fn field(self, name: &str, commitment: &Commitment) -> Self {
        self.constant_str(name).fixed_size_bytes(commitment.as_bytes())
    }

    /// An optional nested commitment. Absent and present values never collide.
    pub fn optional(self, name: &str, commitment: Option<&Commitment>) -> Self {
        let builder = self.constant_str(name);
        match commitment {
            Some(c) => builder.fixed_size_bytes(&[1]).fixed_size_bytes(c.as_bytes()),
            None => builder.fixed_size_bytes(&[0]),
        }
    }

    pub fn finalize(self) -> Commitment {
        Commitment::from_bytes(self.hasher.finalize().0)
    }
}
