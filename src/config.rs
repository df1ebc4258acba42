// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants.
//!
//! Everything here is part of the cross-implementation contract. Changing any value changes
//! every commitment or every wire string produced by this crate.

use crate::types::u256::U256;

/// Separates the tag from the base64 payload in tagged text.
pub const TB64_DELIM: char = '~';

/// Tag for plain 32-byte hashes (payload commitments, standalone commitments).
pub const TAG_HASH: &str = "HASH";

/// Tag for serialized Merkle tree commitments.
pub const TAG_MERKLE_COMM: &str = "MERKLE_COMM";

/// Appended to every constant string fed to the commitment hasher.
/// `0xC0 0x7F` never occurs in valid UTF-8.
pub const STRING_TERMINATOR: [u8; 2] = [0xC0, 0x7F];

/// Length of a commitment digest in bytes.
pub const COMMITMENT_LEN: usize = 32;

/// Order of the BN254 scalar field. A commitment used as a field element must be below it.
///
/// `0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001`
pub const FIELD_MODULUS: U256 = U256::from_limbs([
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

/// Domain tags, one per record type.
pub mod domain {
    pub const L1_BLOCK: &str = "L1BLOCK";
    pub const HEADER: &str = "HEADER";
    pub const TRANSACTION: &str = "TRANSACTION";
}
