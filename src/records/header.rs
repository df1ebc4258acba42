// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::codec::serde_utils::{hash_comm, merkle_comm};
use crate::codec::{Field, Record, Schema};
use crate::config::domain;
use crate::hasher::{Committable, RawCommitmentBuilder};
use crate::records::l1_block::{L1BlockInfo, L1_BLOCK_SCHEMA};
use crate::types::commitment::Commitment;
use crate::types::tagged::TaggedBase64;

pub static HEADER_SCHEMA: Schema = Schema {
    record: "Header",
    fields: &[
        Field::required("height"),
        Field::required("timestamp"),
        Field::required("l1_head"),
        Field::optional("l1_finalized").nested(&L1_BLOCK_SCHEMA),
        Field::required("payload_commitment"),
        Field::required("block_merkle_tree_root"),
        Field::required("fee_merkle_tree_root"),
    ],
};

/// Canonical header of one sequenced block.
///
/// `l1_finalized` is `None` until an L1 block has been finalized; that is not the
/// same as a zero-valued [`L1BlockInfo`] and commits differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub height: u64,
    pub timestamp: u64,
    pub l1_head: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l1_finalized: Option<L1BlockInfo>,
    /// Payload commitment text, kept as received.
    #[serde(with = "hash_comm")]
    pub payload_commitment: TaggedBase64,
    /// Serialized Merkle commitment: root digest, tree height, leaf count.
    #[serde(with = "merkle_comm")]
    pub block_merkle_tree_root: TaggedBase64,
    #[serde(with = "merkle_comm")]
    pub fee_merkle_tree_root: TaggedBase64,
}

impl Committable for Header {
    const TAG: &'static str = domain::HEADER;

    fn commit(&self) -> Commitment {
        let l1_finalized = self.l1_finalized.as_ref().map(|l1| l1.commit());
        RawCommitmentBuilder::new(Self::TAG)
            .u64_field("height", self.height)
            .u64_field("timestamp", self.timestamp)
            .u64_field("l1_head", self.l1_head)
            .optional("l1_finalized", l1_finalized.as_ref())
            .fixed_size_field("payload_commitment", self.payload_commitment.value())
            .var_size_field("block_merkle_tree_root", self.block_merkle_tree_root.value())
            .var_size_field("fee_merkle_tree_root", self.fee_merkle_tree_root.value())
            .finalize()
    }
}

impl Record for Header {
    fn schema() -> &'static Schema {
        &HEADER_SCHEMA
    }
}
