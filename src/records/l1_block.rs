// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::codec::serde_utils::hex32;
use crate::codec::{Field, Record, Schema};
use crate::config::domain;
use crate::hasher::{Committable, RawCommitmentBuilder};
use crate::types::commitment::Commitment;
use crate::types::u256::U256;

pub static L1_BLOCK_SCHEMA: Schema = Schema {
    record: "L1BlockInfo",
    fields: &[
        Field::required("number"),
        Field::required("timestamp"),
        Field::required("hash"),
    ],
};

/// Reference to a block on the L1 chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct L1BlockInfo {
    pub number: u64,
    pub timestamp: U256,
    #[serde(with = "hex32")]
    pub hash: B256,
}

impl Committable for L1BlockInfo {
    const TAG: &'static str = domain::L1_BLOCK;

    fn commit(&self) -> Commitment {
        RawCommitmentBuilder::new(Self::TAG)
            .u64_field("number", self.number)
            .u256_field("timestamp", &self.timestamp)
            .fixed_size_field("hash", self.hash.as_slice())
            .finalize()
    }
}

impl Record for L1BlockInfo {
    fn schema() -> &'static Schema {
        &L1_BLOCK_SCHEMA
    }
}
