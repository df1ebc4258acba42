// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::codec::{Field, Record, Schema};
use crate::config::domain;
use crate::hasher::{Committable, RawCommitmentBuilder};
use crate::types::commitment::Commitment;

pub static TRANSACTION_SCHEMA: Schema = Schema {
    record: "Transaction",
    fields: &[Field::required("vm"), Field::required("payload")],
};

/// Opaque payload addressed to one VM namespace.
///
/// `payload` encodes as a JSON array of byte values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub vm: u64,
    pub payload: Vec<u8>,
}

impl Transaction {
    pub fn new(vm: u64, payload: Vec<u8>) -> Self {
        Self { vm, payload }
    }
}

impl Committable for Transaction {
    const TAG: &'static str = domain::TRANSACTION;

    fn commit(&self) -> Commitment {
        RawCommitmentBuilder::new(Self::TAG)
            .u64_field("vm", self.vm)
            .var_size_field("payload", &self.payload)
            .finalize()
    }
}

impl Record for Transaction {
    fn schema() -> &'static Schema {
        &TRANSACTION_SCHEMA
    }
}
