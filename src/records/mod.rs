// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Sequencer records: L1 anchor info, block header, transaction.

pub mod header;
pub mod l1_block;
pub mod transaction;

pub use header::Header;
pub use l1_block::L1BlockInfo;
pub use transaction::Transaction;
