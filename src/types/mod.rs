// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod commitment;
pub mod tagged;
pub mod u256;

pub use commitment::Commitment;
pub use tagged::TaggedBase64;
pub use u256::U256;
