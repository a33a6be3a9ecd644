//! Core value types for txmerkle

mod hash;
mod transaction;

pub use hash::Hash;
pub use transaction::{PublicKey, StakingConfig, Transaction};
