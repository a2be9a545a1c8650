//! Documents produced by the transaction projection.
//!
//! Field order is part of the contract: consumers compare documents textually,
//! so every struct declares its fields in emission order.

pub mod script;
pub mod systx;
pub mod tx;

pub use script::*;
pub use systx::*;
pub use tx::*;

pub type RpcHash = syscoin_hashes::Hash;
