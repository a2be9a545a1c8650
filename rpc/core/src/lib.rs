//! # RPC Core
//!
//! Projection of transactions into the canonical JSON documents served by the
//! node RPC: the [`TransactionProjector`](convert::tx::TransactionProjector)
//! building the full transaction document, the `systx` asset section, script
//! decoding and the document model itself.
//!
//! Address encoding and the masternode payload formats are supplied by the
//! caller through the traits in [`api`].

pub mod api;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;

pub mod prelude {
    //! Re-exports of the most commonly used types and traits in this crate.
    pub use super::api::{address::AddressEncoder, special::*};
    pub use super::config::TxProjectionConfig;
    pub use super::convert::{script::script_to_rpc, systx::systx_to_rpc, tx::TransactionProjector};
    pub use super::model::*;
}

pub use api::{address::AddressEncoder, special::*};
pub use config::TxProjectionConfig;
pub use convert::{route::PayloadRoute, script::script_to_rpc, systx::systx_to_rpc, tx::TransactionProjector};
pub use error::*;
pub use model::*;
