//! Projection of consensus records into RPC documents.

pub mod allocation;
pub mod asset;
pub mod mint;
pub mod route;
pub mod script;
pub mod systx;
pub mod tx;
