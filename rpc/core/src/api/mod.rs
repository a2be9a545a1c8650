//! Collaborators the projection calls out to.
//!
//! Address string encoding depends on the network parameters and the
//! masternode payload formats are owned by their own subsystems, so both are
//! supplied by the caller.

pub mod address;
pub mod special;
