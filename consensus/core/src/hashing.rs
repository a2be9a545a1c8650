pub mod sighash_type;
pub mod tx;
