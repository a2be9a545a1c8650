//! Serialized size and BIP141 weight of a transaction.

use crate::{
    constants::WITNESS_SCALE_FACTOR,
    hashing::tx::{TxEncodingFlags, serialize},
    tx::Transaction,
};

/// Length of the full (witness-inclusive) encoding
pub fn serialized_size(tx: &Transaction) -> u64 {
    serialize(tx, TxEncodingFlags::FULL).len() as u64
}

/// Length of the encoding without witness data
pub fn stripped_size(tx: &Transaction) -> u64 {
    serialize(tx, TxEncodingFlags::EXCLUDE_WITNESS).len() as u64
}

pub fn transaction_weight(tx: &Transaction) -> u64 {
    stripped_size(tx) * (WITNESS_SCALE_FACTOR - 1) + serialized_size(tx)
}

/// Weight divided by the scale factor, rounded up
pub fn virtual_size(tx: &Transaction) -> u64 {
    transaction_weight(tx).div_ceil(WITNESS_SCALE_FACTOR)
}
