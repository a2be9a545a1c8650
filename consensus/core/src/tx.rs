mod kind;

pub use kind::TxKind;

use crate::{constants::SEQUENCE_FINAL, hashing, mass};
use syscoin_hashes::Hash;

/// Represents the ID of a transaction
pub type TransactionId = Hash;

/// Identifier of an asset within the asset-output mapping
pub type AssetGuid = u32;

pub type ScriptVec = Vec<u8>;

/// The input witness stack
pub type Witness = Vec<Vec<u8>>;

/// Represents a transaction outpoint
#[derive(Eq, Hash, PartialEq, Debug, Copy, Clone)]
pub struct TransactionOutpoint {
    pub transaction_id: TransactionId,
    pub index: u32,
}

impl TransactionOutpoint {
    pub fn new(transaction_id: TransactionId, index: u32) -> Self {
        Self { transaction_id, index }
    }

    /// The outpoint referenced by a coinbase input.
    pub fn null() -> Self {
        Self { transaction_id: Hash::ZERO, index: u32::MAX }
    }

    pub fn is_null(&self) -> bool {
        self.transaction_id.is_zero() && self.index == u32::MAX
    }
}

/// Represents a transaction input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    pub previous_outpoint: TransactionOutpoint,
    pub signature_script: ScriptVec,
    pub sequence: u32,
    pub witness: Witness,
}

impl TransactionInput {
    pub fn new(previous_outpoint: TransactionOutpoint, signature_script: ScriptVec, sequence: u32) -> Self {
        Self { previous_outpoint, signature_script, sequence, witness: Vec::new() }
    }

    pub fn with_witness(mut self, witness: Witness) -> Self {
        self.witness = witness;
        self
    }

    pub fn has_witness(&self) -> bool {
        !self.witness.is_empty()
    }
}

/// Represents a transaction output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionOutput {
    pub value: i64,
    pub script_public_key: ScriptVec,
}

impl TransactionOutput {
    pub fn new(value: i64, script_public_key: ScriptVec) -> Self {
        Self { value, script_public_key }
    }
}

/// One (output index, amount) pair of an asset allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetOutValue {
    pub n: u32,
    pub value: i64,
}

impl AssetOutValue {
    pub fn new(n: u32, value: i64) -> Self {
        Self { n, value }
    }
}

/// All outputs of a single asset within a transaction, in the order they appear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetOut {
    pub asset_guid: AssetGuid,
    pub values: Vec<AssetOutValue>,
}

impl AssetOut {
    pub fn new(asset_guid: AssetGuid, values: Vec<AssetOutValue>) -> Self {
        Self { asset_guid, values }
    }

    /// Sum of all amounts of this asset. Overflow is excluded by consensus.
    pub fn total(&self) -> i64 {
        self.values.iter().map(|value| value.value).sum()
    }
}

/// Represents an immutable, already validated transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
    /// Asset allocations carried by the transaction, in encounter order
    pub asset_outputs: Vec<AssetOut>,
    /// Payload of masternode-special versions, serialized after the lock time
    pub extra_payload: Vec<u8>,
}

impl Transaction {
    pub fn new(version: i32, inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>, lock_time: u32) -> Self {
        Self { version, inputs, outputs, lock_time, asset_outputs: Vec::new(), extra_payload: Vec::new() }
    }

    pub fn with_asset_outputs(mut self, asset_outputs: Vec<AssetOut>) -> Self {
        self.asset_outputs = asset_outputs;
        self
    }

    pub fn with_extra_payload(mut self, extra_payload: Vec<u8>) -> Self {
        self.extra_payload = extra_payload;
        self
    }

    pub fn kind(&self) -> TxKind {
        TxKind::from_version(self.version)
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_outpoint.is_null()
    }

    pub fn has_witness(&self) -> bool {
        self.inputs.iter().any(TransactionInput::has_witness)
    }

    /// Witness-stripped identifier
    pub fn id(&self) -> TransactionId {
        hashing::tx::id(self)
    }

    /// Witness-inclusive identifier
    pub fn witness_hash(&self) -> Hash {
        hashing::tx::witness_hash(self)
    }

    pub fn size(&self) -> u64 {
        mass::serialized_size(self)
    }

    pub fn weight(&self) -> u64 {
        mass::transaction_weight(self)
    }

    pub fn vsize(&self) -> u64 {
        mass::virtual_size(self)
    }
}

impl Default for TransactionInput {
    fn default() -> Self {
        Self::new(TransactionOutpoint::null(), Vec::new(), SEQUENCE_FINAL)
    }
}
