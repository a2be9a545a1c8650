use crate::model::{RpcHash, RpcScriptPubKey, RpcScriptSig, RpcSysTx};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use syscoin_consensus_core::{Amount, tx::TransactionId};

/// Represents the ID of a transaction
pub type RpcTransactionId = TransactionId;

/// What an input spends: the block reward or a previous output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcInputSource {
    Coinbase {
        coinbase: String,
    },
    Outpoint {
        txid: RpcTransactionId,
        vout: u32,
        #[serde(rename = "scriptSig")]
        script_sig: RpcScriptSig,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcTransactionInput {
    #[serde(flatten)]
    pub source: RpcInputSource,
    /// Hex encoded witness stack items, present when the stack is not empty
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub txinwitness: Option<Vec<String>>,
    pub sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcTransactionOutput {
    pub value: Amount,
    pub n: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: RpcScriptPubKey,
}

/// The canonical document of a transaction.
///
/// At most one of the masternode payload keys is present, except for a quorum
/// commitment which emits its nested `cbTx` ahead of `qcTx`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    pub txid: RpcTransactionId,
    /// Witness-inclusive hash
    pub hash: RpcHash,
    pub version: u32,
    pub size: u64,
    pub vsize: u64,
    pub weight: u64,
    pub locktime: u32,
    pub vin: Vec<RpcTransactionInput>,
    pub vout: Vec<RpcTransactionOutput>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pro_reg_tx: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pro_up_serv_tx: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pro_up_reg_tx: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pro_up_rev_tx: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cb_tx: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub qc_tx: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub systx: Option<RpcSysTx>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blockhash: Option<RpcHash>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hex: Option<String>,
}
