use crate::model::{RpcHash, RpcTransactionId};
use serde::{Deserialize, Serialize};
use syscoin_consensus_core::tx::AssetGuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcAssetOutput {
    pub n: u32,
    pub amount: i64,
}

/// All outputs of one asset. `total` is the sum of the output amounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcAssetAllocation {
    pub asset_guid: AssetGuid,
    pub outputs: Vec<RpcAssetOutput>,
    pub total: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcAllocationTx {
    pub txtype: String,
    pub txid: RpcTransactionId,
    pub blockhash: RpcHash,
    pub allocations: Vec<RpcAssetAllocation>,
    /// `0x` prefixed, burns to ethereum only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ethereum_destination: Option<String>,
}

/// Bridge proof of a mint. Byte strings are hex encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcSpvProof {
    pub bridgetransferid: u32,
    pub txvalue: String,
    pub txparentnodes: String,
    pub txpath: String,
    pub receiptvalue: String,
    pub receiptparentnodes: String,
    pub ethblocknumber: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcMintTx {
    pub txtype: String,
    pub txid: RpcTransactionId,
    pub blockhash: RpcHash,
    pub spv_proof: RpcSpvProof,
    pub allocations: Vec<RpcAssetAllocation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcNotaryDetails {
    pub endpoint: String,
    pub instant_transfers: bool,
    pub hd_required: bool,
}

/// Aux-fee tiers as `[bound, percent]` pairs of decimal strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcAuxFeeDetails {
    pub fee_struct: Vec<(String, String)>,
}

/// An asset activation or update. Every optional key is gated by its own
/// update mask bit, except the activation-only `symbol`, `max_supply` and
/// `precision`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcAssetTx {
    pub txtype: String,
    pub txid: RpcTransactionId,
    pub blockhash: RpcHash,
    pub allocations: Vec<RpcAssetAllocation>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_supply: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub precision: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub public_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notary_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub auxfee_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub auxfee_details: Option<RpcAuxFeeDetails>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notary_details: Option<RpcNotaryDetails>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updatecapability_flags: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub balance: Option<i64>,
    pub update_flags: u8,
}

/// The asset section of a transaction document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcSysTx {
    Mint(RpcMintTx),
    Asset(RpcAssetTx),
    Allocation(RpcAllocationTx),
}
