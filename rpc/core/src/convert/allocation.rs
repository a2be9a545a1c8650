use crate::model::{RpcAllocationTx, RpcAssetAllocation, RpcAssetOutput, RpcHash};
use syscoin_consensus_core::tx::{AssetOut, Transaction};

impl From<&AssetOut> for RpcAssetAllocation {
    fn from(item: &AssetOut) -> Self {
        Self {
            asset_guid: item.asset_guid,
            outputs: item.values.iter().map(|value| RpcAssetOutput { n: value.n, amount: value.value }).collect(),
            total: item.total(),
        }
    }
}

pub fn allocations_to_rpc(asset_outputs: &[AssetOut]) -> Vec<RpcAssetAllocation> {
    asset_outputs.iter().map(RpcAssetAllocation::from).collect()
}

/// Projects the asset outputs of an asset send or allocation transaction.
/// The burn destination, when there is one, is attached by the caller.
pub fn allocation_tx_to_rpc(tx: &Transaction, block_hash: RpcHash) -> RpcAllocationTx {
    RpcAllocationTx {
        txtype: tx.kind().asset_op_name().to_string(),
        txid: tx.id(),
        blockhash: block_hash,
        allocations: allocations_to_rpc(&tx.asset_outputs),
        ethereum_destination: None,
    }
}
