use crate::{
    RpcResult,
    api::address::AddressEncoder,
    convert::{allocation::allocation_tx_to_rpc, asset::asset_tx_to_rpc, mint::mint_tx_to_rpc, route::PayloadRoute},
    model::{RpcHash, RpcSysTx},
};
use log::{debug, trace};
use syscoin_consensus_core::{
    assets::{AssetPayload, BurnToEthereum},
    errors::payload::{PayloadError, PayloadResult},
    tx::Transaction,
};
use syscoin_txscript::{extract_data_carrier, opcodes::codes};

/// Returns the asset payload of a transaction: the first push of its first
/// output that starts with OP_RETURN.
pub fn asset_payload(tx: &Transaction) -> PayloadResult<&[u8]> {
    tx.outputs
        .iter()
        .find(|output| output.script_public_key.first() == Some(&codes::OpReturn))
        .and_then(|output| extract_data_carrier(&output.script_public_key))
        .ok_or(PayloadError::MissingDataCarrier)
}

fn ethereum_destination(tx: &Transaction) -> RpcResult<String> {
    let burn = BurnToEthereum::decode(asset_payload(tx)?)?;
    Ok(format!("0x{}", hex::encode(burn.ethereum_destination)))
}

fn project(tx: &Transaction, route: PayloadRoute, block_hash: RpcHash, encoder: &dyn AddressEncoder) -> RpcResult<Option<RpcSysTx>> {
    let systx = match route {
        PayloadRoute::Mint => RpcSysTx::Mint(mint_tx_to_rpc(tx, asset_payload(tx)?, block_hash)?),
        PayloadRoute::Asset => RpcSysTx::Asset(asset_tx_to_rpc(tx, asset_payload(tx)?, block_hash, encoder)?),
        PayloadRoute::Allocation => RpcSysTx::Allocation(allocation_tx_to_rpc(tx, block_hash)),
        PayloadRoute::BurnToEthereum => {
            let mut allocation = allocation_tx_to_rpc(tx, block_hash);
            allocation.ethereum_destination = Some(ethereum_destination(tx)?);
            RpcSysTx::Allocation(allocation)
        }
        PayloadRoute::None
        | PayloadRoute::ProRegTx
        | PayloadRoute::ProUpServTx
        | PayloadRoute::ProUpRegTx
        | PayloadRoute::ProUpRevTx
        | PayloadRoute::CbTx
        | PayloadRoute::QcTx => return Ok(None),
    };
    Ok(Some(systx))
}

/// Projects the asset section of a transaction.
///
/// Returns `None` for versions without an asset payload and for payloads that
/// fail to decode. An unknown block renders as the zero hash.
pub fn systx_to_rpc(tx: &Transaction, block_hash: Option<RpcHash>, encoder: &dyn AddressEncoder) -> Option<RpcSysTx> {
    let route = PayloadRoute::from(tx.kind());
    if !route.is_systx() {
        return None;
    }
    trace!("Routing the payload of transaction {} to {}", tx.id(), route);
    match project(tx, route, block_hash.unwrap_or_default(), encoder) {
        Ok(systx) => systx,
        Err(err) => {
            debug!("The {} payload of transaction {} was not decoded: {}", route, tx.id(), err);
            None
        }
    }
}
