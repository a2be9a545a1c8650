use crate::{
    RpcError, RpcResult,
    convert::allocation::allocations_to_rpc,
    model::{RpcHash, RpcMintTx, RpcSpvProof},
};
use syscoin_consensus_core::{
    assets::{AssetPayload, MintSyscoin},
    tx::Transaction,
};

impl TryFrom<&MintSyscoin> for RpcSpvProof {
    type Error = RpcError;

    fn try_from(item: &MintSyscoin) -> RpcResult<Self> {
        Ok(Self {
            bridgetransferid: item.bridge_transfer_id,
            txvalue: hex::encode(item.tx.resolved_value()?),
            txparentnodes: hex::encode(&item.tx.parent_nodes),
            txpath: hex::encode(&item.tx_path),
            receiptvalue: hex::encode(item.receipt.resolved_value()?),
            receiptparentnodes: hex::encode(&item.receipt.parent_nodes),
            ethblocknumber: item.block_number,
        })
    }
}

/// Projects a bridge mint together with the transaction's asset outputs.
pub fn mint_tx_to_rpc(tx: &Transaction, payload: &[u8], block_hash: RpcHash) -> RpcResult<RpcMintTx> {
    let mint = MintSyscoin::decode(payload)?;
    Ok(RpcMintTx {
        txtype: tx.kind().asset_op_name().to_string(),
        txid: tx.id(),
        blockhash: block_hash,
        spv_proof: RpcSpvProof::try_from(&mint)?,
        allocations: allocations_to_rpc(&tx.asset_outputs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{allocation::allocation_tx_to_rpc, tests::transfer};
    use serde_json::json;
    use syscoin_consensus_core::{
        assets::{AssetAllocation, ProofSlice},
        constants::tx_version,
        errors::payload::PayloadError,
        tx::{AssetOut, AssetOutValue},
    };

    fn mint(tx_value: &[u8], receipt_value: &[u8]) -> MintSyscoin {
        MintSyscoin {
            allocation: AssetAllocation::new(vec![AssetOut::new(9, vec![AssetOutValue::new(1, 700)])]),
            bridge_transfer_id: 77,
            block_number: 1_200_000,
            tx: ProofSlice::new(tx_value.to_vec(), b"ABCDEFGH".to_vec()),
            tx_path: vec![0x80, 0x01],
            receipt: ProofSlice::new(receipt_value.to_vec(), b"receipt".to_vec()),
        }
    }

    #[test]
    fn test_mint_document() {
        let tx = transfer(tx_version::ALLOCATION_MINT).with_asset_outputs(vec![AssetOut::new(9, vec![AssetOutValue::new(1, 700)])]);
        let payload = mint(&[0x00, 0x05], &[0xaa, 0xbb, 0xcc]).encode();
        let rendered = serde_json::to_value(mint_tx_to_rpc(&tx, &payload, RpcHash::ZERO).unwrap()).unwrap();
        assert_eq!(
            rendered,
            json!({
                "txtype": "assetallocationmint",
                "txid": tx.id().to_string(),
                "blockhash": "00".repeat(32),
                "spv_proof": {
                    "bridgetransferid": 77,
                    "txvalue": hex::encode(b"FGH"),
                    "txparentnodes": hex::encode(b"ABCDEFGH"),
                    "txpath": "8001",
                    "receiptvalue": "aabbcc",
                    "receiptparentnodes": hex::encode(b"receipt"),
                    "ethblocknumber": 1_200_000,
                },
                "allocations": [{ "asset_guid": 9, "outputs": [{ "n": 1, "amount": 700 }], "total": 700 }],
            })
        );
    }

    #[test]
    fn test_mint_allocations_match_the_transaction() {
        // the record carries guid 9, the transaction guid 1
        let tx = transfer(tx_version::ALLOCATION_MINT).with_asset_outputs(vec![AssetOut::new(1, vec![AssetOutValue::new(0, 5)])]);
        let projected = mint_tx_to_rpc(&tx, &mint(&[0x01], &[0x02]).encode(), RpcHash::ZERO).unwrap();
        assert_eq!(projected.allocations, allocation_tx_to_rpc(&tx, RpcHash::ZERO).allocations);
        assert_eq!(projected.allocations[0].asset_guid, 1);
        assert_eq!(projected.allocations[0].total, 5);
    }

    #[test]
    fn test_mint_rejects() {
        let tx = transfer(tx_version::ALLOCATION_MINT);

        let out_of_range = mint(&[0x00, 0x09], &[0x02]).encode();
        assert_eq!(mint_tx_to_rpc(&tx, &out_of_range, RpcHash::ZERO), Err(RpcError::Payload(PayloadError::ProofOffsetOutOfRange(9, 8))));

        let payload = mint(&[0x01], &[0x02]).encode();
        let truncated = &payload[..payload.len() - 1];
        assert!(matches!(mint_tx_to_rpc(&tx, truncated, RpcHash::ZERO), Err(RpcError::Payload(PayloadError::UnexpectedEnd(..)))));
    }
}
