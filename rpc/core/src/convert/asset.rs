use crate::{
    RpcResult,
    api::address::AddressEncoder,
    convert::allocation::allocations_to_rpc,
    model::{RpcAssetTx, RpcAuxFeeDetails, RpcHash, RpcNotaryDetails},
};
use syscoin_consensus_core::{
    amount::format_asset_amount,
    assets::{Asset, AuxFeeDetails, NotaryDetails},
    constants::KEY_ID_SIZE,
    tx::{Transaction, TxKind},
};
use syscoin_txscript::Destination;

/// Aux-fee percents are stored scaled by this factor
const AUXFEE_PERCENT_SCALE: f64 = 100_000.0;

impl From<&NotaryDetails> for RpcNotaryDetails {
    fn from(item: &NotaryDetails) -> Self {
        Self { endpoint: item.endpoint.clone(), instant_transfers: item.instant_transfers, hd_required: item.hd_required }
    }
}

/// Renders the fee schedule with bounds at the asset's precision
fn auxfee_details_to_rpc(details: &AuxFeeDetails, precision: u8) -> RpcResult<RpcAuxFeeDetails> {
    let fee_struct = details
        .fees
        .iter()
        .map(|fee| -> RpcResult<(String, String)> {
            Ok((format_asset_amount(fee.bound, precision)?, format!("{:.5}", fee.percent as f64 / AUXFEE_PERCENT_SCALE)))
        })
        .collect::<RpcResult<_>>()?;
    Ok(RpcAuxFeeDetails { fee_struct })
}

fn key_address(key_id: &[u8; KEY_ID_SIZE], encoder: &dyn AddressEncoder) -> String {
    encoder.encode(&Destination::WitnessV0KeyHash(*key_id))
}

/// Projects an asset activation or update. Allocations are the transaction's
/// asset outputs; the payload supplies the asset definition.
pub fn asset_tx_to_rpc(tx: &Transaction, payload: &[u8], block_hash: RpcHash, encoder: &dyn AddressEncoder) -> RpcResult<RpcAssetTx> {
    let kind = tx.kind();
    let asset = Asset::decode(payload, kind == TxKind::AssetActivate)?;
    let (symbol, max_supply, precision) = match &asset.init {
        Some(init) => (Some(init.symbol.clone()), Some(init.max_supply), Some(asset.precision)),
        None => (None, None, None),
    };

    Ok(RpcAssetTx {
        txtype: kind.asset_op_name().to_string(),
        txid: tx.id(),
        blockhash: block_hash,
        allocations: allocations_to_rpc(&tx.asset_outputs),
        symbol,
        max_supply,
        precision,
        public_value: asset.public_value.clone(),
        contract: asset.contract.as_ref().map(|contract| format!("0x{}", hex::encode(contract))),
        notary_address: asset.notary_key_id.as_ref().map(|key_id| key_address(key_id, encoder)),
        auxfee_address: asset.auxfee_key_id.as_ref().map(|key_id| key_address(key_id, encoder)),
        auxfee_details: asset.auxfee_details.as_ref().map(|details| auxfee_details_to_rpc(details, asset.precision)).transpose()?,
        notary_details: asset.notary_details.as_ref().map(RpcNotaryDetails::from),
        updatecapability_flags: asset.update_capability_flags,
        balance: asset.balance,
        update_flags: asset.update_mask().bits(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RpcError,
        convert::tests::{TestEncoder, transfer},
    };
    use serde_json::json;
    use std::collections::BTreeSet;
    use syscoin_consensus_core::{
        assets::{AssetInit, AuxFee, UpdateMask},
        constants::tx_version,
        errors::payload::PayloadError,
        tx::{AssetOut, AssetOutValue},
    };

    /// Document keys gated by each mask bit, in bit order
    const GATED_KEYS: [(UpdateMask, &str); 8] = [
        (UpdateMask::DATA, "public_value"),
        (UpdateMask::CONTRACT, "contract"),
        (UpdateMask::SUPPLY, "balance"),
        (UpdateMask::NOTARY_KEY, "notary_address"),
        (UpdateMask::NOTARY_DETAILS, "notary_details"),
        (UpdateMask::AUXFEE_KEY, "auxfee_address"),
        (UpdateMask::AUXFEE_DETAILS, "auxfee_details"),
        (UpdateMask::CAPABILITY_FLAGS, "updatecapability_flags"),
    ];

    fn asset_with_mask(mask: UpdateMask) -> Asset {
        let mut asset = Asset { precision: 2, ..Default::default() };
        if mask.contains(UpdateMask::DATA) {
            asset.public_value = Some("{\"desc\":\"token\"}".to_string());
        }
        if mask.contains(UpdateMask::CONTRACT) {
            asset.contract = Some(vec![0xde; 20]);
        }
        if mask.contains(UpdateMask::SUPPLY) {
            asset.balance = Some(1_000);
        }
        if mask.contains(UpdateMask::NOTARY_KEY) {
            asset.notary_key_id = Some([0x01; KEY_ID_SIZE]);
        }
        if mask.contains(UpdateMask::NOTARY_DETAILS) {
            asset.notary_details = Some(NotaryDetails { endpoint: "https://notary".to_string(), instant_transfers: true, hd_required: false });
        }
        if mask.contains(UpdateMask::AUXFEE_KEY) {
            asset.auxfee_key_id = Some([0x02; KEY_ID_SIZE]);
        }
        if mask.contains(UpdateMask::AUXFEE_DETAILS) {
            asset.auxfee_details = Some(AuxFeeDetails { fees: vec![AuxFee { bound: 0, percent: 1_000 }] });
        }
        if mask.contains(UpdateMask::CAPABILITY_FLAGS) {
            asset.update_capability_flags = Some(0xff);
        }
        asset
    }

    #[test]
    fn test_mask_gating() {
        let tx = transfer(tx_version::ASSET_UPDATE);
        for bits in 0..=u8::MAX {
            let mask = UpdateMask::from_bits_retain(bits);
            let asset = asset_with_mask(mask);
            assert_eq!(asset.update_mask(), mask);

            let projected = asset_tx_to_rpc(&tx, &asset.encode(), RpcHash::ZERO, &TestEncoder).unwrap();
            let rendered = serde_json::to_value(&projected).unwrap();
            let present: BTreeSet<&str> = GATED_KEYS
                .iter()
                .filter(|(_, key)| rendered.get(*key).is_some())
                .map(|(_, key)| *key)
                .collect();
            let expected: BTreeSet<&str> = GATED_KEYS.iter().filter(|(flag, _)| mask.contains(*flag)).map(|(_, key)| *key).collect();
            assert_eq!(present, expected, "mask {bits:#04x} gated wrongly");
            assert_eq!(rendered["update_flags"], json!(bits));
            assert!(rendered.get("symbol").is_none() && rendered.get("precision").is_none(), "update carries activation keys");
        }
    }

    #[test]
    fn test_activation_document() {
        let asset = Asset {
            precision: 4,
            init: Some(AssetInit { symbol: "CAT".to_string(), max_supply: 21_000_000 }),
            contract: Some(vec![0xab; 20]),
            notary_key_id: Some([0x07; KEY_ID_SIZE]),
            auxfee_details: Some(AuxFeeDetails {
                fees: vec![AuxFee { bound: 0, percent: 1_000 }, AuxFee { bound: 1_250_000, percent: 250 }],
            }),
            ..Default::default()
        };
        let tx = transfer(tx_version::ASSET_ACTIVATE).with_asset_outputs(vec![AssetOut::new(11, vec![AssetOutValue::new(0, 0)])]);
        let block_hash = RpcHash::from_bytes([0x09; 32]);

        let projected = asset_tx_to_rpc(&tx, &asset.encode(), block_hash, &TestEncoder).unwrap();
        let rendered = serde_json::to_string(&projected).unwrap();
        let expected = json!({
            "txtype": "assetactivate",
            "txid": tx.id().to_string(),
            "blockhash": block_hash.to_string(),
            "allocations": [{ "asset_guid": 11, "outputs": [{ "n": 0, "amount": 0 }], "total": 0 }],
            "symbol": "CAT",
            "max_supply": 21_000_000,
            "precision": 4,
            "contract": format!("0x{}", "ab".repeat(20)),
            "notary_address": format!("wpkh:{}", "07".repeat(20)),
            "auxfee_details": { "fee_struct": [["0.0000", "0.01000"], ["125.0000", "0.00250"]] },
            "update_flags": 0x4a,
        });
        assert_eq!(rendered, serde_json::to_string(&expected).unwrap());
    }

    #[test]
    fn test_asset_rejects() {
        let activation = transfer(tx_version::ASSET_ACTIVATE);
        let update_payload = asset_with_mask(UpdateMask::empty()).encode();
        // an update record lacks the activation fields
        assert!(matches!(
            asset_tx_to_rpc(&activation, &update_payload, RpcHash::ZERO, &TestEncoder),
            Err(RpcError::Payload(PayloadError::UnexpectedEnd(..)))
        ));

        let update = transfer(tx_version::ASSET_UPDATE);
        let mut bad_precision = update_payload.clone();
        bad_precision[1] = 9;
        assert_eq!(
            asset_tx_to_rpc(&update, &bad_precision, RpcHash::ZERO, &TestEncoder),
            Err(RpcError::Payload(PayloadError::InvalidPrecision(9)))
        );
    }
}
