use crate::{
    api::{
        address::AddressEncoder,
        special::{NoSpecialTxDecoder, QuorumCommitment, SpecialTxDecoder},
    },
    config::TxProjectionConfig,
    convert::{
        route::PayloadRoute,
        script::{script_pub_key_to_rpc, script_sig_to_rpc},
        systx::systx_to_rpc,
    },
    model::{RpcHash, RpcInputSource, RpcTransaction, RpcTransactionInput, RpcTransactionOutput},
};
use log::trace;
use syscoin_consensus_core::{
    Amount,
    hashing::tx::{TxEncodingFlags, serialize},
    tx::{Transaction, TransactionInput, TransactionOutput},
};

// ----------------------------------------------------------------------------
// consensus_core to rpc_core
// ----------------------------------------------------------------------------

/// Projects an input. Only the first input of a coinbase shows its script as `coinbase`.
pub fn input_to_rpc(input: &TransactionInput, is_coinbase: bool) -> RpcTransactionInput {
    let source = if is_coinbase {
        RpcInputSource::Coinbase { coinbase: hex::encode(&input.signature_script) }
    } else {
        RpcInputSource::Outpoint {
            txid: input.previous_outpoint.transaction_id,
            vout: input.previous_outpoint.index,
            script_sig: script_sig_to_rpc(&input.signature_script),
        }
    };
    let txinwitness = input.has_witness().then(|| input.witness.iter().map(hex::encode).collect());
    RpcTransactionInput { source, txinwitness, sequence: input.sequence }
}

pub fn output_to_rpc(index: u32, output: &TransactionOutput, encoder: &dyn AddressEncoder) -> RpcTransactionOutput {
    RpcTransactionOutput {
        value: Amount::from_units(output.value),
        n: index,
        script_pub_key: script_pub_key_to_rpc(&output.script_public_key, encoder),
    }
}

/// Builds the canonical document of a transaction.
///
/// Addresses are rendered through the supplied [`AddressEncoder`] and the
/// masternode payloads through the [`SpecialTxDecoder`], which decodes nothing
/// unless one is set.
pub struct TransactionProjector<'a> {
    encoder: &'a dyn AddressEncoder,
    special: &'a dyn SpecialTxDecoder,
    config: TxProjectionConfig,
}

impl<'a> TransactionProjector<'a> {
    pub fn new(encoder: &'a dyn AddressEncoder) -> Self {
        Self { encoder, special: &NoSpecialTxDecoder, config: TxProjectionConfig::default() }
    }

    pub fn with_special_decoder(mut self, special: &'a dyn SpecialTxDecoder) -> Self {
        self.special = special;
        self
    }

    pub fn with_config(mut self, config: TxProjectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TxProjectionConfig {
        &self.config
    }

    /// Projects `tx`, optionally as included in the block `block_hash`. A zero
    /// block hash counts as unknown.
    pub fn project(&self, tx: &Transaction, block_hash: Option<RpcHash>) -> RpcTransaction {
        let block_hash = block_hash.filter(|hash| !hash.is_zero());
        let is_coinbase = tx.is_coinbase();
        let mut document = RpcTransaction {
            txid: tx.id(),
            hash: tx.witness_hash(),
            version: tx.version as u32,
            size: tx.size(),
            vsize: tx.vsize(),
            weight: tx.weight(),
            locktime: tx.lock_time,
            vin: tx.inputs.iter().map(|input| input_to_rpc(input, is_coinbase)).collect(),
            vout: tx.outputs.iter().enumerate().map(|(index, output)| output_to_rpc(index as u32, output, self.encoder)).collect(),
            pro_reg_tx: None,
            pro_up_serv_tx: None,
            pro_up_reg_tx: None,
            pro_up_rev_tx: None,
            cb_tx: None,
            qc_tx: None,
            systx: None,
            blockhash: block_hash,
            hex: None,
        };

        let route = PayloadRoute::from(tx.kind());
        if route != PayloadRoute::None && !route.is_systx() {
            trace!("Routing the payload of transaction {} to {}", document.txid, route);
        }
        match route {
            PayloadRoute::None => {}
            PayloadRoute::ProRegTx => document.pro_reg_tx = self.special.pro_reg_tx(tx),
            PayloadRoute::ProUpServTx => document.pro_up_serv_tx = self.special.pro_up_serv_tx(tx),
            PayloadRoute::ProUpRegTx => document.pro_up_reg_tx = self.special.pro_up_reg_tx(tx),
            PayloadRoute::ProUpRevTx => document.pro_up_rev_tx = self.special.pro_up_rev_tx(tx),
            PayloadRoute::CbTx => document.cb_tx = self.special.cb_tx(tx),
            PayloadRoute::QcTx => {
                if let Some(QuorumCommitment { cb_tx, qc_tx }) = self.special.qc_tx(tx) {
                    document.cb_tx = Some(cb_tx);
                    document.qc_tx = Some(qc_tx);
                }
            }
            PayloadRoute::Mint | PayloadRoute::Asset | PayloadRoute::Allocation | PayloadRoute::BurnToEthereum => {
                document.systx = systx_to_rpc(tx, block_hash, self.encoder)
            }
        }

        if self.config.include_hex {
            let flags = if self.config.hex_include_witness { TxEncodingFlags::FULL } else { TxEncodingFlags::EXCLUDE_WITNESS };
            document.hex = Some(hex::encode(serialize(tx, flags)));
        }
        document
    }
}
