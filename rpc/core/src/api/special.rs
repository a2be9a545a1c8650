use serde_json::Value;
use syscoin_consensus_core::tx::Transaction;

/// A decoded quorum commitment. The commitment embeds its own coinbase record,
/// which the document lists first under `cbTx`.
#[derive(Clone, Debug, PartialEq)]
pub struct QuorumCommitment {
    pub cb_tx: Value,
    pub qc_tx: Value,
}

/// Decoders of the masternode special payloads carried in
/// [`Transaction::extra_payload`].
///
/// Every method returns `None` when the payload is not decoded, in which case
/// the document omits the key. The default implementations decode nothing.
pub trait SpecialTxDecoder {
    fn pro_reg_tx(&self, _tx: &Transaction) -> Option<Value> {
        None
    }

    fn pro_up_serv_tx(&self, _tx: &Transaction) -> Option<Value> {
        None
    }

    fn pro_up_reg_tx(&self, _tx: &Transaction) -> Option<Value> {
        None
    }

    fn pro_up_rev_tx(&self, _tx: &Transaction) -> Option<Value> {
        None
    }

    fn cb_tx(&self, _tx: &Transaction) -> Option<Value> {
        None
    }

    fn qc_tx(&self, _tx: &Transaction) -> Option<QuorumCommitment> {
        None
    }
}

/// Leaves every special payload undecoded
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSpecialTxDecoder;

impl SpecialTxDecoder for NoSpecialTxDecoder {}
