use std::fmt::{Display, Formatter};
use syscoin_consensus_core::tx::TxKind;

/// The section of the document a transaction's payload is projected into.
///
/// Every [`TxKind`] routes to exactly one variant; [`PayloadRoute::None`] is the
/// route of ordinary transfers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadRoute {
    None,
    ProRegTx,
    ProUpServTx,
    ProUpRegTx,
    ProUpRevTx,
    CbTx,
    QcTx,
    /// Bridge mint with its proof
    Mint,
    /// Asset activation or update
    Asset,
    /// Asset send and every allocation operation except burns to ethereum
    Allocation,
    BurnToEthereum,
}

impl PayloadRoute {
    /// Routes handled by the asset projectors, emitted under `systx`
    pub fn is_systx(self) -> bool {
        matches!(self, PayloadRoute::Mint | PayloadRoute::Asset | PayloadRoute::Allocation | PayloadRoute::BurnToEthereum)
    }
}

impl From<TxKind> for PayloadRoute {
    fn from(kind: TxKind) -> Self {
        match kind {
            TxKind::Standard => PayloadRoute::None,
            TxKind::MnRegister => PayloadRoute::ProRegTx,
            TxKind::MnUpdateService => PayloadRoute::ProUpServTx,
            TxKind::MnUpdateRegistrar => PayloadRoute::ProUpRegTx,
            TxKind::MnUpdateRevoke => PayloadRoute::ProUpRevTx,
            TxKind::MnCoinbase => PayloadRoute::CbTx,
            TxKind::MnQuorumCommitment => PayloadRoute::QcTx,
            TxKind::AllocationMint => PayloadRoute::Mint,
            TxKind::AssetActivate | TxKind::AssetUpdate => PayloadRoute::Asset,
            TxKind::AssetSend | TxKind::AllocationBurnToSyscoin | TxKind::SyscoinBurnToAllocation | TxKind::AllocationSend => {
                PayloadRoute::Allocation
            }
            TxKind::AllocationBurnToEthereum => PayloadRoute::BurnToEthereum,
        }
    }
}

impl Display for PayloadRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
