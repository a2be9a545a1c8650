use crate::constants::tx_version::*;
use std::fmt::{Display, Formatter};

/// The closed set of transaction version classes.
///
/// Every version tag maps to exactly one kind; tags outside the table are
/// [`TxKind::Standard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TxKind {
    Standard,
    MnRegister,
    MnUpdateService,
    MnUpdateRegistrar,
    MnUpdateRevoke,
    MnCoinbase,
    MnQuorumCommitment,
    AllocationBurnToSyscoin,
    SyscoinBurnToAllocation,
    AssetActivate,
    AssetUpdate,
    AssetSend,
    AllocationMint,
    AllocationBurnToEthereum,
    AllocationSend,
}

impl TxKind {
    pub fn from_version(version: i32) -> Self {
        match version {
            MN_REGISTER => TxKind::MnRegister,
            MN_UPDATE_SERVICE => TxKind::MnUpdateService,
            MN_UPDATE_REGISTRAR => TxKind::MnUpdateRegistrar,
            MN_UPDATE_REVOKE => TxKind::MnUpdateRevoke,
            MN_COINBASE => TxKind::MnCoinbase,
            MN_QUORUM_COMMITMENT => TxKind::MnQuorumCommitment,
            ALLOCATION_BURN_TO_SYSCOIN => TxKind::AllocationBurnToSyscoin,
            SYSCOIN_BURN_TO_ALLOCATION => TxKind::SyscoinBurnToAllocation,
            ASSET_ACTIVATE => TxKind::AssetActivate,
            ASSET_UPDATE => TxKind::AssetUpdate,
            ASSET_SEND => TxKind::AssetSend,
            ALLOCATION_MINT => TxKind::AllocationMint,
            ALLOCATION_BURN_TO_ETHEREUM => TxKind::AllocationBurnToEthereum,
            ALLOCATION_SEND => TxKind::AllocationSend,
            _ => TxKind::Standard,
        }
    }

    /// Asset definition operations
    pub fn is_asset_tx(self) -> bool {
        matches!(self, TxKind::AssetActivate | TxKind::AssetUpdate | TxKind::AssetSend)
    }

    /// Operations moving existing asset units
    pub fn is_asset_allocation_tx(self) -> bool {
        matches!(
            self,
            TxKind::AllocationBurnToSyscoin
                | TxKind::SyscoinBurnToAllocation
                | TxKind::AllocationBurnToEthereum
                | TxKind::AllocationSend
        )
    }

    pub fn is_mint_tx(self) -> bool {
        self == TxKind::AllocationMint
    }

    /// Versions whose encoding carries an extra payload after the lock time
    pub fn is_special_tx(self) -> bool {
        matches!(
            self,
            TxKind::MnRegister
                | TxKind::MnUpdateService
                | TxKind::MnUpdateRegistrar
                | TxKind::MnUpdateRevoke
                | TxKind::MnCoinbase
                | TxKind::MnQuorumCommitment
        )
    }

    /// The operation name asset explorers index on.
    pub fn asset_op_name(self) -> &'static str {
        match self {
            TxKind::AssetActivate => "assetactivate",
            TxKind::AssetUpdate => "assetupdate",
            TxKind::AssetSend => "assetsend",
            TxKind::AllocationSend => "assetallocationsend",
            TxKind::AllocationBurnToEthereum => "assetallocationburntoethereum",
            TxKind::AllocationBurnToSyscoin => "assetallocationburntosyscoin",
            TxKind::SyscoinBurnToAllocation => "syscoinburntoassetallocation",
            TxKind::AllocationMint => "assetallocationmint",
            _ => "<unknown assetallocation op>",
        }
    }
}

impl Display for TxKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_table() {
        struct Test {
            version: i32,
            kind: TxKind,
        }

        let tests = vec![
            Test { version: 1, kind: TxKind::Standard },
            Test { version: 2, kind: TxKind::Standard },
            Test { version: 79, kind: TxKind::Standard },
            Test { version: 80, kind: TxKind::MnRegister },
            Test { version: 85, kind: TxKind::MnQuorumCommitment },
            Test { version: 86, kind: TxKind::Standard },
            Test { version: 127, kind: TxKind::Standard },
            Test { version: 128, kind: TxKind::AllocationBurnToSyscoin },
            Test { version: 130, kind: TxKind::AssetActivate },
            Test { version: 133, kind: TxKind::AllocationMint },
            Test { version: 134, kind: TxKind::AllocationBurnToEthereum },
            Test { version: 135, kind: TxKind::AllocationSend },
            Test { version: 136, kind: TxKind::Standard },
            Test { version: -130, kind: TxKind::Standard },
        ];

        for test in tests {
            assert_eq!(TxKind::from_version(test.version), test.kind, "version {} mapped wrongly", test.version);
        }
    }

    #[test]
    fn test_classes_are_disjoint() {
        for version in 0..=255 {
            let kind = TxKind::from_version(version);
            let classes = [kind.is_asset_tx(), kind.is_asset_allocation_tx(), kind.is_mint_tx(), kind.is_special_tx()];
            assert!(classes.iter().filter(|c| **c).count() <= 1, "{kind} belongs to more than one class");
        }
        assert_eq!(TxKind::AssetSend.asset_op_name(), "assetsend");
        assert_eq!(TxKind::Standard.asset_op_name(), "<unknown assetallocation op>");
    }
}
