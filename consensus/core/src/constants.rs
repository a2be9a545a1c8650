/// Number of minimal units in one display coin.
pub const COIN: i64 = 100_000_000;

/// Number of decimal places shown for a native amount.
pub const AMOUNT_DECIMALS: usize = 8;

/// Largest decimal precision an asset may declare.
pub const MAX_ASSET_PRECISION: u8 = 8;

pub const WITNESS_SCALE_FACTOR: u64 = 4;

pub const SEQUENCE_FINAL: u32 = u32::MAX;

/// Size of an ethereum account address carried by burn payloads.
pub const ETHEREUM_ADDRESS_SIZE: usize = 20;

/// Size of the key id behind notary and aux-fee addresses.
pub const KEY_ID_SIZE: usize = 20;

pub mod tx_version {
    pub const MN_REGISTER: i32 = 80;
    pub const MN_UPDATE_SERVICE: i32 = 81;
    pub const MN_UPDATE_REGISTRAR: i32 = 82;
    pub const MN_UPDATE_REVOKE: i32 = 83;
    pub const MN_COINBASE: i32 = 84;
    pub const MN_QUORUM_COMMITMENT: i32 = 85;

    pub const ALLOCATION_BURN_TO_SYSCOIN: i32 = 128;
    pub const SYSCOIN_BURN_TO_ALLOCATION: i32 = 129;
    pub const ASSET_ACTIVATE: i32 = 130;
    pub const ASSET_UPDATE: i32 = 131;
    pub const ASSET_SEND: i32 = 132;
    pub const ALLOCATION_MINT: i32 = 133;
    pub const ALLOCATION_BURN_TO_ETHEREUM: i32 = 134;
    pub const ALLOCATION_SEND: i32 = 135;
}
