pub const SIG_HASH_ALL: SigHashType = SigHashType(0x01);
pub const SIG_HASH_NONE: SigHashType = SigHashType(0x02);
pub const SIG_HASH_SINGLE: SigHashType = SigHashType(0x03);
pub const SIG_HASH_ANY_ONE_CAN_PAY: SigHashType = SigHashType(0x80);

/// The closed set of defined flag bytes and their canonical names.
const SIG_HASH_NAMES: [(u8, &str); 6] = [
    (SIG_HASH_ALL.0, "ALL"),
    (SIG_HASH_ALL.0 | SIG_HASH_ANY_ONE_CAN_PAY.0, "ALL|ANYONECANPAY"),
    (SIG_HASH_NONE.0, "NONE"),
    (SIG_HASH_NONE.0 | SIG_HASH_ANY_ONE_CAN_PAY.0, "NONE|ANYONECANPAY"),
    (SIG_HASH_SINGLE.0, "SINGLE"),
    (SIG_HASH_SINGLE.0 | SIG_HASH_ANY_ONE_CAN_PAY.0, "SINGLE|ANYONECANPAY"),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SigHashType(pub(crate) u8);

impl SigHashType {
    pub fn from_u8(val: u8) -> Result<Self, &'static str> {
        if sighash_name(val).is_none() {
            return Err("invalid sighash type");
        }

        Ok(Self(val))
    }
}

/// Returns the canonical name of a one-byte sighash flag, or `None` for any
/// byte outside the six defined combinations.
pub fn sighash_name(flag: u8) -> Option<&'static str> {
    SIG_HASH_NAMES.iter().find(|(value, _)| *value == flag).map(|(_, name)| *name)
}
