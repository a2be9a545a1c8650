use crate::{
    is_push_only,
    opcodes::{codes, is_small_int_opcode, to_small_int},
    parse_script,
};
use std::fmt::{Display, Formatter};

const PUBKEY_COMPRESSED_LEN: usize = 33;
const PUBKEY_UNCOMPRESSED_LEN: usize = 65;
const MIN_WITNESS_PROGRAM_SCRIPT_LEN: usize = 4;
const MAX_WITNESS_PROGRAM_SCRIPT_LEN: usize = 42;

/// Standard classes of output scripts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    /// None of the recognized forms.
    NonStandard,

    /// Pay to pubkey.
    PubKey,

    /// Pay to pubkey hash.
    PubKeyHash,

    /// Pay to script hash.
    ScriptHash,

    /// Bare m-of-n multisig.
    MultiSig,

    /// Provably unspendable data carrier.
    NullData,

    WitnessV0KeyHash,
    WitnessV0ScriptHash,
    WitnessV1Taproot,

    /// Witness program of a version without defined semantics.
    WitnessUnknown,
}

const NON_STANDARD: &str = "nonstandard";
const PUB_KEY: &str = "pubkey";
const PUB_KEY_HASH: &str = "pubkeyhash";
const SCRIPT_HASH: &str = "scripthash";
const MULTI_SIG: &str = "multisig";
const NULL_DATA: &str = "nulldata";
const WITNESS_V0_KEY_HASH: &str = "witness_v0_keyhash";
const WITNESS_V0_SCRIPT_HASH: &str = "witness_v0_scripthash";
const WITNESS_V1_TAPROOT: &str = "witness_v1_taproot";
const WITNESS_UNKNOWN: &str = "witness_unknown";

impl ScriptClass {
    pub fn from_script(script: &[u8]) -> Self {
        solve(script).class()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptClass::NonStandard => NON_STANDARD,
            ScriptClass::PubKey => PUB_KEY,
            ScriptClass::PubKeyHash => PUB_KEY_HASH,
            ScriptClass::ScriptHash => SCRIPT_HASH,
            ScriptClass::MultiSig => MULTI_SIG,
            ScriptClass::NullData => NULL_DATA,
            ScriptClass::WitnessV0KeyHash => WITNESS_V0_KEY_HASH,
            ScriptClass::WitnessV0ScriptHash => WITNESS_V0_SCRIPT_HASH,
            ScriptClass::WitnessV1Taproot => WITNESS_V1_TAPROOT,
            ScriptClass::WitnessUnknown => WITNESS_UNKNOWN,
        }
    }
}

impl Display for ScriptClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The class of a script together with the data its template captures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution<'a> {
    NonStandard,
    PubKey(&'a [u8]),
    PubKeyHash(&'a [u8]),
    ScriptHash(&'a [u8]),
    MultiSig { required: u8, keys: Vec<&'a [u8]> },
    NullData,
    WitnessV0KeyHash(&'a [u8]),
    WitnessV0ScriptHash(&'a [u8]),
    WitnessV1Taproot(&'a [u8]),
    WitnessUnknown { version: u8, program: &'a [u8] },
}

impl Solution<'_> {
    pub fn class(&self) -> ScriptClass {
        match self {
            Solution::NonStandard => ScriptClass::NonStandard,
            Solution::PubKey(_) => ScriptClass::PubKey,
            Solution::PubKeyHash(_) => ScriptClass::PubKeyHash,
            Solution::ScriptHash(_) => ScriptClass::ScriptHash,
            Solution::MultiSig { .. } => ScriptClass::MultiSig,
            Solution::NullData => ScriptClass::NullData,
            Solution::WitnessV0KeyHash(_) => ScriptClass::WitnessV0KeyHash,
            Solution::WitnessV0ScriptHash(_) => ScriptClass::WitnessV0ScriptHash,
            Solution::WitnessV1Taproot(_) => ScriptClass::WitnessV1Taproot,
            Solution::WitnessUnknown { .. } => ScriptClass::WitnessUnknown,
        }
    }
}

/// Matches the script against the standard templates, in order of precedence.
pub fn solve(script: &[u8]) -> Solution<'_> {
    if is_pay_to_script_hash(script) {
        return Solution::ScriptHash(&script[2..22]);
    }
    if let Some((version, program)) = witness_program(script) {
        return match (version, program.len()) {
            (0, 20) => Solution::WitnessV0KeyHash(program),
            (0, 32) => Solution::WitnessV0ScriptHash(program),
            (1, 32) => Solution::WitnessV1Taproot(program),
            (0, _) => Solution::NonStandard,
            _ => Solution::WitnessUnknown { version, program },
        };
    }
    if script.first() == Some(&codes::OpReturn) && is_push_only(&script[1..]) {
        return Solution::NullData;
    }
    if let Some(key) = pay_to_pubkey(script) {
        return Solution::PubKey(key);
    }
    if is_pay_to_pubkey_hash(script) {
        return Solution::PubKeyHash(&script[3..23]);
    }
    if let Some((required, keys)) = multisig(script) {
        return Solution::MultiSig { required, keys };
    }
    Solution::NonStandard
}

/// Whether the bytes have the length their header byte announces for a public key
pub fn is_valid_pubkey_size(key: &[u8]) -> bool {
    let expected = match key.first() {
        Some(0x02 | 0x03) => PUBKEY_COMPRESSED_LEN,
        Some(0x04 | 0x06 | 0x07) => PUBKEY_UNCOMPRESSED_LEN,
        _ => return false,
    };
    key.len() == expected
}

fn is_pay_to_script_hash(script: &[u8]) -> bool {
    script.len() == 23 && script[0] == codes::OpHash160 && script[1] == codes::OpData20 && script[22] == codes::OpEqual
}

fn is_pay_to_pubkey_hash(script: &[u8]) -> bool {
    script.len() == 25
        && script[0] == codes::OpDup
        && script[1] == codes::OpHash160
        && script[2] == codes::OpData20
        && script[23] == codes::OpEqualVerify
        && script[24] == codes::OpCheckSig
}

fn pay_to_pubkey(script: &[u8]) -> Option<&[u8]> {
    let (&last, body) = script.split_last()?;
    let (&push, key) = body.split_first()?;
    let matches = last == codes::OpCheckSig
        && (push as usize == PUBKEY_COMPRESSED_LEN || push as usize == PUBKEY_UNCOMPRESSED_LEN)
        && key.len() == push as usize
        && is_valid_pubkey_size(key);
    matches.then_some(key)
}

fn witness_program(script: &[u8]) -> Option<(u8, &[u8])> {
    if !(MIN_WITNESS_PROGRAM_SCRIPT_LEN..=MAX_WITNESS_PROGRAM_SCRIPT_LEN).contains(&script.len()) {
        return None;
    }
    if script[0] != codes::OpFalse && !is_small_int_opcode(script[0]) {
        return None;
    }
    if script[1] as usize + 2 != script.len() {
        return None;
    }
    Some((to_small_int(script[0]), &script[2..]))
}

fn multisig(script: &[u8]) -> Option<(u8, Vec<&[u8]>)> {
    if script.last() != Some(&codes::OpCheckMultiSig) {
        return None;
    }
    let mut ops = parse_script(script);
    let first = ops.next()?.ok()?;
    if !is_small_int_opcode(first.value()) {
        return None;
    }
    let required = to_small_int(first.value());

    let mut keys = Vec::new();
    let count = loop {
        let op = ops.next()?.ok()?;
        if !is_valid_pubkey_size(op.get_data()) {
            break op;
        }
        keys.push(op.get_data());
    };
    if !is_small_int_opcode(count.value()) {
        return None;
    }
    let count = to_small_int(count.value());
    if keys.len() != count as usize || count < required {
        return None;
    }
    // only the trailing OP_CHECKMULTISIG may follow
    (ops.offset() + 1 == script.len()).then_some((required, keys))
}
