use crate::{
    opcodes::codes,
    parse_script,
    script_class::{ScriptClass, Solution, solve},
};
use syscoin_hashes::{HASH160_SIZE, HASH_SIZE, hash160};

/// A payment destination resolved from an output script
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    PubKeyHash([u8; HASH160_SIZE]),
    ScriptHash([u8; HASH160_SIZE]),
    WitnessV0KeyHash([u8; HASH160_SIZE]),
    WitnessV0ScriptHash([u8; HASH_SIZE]),
    /// Any witness program of version 1 or above
    WitnessUnknown { version: u8, program: Vec<u8> },
}

/// Destinations of an output script together with its class.
///
/// `destinations` is empty when nothing could be resolved, which is always the
/// case for nonstandard and data carrier scripts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedDestinations {
    pub class: ScriptClass,
    pub required_signatures: usize,
    pub destinations: Vec<Destination>,
}

impl ExtractedDestinations {
    pub fn is_resolved(&self) -> bool {
        !self.destinations.is_empty()
    }
}

/// Returns the single destination a script pays to. Bare multisig has none.
pub fn extract_destination(script: &[u8]) -> Option<Destination> {
    solution_destination(&solve(script))
}

fn solution_destination(solution: &Solution<'_>) -> Option<Destination> {
    match solution {
        Solution::PubKey(key) => Some(Destination::PubKeyHash(hash160(key))),
        Solution::PubKeyHash(hash) => Some(Destination::PubKeyHash((*hash).try_into().ok()?)),
        Solution::ScriptHash(hash) => Some(Destination::ScriptHash((*hash).try_into().ok()?)),
        Solution::WitnessV0KeyHash(hash) => Some(Destination::WitnessV0KeyHash((*hash).try_into().ok()?)),
        Solution::WitnessV0ScriptHash(hash) => Some(Destination::WitnessV0ScriptHash((*hash).try_into().ok()?)),
        Solution::WitnessV1Taproot(program) => Some(Destination::WitnessUnknown { version: 1, program: program.to_vec() }),
        Solution::WitnessUnknown { version, program } => Some(Destination::WitnessUnknown { version: *version, program: program.to_vec() }),
        Solution::NonStandard | Solution::NullData | Solution::MultiSig { .. } => None,
    }
}

/// Returns every destination of a script. Multisig yields one key-hash
/// destination per key and requires `m` signatures, other classes resolve to
/// at most one destination requiring one signature.
pub fn extract_destinations(script: &[u8]) -> ExtractedDestinations {
    let solution = solve(script);
    let class = solution.class();
    let (required_signatures, destinations) = match &solution {
        Solution::NonStandard | Solution::NullData => (0, vec![]),
        Solution::MultiSig { required, keys } => {
            (*required as usize, keys.iter().map(|key| Destination::PubKeyHash(hash160(key))).collect())
        }
        other => match solution_destination(other) {
            Some(destination) => (1, vec![destination]),
            None => (0, vec![]),
        },
    };
    ExtractedDestinations { class, required_signatures, destinations }
}

/// Returns the data of a data carrier script: the first push after OP_RETURN.
/// Whatever follows that push is ignored.
pub fn extract_data_carrier(script: &[u8]) -> Option<&[u8]> {
    let (&first, rest) = script.split_first()?;
    if first != codes::OpReturn {
        return None;
    }
    let push = parse_script(rest).next()?.ok()?;
    push.is_push_opcode().then(|| push.get_data())
}
