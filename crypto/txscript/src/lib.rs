pub mod opcodes;
pub mod script_class;
pub mod script_num;
pub mod sig_encoding;
pub mod standard;
pub mod viewer;

use opcodes::codes;

pub use script_class::ScriptClass;
pub use standard::{Destination, ExtractedDestinations, extract_data_carrier, extract_destination, extract_destinations};
pub use syscoin_txscript_errors::TxScriptError;
pub use viewer::ScriptViewer;

/// Scripts longer than this can never be spent
pub const MAX_SCRIPT_SIZE: usize = 10_000;

/// A single decoded instruction, borrowing from the script it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedOpcode<'a> {
    value: u8,
    encoded: &'a [u8],
    data: &'a [u8],
}

impl<'a> ParsedOpcode<'a> {
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The pushed bytes. Empty for non-push opcodes.
    pub fn get_data(&self) -> &'a [u8] {
        self.data
    }

    /// The full instruction bytes: opcode, length prefix and data
    pub fn encoded(&self) -> &'a [u8] {
        self.encoded
    }

    /// The opcode byte together with its length prefix
    pub fn prefix(&self) -> &'a [u8] {
        &self.encoded[..self.encoded.len() - self.data.len()]
    }

    pub fn is_push_opcode(&self) -> bool {
        opcodes::is_push_opcode(self.value)
    }
}

/// Iterator over the instructions of a script. Yields at most one error, after which it ends.
pub struct ScriptIter<'a> {
    script: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> ScriptIter<'a> {
    /// Offset of the next instruction within the script
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn next_opcode(&mut self) -> Result<ParsedOpcode<'a>, TxScriptError> {
        let start = self.offset;
        let rest = &self.script[start..];
        let value = rest[0];
        let (prefix_len, data_len) = match value {
            codes::OpPushData1 => (2, read_push_len::<1>(rest)?),
            codes::OpPushData2 => (3, read_push_len::<2>(rest)?),
            codes::OpPushData4 => (5, read_push_len::<4>(rest)?),
            v if v < codes::OpPushData1 => (1, v as usize),
            _ => (1, 0),
        };
        let remaining = rest.len() - prefix_len;
        if data_len > remaining {
            return Err(TxScriptError::MalformedPush(data_len, remaining));
        }
        let end = prefix_len + data_len;
        self.offset += end;
        Ok(ParsedOpcode { value, encoded: &rest[..end], data: &rest[prefix_len..end] })
    }
}

fn read_push_len<const N: usize>(rest: &[u8]) -> Result<usize, TxScriptError> {
    let bytes = rest.get(1..1 + N).ok_or_else(|| TxScriptError::MalformedPushSize(rest.to_vec()))?;
    let mut le = [0u8; 4];
    le[..N].copy_from_slice(bytes);
    Ok(u32::from_le_bytes(le) as usize)
}

impl<'a> Iterator for ScriptIter<'a> {
    type Item = Result<ParsedOpcode<'a>, TxScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.script.len() {
            return None;
        }
        let next = self.next_opcode();
        self.failed = next.is_err();
        Some(next)
    }
}

pub fn parse_script(script: &[u8]) -> ScriptIter<'_> {
    ScriptIter { script, offset: 0, failed: false }
}

/// Returns whether the script is provably unspendable: it starts with
/// OP_RETURN or exceeds [`MAX_SCRIPT_SIZE`].
pub fn is_unspendable(script: &[u8]) -> bool {
    script.first() == Some(&codes::OpReturn) || script.len() > MAX_SCRIPT_SIZE
}

/// Returns whether the script parses and holds nothing but pushes and small integers.
pub fn is_push_only(script: &[u8]) -> bool {
    parse_script(script).all(|op| op.is_ok_and(|op| op.value() <= codes::Op16))
}
