use crate::{
    ParsedOpcode, is_unspendable,
    opcodes::{codes, opcode_name},
    parse_script,
    script_num::{MAX_RENDERED_NUM_LEN, deserialize_i64},
    sig_encoding::check_signature_encoding,
};
use itertools::Itertools;
use log::trace;
use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
};
use syscoin_consensus_core::hashing::sighash_type::sighash_name;

/// Token emitted in place of an instruction that could not be parsed
pub const ERROR_TOKEN: &str = "[error]";

/// Renders a script as human-readable assembly.
///
/// Pushes of up to four bytes render as script numbers, longer pushes as hex
/// and everything else by mnemonic. With sighash decoding enabled, a push
/// shaped like a signature renders its flag byte by name, e.g.
/// `3044...01` becomes `3044...[ALL]`. Decoding is never attempted on a
/// provably unspendable script.
pub struct ScriptViewer<'a> {
    script: &'a [u8],
    attempt_sighash_decode: bool,
}

impl<'a> ScriptViewer<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self { script, attempt_sighash_decode: false }
    }

    /// A viewer for unlocking scripts, which may carry signatures
    pub fn with_sighash_decode(script: &'a [u8]) -> Self {
        Self { script, attempt_sighash_decode: true }
    }

    pub fn to_asm(&self) -> String {
        let decode_sighash = self.attempt_sighash_decode && !is_unspendable(self.script);
        parse_script(self.script)
            .map(|opcode| match opcode {
                Ok(opcode) => render_opcode(&opcode, decode_sighash),
                Err(err) => {
                    trace!("Disassembly of script {} stopped: {}", hex::encode(self.script), err);
                    Cow::Borrowed(ERROR_TOKEN)
                }
            })
            .join(" ")
    }

    /// Flat debug rendering: small integers as bare decimals, the NOP range by
    /// mnemonic without its `OP_` prefix, and everything else as the raw
    /// instruction hex followed by the pushed data hex. An unparseable tail is
    /// rendered as one hex blob.
    pub fn to_flat(&self) -> String {
        let mut tokens = Vec::new();
        let mut ops = parse_script(self.script);
        loop {
            let start = ops.offset();
            match ops.next() {
                None => break,
                Some(Ok(opcode)) => tokens.push(render_flat_opcode(&opcode)),
                Some(Err(_)) => {
                    tokens.push(format!("0x{}", hex::encode(&self.script[start..])));
                    break;
                }
            }
        }
        tokens.join(" ")
    }
}

impl Display for ScriptViewer<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_asm())
    }
}

fn render_opcode<'a>(opcode: &ParsedOpcode<'_>, decode_sighash: bool) -> Cow<'a, str> {
    if !opcode.is_push_opcode() {
        return Cow::Borrowed(opcode_name(opcode.value()));
    }
    let data = opcode.get_data();
    if data.len() <= MAX_RENDERED_NUM_LEN {
        // at most four bytes always fit
        return Cow::Owned(deserialize_i64(data).unwrap_or_default().to_string());
    }
    if decode_sighash && check_signature_encoding(data).is_ok() {
        if let Some((name, signature)) = data.split_last().and_then(|(&flag, signature)| Some((sighash_name(flag)?, signature))) {
            return Cow::Owned(format!("{}[{}]", hex::encode(signature), name));
        }
    }
    Cow::Owned(hex::encode(data))
}

fn render_flat_opcode(opcode: &ParsedOpcode<'_>) -> String {
    let value = opcode.value();
    if value == codes::OpFalse {
        return "0".to_string();
    }
    if value == codes::Op1Negate || (codes::OpTrue..=codes::Op16).contains(&value) {
        return (value as i32 - codes::OpTrue as i32 + 1).to_string();
    }
    if (codes::OpNop..=codes::OpNop10).contains(&value) {
        if let Some(stripped) = opcode_name(value).strip_prefix("OP_") {
            return stripped.to_string();
        }
    }
    let data = opcode.get_data();
    if data.is_empty() {
        format!("0x{}", hex::encode(opcode.encoded()))
    } else {
        format!("0x{} 0x{}", hex::encode(opcode.prefix()), hex::encode(data))
    }
}
