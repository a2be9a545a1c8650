use crate::{
    encoding::WriterExtensions,
    tx::{Transaction, TransactionId, TransactionInput, TransactionOutpoint, TransactionOutput},
};
use syscoin_hashes::{Hash, double_sha256};

bitflags::bitflags! {
    /// A bitmask defining which transaction fields we want to encode and which to ignore.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TxEncodingFlags: u8 {
        const FULL = 0;
        const EXCLUDE_WITNESS = 1 << 0;
    }
}

const SEGWIT_MARKER: u8 = 0x00;
const SEGWIT_FLAG: u8 = 0x01;

/// Not intended for direct use by clients. Instead use `tx.id()`
pub fn id(tx: &Transaction) -> TransactionId {
    double_sha256(&serialize(tx, TxEncodingFlags::EXCLUDE_WITNESS))
}

/// Returns the witness-inclusive transaction hash. Equals the id when no input carries a witness.
pub fn witness_hash(tx: &Transaction) -> Hash {
    double_sha256(&serialize(tx, TxEncodingFlags::FULL))
}

/// Encodes the transaction in its consensus wire format
pub fn serialize(tx: &Transaction, encoding_flags: TxEncodingFlags) -> Vec<u8> {
    let mut buf = Vec::new();
    write_transaction(&mut buf, tx, encoding_flags);
    buf
}

/// Write the transaction into the provided writer according to the encoding flags
fn write_transaction<W: WriterExtensions>(writer: &mut W, tx: &Transaction, encoding_flags: TxEncodingFlags) {
    let with_witness = !encoding_flags.contains(TxEncodingFlags::EXCLUDE_WITNESS) && tx.has_witness();

    writer.update(tx.version.to_le_bytes());
    if with_witness {
        writer.update([SEGWIT_MARKER, SEGWIT_FLAG]);
    }

    writer.write_len(tx.inputs.len());
    for input in tx.inputs.iter() {
        write_input(writer, input);
    }

    writer.write_len(tx.outputs.len());
    for output in tx.outputs.iter() {
        write_output(writer, output);
    }

    if with_witness {
        for input in tx.inputs.iter() {
            writer.write_len(input.witness.len());
            for item in input.witness.iter() {
                writer.write_var_bytes(item);
            }
        }
    }

    writer.update(tx.lock_time.to_le_bytes());
    if tx.kind().is_special_tx() {
        writer.write_var_bytes(&tx.extra_payload);
    }
}

#[inline(always)]
fn write_input<W: WriterExtensions>(writer: &mut W, input: &TransactionInput) {
    write_outpoint(writer, &input.previous_outpoint);
    writer.write_var_bytes(&input.signature_script).update(input.sequence.to_le_bytes());
}

#[inline(always)]
fn write_outpoint<W: WriterExtensions>(writer: &mut W, outpoint: &TransactionOutpoint) {
    writer.update(outpoint.transaction_id).update(outpoint.index.to_le_bytes());
}

#[inline(always)]
fn write_output<W: WriterExtensions>(writer: &mut W, output: &TransactionOutput) {
    writer.update(output.value.to_le_bytes()).write_var_bytes(&output.script_public_key);
}
