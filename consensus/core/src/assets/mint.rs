use super::{AssetAllocation, AssetPayload};
use crate::{
    encoding::{PayloadReader, WriterExtensions},
    errors::payload::{PayloadError, PayloadResult},
};

/// Length of a proof value that encodes an offset into the parent nodes instead of the value itself
const OFFSET_ENCODED_LEN: usize = 2;

/// A proof value together with the Merkle-Patricia parent nodes it was taken from.
///
/// A value of exactly two bytes is a big-endian offset into `parent_nodes`, and
/// the true value is the parent-nodes suffix starting there. Any other length
/// holds the true value directly. A genuine two-byte value is therefore
/// indistinguishable from an offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProofSlice {
    pub value: Vec<u8>,
    pub parent_nodes: Vec<u8>,
}

impl ProofSlice {
    pub fn new(value: Vec<u8>, parent_nodes: Vec<u8>) -> Self {
        Self { value, parent_nodes }
    }

    pub fn resolved_value(&self) -> PayloadResult<&[u8]> {
        if self.value.len() != OFFSET_ENCODED_LEN {
            return Ok(self.value.as_slice());
        }
        let offset = u16::from_be_bytes([self.value[0], self.value[1]]) as usize;
        self.parent_nodes.get(offset..).ok_or(PayloadError::ProofOffsetOutOfRange(offset, self.parent_nodes.len()))
    }
}

/// Mint of bridged units, proven by an SPV proof of the ethereum transfer and its receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintSyscoin {
    pub allocation: AssetAllocation,
    pub bridge_transfer_id: u32,
    pub block_number: u32,
    pub tx: ProofSlice,
    pub tx_path: Vec<u8>,
    pub receipt: ProofSlice,
}

impl AssetPayload for MintSyscoin {
    fn read(reader: &mut PayloadReader<'_>) -> PayloadResult<Self> {
        let allocation = AssetAllocation::read(reader)?;
        let bridge_transfer_id = reader.read_u32()?;
        let block_number = reader.read_u32()?;
        let tx_value = reader.read_var_bytes()?.to_vec();
        let tx_parent_nodes = reader.read_var_bytes()?.to_vec();
        let tx_path = reader.read_var_bytes()?.to_vec();
        let receipt_value = reader.read_var_bytes()?.to_vec();
        let receipt_parent_nodes = reader.read_var_bytes()?.to_vec();

        let mint = Self {
            allocation,
            bridge_transfer_id,
            block_number,
            tx: ProofSlice::new(tx_value, tx_parent_nodes),
            tx_path,
            receipt: ProofSlice::new(receipt_value, receipt_parent_nodes),
        };
        mint.tx.resolved_value()?;
        mint.receipt.resolved_value()?;
        Ok(mint)
    }

    fn write(&self, buf: &mut Vec<u8>) {
        self.allocation.write(buf);
        buf.update(self.bridge_transfer_id.to_le_bytes())
            .update(self.block_number.to_le_bytes())
            .write_var_bytes(&self.tx.value)
            .write_var_bytes(&self.tx.parent_nodes)
            .write_var_bytes(&self.tx_path)
            .write_var_bytes(&self.receipt.value)
            .write_var_bytes(&self.receipt.parent_nodes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::{AssetOut, AssetOutValue};

    #[test]
    fn test_proof_value_resolution() {
        struct Test {
            name: &'static str,
            value: Vec<u8>,
            parent_nodes: &'static [u8],
            expected: PayloadResult<&'static [u8]>,
        }

        let tests = vec![
            Test { name: "offset into parent nodes", value: vec![0x00, 0x05], parent_nodes: b"ABCDEFGH", expected: Ok(&b"FGH"[..]) },
            Test { name: "literal value", value: vec![0xaa, 0xbb, 0xcc], parent_nodes: b"ABCDEFGH", expected: Ok(&[0xaa, 0xbb, 0xcc][..]) },
            Test { name: "empty value", value: vec![], parent_nodes: b"ABCDEFGH", expected: Ok(&[][..]) },
            Test { name: "single byte value", value: vec![0x05], parent_nodes: b"ABCDEFGH", expected: Ok(&[0x05][..]) },
            Test { name: "offset at the end", value: vec![0x00, 0x08], parent_nodes: b"ABCDEFGH", expected: Ok(&[][..]) },
            Test { name: "big-endian offset", value: vec![0x01, 0x00], parent_nodes: &[0u8; 0x102], expected: Ok(&[0, 0][..]) },
            Test {
                name: "offset past the end",
                value: vec![0x00, 0x09],
                parent_nodes: b"ABCDEFGH",
                expected: Err(PayloadError::ProofOffsetOutOfRange(9, 8)),
            },
        ];

        for test in tests {
            let slice = ProofSlice::new(test.value, test.parent_nodes.to_vec());
            assert_eq!(slice.resolved_value(), test.expected, "{} resolved wrongly", test.name);
        }
    }

    #[test]
    fn test_two_byte_literal_is_read_as_offset() {
        // Known ambiguity: a genuine two-byte proof value cannot be expressed,
        // it is always taken as an offset.
        let slice = ProofSlice::new(vec![0x00, 0x01], b"XY".to_vec());
        assert_eq!(slice.resolved_value().unwrap(), b"Y");
    }

    #[test]
    fn test_mint_layout() {
        let mint = MintSyscoin {
            allocation: AssetAllocation::new(vec![AssetOut::new(42, vec![AssetOutValue::new(0, 1000)])]),
            bridge_transfer_id: 7,
            block_number: 9_000_000,
            tx: ProofSlice::new(vec![0x00, 0x02], vec![0xf8, 0x51, 0x80, 0x81]),
            tx_path: vec![0x01, 0x02],
            receipt: ProofSlice::new(vec![0xde, 0xad, 0xbe], vec![0xc0]),
        };
        let encoded = mint.encode();
        let decoded = MintSyscoin::decode(&encoded).unwrap();
        assert_eq!(decoded, mint);
        assert_eq!(decoded.tx.resolved_value().unwrap(), &[0x80, 0x81]);
        assert_eq!(decoded.receipt.resolved_value().unwrap(), &[0xde, 0xad, 0xbe]);

        let broken = MintSyscoin { tx: ProofSlice::new(vec![0x00, 0x10], vec![0xf8]), ..mint };
        assert_eq!(MintSyscoin::decode(&broken.encode()), Err(PayloadError::ProofOffsetOutOfRange(16, 1)));
    }
}
