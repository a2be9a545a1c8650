use super::{AssetAllocation, AssetPayload};
use crate::{
    constants::ETHEREUM_ADDRESS_SIZE,
    encoding::{PayloadReader, WriterExtensions},
    errors::payload::PayloadResult,
};

/// Allocation burned on this chain to be released to an ethereum account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnToEthereum {
    pub allocation: AssetAllocation,
    pub ethereum_destination: [u8; ETHEREUM_ADDRESS_SIZE],
}

impl AssetPayload for BurnToEthereum {
    fn read(reader: &mut PayloadReader<'_>) -> PayloadResult<Self> {
        let allocation = AssetAllocation::read(reader)?;
        let ethereum_destination = reader.read_fixed_var_bytes::<ETHEREUM_ADDRESS_SIZE>("ethereum_destination")?;
        Ok(Self { allocation, ethereum_destination })
    }

    fn write(&self, buf: &mut Vec<u8>) {
        self.allocation.write(buf);
        buf.write_var_bytes(&self.ethereum_destination);
    }
}
