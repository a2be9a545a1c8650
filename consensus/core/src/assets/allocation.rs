use super::AssetPayload;
use crate::{
    encoding::{PayloadReader, WriterExtensions},
    errors::payload::{PayloadError, PayloadResult},
    tx::{AssetOut, AssetOutValue},
};

/// The per-asset output mapping every asset payload starts with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetAllocation {
    pub asset_outputs: Vec<AssetOut>,
}

impl AssetAllocation {
    pub fn new(asset_outputs: Vec<AssetOut>) -> Self {
        Self { asset_outputs }
    }
}

impl AssetPayload for AssetAllocation {
    fn read(reader: &mut PayloadReader<'_>) -> PayloadResult<Self> {
        let groups = reader.read_compact_size()?;
        let mut asset_outputs = Vec::new();
        for _ in 0..groups {
            let asset_guid = reader.read_u32()?;
            let count = reader.read_compact_size()?;
            let mut values = Vec::new();
            for _ in 0..count {
                let n = reader.read_compact_size()?;
                let n = u32::try_from(n).map_err(|_| PayloadError::OutputIndexOverflow(n))?;
                values.push(AssetOutValue::new(n, reader.read_i64()?));
            }
            asset_outputs.push(AssetOut::new(asset_guid, values));
        }
        Ok(Self { asset_outputs })
    }

    fn write(&self, buf: &mut Vec<u8>) {
        buf.write_len(self.asset_outputs.len());
        for group in self.asset_outputs.iter() {
            buf.update(group.asset_guid.to_le_bytes()).write_len(group.values.len());
            for value in group.values.iter() {
                buf.write_len(value.n as usize).update(value.value.to_le_bytes());
            }
        }
    }
}
