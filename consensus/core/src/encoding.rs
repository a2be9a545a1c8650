//! Consensus wire primitives: little-endian integers, CompactSize lengths and
//! length-prefixed byte vectors.

use crate::errors::payload::{PayloadError, PayloadResult};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

pub trait WriterExtensions {
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self;

    /// Writes a CompactSize length
    fn write_len(&mut self, len: usize) -> &mut Self;

    /// Writes a length-prefixed byte vector
    fn write_var_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_len(bytes.len()).update(bytes)
    }

    /// Writes text as base64 inside a length-prefixed byte vector
    fn write_base64(&mut self, text: &str) -> &mut Self {
        let encoded = BASE64.encode(text.as_bytes());
        self.write_var_bytes(encoded.as_bytes())
    }
}

impl WriterExtensions for Vec<u8> {
    #[inline(always)]
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self {
        self.extend_from_slice(data.as_ref());
        self
    }

    fn write_len(&mut self, len: usize) -> &mut Self {
        let len = len as u64;
        match len {
            0..=0xfc => self.update([len as u8]),
            0xfd..=0xffff => self.update([0xfd]).update((len as u16).to_le_bytes()),
            0x10000..=0xffff_ffff => self.update([0xfe]).update((len as u32).to_le_bytes()),
            _ => self.update([0xff]).update(len.to_le_bytes()),
        }
    }
}

/// A forward-only cursor over an immutable payload body.
pub struct PayloadReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> PayloadReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn read_bytes(&mut self, len: usize) -> PayloadResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(PayloadError::UnexpectedEnd(self.offset, len - self.remaining()));
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> PayloadResult<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    pub fn read_u8(&mut self) -> PayloadResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_bool(&mut self) -> PayloadResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> PayloadResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> PayloadResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> PayloadResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    pub fn read_compact_size(&mut self) -> PayloadResult<u64> {
        let (value, minimum) = match self.read_u8()? {
            0xfd => (self.read_u16()? as u64, 0xfd),
            0xfe => (self.read_u32()? as u64, 0x10000),
            0xff => (u64::from_le_bytes(self.read_array()?), 0x1_0000_0000),
            small => return Ok(small as u64),
        };
        if value < minimum {
            return Err(PayloadError::NonCanonicalCompactSize(value));
        }
        Ok(value)
    }

    /// Reads a CompactSize length, rejecting lengths the remaining payload cannot hold.
    pub fn read_len(&mut self) -> PayloadResult<usize> {
        let len = self.read_compact_size()?;
        if len > self.remaining() as u64 {
            return Err(PayloadError::UnexpectedEnd(self.offset, (len - self.remaining() as u64) as usize));
        }
        Ok(len as usize)
    }

    pub fn read_var_bytes(&mut self) -> PayloadResult<&'a [u8]> {
        let len = self.read_len()?;
        self.read_bytes(len)
    }

    /// Reads a length-prefixed byte vector that must hold exactly `N` bytes.
    pub fn read_fixed_var_bytes<const N: usize>(&mut self, field: &'static str) -> PayloadResult<[u8; N]> {
        let bytes = self.read_var_bytes()?;
        <[u8; N]>::try_from(bytes).map_err(|_| PayloadError::InvalidFieldLength(field, bytes.len(), N))
    }

    /// Reads a length-prefixed base64 text field and returns the decoded text.
    pub fn read_base64(&mut self, field: &'static str) -> PayloadResult<String> {
        let encoded = self.read_var_bytes()?;
        let decoded = BASE64.decode(encoded).map_err(|err| PayloadError::InvalidBase64(field, err))?;
        Ok(String::from_utf8_lossy(&decoded).into_owned())
    }
}
