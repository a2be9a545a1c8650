//! Binary codecs of the asset payloads carried in a transaction's data output.
//!
//! Every record decodes from a byte slice and ignores trailing bytes after a
//! complete record. Encoders produce the exact layout the decoders accept.

mod allocation;
mod asset;
mod burn;
mod mint;

pub use allocation::AssetAllocation;
pub use asset::{Asset, AssetInit, AuxFee, AuxFeeDetails, NotaryDetails, UpdateMask};
pub use burn::BurnToEthereum;
pub use mint::{MintSyscoin, ProofSlice};

use crate::{encoding::PayloadReader, errors::payload::PayloadResult};

/// A payload record with a context-free wire layout.
pub trait AssetPayload: Sized {
    fn read(reader: &mut PayloadReader<'_>) -> PayloadResult<Self>;

    fn write(&self, buf: &mut Vec<u8>);

    fn decode(payload: &[u8]) -> PayloadResult<Self> {
        Self::read(&mut PayloadReader::new(payload))
    }

    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write(&mut buf);
        buf
    }
}
