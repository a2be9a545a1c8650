use super::{AssetAllocation, AssetPayload};
use crate::{
    constants::{KEY_ID_SIZE, MAX_ASSET_PRECISION},
    encoding::{PayloadReader, WriterExtensions},
    errors::payload::{PayloadError, PayloadResult},
};

bitflags::bitflags! {
    /// Field groups carried by an asset definition or update. Every set bit is
    /// followed on the wire by its field, in bit order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UpdateMask: u8 {
        const DATA = 1 << 0;
        const CONTRACT = 1 << 1;
        const SUPPLY = 1 << 2;
        const NOTARY_KEY = 1 << 3;
        const NOTARY_DETAILS = 1 << 4;
        const AUXFEE_KEY = 1 << 5;
        const AUXFEE_DETAILS = 1 << 6;
        const CAPABILITY_FLAGS = 1 << 7;
    }
}

/// Immutable properties fixed when the asset is activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetInit {
    pub symbol: String,
    pub max_supply: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotaryDetails {
    pub endpoint: String,
    pub instant_transfers: bool,
    pub hd_required: bool,
}

/// One tier of the auxiliary fee schedule. `percent` is scaled by 100000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxFee {
    pub bound: i64,
    pub percent: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuxFeeDetails {
    pub fees: Vec<AuxFee>,
}

/// An asset activation, update or send payload.
///
/// Each optional field is present exactly when its [`UpdateMask`] bit is set;
/// [`Asset::update_mask`] derives the mask from the fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Asset {
    pub allocation: AssetAllocation,
    pub precision: u8,
    /// Present on activation only
    pub init: Option<AssetInit>,
    pub public_value: Option<String>,
    pub contract: Option<Vec<u8>>,
    pub balance: Option<i64>,
    pub notary_key_id: Option<[u8; KEY_ID_SIZE]>,
    pub notary_details: Option<NotaryDetails>,
    pub auxfee_key_id: Option<[u8; KEY_ID_SIZE]>,
    pub auxfee_details: Option<AuxFeeDetails>,
    pub update_capability_flags: Option<u8>,
}

impl Asset {
    pub fn update_mask(&self) -> UpdateMask {
        let mut mask = UpdateMask::empty();
        mask.set(UpdateMask::DATA, self.public_value.is_some());
        mask.set(UpdateMask::CONTRACT, self.contract.is_some());
        mask.set(UpdateMask::SUPPLY, self.balance.is_some());
        mask.set(UpdateMask::NOTARY_KEY, self.notary_key_id.is_some());
        mask.set(UpdateMask::NOTARY_DETAILS, self.notary_details.is_some());
        mask.set(UpdateMask::AUXFEE_KEY, self.auxfee_key_id.is_some());
        mask.set(UpdateMask::AUXFEE_DETAILS, self.auxfee_details.is_some());
        mask.set(UpdateMask::CAPABILITY_FLAGS, self.update_capability_flags.is_some());
        mask
    }

    /// Decodes an asset payload. Only an activation carries the [`AssetInit`] fields.
    pub fn decode(payload: &[u8], activation: bool) -> PayloadResult<Self> {
        Self::read(&mut PayloadReader::new(payload), activation)
    }

    pub fn read(reader: &mut PayloadReader<'_>, activation: bool) -> PayloadResult<Self> {
        let allocation = AssetAllocation::read(reader)?;
        let precision = reader.read_u8()?;
        if precision > MAX_ASSET_PRECISION {
            return Err(PayloadError::InvalidPrecision(precision));
        }
        let mask = UpdateMask::from_bits_retain(reader.read_u8()?);

        let init = if activation {
            Some(AssetInit { symbol: reader.read_base64("symbol")?, max_supply: reader.read_i64()? })
        } else {
            None
        };

        let mut asset = Asset { allocation, precision, init, ..Default::default() };
        if mask.contains(UpdateMask::DATA) {
            asset.public_value = Some(reader.read_base64("public_value")?);
        }
        if mask.contains(UpdateMask::CONTRACT) {
            asset.contract = Some(reader.read_var_bytes()?.to_vec());
        }
        if mask.contains(UpdateMask::SUPPLY) {
            asset.balance = Some(reader.read_i64()?);
        }
        if mask.contains(UpdateMask::NOTARY_KEY) {
            asset.notary_key_id = Some(reader.read_fixed_var_bytes("notary_key_id")?);
        }
        if mask.contains(UpdateMask::NOTARY_DETAILS) {
            asset.notary_details = Some(NotaryDetails {
                endpoint: reader.read_base64("notary_endpoint")?,
                instant_transfers: reader.read_bool()?,
                hd_required: reader.read_bool()?,
            });
        }
        if mask.contains(UpdateMask::AUXFEE_KEY) {
            asset.auxfee_key_id = Some(reader.read_fixed_var_bytes("auxfee_key_id")?);
        }
        if mask.contains(UpdateMask::AUXFEE_DETAILS) {
            let count = reader.read_compact_size()?;
            let mut fees = Vec::new();
            for _ in 0..count {
                fees.push(AuxFee { bound: reader.read_i64()?, percent: reader.read_u16()? });
            }
            asset.auxfee_details = Some(AuxFeeDetails { fees });
        }
        if mask.contains(UpdateMask::CAPABILITY_FLAGS) {
            asset.update_capability_flags = Some(reader.read_u8()?);
        }
        Ok(asset)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write(&mut buf);
        buf
    }

    pub fn write(&self, buf: &mut Vec<u8>) {
        self.allocation.write(buf);
        buf.update([self.precision, self.update_mask().bits()]);
        if let Some(init) = &self.init {
            buf.write_base64(&init.symbol).update(init.max_supply.to_le_bytes());
        }
        if let Some(public_value) = &self.public_value {
            buf.write_base64(public_value);
        }
        if let Some(contract) = &self.contract {
            buf.write_var_bytes(contract);
        }
        if let Some(balance) = self.balance {
            buf.update(balance.to_le_bytes());
        }
        if let Some(key_id) = &self.notary_key_id {
            buf.write_var_bytes(key_id);
        }
        if let Some(details) = &self.notary_details {
            buf.write_base64(&details.endpoint).update([details.instant_transfers as u8, details.hd_required as u8]);
        }
        if let Some(key_id) = &self.auxfee_key_id {
            buf.write_var_bytes(key_id);
        }
        if let Some(details) = &self.auxfee_details {
            buf.write_len(details.fees.len());
            for fee in details.fees.iter() {
                buf.update(fee.bound.to_le_bytes()).update(fee.percent.to_le_bytes());
            }
        }
        if let Some(flags) = self.update_capability_flags {
            buf.update([flags]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::{AssetOut, AssetOutValue};

    fn full_asset() -> Asset {
        Asset {
            allocation: AssetAllocation::new(vec![AssetOut::new(1234, vec![AssetOutValue::new(0, 0)])]),
            precision: 8,
            init: Some(AssetInit { symbol: "SYSX".to_string(), max_supply: 1_000_000_000_000 }),
            public_value: Some("{\"desc\":\"bridged token\"}".to_string()),
            contract: Some(vec![0xaa; 20]),
            balance: Some(500),
            notary_key_id: Some([0x01; KEY_ID_SIZE]),
            notary_details: Some(NotaryDetails { endpoint: "https://notary.example".to_string(), instant_transfers: true, hd_required: false }),
            auxfee_key_id: Some([0x02; KEY_ID_SIZE]),
            auxfee_details: Some(AuxFeeDetails { fees: vec![AuxFee { bound: 0, percent: 1000 }, AuxFee { bound: 10_000, percent: 800 }] }),
            update_capability_flags: Some(0xff),
        }
    }

    #[test]
    fn test_activation_layout() {
        let asset = full_asset();
        assert_eq!(asset.update_mask(), UpdateMask::all());

        let encoded = asset.encode();
        assert_eq!(Asset::decode(&encoded, true).unwrap(), asset);
        // without the activation fields the symbol bytes are misread as the public value
        assert_ne!(Asset::decode(&encoded, false).ok(), Some(asset));
    }

    #[test]
    fn test_every_mask_selects_its_fields() {
        let full = full_asset();
        for bits in 0..=u8::MAX {
            let mask = UpdateMask::from_bits_retain(bits);
            let asset = Asset {
                allocation: full.allocation.clone(),
                precision: 2,
                init: None,
                public_value: full.public_value.clone().filter(|_| mask.contains(UpdateMask::DATA)),
                contract: full.contract.clone().filter(|_| mask.contains(UpdateMask::CONTRACT)),
                balance: full.balance.filter(|_| mask.contains(UpdateMask::SUPPLY)),
                notary_key_id: full.notary_key_id.filter(|_| mask.contains(UpdateMask::NOTARY_KEY)),
                notary_details: full.notary_details.clone().filter(|_| mask.contains(UpdateMask::NOTARY_DETAILS)),
                auxfee_key_id: full.auxfee_key_id.filter(|_| mask.contains(UpdateMask::AUXFEE_KEY)),
                auxfee_details: full.auxfee_details.clone().filter(|_| mask.contains(UpdateMask::AUXFEE_DETAILS)),
                update_capability_flags: full.update_capability_flags.filter(|_| mask.contains(UpdateMask::CAPABILITY_FLAGS)),
            };
            assert_eq!(asset.update_mask(), mask);

            let encoded = asset.encode();
            assert_eq!(encoded[encoded.len() - encoded_fields_len(&asset) - 1], bits, "mask byte misplaced for {bits:#04x}");
            let decoded = Asset::decode(&encoded, false).unwrap();
            assert_eq!(decoded.update_mask(), mask);
            assert_eq!(decoded, asset);
        }
    }

    fn encoded_fields_len(asset: &Asset) -> usize {
        let without_fields = Asset { allocation: asset.allocation.clone(), precision: asset.precision, ..Default::default() };
        asset.encode().len() - without_fields.encode().len()
    }

    #[test]
    fn test_asset_rejects() {
        let mut asset = full_asset();
        asset.precision = 9;
        assert_eq!(Asset::decode(&asset.encode(), true), Err(PayloadError::InvalidPrecision(9)));

        let mut truncated = full_asset().encode();
        truncated.pop();
        assert!(matches!(Asset::decode(&truncated, true), Err(PayloadError::UnexpectedEnd(..))));

        let mut bad_key = AssetAllocation::default().encode();
        bad_key.update([0, UpdateMask::NOTARY_KEY.bits()]).write_var_bytes(&[0x01; 19]);
        assert_eq!(Asset::decode(&bad_key, false), Err(PayloadError::InvalidFieldLength("notary_key_id", 19, 20)));
    }
}
