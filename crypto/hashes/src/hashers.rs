use crate::{HASH160_SIZE, Hash};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 applied twice, the digest used for transaction ids.
pub fn double_sha256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    Hash::from_bytes(Sha256::digest(first).into())
}

/// RIPEMD-160 of SHA-256, the digest behind key-hash destinations.
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(Sha256::digest(data)).into()
}
