//! Transaction records, version kinds, amounts and asset payload codecs
//! shared by the script and RPC layers.

pub mod amount;
pub mod assets;
pub mod constants;
pub mod encoding;
pub mod errors;
pub mod hashing;
pub mod mass;
pub mod tx;

pub use amount::Amount;
