use serde::{Deserialize, Serialize};

/// The unlocking script of a spending input
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcScriptSig {
    pub asm: String,
    pub hex: String,
}

/// An output script. `reqSigs` and `addresses` are present only when the
/// script resolves to destinations and is not a bare public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcScriptPubKey {
    pub asm: String,
    pub hex: String,
    #[serde(rename = "reqSigs", skip_serializing_if = "Option::is_none", default)]
    pub req_sigs: Option<usize>,
    #[serde(rename = "type")]
    pub script_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub addresses: Option<Vec<String>>,
}

/// A standalone script as returned by script decoding
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcDecodedScript {
    pub asm: String,
    pub hex: String,
    #[serde(rename = "type")]
    pub script_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
}
