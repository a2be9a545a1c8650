use crate::{
    api::address::AddressEncoder,
    model::{RpcDecodedScript, RpcScriptPubKey, RpcScriptSig},
};
use syscoin_txscript::{ScriptClass, ScriptViewer, extract_destination, extract_destinations};

/// Unlocking scripts are the only ones disassembled with sighash decoding.
pub fn script_sig_to_rpc(script: &[u8]) -> RpcScriptSig {
    RpcScriptSig { asm: ScriptViewer::with_sighash_decode(script).to_asm(), hex: hex::encode(script) }
}

pub fn script_pub_key_to_rpc(script: &[u8], encoder: &dyn AddressEncoder) -> RpcScriptPubKey {
    let asm = ScriptViewer::new(script).to_asm();
    let hex = hex::encode(script);
    let extracted = extract_destinations(script);
    let script_type = extracted.class.to_string();

    // a bare key is shown by its type alone
    if !extracted.is_resolved() || extracted.class == ScriptClass::PubKey {
        return RpcScriptPubKey { asm, hex, req_sigs: None, script_type, addresses: None };
    }
    let addresses = extracted.destinations.iter().map(|destination| encoder.encode(destination)).collect();
    RpcScriptPubKey { asm, hex, req_sigs: Some(extracted.required_signatures), script_type, addresses: Some(addresses) }
}

/// Decodes a standalone script. `address` is present when the script pays to a
/// single destination other than a bare key.
pub fn script_to_rpc(script: &[u8], encoder: &dyn AddressEncoder) -> RpcDecodedScript {
    let class = ScriptClass::from_script(script);
    let address = match class {
        ScriptClass::PubKey => None,
        _ => extract_destination(script).map(|destination| encoder.encode(&destination)),
    };
    RpcDecodedScript { asm: ScriptViewer::new(script).to_asm(), hex: hex::encode(script), script_type: class.to_string(), address }
}
