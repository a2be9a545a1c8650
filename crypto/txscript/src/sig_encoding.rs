use syscoin_consensus_core::hashing::sighash_type::SigHashType;
use syscoin_txscript_errors::TxScriptError;

const MIN_SIG_LEN: usize = 9;
const MAX_SIG_LEN: usize = 73;
const ASN1_SEQUENCE_ID: u8 = 0x30;
const ASN1_INTEGER_ID: u8 = 0x02;

/// Checks that a push is a strictly DER encoded ECDSA signature followed by a
/// defined sighash flag byte. Only the encoding is checked, never the signature itself.
pub fn check_signature_encoding(sig: &[u8]) -> Result<(), TxScriptError> {
    check_der_encoding(sig)?;
    let flag = sig[sig.len() - 1];
    SigHashType::from_u8(flag).map_err(|_| TxScriptError::InvalidSigHashType(flag))?;
    Ok(())
}

/// Format: 0x30 [total-length] 0x02 [R-length] [R] 0x02 [S-length] [S] [sighash]
fn check_der_encoding(sig: &[u8]) -> Result<(), TxScriptError> {
    if !(MIN_SIG_LEN..=MAX_SIG_LEN).contains(&sig.len()) {
        return Err(TxScriptError::SigLength(sig.len()));
    }
    if sig[0] != ASN1_SEQUENCE_ID {
        return Err(TxScriptError::SigDerEncoding("missing sequence marker"));
    }
    // the length covers everything but the marker, itself and the sighash byte
    if sig[1] as usize != sig.len() - 3 {
        return Err(TxScriptError::SigDerEncoding("sequence length does not match signature length"));
    }

    let r_len = sig[3] as usize;
    if 5 + r_len >= sig.len() {
        return Err(TxScriptError::SigDerEncoding("R length overruns the signature"));
    }
    let s_len = sig[5 + r_len] as usize;
    if r_len + s_len + 7 != sig.len() {
        return Err(TxScriptError::SigDerEncoding("R and S lengths do not add up to the signature length"));
    }

    if sig[2] != ASN1_INTEGER_ID {
        return Err(TxScriptError::SigDerEncoding("R is not an integer"));
    }
    if r_len == 0 {
        return Err(TxScriptError::SigDerEncoding("R is empty"));
    }
    if sig[4] & 0x80 != 0 {
        return Err(TxScriptError::SigDerEncoding("R is negative"));
    }
    if r_len > 1 && sig[4] == 0x00 && sig[5] & 0x80 == 0 {
        return Err(TxScriptError::SigDerEncoding("R has excessive padding"));
    }

    if sig[r_len + 4] != ASN1_INTEGER_ID {
        return Err(TxScriptError::SigDerEncoding("S is not an integer"));
    }
    if s_len == 0 {
        return Err(TxScriptError::SigDerEncoding("S is empty"));
    }
    if sig[r_len + 6] & 0x80 != 0 {
        return Err(TxScriptError::SigDerEncoding("S is negative"));
    }
    if s_len > 1 && sig[r_len + 6] == 0x00 && sig[r_len + 7] & 0x80 == 0 {
        return Err(TxScriptError::SigDerEncoding("S has excessive padding"));
    }
    Ok(())
}
