use syscoin_txscript_errors::TxScriptError;

/// Longest push rendered as a number by the disassembler
pub const MAX_RENDERED_NUM_LEN: usize = 4;

/// Decodes a script number: little-endian magnitude with the sign carried by
/// the top bit of the last byte. Minimal encoding is not required, so
/// negative zero decodes to 0.
pub fn deserialize_i64(v: &[u8]) -> Result<i64, TxScriptError> {
    match v.len() {
        l if l > size_of::<i64>() => Err(TxScriptError::NumberTooBig(format!("numeric value encoded as {v:x?} is longer than 8 bytes"))),
        0 => Ok(0),
        _ => {
            let msb = v[v.len() - 1];
            let sign = 1 - 2 * ((msb >> 7) as i64);
            let first_byte = (msb & 0x7f) as i64;
            Ok(v[..v.len() - 1].iter().rev().map(|v| *v as i64).fold(first_byte, |accum, item| (accum << 8) + item) * sign)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_i64() {
        struct Test {
            serialized: Vec<u8>,
            result: Result<i64, TxScriptError>,
        }

        let tests = vec![
            Test { serialized: vec![], result: Ok(0) },
            Test { serialized: vec![0x01], result: Ok(1) },
            Test { serialized: vec![0x81], result: Ok(-1) },
            Test { serialized: vec![0x7f], result: Ok(127) },
            Test { serialized: vec![0x80, 0x00], result: Ok(128) },
            Test { serialized: vec![0x80, 0x80], result: Ok(-128) },
            Test { serialized: vec![0x00, 0x01], result: Ok(256) },
            // negative zero and other non-minimal encodings are accepted
            Test { serialized: vec![0x80], result: Ok(0) },
            Test { serialized: vec![0x01, 0x00], result: Ok(1) },
            Test { serialized: vec![0xff, 0xff, 0xff, 0x7f], result: Ok(2147483647) },
            Test { serialized: vec![0xff, 0xff, 0xff, 0xff], result: Ok(-2147483647) },
            Test { serialized: vec![0x00, 0x00, 0x00, 0x80], result: Ok(0) },
            Test { serialized: vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f], result: Ok(i64::MAX) },
            Test {
                serialized: vec![0x00; 9],
                result: Err(TxScriptError::NumberTooBig("numeric value encoded as [0, 0, 0, 0, 0, 0, 0, 0, 0] is longer than 8 bytes".to_string())),
            },
        ];

        for test in tests {
            assert_eq!(deserialize_i64(&test.serialized), test.result, "{:x?} decoded wrongly", test.serialized);
        }
    }
}
