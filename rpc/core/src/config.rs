use serde::{Deserialize, Serialize};

/// Options of a transaction projection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TxProjectionConfig {
    /// Emit the wire encoding under `hex`
    pub include_hex: bool,
    /// Encode witnesses into `hex` when the transaction carries any
    pub hex_include_witness: bool,
}

impl Default for TxProjectionConfig {
    fn default() -> Self {
        Self { include_hex: false, hex_include_witness: true }
    }
}

impl TxProjectionConfig {
    pub fn with_hex(mut self) -> Self {
        self.include_hex = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: TxProjectionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TxProjectionConfig::default());
        assert!(!config.include_hex);
        assert!(config.hex_include_witness);

        let config: TxProjectionConfig = serde_json::from_str(r#"{"includeHex":true,"hexIncludeWitness":false}"#).unwrap();
        assert_eq!(config, TxProjectionConfig { include_hex: true, hex_include_witness: false });
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"includeHex":true,"hexIncludeWitness":false}"#);
    }
}
