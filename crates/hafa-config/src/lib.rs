use serde::{Deserialize, Serialize};

use self::format::FormatConfig;

pub mod format;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
}

impl Config {
    /// Build the config from defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            format: FormatConfig::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.format, FormatConfig::default());
    }
}
