use std::env;

use serde::{Deserialize, Serialize};

fn default_show_usage() -> bool {
    false
}

fn default_heading_icon() -> String {
    "📚".to_string()
}

/// How a vocabulary entry is rendered for display
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    /// Print the usage note between pronunciation and example
    #[serde(default = "default_show_usage")]
    pub show_usage: bool,
    #[serde(default = "default_heading_icon")]
    pub heading_icon: String,
}

impl FormatConfig {
    /// Defaults with `HAFA_*` environment overrides applied
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup`; unparsable values keep the default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let show_usage = lookup("HAFA_SHOW_USAGE")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_show_usage);

        let heading_icon = lookup("HAFA_HEADING_ICON").unwrap_or_else(default_heading_icon);

        Self {
            show_usage,
            heading_icon,
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            show_usage: default_show_usage(),
            heading_icon: default_heading_icon(),
        }
    }
}
