//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default rows per page for list commands.
const fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows per page for list commands.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Skip interactive delete confirmations.
    #[serde(default)]
    pub assume_yes: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            assume_yes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.page_size, 10);
        assert!(!config.assume_yes);
    }
}
