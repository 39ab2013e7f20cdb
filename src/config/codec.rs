//! Codec configuration: encoder framing and codebook source.

use super::{parse_env_bool, parse_env_var, Config};
use crate::compression::smaz::wire::MAX_LITERAL_RUN;
use crate::error::{Result, SmazError};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for [`SmazCodec`](crate::SmazCodec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Longest literal run per token, 1..=255
    pub max_literal_run: usize,
    /// Emit lone literal bytes with the two-byte `254` form
    pub single_literal_escape: bool,
    /// JSON codebook file; the standard codebook is used when unset
    pub codebook_path: Option<PathBuf>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_literal_run: MAX_LITERAL_RUN,
            single_literal_escape: true,
            codebook_path: None,
        }
    }
}

impl Config for CodecConfig {
    fn validate(&self) -> Result<()> {
        if !(1..=MAX_LITERAL_RUN).contains(&self.max_literal_run) {
            return Err(SmazError::configuration(format!(
                "max_literal_run must be between 1 and {}, got {}",
                MAX_LITERAL_RUN, self.max_literal_run
            )));
        }
        if let Some(path) = &self.codebook_path {
            if path.as_os_str().is_empty() {
                return Err(SmazError::configuration("codebook_path must not be empty"));
            }
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.max_literal_run =
            parse_env_var(&format!("{}MAX_LITERAL_RUN", prefix), config.max_literal_run);
        config.single_literal_escape = parse_env_bool(
            &format!("{}SINGLE_LITERAL_ESCAPE", prefix),
            config.single_literal_escape,
        );
        config.codebook_path = std::env::var_os(format!("{}CODEBOOK_PATH", prefix))
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        config.validate()?;
        log::debug!("Codec configuration from environment: {:?}", config);
        Ok(config)
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            SmazError::configuration(format!("Failed to serialize codec config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            SmazError::configuration(format!("Failed to write codec config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SmazError::configuration(format!("Failed to read codec config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SmazError::configuration(format!("Failed to parse codec config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
