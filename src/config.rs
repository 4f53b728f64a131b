use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::matcher::Algorithm;
use crate::rolling_hash::{RollingHash, DEFAULT_BASE, DEFAULT_MODULUS};
use crate::symbol::Symbol;

// =============================================================================
// Search configuration, loaded from TOML
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    pub algorithm: Algorithm,
    /// Fixed separator for the Z search. Picked per search when absent.
    pub separator: Option<char>,
    pub hash: HashConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HashConfig {
    pub base: u64,
    pub modulus: u64,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, MatchError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, MatchError> {
        let content = fs::read_to_string(path)
            .map_err(|err| MatchError::config(format!("failed to read {}: {err}", path.display())))?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        self.rolling_hash()?;
        Ok(())
    }

    pub fn rolling_hash(&self) -> Result<RollingHash, MatchError> {
        RollingHash::new(self.hash.base, self.hash.modulus)
    }

    /// The configured separator in the alphabet `S`, if one is set.
    pub fn separator<S: Symbol>(&self) -> Result<Option<S>, MatchError> {
        match self.separator {
            None => Ok(None),
            Some(c) => S::from_char(c).map(Some).ok_or_else(|| {
                MatchError::invalid_argument(
                    "separator",
                    format!("{c:?} is not representable as a {} symbol", S::ALPHABET),
                )
            }),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, MatchError> {
        toml::to_string_pretty(self).map_err(|err| MatchError::config(err.to_string()))
    }
}
