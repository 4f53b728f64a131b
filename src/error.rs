use thiserror::Error;

/// Errors surfaced by the matching engines and their configuration.
///
/// Table builders never fail; only the separator-based reductions, the
/// rolling-hash parameters and configuration loading can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("configuration error: every {alphabet} candidate occurs in the input, no separator is free")]
    NoSeparator { alphabet: &'static str },

    #[error("configuration error: separator {separator} occurs in the input")]
    SeparatorInUse { separator: String },

    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("failed to load config: {message}")]
    Config { message: String },
}

impl MatchError {
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for the separator failures, which a caller can only fix by
    /// switching to a wider symbol type or a different separator.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NoSeparator { .. } | Self::SeparatorInUse { .. })
    }
}

impl From<toml::de::Error> for MatchError {
    fn from(err: toml::de::Error) -> Self {
        MatchError::config(err.to_string())
    }
}
