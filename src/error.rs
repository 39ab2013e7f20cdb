//! Error handling for the smaz library
//!
//! Decoding has exactly one failure mode, [`SmazError::CorruptInput`]. The other
//! variants only arise while building codebooks or loading configuration.

use thiserror::Error;

/// Main error type for the smaz library
#[derive(Error, Debug)]
pub enum SmazError {
    /// Compressed stream is truncated or internally inconsistent
    #[error("Corrupt input at offset {offset}: {message}")]
    CorruptInput {
        /// Byte offset of the token that could not be decoded
        offset: usize,
        /// Description of the inconsistency
        message: String,
    },

    /// Codebook cannot be used with the wire format
    #[error("Invalid codebook: {message}")]
    InvalidCodebook {
        /// Description of the offending entry
        message: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SmazError {
    /// Create a corrupt input error for the token starting at `offset`
    pub fn corrupt_input<S: Into<String>>(offset: usize, message: S) -> Self {
        Self::CorruptInput {
            offset,
            message: message.into(),
        }
    }

    /// Create an invalid codebook error
    pub fn invalid_codebook<S: Into<String>>(message: S) -> Self {
        Self::InvalidCodebook {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns true if this error came from decoding a damaged stream.
    #[inline]
    pub fn is_corrupt_input(&self) -> bool {
        matches!(self, Self::CorruptInput { .. })
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::CorruptInput { .. } => "data",
            Self::InvalidCodebook { .. } => "codebook",
            Self::Configuration { .. } => "config",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SmazError>;
