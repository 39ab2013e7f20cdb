//! Compression algorithms
//!
//! The [`Compressor`] trait is the common seam for byte-buffer codecs; the
//! [`smaz`] module provides the static-dictionary short string codec.

pub mod smaz;

pub use self::smaz::{Codebook, SmazCodec, SmazDecoder, SmazEncoder};

use crate::error::Result;

/// Base trait for compression algorithms
pub trait Compressor: Send + Sync {
    /// Compress data
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompress data
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Short algorithm name for logging
    fn name(&self) -> &'static str;

    /// Estimate the compressed/original size ratio for `data`.
    ///
    /// Inputs over 1 KiB are estimated from their first KiB.
    fn estimate_ratio(&self, data: &[u8]) -> f64 {
        let sample = &data[..data.len().min(1024)];
        if sample.is_empty() {
            return 1.0;
        }
        match self.compress(sample) {
            Ok(compressed) => compressed.len() as f64 / sample.len() as f64,
            Err(e) => {
                log::warn!("{} failed to compress sample: {}", self.name(), e);
                1.0
            }
        }
    }
}

/// No-op compressor (pass-through)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompressor;

impl Compressor for NoCompressor {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
