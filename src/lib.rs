//! # Smaz: Compression for Short Strings
//!
//! General-purpose compressors spend more on framing than they save on inputs of
//! a few dozen bytes. This crate implements smaz, which replaces common
//! substrings with one-byte references into a fixed, pre-trained codebook
//! (English prose, punctuation, HTML and URL fragments) and escapes everything
//! else as literal bytes. The output has no header and no checksum.
//!
//! ## Key Features
//!
//! - **Prefix Trie**: arena-indexed byte trie with longest-prefix matching
//! - **Greedy Encoder**: longest codeword at every position, literal runs otherwise
//! - **Checked Decoder**: truncated streams are reported, never read out of bounds
//! - **Custom Codebooks**: up to 254 codewords, in memory or from JSON files
//! - **Thread Safety**: codebooks are immutable and shared without locking
//!
//! ## Quick Start
//!
//! ```rust
//! let compressed = smaz::compress(b"http://google.com");
//! assert!(compressed.len() < b"http://google.com".len());
//!
//! let original = smaz::decompress(&compressed).unwrap();
//! assert_eq!(original, b"http://google.com".to_vec());
//!
//! // A run marker without its length byte is corrupt
//! assert!(smaz::decompress(&[255]).is_err());
//! ```
//!
//! ## Wire Format
//!
//! | First byte | Meaning                                 | Token length |
//! |------------|-----------------------------------------|--------------|
//! | 0–253      | reference to the codeword with that id  | 1            |
//! | 254        | one literal byte follows                | 2            |
//! | 255        | length byte `n`, then `n` literal bytes | 2 + n        |

#![warn(missing_docs)]

pub mod compression;
pub mod config;
pub mod error;
pub mod fsa;

// Re-export core types
pub use compression::smaz::wire;
pub use compression::{Codebook, Compressor, SmazCodec, SmazDecoder, SmazEncoder};
pub use config::{CodecConfig, Config};
pub use error::{Result, SmazError};
pub use fsa::{FiniteStateAutomaton, PrefixTrie, Trie};

/// State identifier type for FSA operations
pub type StateId = u32;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the standard codebook now instead of on first use
pub fn init() {
    let codebook = Codebook::standard();
    log::debug!(
        "Initializing smaz v{} with {} standard codewords",
        VERSION,
        codebook.len()
    );
}

/// Compress `input` with the standard codebook. Never fails.
pub fn compress(input: &[u8]) -> Vec<u8> {
    SmazEncoder::new(Codebook::standard()).encode(input)
}

/// Decompress a stream produced by [`compress`].
///
/// Fails with [`SmazError::CorruptInput`] if the stream is truncated.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    SmazDecoder::new(Codebook::standard()).decode(compressed)
}
