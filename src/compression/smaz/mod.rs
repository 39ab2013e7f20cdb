//! Smaz: static-dictionary compression for short strings
//!
//! Inputs of a few dozen bytes are too small for general-purpose compressors to
//! pay off. Smaz replaces common substrings with one-byte references into a
//! fixed [`Codebook`] and escapes everything else as literal bytes, so there is
//! no framing overhead beyond the tokens themselves.
//!
//! # Components
//!
//! - [`Codebook`]: ordered codeword table plus its prefix trie
//! - [`SmazEncoder`]: greedy longest-match encoder
//! - [`SmazDecoder`]: token stream decoder
//! - [`wire`]: opcodes, [`Token`](wire::Token) reader and stream statistics
//! - [`SmazCodec`]: codebook and framing options bundled behind [`Compressor`]
//!
//! # Example
//!
//! ```rust
//! use smaz::compression::smaz::SmazCodec;
//!
//! let codec = SmazCodec::new();
//! let compressed = codec.encode(b"the end");
//! assert_eq!(compressed, vec![1, 171, 61]);
//! assert_eq!(codec.decode(&compressed).unwrap(), b"the end".to_vec());
//! ```

pub mod codebook;
pub mod decoder;
pub mod encoder;
pub mod standard;
pub mod wire;

pub use codebook::{Codebook, MAX_CODEWORDS};
pub use decoder::SmazDecoder;
pub use encoder::SmazEncoder;
pub use standard::STANDARD_CODEWORDS;

use super::Compressor;
use crate::config::CodecConfig;
use crate::error::Result;
use std::sync::Arc;

/// A codebook together with the encoder framing options
#[derive(Debug, Clone)]
pub struct SmazCodec {
    codebook: Arc<Codebook>,
    max_literal_run: usize,
    single_literal_escape: bool,
}

impl SmazCodec {
    /// Codec over the standard codebook with default framing
    pub fn new() -> Self {
        Self::with_codebook(Arc::clone(Codebook::standard()))
    }

    /// Codec over a caller-supplied codebook with default framing
    pub fn with_codebook(codebook: Arc<Codebook>) -> Self {
        Self {
            codebook,
            max_literal_run: wire::MAX_LITERAL_RUN,
            single_literal_escape: true,
        }
    }

    /// Build a codec from a validated configuration.
    ///
    /// Loads the codebook file when `codebook_path` is set, otherwise uses the
    /// standard codebook.
    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        use crate::config::Config;

        config.validate()?;
        let codebook = match &config.codebook_path {
            Some(path) => Arc::new(Codebook::load_from_file(path)?),
            None => Arc::clone(Codebook::standard()),
        };
        Ok(Self {
            codebook,
            max_literal_run: config.max_literal_run,
            single_literal_escape: config.single_literal_escape,
        })
    }

    /// The codebook shared by this codec
    pub fn codebook(&self) -> &Arc<Codebook> {
        &self.codebook
    }

    /// An encoder borrowing this codec's codebook and options
    pub fn encoder(&self) -> SmazEncoder<'_> {
        SmazEncoder::new(&self.codebook)
            .with_max_literal_run(self.max_literal_run)
            .with_single_literal_escape(self.single_literal_escape)
    }

    /// A decoder borrowing this codec's codebook
    pub fn decoder(&self) -> SmazDecoder<'_> {
        SmazDecoder::new(&self.codebook)
    }

    /// Encode `input`; never fails
    pub fn encode(&self, input: &[u8]) -> Vec<u8> {
        self.encoder().encode(input)
    }

    /// Decode a token stream produced with the same codebook
    pub fn decode(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        self.decoder().decode(compressed)
    }
}

impl Default for SmazCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for SmazCodec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encode(data))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.decode(data)
    }

    fn name(&self) -> &'static str {
        "smaz"
    }
}
