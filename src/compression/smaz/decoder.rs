//! Token stream decoder

use super::codebook::Codebook;
use super::wire::{Token, TokenReader};
use crate::error::{Result, SmazError};

/// Decodes token streams produced against the same [`Codebook`]
#[derive(Debug, Clone, Copy)]
pub struct SmazDecoder<'a> {
    codebook: &'a Codebook,
}

impl<'a> SmazDecoder<'a> {
    /// Decoder resolving references against `codebook`
    pub fn new(codebook: &'a Codebook) -> Self {
        Self { codebook }
    }

    /// Decode `compressed` into a new buffer.
    ///
    /// Fails with [`SmazError::CorruptInput`] on a truncated token or a reference
    /// the codebook does not define.
    pub fn decode(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(compressed.len() * 3);
        self.decode_into(compressed, &mut out)?;
        Ok(out)
    }

    /// Decode `compressed`, appending the bytes to `out`.
    ///
    /// On error `out` may hold a partial result that must not be relied upon.
    pub fn decode_into(&self, compressed: &[u8], out: &mut Vec<u8>) -> Result<()> {
        let mut reader = TokenReader::new(compressed);
        loop {
            let offset = reader.position();
            let Some(token) = reader.next() else {
                return Ok(());
            };
            match token? {
                Token::Reference(id) => {
                    let word = self.codebook.get(id).ok_or_else(|| {
                        SmazError::corrupt_input(
                            offset,
                            format!(
                                "reference {} outside codebook of {} entries",
                                id,
                                self.codebook.len()
                            ),
                        )
                    })?;
                    out.extend_from_slice(word);
                }
                Token::Byte(byte) => out.push(byte),
                Token::Run(bytes) => out.extend_from_slice(bytes),
            }
        }
    }
}
