//! Greedy longest-match encoder

use super::codebook::Codebook;
use super::wire::{self, MAX_LITERAL_RUN};

/// Encodes byte strings against a [`Codebook`]
///
/// At every position the encoder takes the longest codeword that prefixes the
/// remaining input. Bytes no codeword covers are buffered and written as
/// literal tokens just before the next reference, or at the end of input.
/// Matching is greedy per step, not globally optimal.
#[derive(Debug, Clone, Copy)]
pub struct SmazEncoder<'a> {
    codebook: &'a Codebook,
    max_literal_run: usize,
    single_literal_escape: bool,
}

impl<'a> SmazEncoder<'a> {
    /// Encoder with the default framing: 255-byte runs, compact single literals
    pub fn new(codebook: &'a Codebook) -> Self {
        Self {
            codebook,
            max_literal_run: MAX_LITERAL_RUN,
            single_literal_escape: true,
        }
    }

    /// Cap literal runs at `max` bytes, clamped to 1..=255
    pub fn with_max_literal_run(mut self, max: usize) -> Self {
        self.max_literal_run = max.clamp(1, MAX_LITERAL_RUN);
        self
    }

    /// Whether lone literal bytes use the two-byte `254` form
    pub fn with_single_literal_escape(mut self, enabled: bool) -> Self {
        self.single_literal_escape = enabled;
        self
    }

    /// The codebook this encoder matches against
    pub fn codebook(&self) -> &'a Codebook {
        self.codebook
    }

    /// Encode `input` into a new buffer
    pub fn encode(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len() / 2 + 2);
        self.encode_into(input, &mut out);
        out
    }

    /// Encode `input`, appending the tokens to `out`
    pub fn encode_into(&self, input: &[u8], out: &mut Vec<u8>) {
        let mut pos = 0;
        // Start of the pending verbatim span; bytes [verbatim_start, pos) await a flush.
        let mut verbatim_start = 0;

        while pos < input.len() {
            match self.codebook.longest_match(&input[pos..]) {
                Some(m) => {
                    self.flush(out, &input[verbatim_start..pos]);
                    out.push(m.value as u8);
                    pos += m.len;
                    verbatim_start = pos;
                }
                None => pos += 1,
            }
        }
        self.flush(out, &input[verbatim_start..]);
    }

    #[inline]
    fn flush(&self, out: &mut Vec<u8>, verbatim: &[u8]) {
        if !verbatim.is_empty() {
            wire::write_literals(out, verbatim, self.max_literal_run, self.single_literal_escape);
        }
    }
}
