//! Wire format of the smaz token stream
//!
//! The stream has no header, footer or checksum. Each token starts with an
//! opcode byte:
//!
//! | First byte | Meaning                                 | Token length |
//! |------------|-----------------------------------------|--------------|
//! | 0–253      | reference to the codeword with that id  | 1            |
//! | 254        | one literal byte follows                | 2            |
//! | 255        | length byte `n`, then `n` literal bytes | 2 + n        |

use crate::error::{Result, SmazError};

use serde::{Deserialize, Serialize};

/// Opcode announcing a single literal byte
pub const LITERAL_BYTE: u8 = 254;

/// Opcode announcing a length-prefixed literal run
pub const LITERAL_RUN: u8 = 255;

/// Longest literal run a single token can carry
pub const MAX_LITERAL_RUN: usize = u8::MAX as usize;

/// One decoded token, borrowing literal bytes from the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Reference to a codeword by identifier
    Reference(u8),
    /// A single literal byte (`254, b`)
    Byte(u8),
    /// A literal run (`255, n, bytes...`)
    Run(&'a [u8]),
}

impl Token<'_> {
    /// Number of stream bytes this token occupies
    pub fn encoded_len(&self) -> usize {
        match self {
            Token::Reference(_) => 1,
            Token::Byte(_) => 2,
            Token::Run(bytes) => 2 + bytes.len(),
        }
    }
}

/// Iterator over the tokens of a compressed stream
///
/// Yields `Err(CorruptInput)` once for a truncated token, then stops.
///
/// ```rust
/// use smaz::wire::{Token, TokenReader};
///
/// let tokens: Vec<_> = TokenReader::new(&[1, 254, b'x', 255, 2, b'o', b'k'])
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(tokens, vec![Token::Reference(1), Token::Byte(b'x'), Token::Run(b"ok")]);
/// ```
#[derive(Debug, Clone)]
pub struct TokenReader<'a> {
    data: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> TokenReader<'a> {
    /// Start reading tokens at the beginning of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            failed: false,
        }
    }

    /// Offset of the next token
    pub fn position(&self) -> usize {
        self.pos
    }

    fn read_token(&mut self) -> Result<Token<'a>> {
        let start = self.pos;
        let rest = &self.data[start..];

        match rest[0] {
            LITERAL_BYTE => {
                let &byte = rest.get(1).ok_or_else(|| {
                    SmazError::corrupt_input(start, "literal byte marker without a byte")
                })?;
                self.pos += 2;
                Ok(Token::Byte(byte))
            }
            LITERAL_RUN => {
                let &len = rest.get(1).ok_or_else(|| {
                    SmazError::corrupt_input(start, "literal run marker without a length byte")
                })?;
                let run = rest.get(2..2 + len as usize).ok_or_else(|| {
                    SmazError::corrupt_input(
                        start,
                        format!(
                            "literal run declares {} bytes, {} remain",
                            len,
                            rest.len() - 2
                        ),
                    )
                })?;
                self.pos += 2 + run.len();
                Ok(Token::Run(run))
            }
            id => {
                self.pos += 1;
                Ok(Token::Reference(id))
            }
        }
    }
}

impl<'a> Iterator for TokenReader<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.data.len() {
            return None;
        }
        let token = self.read_token();
        self.failed = token.is_err();
        Some(token)
    }
}

/// Emit `literals` as literal tokens.
///
/// The bytes are split into chunks of at most `max_run` bytes (clamped to
/// 1..=[`MAX_LITERAL_RUN`]). A one-byte chunk uses the two-byte
/// [`LITERAL_BYTE`] form when `compact_single` is set.
pub fn write_literals(out: &mut Vec<u8>, literals: &[u8], max_run: usize, compact_single: bool) {
    let max_run = max_run.clamp(1, MAX_LITERAL_RUN);
    for chunk in literals.chunks(max_run) {
        if chunk.len() == 1 && compact_single {
            out.push(LITERAL_BYTE);
        } else {
            out.push(LITERAL_RUN);
            out.push(chunk.len() as u8);
        }
        out.extend_from_slice(chunk);
    }
}

/// Token counts of a compressed stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStats {
    /// Codeword references
    pub references: usize,
    /// Single literal byte tokens
    pub single_literals: usize,
    /// Literal run tokens
    pub literal_runs: usize,
    /// Literal bytes carried by single literals and runs
    pub literal_bytes: usize,
    /// Size of the compressed stream
    pub encoded_len: usize,
}

impl TokenStats {
    /// Count the tokens of `compressed` without resolving references
    pub fn analyze(compressed: &[u8]) -> Result<Self> {
        let mut stats = Self {
            encoded_len: compressed.len(),
            ..Self::default()
        };
        for token in TokenReader::new(compressed) {
            match token? {
                Token::Reference(_) => stats.references += 1,
                Token::Byte(_) => {
                    stats.single_literals += 1;
                    stats.literal_bytes += 1;
                }
                Token::Run(bytes) => {
                    stats.literal_runs += 1;
                    stats.literal_bytes += bytes.len();
                }
            }
        }
        Ok(stats)
    }

    /// Total number of tokens
    pub fn total_tokens(&self) -> usize {
        self.references + self.single_literals + self.literal_runs
    }

    /// Whether every token is a codeword reference
    pub fn is_fully_referenced(&self) -> bool {
        self.single_literals == 0 && self.literal_runs == 0
    }
}
