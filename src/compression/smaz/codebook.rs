//! Codebooks: the dictionary table and its prefix index
//!
//! A [`Codebook`] owns an ordered list of at most [`MAX_CODEWORDS`] codewords and
//! the [`PrefixTrie`] built from them. It is immutable after construction and is
//! shared between threads by reference or through an [`Arc`].

use super::standard::STANDARD_CODEWORDS;
use crate::error::{Result, SmazError};
use crate::fsa::{PrefixMatch, PrefixTrie, StatisticsProvider, Trie, TrieStats};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Largest number of codewords a codebook may hold.
///
/// Identifiers 254 and 255 are the literal escape markers of the wire format.
pub const MAX_CODEWORDS: usize = 254;

static STANDARD: OnceLock<Arc<Codebook>> = OnceLock::new();

/// Ordered, immutable table of codewords with a longest-prefix index
#[derive(Debug, Clone)]
pub struct Codebook {
    codewords: Vec<Box<[u8]>>,
    trie: PrefixTrie,
}

impl Codebook {
    /// Build a codebook from codewords given in identifier order.
    ///
    /// Fails with [`SmazError::InvalidCodebook`] if there are more than
    /// [`MAX_CODEWORDS`] entries or if any codeword is empty or repeated.
    pub fn new<I, W>(codewords: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut book = Self {
            codewords: Vec::new(),
            trie: PrefixTrie::new(),
        };

        for word in codewords {
            let word = word.as_ref();
            let id = book.codewords.len();
            if id >= MAX_CODEWORDS {
                return Err(SmazError::invalid_codebook(format!(
                    "more than {} codewords",
                    MAX_CODEWORDS
                )));
            }
            if word.is_empty() {
                return Err(SmazError::invalid_codebook(format!("codeword {} is empty", id)));
            }
            if !book.trie.insert(word, id as u32) {
                return Err(SmazError::invalid_codebook(format!(
                    "codeword {} ({:?}) duplicates an earlier entry",
                    id,
                    String::from_utf8_lossy(word)
                )));
            }
            book.codewords.push(word.into());
        }

        log::debug!(
            "Built codebook with {} codewords and {} trie states",
            book.codewords.len(),
            book.trie.num_states()
        );
        Ok(book)
    }

    /// The process-wide standard codebook, built on first use
    pub fn standard() -> &'static Arc<Codebook> {
        STANDARD.get_or_init(|| Arc::new(Self::from_trusted(&STANDARD_CODEWORDS)))
    }

    // Skips validation; only for tables checked by unit tests.
    fn from_trusted(codewords: &[&[u8]]) -> Self {
        debug_assert!(codewords.len() <= MAX_CODEWORDS);
        let mut trie = PrefixTrie::new();
        for (id, word) in codewords.iter().enumerate() {
            trie.insert(word, id as u32);
        }
        log::debug!(
            "Initialized standard codebook: {} codewords, {} trie states",
            codewords.len(),
            trie.num_states()
        );
        Self {
            codewords: codewords.iter().map(|&w| w.into()).collect(),
            trie,
        }
    }

    /// Codeword for identifier `id`, if the codebook has one
    #[inline]
    pub fn get(&self, id: u8) -> Option<&[u8]> {
        self.codewords.get(id as usize).map(|w| &w[..])
    }

    /// Identifier of `codeword`, if it is an entry of this codebook
    pub fn id_of(&self, codeword: &[u8]) -> Option<u8> {
        self.trie.get(codeword).map(|id| id as u8)
    }

    /// Longest codeword that is a prefix of `input`
    #[inline]
    pub fn longest_match(&self, input: &[u8]) -> Option<PrefixMatch> {
        self.trie.longest_match(input)
    }

    /// Number of codewords
    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    /// Whether the codebook has no codewords
    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    /// Iterate codewords in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.codewords.iter().map(|w| &w[..])
    }

    /// The prefix index over the codewords
    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    /// Structural statistics of the prefix index
    pub fn stats(&self) -> TrieStats {
        self.trie.stats()
    }

    /// Load a codebook from a JSON file of the form `{"codewords": [...]}`.
    ///
    /// Each entry is either a string (its UTF-8 bytes) or an array of bytes.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file: CodebookFile = serde_json::from_str(&content).map_err(|e| {
            SmazError::invalid_codebook(format!(
                "Failed to parse codebook file {}: {}",
                path.display(),
                e
            ))
        })?;
        log::debug!(
            "Loaded {} codewords from {}",
            file.codewords.len(),
            path.display()
        );
        Self::new(file.codewords.iter().map(CodewordRepr::as_bytes))
    }

    /// Save this codebook as JSON, readable by [`Codebook::load_from_file`]
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = CodebookFile {
            codewords: self.iter().map(CodewordRepr::from_bytes).collect(),
        };
        let serialized = serde_json::to_string_pretty(&file).map_err(|e| {
            SmazError::invalid_codebook(format!("Failed to serialize codebook: {}", e))
        })?;
        std::fs::write(path, serialized)?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CodebookFile {
    codewords: Vec<CodewordRepr>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum CodewordRepr {
    Text(String),
    Bytes(Vec<u8>),
}

impl CodewordRepr {
    fn from_bytes(word: &[u8]) -> Self {
        match std::str::from_utf8(word) {
            Ok(text) => Self::Text(text.to_owned()),
            Err(_) => Self::Bytes(word.to_vec()),
        }
    }

    fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}
