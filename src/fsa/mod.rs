//! Finite State Automata and Trie structures
//!
//! This module provides the byte trie used to index codebooks together with the
//! FSA traits it implements.

pub mod prefix_trie;
pub mod traits;

// Re-export core types
pub use prefix_trie::{PrefixMatch, PrefixTrie};
pub use traits::{FiniteStateAutomaton, StateInspectable, StatisticsProvider, Trie, TrieStats};
