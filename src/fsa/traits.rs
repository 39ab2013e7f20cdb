//! Core FSA (Finite State Automaton) traits and abstractions
//!
//! These traits describe a byte-labelled automaton whose accepting states carry
//! integer values, which is exactly what the codebook index needs.

use crate::StateId;

use serde::{Deserialize, Serialize};

/// Core trait for finite state automaton operations
pub trait FiniteStateAutomaton {
    /// Get the initial/root state
    fn root(&self) -> StateId;

    /// Check if a state is final (accepting)
    fn is_final(&self, state: StateId) -> bool;

    /// Transition from a state given an input symbol
    fn transition(&self, state: StateId, symbol: u8) -> Option<StateId>;

    /// Get all possible transitions from a state, ordered by symbol
    fn transitions(&self, state: StateId) -> Box<dyn Iterator<Item = (u8, StateId)> + '_>;

    /// Check if the automaton accepts a given input sequence
    fn accepts(&self, input: &[u8]) -> bool {
        let mut state = self.root();
        for &symbol in input {
            match self.transition(state, symbol) {
                Some(next_state) => state = next_state,
                None => return false,
            }
        }
        self.is_final(state)
    }

    /// Find the longest prefix of input that leads to a final state
    fn longest_prefix(&self, input: &[u8]) -> Option<usize> {
        let mut state = self.root();
        let mut last_final = if self.is_final(state) { Some(0) } else { None };

        for (i, &symbol) in input.iter().enumerate() {
            match self.transition(state, symbol) {
                Some(next_state) => state = next_state,
                None => break,
            }
            if self.is_final(state) {
                last_final = Some(i + 1);
            }
        }

        last_final
    }
}

/// Trait for tries that map byte keys to integer values
pub trait Trie: FiniteStateAutomaton {
    /// Insert or overwrite the mapping `key -> value`.
    ///
    /// Returns `true` if `key` was not previously present. The value is
    /// overwritten either way.
    fn insert(&mut self, key: &[u8], value: u32) -> bool;

    /// Exact-match lookup of a complete key
    fn get(&self, key: &[u8]) -> Option<u32>;

    /// Check if a key exists in the trie
    fn contains(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Get the number of keys in the trie
    fn len(&self) -> usize;

    /// Check if the trie is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for automata that support state inspection
pub trait StateInspectable: FiniteStateAutomaton {
    /// Get the outgoing degree (number of transitions) from a state
    fn out_degree(&self, state: StateId) -> usize;

    /// Get all outgoing symbols from a state
    fn out_symbols(&self, state: StateId) -> Vec<u8>;

    /// Check if a state has no outgoing transitions
    fn is_leaf(&self, state: StateId) -> bool {
        self.out_degree(state) == 0
    }
}

/// Trait for automata that provide structural statistics
pub trait StatisticsProvider {
    /// Get detailed statistics about the trie
    fn stats(&self) -> TrieStats;

    /// Get memory usage in bytes
    fn memory_usage(&self) -> usize {
        self.stats().memory_usage
    }
}

/// Statistics about trie structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Number of states in the trie
    pub num_states: usize,
    /// Number of keys stored
    pub num_keys: usize,
    /// Total number of transitions
    pub num_transitions: usize,
    /// Maximum depth of any key
    pub max_depth: usize,
    /// Average depth of keys
    pub avg_depth: f64,
    /// Memory usage in bytes
    pub memory_usage: usize,
    /// Space efficiency (bits per key)
    pub bits_per_key: f64,
}

impl TrieStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate bits per key
    pub fn calculate_bits_per_key(&mut self) {
        if self.num_keys > 0 {
            self.bits_per_key = (self.memory_usage * 8) as f64 / self.num_keys as f64;
        }
    }

    /// Calculate average depth
    pub fn calculate_avg_depth(&mut self, total_depth: usize) {
        if self.num_keys > 0 {
            self.avg_depth = total_depth as f64 / self.num_keys as f64;
        }
    }
}
