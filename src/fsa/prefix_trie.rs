//! Arena-indexed prefix trie
//!
//! All nodes live in a single vector and refer to their children by [`StateId`].
//! Each node keeps a sparse, symbol-sorted edge list, so a lookup step is a
//! binary search over at most 256 entries. The structure has no interior
//! mutability: once built it can be shared freely between threads.

use crate::fsa::traits::{
    FiniteStateAutomaton, StateInspectable, StatisticsProvider, Trie, TrieStats,
};
use crate::StateId;

/// Node in a prefix trie
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Outgoing edges sorted by symbol
    edges: Vec<(u8, StateId)>,
    /// Value of the key ending here, present iff the node is terminal
    value: Option<u32>,
}

impl TrieNode {
    #[inline]
    fn child(&self, symbol: u8) -> Option<StateId> {
        self.edges
            .binary_search_by_key(&symbol, |&(s, _)| s)
            .ok()
            .map(|pos| self.edges[pos].1)
    }
}

/// A longest-prefix match found by [`PrefixTrie::longest_match`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch {
    /// Number of input bytes covered by the match
    pub len: usize,
    /// Value stored for the matched key
    pub value: u32,
}

/// Byte trie mapping keys to `u32` values
///
/// # Examples
///
/// ```rust
/// use smaz::fsa::{PrefixTrie, Trie};
///
/// let mut trie = PrefixTrie::new();
/// trie.insert(b"t", 3);
/// trie.insert(b"the", 1);
///
/// let m = trie.longest_match(b"then").unwrap();
/// assert_eq!((m.len, m.value), (3, 1));
/// assert_eq!(trie.get(b"th"), None);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    num_keys: usize,
}

impl PrefixTrie {
    const ROOT: StateId = 0;

    /// Create a new empty trie containing only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            num_keys: 0,
        }
    }

    /// Number of states, root included
    pub fn num_states(&self) -> usize {
        self.nodes.len()
    }

    /// Follow the edge labelled `symbol` out of `state`.
    ///
    /// `None` means no key extends the current prefix with that byte.
    #[inline]
    pub fn walk(&self, state: StateId, symbol: u8) -> Option<StateId> {
        self.nodes.get(state as usize)?.child(symbol)
    }

    /// Whether the path from the root to `state` spells a complete key
    #[inline]
    pub fn is_terminal(&self, state: StateId) -> bool {
        self.value(state).is_some()
    }

    /// Value of the key ending at `state`, `None` if the state is not terminal
    #[inline]
    pub fn value(&self, state: StateId) -> Option<u32> {
        self.nodes.get(state as usize).and_then(|node| node.value)
    }

    /// Whether any key extends the path to `state`
    #[inline]
    pub fn has_children(&self, state: StateId) -> bool {
        self.nodes
            .get(state as usize)
            .map_or(false, |node| !node.edges.is_empty())
    }

    /// Find the longest non-empty key that is a prefix of `input`.
    ///
    /// The walk keeps going past terminal states, because a short key may be a
    /// strict prefix of a longer one, and stops at the first missing edge.
    #[inline]
    pub fn longest_match(&self, input: &[u8]) -> Option<PrefixMatch> {
        let mut node = &self.nodes[Self::ROOT as usize];
        let mut best = None;

        for (i, &symbol) in input.iter().enumerate() {
            let Some(next) = node.child(symbol) else {
                break;
            };
            node = &self.nodes[next as usize];
            if let Some(value) = node.value {
                best = Some(PrefixMatch { len: i + 1, value });
            }
            if node.edges.is_empty() {
                break;
            }
        }

        best
    }

    fn add_child(&mut self, parent: StateId, symbol: u8) -> StateId {
        let id = self.nodes.len() as StateId;
        self.nodes.push(TrieNode::default());

        let edges = &mut self.nodes[parent as usize].edges;
        let pos = edges.partition_point(|&(s, _)| s < symbol);
        edges.insert(pos, (symbol, id));
        id
    }

    fn depth_sum(&self, state: StateId, depth: usize, max_depth: &mut usize) -> usize {
        let node = &self.nodes[state as usize];
        let mut total = 0;
        if node.value.is_some() {
            total += depth;
            *max_depth = (*max_depth).max(depth);
        }
        for &(_, child) in &node.edges {
            total += self.depth_sum(child, depth + 1, max_depth);
        }
        total
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl FiniteStateAutomaton for PrefixTrie {
    fn root(&self) -> StateId {
        Self::ROOT
    }

    fn is_final(&self, state: StateId) -> bool {
        self.is_terminal(state)
    }

    fn transition(&self, state: StateId, symbol: u8) -> Option<StateId> {
        self.walk(state, symbol)
    }

    fn transitions(&self, state: StateId) -> Box<dyn Iterator<Item = (u8, StateId)> + '_> {
        match self.nodes.get(state as usize) {
            Some(node) => Box::new(node.edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl Trie for PrefixTrie {
    fn insert(&mut self, key: &[u8], value: u32) -> bool {
        let mut state = Self::ROOT;
        for &symbol in key {
            state = match self.walk(state, symbol) {
                Some(next) => next,
                None => self.add_child(state, symbol),
            };
        }

        let newly_inserted = self.nodes[state as usize].value.replace(value).is_none();
        if newly_inserted {
            self.num_keys += 1;
        }
        newly_inserted
    }

    fn get(&self, key: &[u8]) -> Option<u32> {
        let mut state = Self::ROOT;
        for &symbol in key {
            state = self.walk(state, symbol)?;
        }
        self.value(state)
    }

    fn len(&self) -> usize {
        self.num_keys
    }
}

impl StateInspectable for PrefixTrie {
    fn out_degree(&self, state: StateId) -> usize {
        self.nodes.get(state as usize).map_or(0, |node| node.edges.len())
    }

    fn out_symbols(&self, state: StateId) -> Vec<u8> {
        self.nodes
            .get(state as usize)
            .map(|node| node.edges.iter().map(|&(s, _)| s).collect())
            .unwrap_or_default()
    }
}

impl StatisticsProvider for PrefixTrie {
    fn stats(&self) -> TrieStats {
        let num_transitions: usize = self.nodes.iter().map(|node| node.edges.len()).sum();
        let memory_usage = std::mem::size_of::<Self>()
            + self.nodes.capacity() * std::mem::size_of::<TrieNode>()
            + self
                .nodes
                .iter()
                .map(|node| node.edges.capacity() * std::mem::size_of::<(u8, StateId)>())
                .sum::<usize>();

        let mut max_depth = 0;
        let total_depth = self.depth_sum(Self::ROOT, 0, &mut max_depth);

        let mut stats = TrieStats {
            num_states: self.nodes.len(),
            num_keys: self.num_keys,
            num_transitions,
            max_depth,
            memory_usage,
            ..TrieStats::default()
        };
        stats.calculate_avg_depth(total_depth);
        stats.calculate_bits_per_key();
        stats
    }
}
