//! Property-based tests for the smaz codec and prefix trie

use proptest::prelude::*;
use smaz::fsa::{PrefixTrie, Trie};
use smaz::wire::{TokenReader, TokenStats};
use smaz::{compress, decompress, Codebook, SmazEncoder, SmazDecoder};
use std::collections::BTreeMap;

// =============================================================================
// CUSTOM GENERATORS FOR PROPERTY TESTING
// =============================================================================

/// Inputs biased towards text the standard codebook was trained on
fn text_like_input() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        // Arbitrary bytes, including escapes 254 and 255
        4 => prop::collection::vec(any::<u8>(), 0..300),
        // Lowercase prose
        4 => "[a-z ,.]{0,120}".prop_map(String::into_bytes),
        // Long unmatched runs crossing the 255-byte chunk limit
        1 => (any::<u8>(), 250..600usize).prop_map(|(b, n)| vec![b; n]),
    ]
}

/// Small custom codebooks with shared prefixes
fn small_codebook() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::btree_set(prop::collection::vec(b'a'..=b'e', 1..5), 0..40)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip_standard(input in text_like_input()) {
        let compressed = compress(&input);
        prop_assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn prop_round_trip_custom_framing(
        input in text_like_input(),
        max_run in 1usize..=255,
        compact in any::<bool>(),
    ) {
        let book = Codebook::standard();
        let encoder = SmazEncoder::new(book)
            .with_max_literal_run(max_run)
            .with_single_literal_escape(compact);
        let compressed = encoder.encode(&input);

        for token in TokenReader::new(&compressed) {
            if let smaz::wire::Token::Run(bytes) = token.unwrap() {
                prop_assert!(bytes.len() <= max_run);
            }
        }
        prop_assert_eq!(SmazDecoder::new(book).decode(&compressed).unwrap(), input);
    }

    #[test]
    fn prop_round_trip_custom_codebook(
        words in small_codebook(),
        input in prop::collection::vec(b'a'..=b'f', 0..200),
    ) {
        let book = Codebook::new(&words).unwrap();
        let compressed = SmazEncoder::new(&book).encode(&input);
        prop_assert_eq!(SmazDecoder::new(&book).decode(&compressed).unwrap(), input);
    }

    #[test]
    fn prop_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        // Either a clean decode or CorruptInput, never a panic or another error kind
        if let Err(err) = decompress(&data) {
            prop_assert!(err.is_corrupt_input());
            prop_assert!(TokenStats::analyze(&data).is_err());
        }
    }

    #[test]
    fn prop_literal_bytes_accounted(input in prop::collection::vec(any::<u8>(), 0..300)) {
        let compressed = compress(&input);
        let stats = TokenStats::analyze(&compressed).unwrap();
        prop_assert_eq!(stats.encoded_len, compressed.len());
        prop_assert!(stats.literal_bytes <= input.len());
        // A lone literal costs two bytes, everything else at most one per input byte
        prop_assert!(compressed.len() <= 2 * input.len());
    }

    #[test]
    fn prop_trie_matches_map(
        entries in prop::collection::vec((prop::collection::vec(any::<u8>(), 0..8), any::<u32>()), 0..100),
        probes in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..50),
    ) {
        let mut trie = PrefixTrie::new();
        let mut model = BTreeMap::new();
        for (key, value) in &entries {
            let fresh = trie.insert(key, *value);
            prop_assert_eq!(fresh, model.insert(key.clone(), *value).is_none());
        }

        prop_assert_eq!(trie.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(trie.get(key), Some(*value));
        }
        for probe in &probes {
            prop_assert_eq!(trie.get(probe), model.get(probe).copied());

            let expected = (1..=probe.len())
                .rev()
                .find_map(|len| model.get(&probe[..len]).map(|&v| (len, v)));
            let actual = trie.longest_match(probe).map(|m| (m.len, m.value));
            prop_assert_eq!(actual, expected);
        }
    }
}
