//! Integration tests for the smaz codec
//!
//! Covers round trips over the classic sample strings, literal chunking,
//! longest-match behavior, corrupt streams and concurrent use of the shared
//! standard codebook.

use smaz::wire::{TokenStats, LITERAL_BYTE, LITERAL_RUN};
use smaz::{compress, decompress, Codebook, SmazCodec, SmazEncoder, SmazError};
use std::sync::Arc;

const SAMPLE_STRINGS: &[&str] = &[
    "",
    "This is a small string",
    "foobar",
    "the end",
    "not-a-g00d-Exampl333",
    "Smaz is a simple compression library",
    "Nothing is more difficult, and therefore more precious, than to be able to decide",
    "this is an example of what works very well with smaz",
    "1000 numbers 2000 will 10 20 30 compress very little",
    "and now a few italian sentences:",
    "Nel mezzo del cammin di nostra vita, mi ritrovai in una selva oscura",
    "Mi illumino di immenso",
    "L'autore di questa libreria vive in Sicilia",
    "try it against urls",
    "http://google.com",
    "http://programming.reddit.com",
    "http://github.com/antirez/smaz/tree/master",
    "/media/hdb1/music/Alben/The Bla",
];

// =============================================================================
// ROUND TRIPS
// =============================================================================

#[test]
fn test_sample_strings_round_trip() {
    for sample in SAMPLE_STRINGS {
        let compressed = compress(sample.as_bytes());
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, sample.as_bytes(), "{:?}", sample);
    }
}

#[test]
fn test_english_samples_shrink() {
    for sample in ["the end", "foobar", "http://google.com", "this is an example of what works very well with smaz"] {
        let compressed = compress(sample.as_bytes());
        assert!(
            compressed.len() < sample.len(),
            "{:?} grew to {} bytes",
            sample,
            compressed.len()
        );
    }
}

#[test]
fn test_every_byte_value_round_trips() {
    let all_bytes: Vec<u8> = (0..=255u8).collect();
    let compressed = compress(&all_bytes);
    assert_eq!(decompress(&compressed).unwrap(), all_bytes);

    let reversed: Vec<u8> = (0..=255u8).rev().collect();
    assert_eq!(decompress(&compress(&reversed)).unwrap(), reversed);
}

#[test]
fn test_empty_input() {
    assert!(compress(b"").is_empty());
    assert!(decompress(b"").unwrap().is_empty());
}

// =============================================================================
// TOKEN LAYOUT
// =============================================================================

#[test]
fn test_long_literal_run_is_chunked() {
    assert!(Codebook::standard().id_of(&[0]).is_none());

    let zeros = vec![0u8; 300];
    let compressed = compress(&zeros);
    let stats = TokenStats::analyze(&compressed).unwrap();
    assert_eq!(stats.literal_runs, 2);
    assert_eq!(stats.literal_bytes, 300);
    assert_eq!(stats.references, 0);
    assert_eq!(compressed[..2], [LITERAL_RUN, 255]);
    assert_eq!(compressed[257..259], [LITERAL_RUN, 45]);
    assert_eq!(decompress(&compressed).unwrap(), zeros);
}

#[test]
fn test_run_of_256_ends_with_single_literal() {
    let compressed = compress(&[0u8; 256]);
    assert_eq!(compressed.len(), 2 + 255 + 2);
    assert_eq!(compressed[257..], [LITERAL_BYTE, 0]);
}

#[test]
fn test_longest_match_preferred() {
    let book = Codebook::standard();
    let the = book.id_of(b"the").unwrap();
    assert!(book.id_of(b"t").is_some());
    assert_eq!(compress(b"the"), vec![the]);
}

#[test]
fn test_full_cover_emits_only_references() {
    let compressed = compress(b"the end");
    assert_eq!(compressed, vec![1, 171, 61]);

    let stats = TokenStats::analyze(&compressed).unwrap();
    assert!(stats.is_fully_referenced());
    assert_eq!(stats.references, 3);
}

#[test]
fn test_single_unmatched_byte_uses_compact_form() {
    // 'T' has no codeword of its own; "The" would need the "he" after it
    let compressed = compress(b"Tx");
    assert_eq!(compressed[..2], [LITERAL_BYTE, b'T']);
    assert_eq!(decompress(&compressed).unwrap(), b"Tx".to_vec());
}

// =============================================================================
// CORRUPT INPUT
// =============================================================================

#[test]
fn test_run_marker_without_length() {
    let err = decompress(&[255]).unwrap_err();
    assert!(matches!(err, SmazError::CorruptInput { offset: 0, .. }));
}

#[test]
fn test_run_longer_than_remaining() {
    let err = decompress(&[255, 5, 0x41, 0x42]).unwrap_err();
    assert!(err.is_corrupt_input());
    assert!(err.to_string().contains("5"));
}

#[test]
fn test_literal_marker_without_byte() {
    assert!(decompress(&[1, 254]).unwrap_err().is_corrupt_input());
}

#[test]
fn test_truncated_compressed_output() {
    let compressed = compress(b"1000 numbers 2000");
    assert_eq!(compressed[0], LITERAL_RUN);
    for cut in [1, 3] {
        assert!(decompress(&compressed[..cut]).is_err(), "cut at {}", cut);
    }
}

// =============================================================================
// CUSTOM CODEBOOKS
// =============================================================================

#[test]
fn test_custom_codebook_round_trip() {
    let book = Arc::new(Codebook::new(["select", " from ", " where ", "id", " = "]).unwrap());
    let codec = SmazCodec::with_codebook(Arc::clone(&book));

    let query = b"select name from users where id = 7";
    let compressed = codec.encode(query);
    assert!(compressed.len() < query.len());
    assert_eq!(codec.decode(&compressed).unwrap(), query.to_vec());

    // References past the end of a short codebook are corrupt
    assert!(codec.decode(&[5]).unwrap_err().is_corrupt_input());
}

#[test]
fn test_streams_are_codebook_specific() {
    let book = Codebook::new(["xyz"]).unwrap();
    let compressed = SmazEncoder::new(&book).encode(b"xyz");
    assert_eq!(compressed, vec![0]);
    assert_eq!(decompress(&compressed).unwrap(), b" ".to_vec());
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[test]
fn test_concurrent_first_use_and_round_trips() {
    std::thread::scope(|scope| {
        for t in 0..8 {
            scope.spawn(move || {
                for (i, sample) in SAMPLE_STRINGS.iter().enumerate() {
                    let input = format!("{} {} {}", sample, t, i);
                    let compressed = compress(input.as_bytes());
                    assert_eq!(decompress(&compressed).unwrap(), input.as_bytes());
                }
            });
        }
    });
}

#[test]
fn test_codec_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SmazCodec>();
    assert_send_sync::<Codebook>();

    let codec = Arc::new(SmazCodec::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let codec = Arc::clone(&codec);
            std::thread::spawn(move || {
                let input = format!("thread {} says hello to the world", i);
                codec.decode(&codec.encode(input.as_bytes())).unwrap() == input.as_bytes()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
