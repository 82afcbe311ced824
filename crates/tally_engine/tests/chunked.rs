use std::io::Cursor;

use pretty_assertions::assert_eq;
use tally_engine::{ChunkedTokenizer, ScanTokenizer, Tokenizer};

fn collect_words<T: Tokenizer>(tokenizer: &mut T) -> Vec<String> {
    let mut words = Vec::new();
    while let Some(word) = tokenizer.next_word().unwrap() {
        words.push(word);
    }
    words
}

fn chunk_words(input: &str, chunk_size: usize) -> Vec<String> {
    let mut tokenizer =
        ChunkedTokenizer::new(Cursor::new(input.to_string().into_bytes()), chunk_size);
    collect_words(&mut tokenizer)
}

fn scan_words(input: &str) -> Vec<String> {
    let mut tokenizer = ScanTokenizer::new(Cursor::new(input.to_string().into_bytes()));
    collect_words(&mut tokenizer)
}

#[test]
fn word_split_across_chunk_boundary_is_reassembled() {
    assert_eq!(chunk_words("elephant zebra", 3), vec!["elephant", "zebra"]);
}

#[test]
fn fragment_can_span_many_chunks() {
    assert_eq!(chunk_words("abcdefghij k", 3), vec!["abcdefghij", "k"]);
    assert_eq!(chunk_words("abcdefghij k", 1), vec!["abcdefghij", "k"]);
}

#[test]
fn input_smaller_than_chunk_works() {
    assert_eq!(chunk_words("tiny", 64 * 1024), vec!["tiny"]);
}

#[test]
fn multibyte_char_split_across_chunks_is_decoded() {
    // "héllo" in UTF-8 is 6 bytes; chunk sizes 1 and 2 split the 'é'.
    assert_eq!(chunk_words("héllo wörld", 1), vec!["héllo", "wörld"]);
    assert_eq!(chunk_words("héllo wörld", 2), vec!["héllo", "wörld"]);
}

#[test]
fn end_of_input_is_idempotent() {
    let mut tokenizer = ChunkedTokenizer::new(Cursor::new(b"one two".to_vec()), 4);
    assert_eq!(tokenizer.next_word().unwrap(), Some("one".to_string()));
    assert_eq!(tokenizer.next_word().unwrap(), Some("two".to_string()));
    assert_eq!(tokenizer.next_word().unwrap(), None);
    assert_eq!(tokenizer.next_word().unwrap(), None);
}

#[test]
fn matches_scan_tokenizer_for_any_chunk_size() {
    let inputs = [
        "",
        "   \t\n\r\u{000C}",
        "the quick brown fox the Fox",
        "a\tb\nc\rd\u{000C}e",
        "  leading and trailing  ",
        "héllo wörld ÄPFEL äpfel",
        "one-word",
    ];
    for input in inputs {
        let expected = scan_words(input);
        for chunk_size in 1..=17 {
            assert_eq!(
                chunk_words(input, chunk_size),
                expected,
                "input {input:?} chunk_size {chunk_size}"
            );
        }
    }
}
