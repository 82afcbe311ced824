use std::io::{self, Read};
use std::mem;

use crate::tokenizer::{invalid_utf8, is_word_separator, Tokenizer};

/// Buffered tokenizer reading fixed-size chunks of the source.
///
/// Within the decoded window it matches maximal non-separator runs. A run
/// that touches the end of the window without a trailing separator is held
/// as a dangling fragment and concatenated with the continuation found at
/// the start of the next window, until a separator or end-of-input
/// terminates the word. Incomplete trailing UTF-8 bytes of a chunk are
/// carried into the next read, so any chunk size from one byte up works.
pub struct ChunkedTokenizer<R> {
    reader: R,
    chunk: Vec<u8>,
    carry: Vec<u8>,
    window: String,
    pos: usize,
    fragment: String,
    eof: bool,
}

impl<R: Read> ChunkedTokenizer<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        assert!(chunk_size >= 1, "chunk size must be at least one byte");
        Self {
            reader,
            chunk: vec![0; chunk_size],
            carry: Vec::new(),
            window: String::new(),
            pos: 0,
            fragment: String::new(),
            eof: false,
        }
    }

    /// Reads the next chunk and decodes it into the window.
    /// Returns `false` once the source is exhausted.
    fn refill(&mut self) -> io::Result<bool> {
        if self.eof {
            return Ok(false);
        }
        loop {
            let n = self.reader.read(&mut self.chunk)?;
            if n == 0 {
                self.eof = true;
                if !self.carry.is_empty() {
                    return Err(invalid_utf8());
                }
                return Ok(false);
            }
            self.carry.extend_from_slice(&self.chunk[..n]);

            let valid_len = match std::str::from_utf8(&self.carry) {
                Ok(_) => self.carry.len(),
                // Incomplete sequence at the tail: keep it for the next read.
                Err(err) if err.error_len().is_none() => err.valid_up_to(),
                Err(_) => return Err(invalid_utf8()),
            };
            if valid_len == 0 {
                // Chunk smaller than one multi-byte character; read more.
                continue;
            }

            let tail = self.carry.split_off(valid_len);
            let prefix = mem::replace(&mut self.carry, tail);
            match String::from_utf8(prefix) {
                Ok(text) => {
                    self.window = text;
                    self.pos = 0;
                    return Ok(true);
                }
                Err(_) => return Err(invalid_utf8()),
            }
        }
    }
}

impl<R: Read> Tokenizer for ChunkedTokenizer<R> {
    fn next_word(&mut self) -> io::Result<Option<String>> {
        loop {
            if self.pos >= self.window.len() {
                if !self.refill()? {
                    if self.fragment.is_empty() {
                        return Ok(None);
                    }
                    // End-of-input terminates the in-progress word.
                    return Ok(Some(mem::take(&mut self.fragment)));
                }
            }

            let rest = &self.window[self.pos..];
            match rest.char_indices().find(|&(_, c)| !is_word_separator(c)) {
                None => {
                    // Separators only; they complete any dangling fragment.
                    self.pos = self.window.len();
                    if !self.fragment.is_empty() {
                        return Ok(Some(mem::take(&mut self.fragment)));
                    }
                }
                Some((start, _)) if start > 0 && !self.fragment.is_empty() => {
                    // Whitespace before the run: the fragment was a whole word.
                    self.pos += start;
                    return Ok(Some(mem::take(&mut self.fragment)));
                }
                Some((start, _)) => {
                    let run_and_tail = &rest[start..];
                    match run_and_tail
                        .char_indices()
                        .find(|&(_, c)| is_word_separator(c))
                    {
                        Some((end, _)) => {
                            let mut word = mem::take(&mut self.fragment);
                            word.push_str(&run_and_tail[..end]);
                            self.pos += start + end;
                            return Ok(Some(word));
                        }
                        None => {
                            // Run touches the end of the window without a
                            // trailing separator: hold it as dangling.
                            self.fragment.push_str(run_and_tail);
                            self.pos = self.window.len();
                        }
                    }
                }
            }
        }
    }
}
