use std::io::{self, BufRead, Read};

/// Lazy word source. `Ok(None)` signals end-of-input and is idempotent:
/// further calls keep returning `Ok(None)`.
pub trait Tokenizer {
    fn next_word(&mut self) -> io::Result<Option<String>>;
}

/// Word separators: space, tab, newline, carriage return, form feed.
pub fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{000C}')
}

/// Character-by-character forward scanner.
///
/// Decodes one UTF-8 character per step and accumulates contiguous
/// non-separator characters into the in-progress word. A word still in
/// progress at end-of-input is returned by the final call.
pub struct ScanTokenizer<R> {
    reader: R,
    eof: bool,
}

impl<R: BufRead> ScanTokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, eof: false }
    }
}

impl<R: BufRead> Tokenizer for ScanTokenizer<R> {
    fn next_word(&mut self) -> io::Result<Option<String>> {
        if self.eof {
            return Ok(None);
        }
        let mut word = String::new();
        loop {
            match read_utf8_char(&mut self.reader)? {
                None => {
                    self.eof = true;
                    return Ok(if word.is_empty() { None } else { Some(word) });
                }
                Some(c) if is_word_separator(c) => {
                    if !word.is_empty() {
                        return Ok(Some(word));
                    }
                }
                Some(c) => word.push(c),
            }
        }
    }
}

/// Decodes a single UTF-8 character from `reader`, or `None` at end-of-input.
fn read_utf8_char<R: BufRead>(reader: &mut R) -> io::Result<Option<char>> {
    let mut buf = [0u8; 4];
    if reader.read(&mut buf[..1])? == 0 {
        return Ok(None);
    }
    let len = match utf8_sequence_len(buf[0]) {
        Some(len) => len,
        None => return Err(invalid_utf8()),
    };
    if len > 1 {
        reader.read_exact(&mut buf[1..len]).map_err(|err| {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                invalid_utf8()
            } else {
                err
            }
        })?;
    }
    match std::str::from_utf8(&buf[..len]) {
        Ok(s) => Ok(s.chars().next()),
        Err(_) => Err(invalid_utf8()),
    }
}

fn utf8_sequence_len(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

pub(crate) fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "invalid utf-8 in source text")
}
