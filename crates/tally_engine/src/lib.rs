//! Tally engine: tokenizers and the file-processing pipeline.
mod chunked;
mod engine;
mod source;
mod tokenizer;
mod types;

pub use chunked::ChunkedTokenizer;
pub use engine::{process_file, process_file_with, CounterEngine, DEFAULT_CHUNK_SIZE};
pub use source::TextSource;
pub use tokenizer::{is_word_separator, ScanTokenizer, Tokenizer};
pub use types::{CountError, EnginePhase, TokenizerStrategy};
