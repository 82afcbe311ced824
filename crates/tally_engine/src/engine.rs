use std::path::Path;

use tally_core::{FrequencySnapshot, FrequencyTable};
use tally_logging::tally_debug;

use crate::chunked::ChunkedTokenizer;
use crate::source::TextSource;
use crate::tokenizer::{ScanTokenizer, Tokenizer};
use crate::{CountError, EnginePhase, TokenizerStrategy};

/// Default chunk size for the buffered tokenizer.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Drives a tokenizer into a frequency table, one word at a time.
///
/// One engine processes one source; the table is not reused across files.
pub struct CounterEngine<T> {
    tokenizer: Option<T>,
    table: FrequencyTable,
    phase: EnginePhase,
}

impl<T: Tokenizer> CounterEngine<T> {
    pub fn new() -> Self {
        Self {
            tokenizer: None,
            table: FrequencyTable::new(),
            phase: EnginePhase::Idle,
        }
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Binds a tokenizer and starts from a fresh table.
    pub fn setup(&mut self, tokenizer: T) {
        self.tokenizer = Some(tokenizer);
        self.table = FrequencyTable::new();
        self.phase = EnginePhase::Setup;
    }

    /// Runs the bound tokenizer to end-of-input.
    ///
    /// Any I/O failure aborts the run: the tokenizer is released, the table
    /// is cleared, and the engine returns to `Idle`. No partial result
    /// survives a failure.
    pub fn run(&mut self) -> Result<(), CountError> {
        debug_assert_eq!(self.phase, EnginePhase::Setup, "run() requires setup()");
        let Some(mut tokenizer) = self.tokenizer.take() else {
            return Ok(());
        };
        self.phase = EnginePhase::Running;

        let result = Self::drain(&mut tokenizer, &mut self.table);
        // The tokenizer and its handle are released on every outcome.
        drop(tokenizer);

        match result {
            Ok(words) => {
                tally_debug!("engine finished: {} words counted", words);
                self.phase = EnginePhase::Finished;
                Ok(())
            }
            Err(err) => {
                self.table = FrequencyTable::new();
                self.phase = EnginePhase::Idle;
                Err(err)
            }
        }
    }

    fn drain(tokenizer: &mut T, table: &mut FrequencyTable) -> Result<u64, CountError> {
        let mut words = 0u64;
        while let Some(word) = tokenizer.next_word()? {
            table.increment(&word);
            words += 1;
        }
        Ok(words)
    }

    /// Authoritative result once the engine reached `Finished`.
    pub fn snapshot(&self) -> FrequencySnapshot {
        self.table.snapshot()
    }
}

impl<T: Tokenizer> Default for CounterEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts word frequencies in `path` with the scanning tokenizer.
pub fn process_file(path: &Path) -> Result<FrequencySnapshot, CountError> {
    process_file_with(path, TokenizerStrategy::Scan)
}

/// Counts word frequencies in `path` with the chosen tokenizer strategy.
pub fn process_file_with(
    path: &Path,
    strategy: TokenizerStrategy,
) -> Result<FrequencySnapshot, CountError> {
    let source = TextSource::open(path)?;
    match strategy {
        TokenizerStrategy::Scan => run_to_snapshot(ScanTokenizer::new(source.into_reader())),
        TokenizerStrategy::Chunked { chunk_size } => {
            run_to_snapshot(ChunkedTokenizer::new(source.into_reader(), chunk_size))
        }
    }
}

fn run_to_snapshot<T: Tokenizer>(tokenizer: T) -> Result<FrequencySnapshot, CountError> {
    let mut engine = CounterEngine::new();
    engine.setup(tokenizer);
    engine.run()?;
    Ok(engine.snapshot())
}
