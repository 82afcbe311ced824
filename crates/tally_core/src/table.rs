use std::collections::HashMap;

/// Lower-cased form of a word, used as the counting key.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// Mapping from normalized word to occurrence count.
///
/// One table is created per processed file and never reused across files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `word` under its normalized key. Infallible.
    pub fn increment(&mut self, word: &str) {
        *self.counts.entry(normalize_word(word)).or_insert(0) += 1;
    }

    /// The accumulated state so far, one entry per distinct normalized word.
    pub fn snapshot(&self) -> FrequencySnapshot {
        FrequencySnapshot {
            counts: self.counts.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Finalized view of a [`FrequencyTable`] handed to the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencySnapshot {
    counts: HashMap<String, u64>,
}

impl FrequencySnapshot {
    /// Count for `word` after normalization; 0 if never seen.
    pub fn count(&self, word: &str) -> u64 {
        self.counts
            .get(&normalize_word(word))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct normalized words.
    pub fn unique_words(&self) -> usize {
        self.counts.len()
    }

    /// Total word occurrences processed.
    pub fn total_words(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}
