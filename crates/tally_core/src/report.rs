use std::time::Duration;

use crate::FrequencySnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub word: String,
    pub count: u64,
}

/// Snapshot prepared for printing: rows sorted lexicographically by word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyReport {
    pub rows: Vec<ReportRow>,
    pub total_words: u64,
    pub unique_words: usize,
}

impl FrequencyReport {
    pub fn from_snapshot(snapshot: &FrequencySnapshot) -> Self {
        let mut rows: Vec<ReportRow> = snapshot
            .iter()
            .map(|(word, count)| ReportRow {
                word: word.to_string(),
                count,
            })
            .collect();
        rows.sort_by(|a, b| a.word.cmp(&b.word));
        Self {
            total_words: snapshot.total_words(),
            unique_words: snapshot.unique_words(),
            rows,
        }
    }
}

/// Human-readable elapsed time, decomposed into the largest fitting units:
/// `"812ns"`, `"4ms 812ns"`, `"3s 4ms 812ns"`, `"2m 3s 4ms 812ns"`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_nanos = elapsed.as_nanos();
    if total_nanos < 1_000_000 {
        return format!("{total_nanos}ns");
    }

    let nanos = total_nanos % 1_000_000;
    let total_millis = total_nanos / 1_000_000;
    if total_millis < 1000 {
        return format!("{total_millis}ms {nanos}ns");
    }

    let millis = total_millis % 1000;
    let total_secs = total_millis / 1000;
    if total_secs < 60 {
        return format!("{total_secs}s {millis}ms {nanos}ns");
    }

    let secs = total_secs % 60;
    let mins = total_secs / 60;
    format!("{mins}m {secs}s {millis}ms {nanos}ns")
}
