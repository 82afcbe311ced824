use std::path::Path;
use std::time::Duration;

use tally_core::{format_elapsed, FrequencyReport, FrequencySnapshot};

/// Prints the sorted tally and summary for one processed file.
pub fn print_tally(path: &Path, snapshot: &FrequencySnapshot, elapsed: Duration) {
    let report = FrequencyReport::from_snapshot(snapshot);

    println!();
    println!("~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~");
    println!("Processing {}...", path.display());
    println!("-----------");
    println!("Word Counts");
    println!("-----------");
    for row in &report.rows {
        println!("{}: {}", row.word, row.count);
    }
    println!("___________");
    println!(
        "...Processed {} total words with {} unique words in {}",
        report.total_words,
        report.unique_words,
        format_elapsed(elapsed)
    );
    println!("===========");
}
