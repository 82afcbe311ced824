use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tally_core::{format_elapsed, FrequencyReport, FrequencyTable};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tally_logging::initialize_for_tests);
}

#[test]
fn rows_are_sorted_lexicographically() {
    init_logging();
    let mut table = FrequencyTable::new();
    for word in ["zebra", "apple", "Mango", "apple"] {
        table.increment(word);
    }

    let report = FrequencyReport::from_snapshot(&table.snapshot());
    let words: Vec<&str> = report.rows.iter().map(|row| row.word.as_str()).collect();

    assert_eq!(words, vec!["apple", "mango", "zebra"]);
    assert_eq!(report.rows[0].count, 2);
}

#[test]
fn totals_cover_all_occurrences() {
    init_logging();
    let mut table = FrequencyTable::new();
    for word in ["a", "b", "a", "c", "a"] {
        table.increment(word);
    }

    let report = FrequencyReport::from_snapshot(&table.snapshot());
    assert_eq!(report.total_words, 5);
    assert_eq!(report.unique_words, 3);
}

#[test]
fn empty_snapshot_yields_empty_report() {
    init_logging();
    let report = FrequencyReport::from_snapshot(&FrequencyTable::new().snapshot());
    assert_eq!(report.rows, vec![]);
    assert_eq!(report.total_words, 0);
    assert_eq!(report.unique_words, 0);
}

#[test]
fn elapsed_below_one_millisecond_is_nanos_only() {
    init_logging();
    assert_eq!(format_elapsed(Duration::from_nanos(0)), "0ns");
    assert_eq!(format_elapsed(Duration::from_nanos(812)), "812ns");
    assert_eq!(format_elapsed(Duration::from_nanos(999_999)), "999999ns");
}

#[test]
fn elapsed_decomposes_into_larger_units() {
    init_logging();
    assert_eq!(format_elapsed(Duration::from_nanos(1_000_000)), "1ms 0ns");
    assert_eq!(format_elapsed(Duration::from_nanos(4_000_812)), "4ms 812ns");
    assert_eq!(
        format_elapsed(Duration::from_nanos(3_004_000_812)),
        "3s 4ms 812ns"
    );
    assert_eq!(
        format_elapsed(Duration::from_nanos(123_004_000_812)),
        "2m 3s 4ms 812ns"
    );
}
