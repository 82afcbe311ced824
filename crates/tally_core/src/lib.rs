//! Tally core: pure word-frequency table and report model.
mod report;
mod table;

pub use report::{format_elapsed, FrequencyReport, ReportRow};
pub use table::{normalize_word, FrequencySnapshot, FrequencyTable};
