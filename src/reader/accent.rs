use super::{split_record, strip_bom};
use crate::error::{StatsError, StatsResult};
use std::fs;
use std::path::Path;

/// Corpus accent table: row `i` holds the accent labels of utterance `i`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccentTable {
    rows: Vec<Vec<String>>,
}

impl AccentTable {
    /// Create a table from rows
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        AccentTable { rows }
    }

    /// Parse CSV text, one row per line; a blank line is an empty row
    pub fn parse(text: &str) -> Self {
        let rows = strip_bom(text)
            .lines()
            .map(|line| {
                if line.is_empty() {
                    Vec::new()
                } else {
                    split_record(line)
                }
            })
            .collect();
        AccentTable { rows }
    }

    /// Accent labels of an utterance
    pub fn row(&self, utterance: usize) -> StatsResult<&[String]> {
        self.rows
            .get(utterance)
            .map(Vec::as_slice)
            .ok_or(StatsError::MissingAccentRow { utterance })
    }

    /// Number of utterances in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read an accent table CSV
pub fn read_accent_table<P: AsRef<Path>>(path: P) -> StatsResult<AccentTable> {
    let text = fs::read_to_string(path)?;
    Ok(AccentTable::parse(&text))
}
