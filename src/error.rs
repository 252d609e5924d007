use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for F0 statistics operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Error types for alignment, accent and contour processing
#[derive(Error, Debug)]
pub enum StatsError {
    /// IO error (file operations, disk access)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Segment bounds are not finite or are reversed
    #[error("Invalid segment '{label}': start {start} s, end {end} s")]
    InvalidSegment {
        /// Segment label
        label: String,
        /// Start time in seconds
        start: f64,
        /// End time in seconds
        end: f64,
    },

    /// Frame period must be a positive, finite number of milliseconds
    #[error("Invalid frame period: {period} ms")]
    InvalidFramePeriod {
        /// The rejected frame period
        period: f64,
    },

    /// F0 contour contains a non-finite value
    #[error("Invalid F0 value at frame {index}")]
    InvalidFrameValue {
        /// Frame index of the offending value
        index: usize,
    },

    /// Alignment and accent sequences do not have the same length
    #[error("Alignment/accent mismatch: {segments} segments but {accents} accent labels")]
    AlignmentAccentMismatch {
        /// Number of alignment segments
        segments: usize,
        /// Number of accent labels
        accents: usize,
    },

    /// The accent table has no row for an utterance
    #[error("Accent table has no row for utterance {utterance}")]
    MissingAccentRow {
        /// Zero-based utterance index
        utterance: usize,
    },

    /// Malformed line in an input file
    #[error("Parse error in {}:{line}: {message}", .path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart rendering failed
    #[error("Render error: {0}")]
    Render(String),
}
