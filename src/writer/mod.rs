//! Output writers for segment statistics

/// Statistics CSV
pub mod csv;
/// Mean-F0 chart
pub mod plot;

pub use csv::{CSV_HEADER, CsvStatisticsWriter};
pub use plot::ContourPlot;

use crate::core::SegmentStatistic;
use crate::error::StatsResult;

/// Trait for statistics sinks
pub trait StatisticsWriter {
    /// Write the statistics of one utterance
    fn write(&mut self, stats: &[SegmentStatistic]) -> StatsResult<()>;

    /// Finalize output (flush any buffered data)
    fn finalize(&mut self) -> StatsResult<()> {
        Ok(())
    }
}
