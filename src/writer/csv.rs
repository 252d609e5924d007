use crate::core::SegmentStatistic;
use crate::error::{StatsError, StatsResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column names, in output order
pub const CSV_HEADER: [&str; 7] = ["Mora", "Mean", "Max", "Min", "Std", "Median", "Accent"];

/// Writes one statistics row per segment under a fixed header
pub struct CsvStatisticsWriter<W: Write = BufWriter<File>> {
    writer: Option<W>,
    header_written: bool,
    rows_written: usize,
}

impl CsvStatisticsWriter {
    /// Create a writer to a new file
    pub fn create<P: AsRef<Path>>(path: P) -> StatsResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CsvStatisticsWriter<W> {
    /// Create a writer over any byte sink
    pub fn new(writer: W) -> Self {
        CsvStatisticsWriter {
            writer: Some(writer),
            header_written: false,
            rows_written: 0,
        }
    }

    /// Get the number of data rows written
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Finish and hand back the underlying sink
    pub fn into_inner(mut self) -> StatsResult<W> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| StatsError::Config("Writer already finalized".to_string()))?;
        if !self.header_written {
            write_row(&mut writer, CSV_HEADER.iter().copied())?;
        }
        writer.flush()?;
        Ok(writer)
    }

    fn sink(&mut self) -> StatsResult<&mut W> {
        self.writer
            .as_mut()
            .ok_or_else(|| StatsError::Config("Writer already finalized".to_string()))
    }
}

impl<W: Write> super::StatisticsWriter for CsvStatisticsWriter<W> {
    fn write(&mut self, stats: &[SegmentStatistic]) -> StatsResult<()> {
        let header_written = self.header_written;
        let writer = self.sink()?;

        if !header_written {
            write_row(writer, CSV_HEADER.iter().copied())?;
        }

        for stat in stats {
            let s = &stat.summary;
            let numbers = [s.mean, s.max, s.min, s.std, s.median].map(|v| format!("{:?}", v));
            let row = std::iter::once(stat.label.as_str())
                .chain(numbers.iter().map(String::as_str))
                .chain(std::iter::once(stat.accent.as_str()));
            write_row(writer, row)?;
        }

        self.header_written = true;
        self.rows_written += stats.len();
        Ok(())
    }

    fn finalize(&mut self) -> StatsResult<()> {
        let header_written = self.header_written;
        if let Some(mut writer) = self.writer.take() {
            if !header_written {
                write_row(&mut writer, CSV_HEADER.iter().copied())?;
            }
            writer.flush()?;
        }
        self.header_written = true;
        Ok(())
    }
}

fn write_row<'a, W: Write>(writer: &mut W, fields: impl Iterator<Item = &'a str>) -> StatsResult<()> {
    let line = fields.map(quote_field).collect::<Vec<_>>().join(",");
    writeln!(writer, "{}", line)?;
    Ok(())
}

/// Quote a field when it contains a separator, quote or line break
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
