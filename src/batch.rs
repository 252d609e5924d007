//! Corpus batch driver
//!
//! Pairs the i-th alignment file (sorted by name) with the i-th row of the
//! accent table and the F0 contour sharing the alignment file's stem, runs the
//! pipeline and writes one statistics CSV and one chart per utterance.

use crate::config::AnalysisConfig;
use crate::error::StatsResult;
use crate::processor::SegmentStatisticsPipeline;
use crate::reader::{read_accent_table, read_alignment, read_contour};
use crate::writer::{ContourPlot, CsvStatisticsWriter, StatisticsWriter};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Where corpus inputs live and where outputs go
#[derive(Debug, Clone)]
pub struct CorpusLayout {
    /// Directory of alignment CSV files
    pub alignment_dir: PathBuf,
    /// Directory of F0 contour files
    pub f0_dir: PathBuf,
    /// Extension of F0 contour files (without the dot)
    pub f0_extension: String,
    /// Accent table CSV
    pub accent_table: PathBuf,
    /// Output directory for statistics CSV files
    pub stats_dir: PathBuf,
    /// Output directory for charts
    pub plot_dir: PathBuf,
}

/// Batch run parameters
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Maximum number of utterances to process
    pub num_files: usize,
    /// Frame period of the F0 contours in milliseconds
    pub frame_period_ms: f64,
    /// Engine configuration
    pub analysis: AnalysisConfig,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            num_files: 1,
            frame_period_ms: 5.0,
            analysis: AnalysisConfig::default(),
        }
    }
}

/// Batch run result
#[derive(Debug)]
pub struct BatchReport {
    /// Utterances processed
    pub utterances: usize,
    /// Statistics rows written across all utterances
    pub segments: usize,
    /// Written statistics files, in utterance order
    pub stats_files: Vec<PathBuf>,
    /// Written chart files, in utterance order
    pub plot_files: Vec<PathBuf>,
}

/// Alignment CSV files of a directory, sorted by file name
pub fn list_alignment_files(dir: &Path) -> StatsResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Remove a directory if present and create it empty
pub fn reset_dir(dir: &Path) -> StatsResult<()> {
    if dir.is_dir() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Process the first `num_files` utterances of a corpus
pub fn run_batch(layout: &CorpusLayout, options: &BatchOptions) -> StatsResult<BatchReport> {
    reset_dir(&layout.plot_dir)?;
    reset_dir(&layout.stats_dir)?;

    let accents = read_accent_table(&layout.accent_table)?;
    debug!("Accent table has {} rows", accents.len());

    let alignments: Vec<PathBuf> = list_alignment_files(&layout.alignment_dir)?
        .into_iter()
        .take(options.num_files)
        .collect();

    let pipeline = SegmentStatisticsPipeline::new(&options.analysis);
    let mut report = BatchReport {
        utterances: 0,
        segments: 0,
        stats_files: Vec::new(),
        plot_files: Vec::new(),
    };

    for (i, alignment_path) in alignments.iter().enumerate() {
        let stem = alignment_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let f0_path = layout
            .f0_dir
            .join(format!("{}.{}", stem, layout.f0_extension));

        let segments = read_alignment(alignment_path)?;
        let contour = read_contour(&f0_path, options.frame_period_ms)?;
        let stats = pipeline.process(&segments, accents.row(i)?, &contour)?;

        let plot_path = layout.plot_dir.join(format!("f0_mean_{}.svg", i + 1));
        let mut plot = ContourPlot::new(&plot_path).with_caption(stem.as_str());
        plot.write(&stats)?;

        let stats_path = layout.stats_dir.join(format!("f0_statistics_{}.csv", i + 1));
        let mut csv = CsvStatisticsWriter::create(&stats_path)?;
        csv.write(&stats)?;
        csv.finalize()?;

        info!(
            "[{}/{}] {}: {} segments, {} frames",
            i + 1,
            alignments.len(),
            stem,
            stats.len(),
            contour.len()
        );

        report.utterances += 1;
        report.segments += stats.len();
        report.stats_files.push(stats_path);
        report.plot_files.push(plot_path);
    }

    info!(
        "Processed {} files. Output saved to {} and {}",
        report.utterances,
        layout.plot_dir.display(),
        layout.stats_dir.display()
    );

    Ok(report)
}
