//! f0stats command line interface
//!
//! Per-mora F0 statistics with pitch-accent labels for a speech corpus.

use clap::Parser;
use f0_accent_stats::batch::{BatchOptions, CorpusLayout, run_batch};
use f0_accent_stats::config::{AnalysisConfig, DEFAULT_PAUSE_MARKER, DEFAULT_VOICING_EPSILON, PairingPolicy};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "f0stats")]
#[command(about = "Per-mora F0 statistics paired with accent labels", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Frame period of the F0 contours in milliseconds
    #[arg(short, long, default_value_t = 5.0)]
    frame_period: f64,

    /// Number of alignment files to process
    #[arg(long, default_value_t = 1)]
    num_files: usize,

    /// Directory of alignment CSV files (start,end,mora)
    #[arg(long, value_name = "DIR", default_value = "align_result")]
    alignment_dir: PathBuf,

    /// Directory of F0 contour files named after the alignment files
    #[arg(long, value_name = "DIR", default_value = "f0")]
    f0_dir: PathBuf,

    /// Extension of F0 contour files
    #[arg(long, default_value = "f0")]
    f0_ext: String,

    /// Accent table CSV, one row per utterance
    #[arg(long, value_name = "FILE", default_value = "accent.csv")]
    accents: PathBuf,

    /// Output directory for statistics CSV files (cleared first)
    #[arg(long, value_name = "DIR", default_value = "f0_stats_result")]
    stats_dir: PathBuf,

    /// Output directory for charts (cleared first)
    #[arg(long, value_name = "DIR", default_value = "f0_mean_result")]
    plot_dir: PathBuf,

    /// F0 values at or below this are treated as unvoiced
    #[arg(long, default_value_t = DEFAULT_VOICING_EPSILON)]
    epsilon: f64,

    /// Label marking pauses and punctuation
    #[arg(long, default_value = DEFAULT_PAUSE_MARKER)]
    pause_marker: String,

    /// Pair up to the shorter of alignment and accent sequences instead of failing
    #[arg(long)]
    allow_truncation: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    info!("f0stats {}", f0_accent_stats::VERSION);

    let pairing = if cli.allow_truncation {
        PairingPolicy::Truncate
    } else {
        PairingPolicy::Strict
    };
    let analysis = AnalysisConfig::new(cli.epsilon, cli.pause_marker, pairing)?;

    let layout = CorpusLayout {
        alignment_dir: cli.alignment_dir,
        f0_dir: cli.f0_dir,
        f0_extension: cli.f0_ext,
        accent_table: cli.accents,
        stats_dir: cli.stats_dir,
        plot_dir: cli.plot_dir,
    };
    let options = BatchOptions {
        num_files: cli.num_files,
        frame_period_ms: cli.frame_period,
        analysis,
    };

    let report = run_batch(&layout, &options)?;
    println!(
        "{} files processed ({} segments). Output saved to {} and {}",
        report.utterances,
        report.segments,
        layout.plot_dir.display(),
        layout.stats_dir.display()
    );

    Ok(())
}
