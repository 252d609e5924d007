#![warn(missing_docs)]

//! # f0-accent-stats: per-mora F0 statistics for pitch-accent analysis
//!
//! Maps a time-aligned phonetic segmentation onto a frame-indexed F0 contour,
//! summarizes the voiced frames of every segment and pairs each summary with
//! the segment's lexical accent label.
//!
//! ## Features
//!
//! - **Engine** - frame mapping with observable clamping, pause handling, voicing filter, statistics
//! - **Readers** - alignment CSV, accent table, F0 contour files
//! - **Writers** - statistics CSV, SVG mean-F0 chart
//! - **Batch** - corpus driver used by the `f0stats` CLI
//!
//! ## Quick Start
//!
//! ```
//! use f0_accent_stats::{AlignmentSegment, AnalysisConfig, FrameSequence, SegmentStatisticsPipeline};
//!
//! let contour = FrameSequence::new(vec![0.0, 0.0, 120.0, 125.0, 130.0, 0.0, 0.0], 5.0)?;
//! let segments = vec![AlignmentSegment::new(0.01, 0.025, "ka")?];
//!
//! let pipeline = SegmentStatisticsPipeline::new(&AnalysisConfig::default());
//! let stats = pipeline.process(&segments, &["H"], &contour)?;
//! assert_eq!(stats[0].summary.mean, 125.0);
//! # Ok::<(), f0_accent_stats::StatsError>(())
//! ```

/// Core utterance types
pub mod core;
/// Error types
pub mod error;
/// Engine configuration
pub mod config;
/// Segmentation-to-statistics engine
pub mod processor;
/// Input file readers
pub mod reader;
/// Output writers
pub mod writer;
/// Corpus batch driver
pub mod batch;

pub use config::{AnalysisConfig, PairingPolicy};
pub use self::core::{AlignmentSegment, F0Summary, FrameRange, FrameSequence, SegmentKind, SegmentStatistic};
pub use error::{StatsError, StatsResult};
pub use processor::SegmentStatisticsPipeline;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
