//! Core utterance types

/// Alignment segments and their classification
pub mod segment;
/// Frame-indexed F0 contours
pub mod contour;
/// Per-segment statistics records
pub mod statistic;

pub use contour::{FrameRange, FrameSequence};
pub use segment::{AlignmentSegment, SegmentKind};
pub use statistic::{F0Summary, SegmentStatistic};
