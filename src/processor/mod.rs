//! Segmentation-to-statistics engine

/// Positional accent pairing
pub mod accent;
/// Summary statistics
pub mod aggregate;
/// Pause/phonetic classification
pub mod classify;
/// Time to frame index mapping
pub mod frame_index;
/// Per-utterance pipeline
pub mod pipeline;
/// Voicing filter
pub mod voiced;

pub use accent::pair_accents;
pub use aggregate::summarize;
pub use classify::SegmentClassifier;
pub use frame_index::{map_frame_range, segment_frames};
pub use pipeline::SegmentStatisticsPipeline;
pub use voiced::VoicedSampleFilter;
