use super::segment::SegmentKind;

/// Descriptive F0 statistics over a set of voiced samples
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct F0Summary {
    /// Arithmetic mean
    pub mean: f64,
    /// Largest sample
    pub max: f64,
    /// Smallest sample
    pub min: f64,
    /// Population standard deviation
    pub std: f64,
    /// Median (mean of the two middle samples for even counts)
    pub median: f64,
}

impl F0Summary {
    /// The all-zero summary used when no voiced sample exists
    pub const ZERO: F0Summary = F0Summary {
        mean: 0.0,
        max: 0.0,
        min: 0.0,
        std: 0.0,
        median: 0.0,
    };

    /// Check if every statistic is exactly zero
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Statistics record for one alignment segment
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStatistic {
    /// Mora label of the segment
    pub label: String,
    /// F0 statistics
    pub summary: F0Summary,
    /// Positionally paired accent label
    pub accent: String,
    /// Segment start in seconds
    pub start: f64,
    /// Segment end in seconds
    pub end: f64,
    /// Phonetic or pause
    pub kind: SegmentKind,
    /// Number of samples the statistics were computed from
    pub voiced_frames: usize,
    /// Whether the frame range was clamped to the contour
    pub clamped: bool,
}

impl SegmentStatistic {
    /// Midpoint of the segment in seconds
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Mean F0 in Hz
    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    /// True when the segment is phonetic but has no voiced frame
    pub fn is_unvoiced(&self) -> bool {
        self.kind == SegmentKind::Phonetic && self.voiced_frames == 0
    }
}
