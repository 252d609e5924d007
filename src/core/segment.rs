use crate::error::{StatsError, StatsResult};

/// Whether a segment carries pitch information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A mora or other phonetic unit
    Phonetic,
    /// A pause or punctuation marker
    Pause,
}

impl SegmentKind {
    /// Get kind name
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::Phonetic => "phonetic",
            SegmentKind::Pause => "pause",
        }
    }
}

/// One time-aligned unit of an utterance
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentSegment {
    /// Start time in seconds
    start: f64,
    /// End time in seconds
    end: f64,
    /// Mora or marker label
    label: String,
}

impl AlignmentSegment {
    /// Create a new segment
    ///
    /// Bounds must be finite with `start <= end`. A negative start is accepted;
    /// it is clamped when mapped onto frames.
    pub fn new(start: f64, end: f64, label: impl Into<String>) -> StatsResult<Self> {
        let label = label.into();
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(StatsError::InvalidSegment { label, start, end });
        }

        Ok(AlignmentSegment { start, end, label })
    }

    /// Get start time in seconds
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Get end time in seconds
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Get the label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Midpoint of the segment in seconds
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
