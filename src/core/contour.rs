use crate::error::{StatsError, StatsResult};
use std::ops::Range;

/// F0 contour sampled at a fixed frame period
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    /// F0 value per frame in Hz (unvoiced frames are at or near zero)
    values: Vec<f64>,
    /// Duration of one frame in milliseconds
    frame_period_ms: f64,
}

impl FrameSequence {
    /// Create a new contour
    pub fn new(values: Vec<f64>, frame_period_ms: f64) -> StatsResult<Self> {
        if !frame_period_ms.is_finite() || frame_period_ms <= 0.0 {
            return Err(StatsError::InvalidFramePeriod {
                period: frame_period_ms,
            });
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::InvalidFrameValue { index });
        }

        Ok(FrameSequence {
            values,
            frame_period_ms,
        })
    }

    /// Get reference to the F0 values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the frame period in milliseconds
    pub fn frame_period_ms(&self) -> f64 {
        self.frame_period_ms
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the contour has no frames
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total duration covered by the contour in seconds
    pub fn duration_secs(&self) -> f64 {
        self.values.len() as f64 * self.frame_period_ms / 1000.0
    }

    /// Frames covered by a range
    pub fn slice(&self, range: &FrameRange) -> &[f64] {
        &self.values[range.as_range()]
    }
}

/// Half-open frame index bounds `[start, end)` of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    /// First frame index
    pub start: usize,
    /// One past the last frame index
    pub end: usize,
    /// Whether either bound was pulled back inside the contour
    pub clamped: bool,
}

impl FrameRange {
    /// Number of frames in the range
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the range covers no frames
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// As a std range
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}
