use crate::core::SegmentKind;

/// Keeps the voiced F0 samples of a segment
#[derive(Debug, Clone, Copy)]
pub struct VoicedSampleFilter {
    epsilon: f64,
}

impl VoicedSampleFilter {
    /// Create a filter with a voicing threshold
    pub fn new(epsilon: f64) -> Self {
        VoicedSampleFilter { epsilon }
    }

    /// Get the voicing threshold
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Samples strictly above the threshold
    ///
    /// Pauses carry no pitch, so they yield no samples whatever the frames hold.
    pub fn filter(&self, kind: SegmentKind, frames: &[f64]) -> Vec<f64> {
        match kind {
            SegmentKind::Pause => Vec::new(),
            SegmentKind::Phonetic => frames
                .iter()
                .copied()
                .filter(|&f0| f0 > self.epsilon)
                .collect(),
        }
    }
}
