use crate::core::SegmentKind;

/// Separates pause/punctuation segments from phonetic ones
///
/// Classification is an exact label match against the configured marker;
/// any other label, punctuation-like or not, is phonetic.
#[derive(Debug, Clone)]
pub struct SegmentClassifier {
    pause_marker: String,
}

impl SegmentClassifier {
    /// Create a classifier for a pause marker
    pub fn new(pause_marker: impl Into<String>) -> Self {
        SegmentClassifier {
            pause_marker: pause_marker.into(),
        }
    }

    /// Classify a segment label
    pub fn classify(&self, label: &str) -> SegmentKind {
        if label == self.pause_marker {
            SegmentKind::Pause
        } else {
            SegmentKind::Phonetic
        }
    }
}
