use super::accent::pair_accents;
use super::aggregate::summarize;
use super::classify::SegmentClassifier;
use super::frame_index::segment_frames;
use super::voiced::VoicedSampleFilter;
use crate::config::{AnalysisConfig, PairingPolicy};
use crate::core::{AlignmentSegment, FrameSequence, SegmentStatistic};
use crate::error::StatsResult;
use log::{debug, warn};

/// Per-utterance segmentation-to-statistics engine
///
/// Holds only configuration; processing is a pure function of the segments,
/// the accent labels and the contour, so one pipeline can serve any number of
/// utterances, in any order or in parallel.
#[derive(Debug, Clone)]
pub struct SegmentStatisticsPipeline {
    classifier: SegmentClassifier,
    filter: VoicedSampleFilter,
    pairing: PairingPolicy,
}

impl SegmentStatisticsPipeline {
    /// Create a pipeline from a configuration
    pub fn new(config: &AnalysisConfig) -> Self {
        SegmentStatisticsPipeline {
            classifier: SegmentClassifier::new(config.pause_marker()),
            filter: VoicedSampleFilter::new(config.voicing_epsilon()),
            pairing: config.pairing(),
        }
    }

    /// Compute one statistics record per paired segment, in alignment order
    pub fn process<S: AsRef<str>>(
        &self,
        segments: &[AlignmentSegment],
        accents: &[S],
        contour: &FrameSequence,
    ) -> StatsResult<Vec<SegmentStatistic>> {
        let pairs = pair_accents(segments, accents, self.pairing)?;

        Ok(pairs
            .into_iter()
            .map(|(segment, accent)| self.process_segment(segment, accent, contour))
            .collect())
    }

    /// Compute the statistics record of a single segment
    pub fn process_segment(
        &self,
        segment: &AlignmentSegment,
        accent: &str,
        contour: &FrameSequence,
    ) -> SegmentStatistic {
        let range = segment_frames(segment, contour);
        if range.clamped {
            warn!(
                "Segment '{}' ({:.3}-{:.3} s) clamped to frames {}..{} of {}",
                segment.label(),
                segment.start(),
                segment.end(),
                range.start,
                range.end,
                contour.len()
            );
        }

        let kind = self.classifier.classify(segment.label());
        let samples = self.filter.filter(kind, contour.slice(&range));

        debug!(
            "Segment '{}' [{}] frames {}..{}: {} voiced",
            segment.label(),
            kind.name(),
            range.start,
            range.end,
            samples.len()
        );

        SegmentStatistic {
            label: segment.label().to_string(),
            summary: summarize(&samples),
            accent: accent.to_string(),
            start: segment.start(),
            end: segment.end(),
            kind,
            voiced_frames: samples.len(),
            clamped: range.clamped,
        }
    }
}

impl Default for SegmentStatisticsPipeline {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SegmentKind;
    use crate::error::StatsError;

    fn contour() -> FrameSequence {
        FrameSequence::new(vec![0.0, 0.0, 120.0, 125.0, 130.0, 0.0, 0.0], 5.0).unwrap()
    }

    #[test]
    fn test_voiced_mora() {
        let pipeline = SegmentStatisticsPipeline::default();
        let segs = vec![AlignmentSegment::new(0.01, 0.025, "ka").unwrap()];
        let stats = pipeline.process(&segs, &["H"], &contour()).unwrap();

        assert_eq!(stats.len(), 1);
        let s = &stats[0];
        assert_eq!(s.label, "ka");
        assert_eq!(s.accent, "H");
        assert_eq!(s.summary.mean, 125.0);
        assert_eq!(s.summary.max, 130.0);
        assert_eq!(s.summary.min, 120.0);
        assert_eq!(s.summary.median, 125.0);
        assert!((s.summary.std - 4.0825).abs() < 1e-4);
        assert_eq!(s.voiced_frames, 3);
        assert_eq!(s.kind, SegmentKind::Phonetic);
        assert!(!s.clamped);
    }

    #[test]
    fn test_pause_is_zero_regardless_of_frames() {
        let pipeline = SegmentStatisticsPipeline::default();
        let segs = vec![AlignmentSegment::new(0.0, 0.03, "、").unwrap()];
        let stats = pipeline.process(&segs, &["L"], &contour()).unwrap();

        assert!(stats[0].summary.is_zero());
        assert_eq!(stats[0].kind, SegmentKind::Pause);
        assert_eq!(stats[0].accent, "L");
    }

    #[test]
    fn test_unvoiced_mora_is_zero() {
        let pipeline = SegmentStatisticsPipeline::default();
        let segs = vec![AlignmentSegment::new(0.0, 0.01, "s").unwrap()];
        let stats = pipeline.process(&segs, &["0"], &contour()).unwrap();

        assert!(stats[0].summary.is_zero());
        assert!(stats[0].is_unvoiced());
    }

    #[test]
    fn test_clamped_tail_segment() {
        let pipeline = SegmentStatisticsPipeline::default();
        let contour = FrameSequence::new(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 140.0], 250.0).unwrap();
        let segs = vec![AlignmentSegment::new(1.5, 2.25, "n").unwrap()];
        let stats = pipeline.process(&segs, &["1"], &contour).unwrap();

        assert!(stats[0].clamped);
        assert_eq!(stats[0].voiced_frames, 1);
        assert_eq!(stats[0].summary.mean, 140.0);
    }

    #[test]
    fn test_strict_mismatch_fails() {
        let pipeline = SegmentStatisticsPipeline::default();
        let segs: Vec<_> = (0..5)
            .map(|i| AlignmentSegment::new(i as f64 * 0.005, (i + 1) as f64 * 0.005, "a").unwrap())
            .collect();
        let result = pipeline.process(&segs, &["0", "1", "1"], &contour());
        assert!(matches!(result, Err(StatsError::AlignmentAccentMismatch { .. })));
    }

    #[test]
    fn test_truncating_mismatch_drops_tail() {
        let config = AnalysisConfig::default().with_pairing(PairingPolicy::Truncate);
        let pipeline = SegmentStatisticsPipeline::new(&config);
        let segs: Vec<_> = (0..5)
            .map(|i| {
                AlignmentSegment::new(i as f64 * 0.005, (i + 1) as f64 * 0.005, format!("m{}", i))
                    .unwrap()
            })
            .collect();
        let stats = pipeline.process(&segs, &["0", "1", "1"], &contour()).unwrap();

        assert_eq!(stats.len(), 3);
        assert_eq!(stats[2].label, "m2");
    }

    #[test]
    fn test_custom_marker_and_epsilon() {
        let config = AnalysisConfig::default()
            .with_pause_marker("sp")
            .unwrap()
            .with_voicing_epsilon(122.0)
            .unwrap();
        let pipeline = SegmentStatisticsPipeline::new(&config);
        let segs = vec![
            AlignmentSegment::new(0.01, 0.025, "ka").unwrap(),
            AlignmentSegment::new(0.01, 0.025, "sp").unwrap(),
            AlignmentSegment::new(0.01, 0.025, "、").unwrap(),
        ];
        let stats = pipeline.process(&segs, &["0", "0", "0"], &contour()).unwrap();

        assert_eq!(stats[0].voiced_frames, 2);
        assert_eq!(stats[0].summary.min, 125.0);
        assert_eq!(stats[1].kind, SegmentKind::Pause);
        assert_eq!(stats[2].kind, SegmentKind::Phonetic);
        assert_eq!(stats[2].summary.mean, 127.5);
    }

    #[test]
    fn test_repeat_runs_identical() {
        let pipeline = SegmentStatisticsPipeline::default();
        let segs = vec![
            AlignmentSegment::new(0.0, 0.012, "a").unwrap(),
            AlignmentSegment::new(0.012, 0.03, "ri").unwrap(),
            AlignmentSegment::new(0.03, 0.05, "、").unwrap(),
        ];
        let accents = vec!["0", "1", "0"];
        let first = pipeline.process(&segs, &accents, &contour()).unwrap();
        let second = pipeline.process(&segs, &accents, &contour()).unwrap();

        assert_eq!(first, second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.summary.std.to_bits(), b.summary.std.to_bits());
            assert_eq!(a.summary.mean.to_bits(), b.summary.mean.to_bits());
        }
    }

    #[test]
    fn test_empty_utterance() {
        let pipeline = SegmentStatisticsPipeline::default();
        let stats = pipeline.process::<&str>(&[], &[], &contour()).unwrap();
        assert!(stats.is_empty());
    }
}
