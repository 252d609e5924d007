use crate::config::PairingPolicy;
use crate::core::AlignmentSegment;
use crate::error::{StatsError, StatsResult};
use log::warn;

/// Pair each segment with the accent label at the same position
///
/// No check is made between a segment label and its accent; pairing is by
/// index only. When the lengths differ, [`PairingPolicy::Strict`] fails with
/// [`StatsError::AlignmentAccentMismatch`] and [`PairingPolicy::Truncate`]
/// stops at the shorter sequence.
pub fn pair_accents<'a, S: AsRef<str>>(
    segments: &'a [AlignmentSegment],
    accents: &'a [S],
    policy: PairingPolicy,
) -> StatsResult<Vec<(&'a AlignmentSegment, &'a str)>> {
    if segments.len() != accents.len() {
        match policy {
            PairingPolicy::Strict => {
                return Err(StatsError::AlignmentAccentMismatch {
                    segments: segments.len(),
                    accents: accents.len(),
                });
            }
            PairingPolicy::Truncate => {
                warn!(
                    "{} segments but {} accent labels, pairing only the first {}",
                    segments.len(),
                    accents.len(),
                    segments.len().min(accents.len())
                );
            }
        }
    }

    Ok(segments
        .iter()
        .zip(accents.iter().map(|accent| accent.as_ref()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(n: usize) -> Vec<AlignmentSegment> {
        (0..n)
            .map(|i| AlignmentSegment::new(i as f64 * 0.1, (i + 1) as f64 * 0.1, format!("m{}", i)).unwrap())
            .collect()
    }

    #[test]
    fn test_positional_pairing() {
        let segs = segments(3);
        let accents = vec!["0", "1", "1"];
        let pairs = pair_accents(&segs, &accents, PairingPolicy::Strict).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0.label(), "m0");
        assert_eq!(pairs[0].1, "0");
        assert_eq!(pairs[2].1, "1");
    }

    #[test]
    fn test_strict_rejects_mismatch() {
        let segs = segments(5);
        let accents = vec!["0".to_string(), "1".to_string(), "1".to_string()];
        let err = pair_accents(&segs, &accents, PairingPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            StatsError::AlignmentAccentMismatch {
                segments: 5,
                accents: 3
            }
        ));
    }

    #[test]
    fn test_truncate_keeps_shorter_prefix() {
        let segs = segments(5);
        let accents = vec!["0", "1", "1"];
        let pairs = pair_accents(&segs, &accents, PairingPolicy::Truncate).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2].0.label(), "m2");
    }

    #[test]
    fn test_truncate_with_extra_accents() {
        let segs = segments(2);
        let accents = vec!["0", "1", "1", "0"];
        let pairs = pair_accents(&segs, &accents, PairingPolicy::Truncate).unwrap();
        assert_eq!(pairs.len(), 2);
    }
}
