use crate::core::F0Summary;

/// Summarize voiced F0 samples
///
/// An empty sample set yields [`F0Summary::ZERO`]. The standard deviation uses
/// the population denominator.
pub fn summarize(samples: &[f64]) -> F0Summary {
    if samples.is_empty() {
        return F0Summary::ZERO;
    }

    let count = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / count;
    let variance = samples.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / count;

    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);

    F0Summary {
        mean,
        max,
        min,
        std: variance.sqrt(),
        median: median(samples),
    }
}

fn median(samples: &[f64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_samples() {
        let s = summarize(&[120.0, 125.0, 130.0]);
        assert_eq!(s.mean, 125.0);
        assert_eq!(s.max, 130.0);
        assert_eq!(s.min, 120.0);
        assert_eq!(s.median, 125.0);
        assert!((s.std - (50.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((s.std - 4.0825).abs() < 1e-4);
    }

    #[test]
    fn test_even_count_median() {
        let s = summarize(&[200.0, 100.0, 400.0, 300.0]);
        assert_eq!(s.median, 250.0);
        assert_eq!(s.mean, 250.0);
    }

    #[test]
    fn test_single_sample() {
        let s = summarize(&[180.0]);
        assert_eq!(s.mean, 180.0);
        assert_eq!(s.median, 180.0);
        assert_eq!(s.std, 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert!(summarize(&[]).is_zero());
    }

    #[test]
    fn test_unsorted_input_untouched() {
        let samples = vec![3.0, 1.0, 2.0];
        let s = summarize(&samples);
        assert_eq!(s.median, 2.0);
        assert_eq!(samples, vec![3.0, 1.0, 2.0]);
    }
}
