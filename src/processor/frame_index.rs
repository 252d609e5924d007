use crate::core::{AlignmentSegment, FrameRange, FrameSequence};

/// Raw (unclamped) frame index of a time point
fn raw_frame_index(secs: f64, frame_period_ms: f64) -> f64 {
    (secs * 1000.0 / frame_period_ms).floor()
}

/// Map segment bounds in seconds onto frame indices of a contour
///
/// `start = floor(start_secs * 1000 / frame_period_ms)` and likewise for the end,
/// then the start is raised to 0 and the end lowered to `frame_count`. Out-of-range
/// input is never an error; the returned range reports whether clamping fired.
/// The start is also kept at or below the clamped end, so a segment lying wholly
/// outside the contour maps to an empty range.
pub fn map_frame_range(
    start_secs: f64,
    end_secs: f64,
    frame_period_ms: f64,
    frame_count: usize,
) -> FrameRange {
    let len = frame_count as f64;
    let raw_start = raw_frame_index(start_secs, frame_period_ms);
    let raw_end = raw_frame_index(end_secs, frame_period_ms);

    let clamped = raw_start < 0.0 || raw_start > len || raw_end < 0.0 || raw_end > len;

    let end = raw_end.clamp(0.0, len);
    let start = raw_start.max(0.0).min(end);

    FrameRange {
        start: start as usize,
        end: end as usize,
        clamped,
    }
}

/// Frame range a segment covers in a contour
pub fn segment_frames(segment: &AlignmentSegment, contour: &FrameSequence) -> FrameRange {
    map_frame_range(
        segment.start(),
        segment.end(),
        contour.frame_period_ms(),
        contour.len(),
    )
}
