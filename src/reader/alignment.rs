use super::strip_bom;
use crate::core::AlignmentSegment;
use crate::error::{StatsError, StatsResult};
use std::fs;
use std::path::Path;

/// Read an alignment CSV (`start,end,label` rows after one header line)
pub fn read_alignment<P: AsRef<Path>>(path: P) -> StatsResult<Vec<AlignmentSegment>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    parse_alignment(&text, path)
}

/// Parse alignment CSV text; `path` is used for error locations only
pub fn parse_alignment(text: &str, path: &Path) -> StatsResult<Vec<AlignmentSegment>> {
    let parse_err = |line: usize, message: String| StatsError::Parse {
        path: path.to_path_buf(),
        line,
        message,
    };

    let mut segments = Vec::new();

    for (idx, line) in strip_bom(text).lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        let [start, end, label] = fields.as_slice() else {
            return Err(parse_err(
                line_no,
                format!("expected 3 fields (start,end,label), got {}", fields.len()),
            ));
        };

        let start: f64 = start
            .trim()
            .parse()
            .map_err(|_| parse_err(line_no, format!("invalid start time '{}'", start)))?;
        let end: f64 = end
            .trim()
            .parse()
            .map_err(|_| parse_err(line_no, format!("invalid end time '{}'", end)))?;

        let segment = AlignmentSegment::new(start, end, *label)
            .map_err(|e| parse_err(line_no, e.to_string()))?;
        segments.push(segment);
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FrameSequence, SegmentKind};
    use crate::processor::SegmentStatisticsPipeline;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_alignment() {
        let text = "start,end,mora\n0.0,0.12,ka\n0.12,0.25,i\n0.25,0.40,、\n";
        let segs = parse_alignment(text, Path::new("a.csv")).unwrap();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].label(), "ka");
        assert_eq!(segs[2].label(), "、");
        assert_eq!(segs[1].end(), 0.25);
    }

    #[test]
    fn test_header_only() {
        let segs = parse_alignment("start,end,mora\n", Path::new("a.csv")).unwrap();
        assert!(segs.is_empty());
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_alignment("h\n0.0,0.1\n", Path::new("a.csv")).unwrap_err();
        assert!(matches!(err, StatsError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_bad_number() {
        let err = parse_alignment("h\n0.0,0.1,a\nx,0.2,b\n", Path::new("a.csv")).unwrap_err();
        assert!(matches!(err, StatsError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_reversed_segment_rejected() {
        let err = parse_alignment("h\n0.3,0.1,a\n", Path::new("a.csv")).unwrap_err();
        assert!(matches!(err, StatsError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_label_padding_preserved() {
        let segs = parse_alignment("h\n0.01,0.025, 、\n", Path::new("a.csv")).unwrap();
        assert_eq!(segs[0].label(), " 、");

        let contour = FrameSequence::new(vec![0.0, 0.0, 120.0, 125.0, 130.0, 0.0, 0.0], 5.0).unwrap();
        let stats = SegmentStatisticsPipeline::default()
            .process(&segs, &["H"], &contour)
            .unwrap();
        assert_eq!(stats[0].label, " 、");
        assert_eq!(stats[0].kind, SegmentKind::Phonetic);
        assert_eq!(stats[0].summary.mean, 125.0);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let text = "start,end,mora\r\n0.0,0.1,a\r\n\r\n0.1,0.2,b\r\n";
        let segs = parse_alignment(text, Path::new("a.csv")).unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1].label(), "b");
    }

    #[test]
    fn test_read_alignment_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "start,end,mora\n0.0,0.05,ko\n").unwrap();
        let segs = read_alignment(file.path()).unwrap();
        assert_eq!(segs.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let result = read_alignment("/nonexistent/align.csv");
        assert!(matches!(result, Err(StatsError::Io(_))));
    }
}
