use super::strip_bom;
use crate::core::FrameSequence;
use crate::error::{StatsError, StatsResult};
use std::fs;
use std::path::Path;

/// Read an F0 contour file sampled every `frame_period_ms`
pub fn read_contour<P: AsRef<Path>>(path: P, frame_period_ms: f64) -> StatsResult<FrameSequence> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    parse_contour(&text, frame_period_ms, path)
}

/// Parse F0 contour text
///
/// One frame per non-blank line. When a line has several comma or whitespace
/// separated fields (e.g. `time,f0`), the last one is the F0 value. A first
/// first non-blank line that does not parse is taken as a header.
pub fn parse_contour(text: &str, frame_period_ms: f64, path: &Path) -> StatsResult<FrameSequence> {
    let mut values = Vec::new();
    let mut first_line = true;

    for (idx, line) in strip_bom(text).lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let field = line
            .rsplit(|c: char| c == ',' || c.is_whitespace())
            .find(|f| !f.is_empty())
            .unwrap_or(line);

        let header_allowed = std::mem::replace(&mut first_line, false);
        match field.parse::<f64>() {
            Ok(f0) => values.push(f0),
            Err(_) if header_allowed => continue,
            Err(_) => {
                return Err(StatsError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    message: format!("invalid F0 value '{}'", field),
                });
            }
        }
    }

    FrameSequence::new(values, frame_period_ms)
}
