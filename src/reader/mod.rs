//! Input file readers

/// Accent table
pub mod accent;
/// Alignment CSV
pub mod alignment;
/// F0 contour files
pub mod contour;

pub use accent::{AccentTable, read_accent_table};
pub use alignment::{parse_alignment, read_alignment};
pub use contour::{parse_contour, read_contour};

/// Split one CSV record into fields
///
/// Double-quoted fields may contain commas; `""` inside quotes is a literal quote.
pub(crate) fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut field)),
            (c, _) => field.push(c),
        }
    }
    fields.push(field);

    fields
}

/// Strip a UTF-8 byte order mark
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
