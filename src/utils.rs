//! Utility helpers for SongDeck

/// Blank line between description paragraphs.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Split a description into display blocks.
/// Segments are trimmed and empty ones (trailing delimiters, runs of blank
/// lines) are dropped, so a single paragraph comes back as one block.
pub fn description_blocks<S: AsRef<str>>(text: S) -> Vec<String> {
    text.as_ref()
        .replace("\r\n", "\n")
        .split(PARAGRAPH_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Percent-encode an identifier before it is placed in an embed URL path.
pub fn encode_id<S: AsRef<str>>(id: S) -> String {
    urlencoding::encode(id.as_ref().trim()).into_owned()
}
