//! Display-line codec for the fuzzy finder
//!
//! Each candidate line carries human-readable text followed by the track's
//! library path behind a hidden delimiter. The finder echoes chosen lines
//! verbatim, so the path survives the round trip even though the visible
//! portion is truncated and padded.

use crate::format::{pad_to_width, truncate_to_width};
use crate::model::Track;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Forward slashes are one of the very few byte sequences that can never
/// occur inside a path segment, so a run of them cannot collide with a path.
pub const HIDDEN_DELIMITER: &str = "////";

const ELLIPSIS: &str = "..";

/// Encode one track into a finder candidate line occupying exactly
/// `available_cols` visible columns, plus the hidden path suffix.
pub fn encode(track: &Track, available_cols: usize) -> String {
    let mut text = format!("{} - {}", track.artist, track.title);
    if let Some(stripped) = text.strip_prefix(" - ") {
        text = stripped.to_string();
    }
    if text.is_empty() {
        text = file_stem(&track.filename).to_string();
    }
    if !track.album.is_empty() {
        text.push_str(" {");
        text.push_str(&track.album);
        text.push('}');
    }

    let content_cols = available_cols.saturating_sub(track.duration.width());
    let text = pad_to_width(&truncate_to_width(&text, content_cols, ELLIPSIS), content_cols);

    format!("{}{}{}{}", text, track.duration, HIDDEN_DELIMITER, track.path)
}

/// Decode the finder's raw output block back into the chosen paths, in the
/// order the finder emitted them. The split point is the *last* delimiter
/// occurrence per line: the visible text may contain shorter slash runs, so
/// searching from the front could split early.
pub fn decode(block: &str) -> Vec<String> {
    let mut lines: Vec<&str> = block.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut paths = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match line.rfind(HIDDEN_DELIMITER) {
            Some(at) => paths.push(line[at + HIDDEN_DELIMITER.len()..].to_string()),
            None => log::warn!("Ignoring selector line without hidden delimiter: {:?}", line),
        }
    }
    paths
}

fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename)
}
