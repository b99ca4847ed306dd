//! Column-exact truncation and padding
//!
//! Widths are terminal columns, not chars: East-Asian wide characters
//! occupy two columns. The results here are concatenated with a fixed-width
//! duration suffix and the hidden path, so any off-by-one drifts every line
//! in the finder out of alignment.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_cols` columns, appending `ellipsis` when
/// anything was cut. Never splits a wide character; if the cut point falls
/// inside one, backs off to before it.
pub fn truncate_to_width(s: &str, max_cols: usize, ellipsis: &str) -> String {
    if s.width() <= max_cols {
        return s.to_string();
    }

    // Degenerate targets (narrower than the ellipsis itself) still honor
    // the column cap; whatever fits of the ellipsis stands in for the text.
    if ellipsis.width() > max_cols {
        return take_columns(ellipsis, max_cols);
    }

    let mut out = take_columns(s, max_cols - ellipsis.width());
    out.push_str(ellipsis);
    out
}

/// Largest char-boundary prefix of `s` no wider than `cols` columns
fn take_columns(s: &str, cols: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > cols {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Pad `s` with spaces to exactly `cols` columns. Assumes `s` already fits.
pub fn pad_to_width(s: &str, cols: usize) -> String {
    let mut out = s.to_string();
    let mut width = out.width();
    while width < cols {
        out.push(' ');
        width += 1;
    }
    out
}
