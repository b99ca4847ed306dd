//! Duration display formatting

/// Format a `Time` value (integer seconds, as the raw database string) for
/// display: `(MM:SS)`, or `(H:MM:SS)` once the total exceeds one hour.
///
/// Unparseable input yields the empty string; a track with an unknown
/// duration is still valid.
pub fn format_duration(value: &str) -> String {
    let secs: u64 = match value.trim().parse() {
        Ok(secs) => secs,
        Err(_) => return String::new(),
    };

    if secs > 3600 {
        format!("({}:{:02}:{:02})", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("({:02}:{:02})", secs / 60, secs % 60)
    }
}
