//! Terminal width discovery
//!
//! Probe order: tmux pane width, then `$COLUMNS`, then the terminal driver
//! via stty, then a default. Each probe can fail quietly; the chain always
//! produces a usable width.

use std::process::{Command, Stdio};

/// Columns the finder reserves for its own pointer and margin chrome
const FINDER_CHROME_COLS: usize = 5;

const DEFAULT_WIDTH: usize = 80;

/// Anything at or below this is a misreported terminal, not a real one
const MIN_SANE_WIDTH: usize = 20;

/// Probe the terminal width in columns.
pub fn terminal_width() -> usize {
    let width = probe_tmux()
        .or_else(probe_columns_env)
        .or_else(probe_stty)
        .unwrap_or(DEFAULT_WIDTH);

    if width <= MIN_SANE_WIDTH {
        DEFAULT_WIDTH
    } else {
        width
    }
}

/// Columns left for candidate text once the finder's chrome is accounted for
pub fn available_columns(width: usize) -> usize {
    width.saturating_sub(FINDER_CHROME_COLS)
}

fn probe_tmux() -> Option<usize> {
    let output = Command::new("tmux")
        .args(["display-message", "-p", "#{pane_width}"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}

fn probe_columns_env() -> Option<usize> {
    std::env::var("COLUMNS").ok()?.trim().parse().ok()
}

fn probe_stty() -> Option<usize> {
    // stty reports "<rows> <cols>" for the terminal on its stdin
    let output = Command::new("stty")
        .arg("size")
        .stdin(Stdio::inherit())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout);
    let mut parts = text.split_whitespace();
    let _rows = parts.next()?;
    parts.next()?.parse().ok()
}
