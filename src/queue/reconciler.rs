//! Two-phase queue reconciliation via mpc
//!
//! Phase one removes every queue entry matching a chosen path, phase two
//! inserts the chosen paths after the currently playing track. There is no
//! rollback: if insertion fails after removals were applied, the run aborts
//! with the removals already done.

use crate::error::Error;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::Write;
use std::process::{Command, Stdio};

/// Reconciles a selection of library paths against the MPD play queue.
pub struct QueueReconciler {
    program: String,
}

impl QueueReconciler {
    pub fn new() -> Self {
        Self {
            program: "mpc".to_string(),
        }
    }

    /// Use a different queue-control binary (used by tests)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Remove stale occurrences of `paths` from the queue, then insert them
    /// after the current track, in the given order.
    pub fn enqueue(&self, paths: &[String]) -> Result<()> {
        let chosen: HashSet<&str> = paths.iter().map(String::as_str).collect();

        let playlist = self.query_playlist()?;
        let stale = matching_positions(&playlist, &chosen);
        if !stale.is_empty() {
            log::debug!("Removing {} stale queue entries", stale.len());
            self.feed_lines("del", &stale)?;
        }

        log::debug!("Inserting {} tracks after the current one", paths.len());
        self.feed_lines("insert", paths)?;
        Ok(())
    }

    /// Current queue as `<position> <path>` lines
    fn query_playlist(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .args(["playlist", "-f", "%position% %file%"])
            .output()
            .with_context(|| format!("Failed to run '{} playlist'", self.program))?;

        if !output.status.success() {
            return Err(Error::ToolFailed {
                tool: format!("{} playlist", self.program),
                status: output.status,
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run one subcommand, feeding `lines` to its stdin one per line
    fn feed_lines(&self, subcommand: &str, lines: &[String]) -> Result<()> {
        let tool = format!("{} {}", self.program, subcommand);
        let mut child = Command::new(&self.program)
            .arg(subcommand)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to run '{}'", tool))?;

        {
            let mut stdin = child
                .stdin
                .take()
                .with_context(|| format!("'{}' stdin not piped", tool))?;
            for line in lines {
                writeln!(stdin, "{}", line)
                    .with_context(|| format!("Failed to write to '{}'", tool))?;
            }
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for '{}'", tool))?;
        if !status.success() {
            return Err(Error::ToolFailed { tool, status }.into());
        }
        Ok(())
    }
}

impl Default for QueueReconciler {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions of queue entries whose path is among the chosen set, in
/// ascending original order. The path is everything after the first space,
/// embedded spaces included.
fn matching_positions(playlist: &str, chosen: &HashSet<&str>) -> Vec<String> {
    let mut positions = Vec::new();
    for line in playlist.lines() {
        if let Some((position, path)) = line.split_once(' ') {
            if chosen.contains(path) {
                positions.push(position.to_string());
            }
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_positions_ascending() {
        let playlist = "\
1 keep/a.mp3
2 Music/x.mp3
3 keep/b.mp3
4 Music/y.mp3
";
        let chosen: HashSet<&str> = ["Music/x.mp3", "Music/y.mp3"].into_iter().collect();
        assert_eq!(matching_positions(playlist, &chosen), vec!["2", "4"]);
    }

    #[test]
    fn test_paths_with_spaces() {
        let playlist = "7 Music/a b/track one.mp3\n";
        let chosen: HashSet<&str> = ["Music/a b/track one.mp3"].into_iter().collect();
        assert_eq!(matching_positions(playlist, &chosen), vec!["7"]);
    }

    #[test]
    fn test_lines_without_separator_ignored() {
        let chosen: HashSet<&str> = ["x.mp3"].into_iter().collect();
        assert!(matching_positions("garbage\n\n", &chosen).is_empty());
    }

    #[test]
    fn test_duplicate_queue_entries_all_removed() {
        let playlist = "1 x.mp3\n2 other.mp3\n3 x.mp3\n";
        let chosen: HashSet<&str> = ["x.mp3"].into_iter().collect();
        assert_eq!(matching_positions(playlist, &chosen), vec!["1", "3"]);
    }
}
