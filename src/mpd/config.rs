//! MPD configuration discovery
//!
//! Finds the user's mpd.conf and scrapes the `db_file` directive out of it.
//! Only that one directive matters here; the rest of the file is MPD's
//! business.

use crate::error::Error;
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate configuration files, most specific first (matches MPD's own
/// search order).
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(xdg).join("mpd/mpd.conf"));
    }
    let home = shellexpand::tilde("~").into_owned();
    paths.push(PathBuf::from(&home).join(".config/mpd/mpd.conf"));
    paths.push(PathBuf::from(&home).join(".mpdconf"));
    paths.push(PathBuf::from("/etc/mpd.conf"));
    paths.push(PathBuf::from("/usr/local/etc/musicpd.conf"));
    paths
}

/// Locate the MPD configuration file and return its `db_file` path.
pub fn find_db_file() -> Result<PathBuf> {
    for path in candidate_paths() {
        if let Ok(contents) = fs::read_to_string(&path) {
            log::debug!("Reading MPD configuration from {:?}", path);
            return db_file_from(&contents, &path);
        }
    }
    Err(Error::ConfigNotFound.into())
}

/// Return the `db_file` path from an explicitly named configuration file,
/// skipping the candidate search. Unlike the search, a file that cannot be
/// read here is an error: the user asked for this one specifically.
pub fn db_file_from_config(path: &Path) -> Result<PathBuf> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read MPD configuration: {:?}", path))?;
    db_file_from(&contents, path)
}

/// Scrape the `db_file "..."` directive; like MPD itself, a later occurrence
/// overrides an earlier one. The extracted path is tilde-expanded.
fn db_file_from(contents: &str, config_path: &Path) -> Result<PathBuf> {
    let directive = Regex::new(r#"^\s*db_file\s*"([^"]+)""#)?;

    let mut db_file = None;
    for line in contents.lines() {
        if let Some(captures) = directive.captures(line) {
            db_file = Some(captures[1].to_string());
        }
    }

    match db_file {
        Some(raw) => Ok(PathBuf::from(shellexpand::tilde(&raw).into_owned())),
        None => Err(Error::DbFileNotConfigured(config_path.to_path_buf()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_config_file() {
        let dir = TempDir::new().expect("temp dir");
        let conf_path = dir.path().join("mpd.conf");
        fs::write(&conf_path, "db_file \"/var/lib/mpd/db\"\n").expect("write conf");

        let path = db_file_from_config(&conf_path).unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/mpd/db"));
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let dir = TempDir::new().expect("temp dir");
        let err = db_file_from_config(&dir.path().join("absent.conf")).unwrap_err();
        assert!(err.to_string().contains("Failed to read MPD configuration"));
    }

    #[test]
    fn test_explicit_config_without_db_file_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let conf_path = dir.path().join("mpd.conf");
        fs::write(&conf_path, "bind_to_address \"any\"\n").expect("write conf");

        let err = db_file_from_config(&conf_path)
            .unwrap_err()
            .downcast::<Error>()
            .expect("typed error");
        assert!(matches!(err, Error::DbFileNotConfigured(_)));
    }

    #[test]
    fn test_db_file_extracted() {
        let conf = "music_directory \"/srv/music\"\ndb_file \"/var/lib/mpd/db\"\n";
        let path = db_file_from(conf, Path::new("/etc/mpd.conf")).unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/mpd/db"));
    }

    #[test]
    fn test_last_directive_wins() {
        let conf = "db_file \"/old/db\"\ndb_file \"/new/db\"\n";
        let path = db_file_from(conf, Path::new("/etc/mpd.conf")).unwrap();
        assert_eq!(path, PathBuf::from("/new/db"));
    }

    #[test]
    fn test_tilde_expanded() {
        let conf = "db_file \"~/.config/mpd/db\"\n";
        let path = db_file_from(conf, Path::new("/etc/mpd.conf")).unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.to_string_lossy().ends_with(".config/mpd/db"));
    }

    #[test]
    fn test_indented_directive_matches() {
        let conf = "  \tdb_file   \"/var/lib/mpd/db\"\n";
        let path = db_file_from(conf, Path::new("/etc/mpd.conf")).unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/mpd/db"));
    }

    #[test]
    fn test_missing_directive_is_an_error() {
        let err = db_file_from("bind_to_address \"any\"\n", Path::new("/etc/mpd.conf"))
            .unwrap_err()
            .downcast::<Error>()
            .expect("typed error");
        assert!(matches!(err, Error::DbFileNotConfigured(_)));
    }
}
