//! MPD database (line-oriented dump) parser

use super::model::SongBuilder;
use crate::error::Error;
use crate::model::Track;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Parse the MPD database at `path` and extract all tracks, in database
/// order. The file is gzip-compressed by default but MPD also accepts an
/// uncompressed database, so the magic bytes are sniffed first.
pub fn parse_database(path: &Path) -> Result<Vec<Track>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open MPD database: {:?}", path))?;
    let mut reader = BufReader::new(file);

    let gzipped = reader
        .fill_buf()
        .with_context(|| format!("Failed to read MPD database: {:?}", path))?
        .starts_with(&GZIP_MAGIC);

    let tracks = if gzipped {
        parse_lines(BufReader::new(GzDecoder::new(reader)))
    } else {
        parse_lines(reader)
    }
    .with_context(|| format!("Failed to parse MPD database: {:?}", path))?;

    log::info!("Parsed {} tracks from MPD database", tracks.len());
    Ok(tracks)
}

/// Fold the dump's lines into tracks: a stack of open directories plus one
/// in-progress song record.
fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<Track>> {
    let mut dirs: Vec<String> = Vec::new();
    let mut current: Option<SongBuilder> = None;
    let mut tracks = Vec::new();

    for line in reader.lines() {
        let line = line.context("I/O error reading database stream")?;
        let (key, value) = key_value(&line);
        match key {
            "directory" => dirs.push(value.to_string()),
            "end" => {
                if dirs.pop().is_none() {
                    return Err(Error::CorruptedDatabase(
                        "directory 'end' with no open directory".to_string(),
                    )
                    .into());
                }
            }
            "song_begin" => current = Some(SongBuilder::begin(value, &dirs)),
            "song_end" => {
                if let Some(builder) = current.take() {
                    tracks.push(builder.finish());
                }
            }
            _ => {
                if let Some(builder) = current.as_mut() {
                    builder.set(key, value);
                }
            }
        }
    }

    Ok(tracks)
}

/// Split a dump line into `(key, value)`. Lines are `key: value`, `key:`
/// with an empty value, or a bare directive such as `end`. The split is at
/// the first colon; the value, when present, starts one byte past the
/// separator's trailing space.
fn key_value(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((key, rest)) => (key, rest.get(1..).unwrap_or("")),
        None => (line, ""),
    }
}

/// Group tracks into one stable bucket per distinct artist value, then
/// shuffle the bucket order. Keeps same-artist tracks adjacent for scanning
/// while varying the overall order across runs.
pub fn group_by_artist(tracks: Vec<Track>) -> Vec<Track> {
    let mut artists: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<Track>> = HashMap::new();

    for track in tracks {
        if !buckets.contains_key(&track.artist) {
            artists.push(track.artist.clone());
        }
        buckets.entry(track.artist.clone()).or_default().push(track);
    }

    artists.shuffle(&mut rand::thread_rng());
    artists
        .into_iter()
        .flat_map(|artist| buckets.remove(&artist).unwrap_or_default())
        .collect()
}
