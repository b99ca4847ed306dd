//! In-progress database records

use crate::format::format_duration;
use crate::model::Track;
use std::path::PathBuf;

/// Accumulates the fields of one `song_begin`..`song_end` record
#[derive(Debug, Clone, Default)]
pub struct SongBuilder {
    track: Track,
}

impl SongBuilder {
    /// Open a record: the `song_begin` value is the leaf file name, and the
    /// currently open directories fix the track's full path.
    pub fn begin(filename: &str, dirs: &[String]) -> Self {
        let mut path = PathBuf::new();
        for dir in dirs {
            path.push(dir);
        }
        path.push(filename);

        Self {
            track: Track {
                path: path.to_string_lossy().into_owned(),
                filename: filename.to_string(),
                ..Track::default()
            },
        }
    }

    /// Apply one `key: value` metadata line. Unrecognized keys are ignored
    /// for forward compatibility with newer database formats.
    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            "Artist" => self.track.artist = value.to_string(),
            "Album" => self.track.album = value.to_string(),
            "Title" => self.track.title = value.to_string(),
            "Date" => self.track.date = value.to_string(),
            "Genre" => self.track.genre = value.to_string(),
            "Time" => self.track.duration = format_duration(value),
            _ => {}
        }
    }

    /// Close the record
    pub fn finish(self) -> Track {
        self.track
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_joins_open_directories() {
        let dirs = vec!["Music".to_string(), "Albums".to_string()];
        let track = SongBuilder::begin("song.mp3", &dirs).finish();
        assert_eq!(track.path, "Music/Albums/song.mp3");
        assert_eq!(track.filename, "song.mp3");
    }

    #[test]
    fn test_set_known_keys() {
        let mut builder = SongBuilder::begin("a.mp3", &[]);
        builder.set("Artist", "Sia");
        builder.set("Title", "Chandelier");
        builder.set("Time", "215");
        builder.set("MUSICBRAINZ_TRACKID", "ignored");

        let track = builder.finish();
        assert_eq!(track.artist, "Sia");
        assert_eq!(track.title, "Chandelier");
        assert_eq!(track.duration, "(03:35)");
    }

    #[test]
    fn test_bad_time_leaves_duration_empty() {
        let mut builder = SongBuilder::begin("a.mp3", &[]);
        builder.set("Time", "not-a-number");
        assert_eq!(builder.finish().duration, "");
    }
}
