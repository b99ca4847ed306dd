/// One playable item from the MPD database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    /// Full path relative to the library root. The only stable identifier;
    /// every other field is display-only and may be empty.
    pub path: String,

    /// Leaf file name, as given by `song_begin`
    pub filename: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Track title
    pub title: String,

    /// Release date, verbatim from the database
    pub date: String,

    /// Genre, verbatim from the database
    pub genre: String,

    /// Pre-formatted duration display, e.g. `(03:35)`; empty when unknown
    pub duration: String,
}
