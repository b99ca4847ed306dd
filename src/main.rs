use anyhow::Result;
use clap::Parser;
use fzmpd::select::codec;
use fzmpd::{mpd, term, QueueReconciler, SelectorSession};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "fzmpd")]
#[command(about = "Fuzzy-select MPD tracks into the play queue", long_about = None)]
struct Args {
    /// Path to mpd.conf (skips the usual configuration search)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Path to the MPD database (skips mpd.conf discovery entirely)
    #[arg(short = 'd', long)]
    database: Option<String>,

    /// Selector program to run (receives one candidate per line)
    #[arg(long, default_value = "fzf-tmux")]
    selector: String,

    /// Terminal width override, in columns
    #[arg(short = 'w', long)]
    width: Option<usize>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let db_path = match (&args.database, &args.config) {
        (Some(raw), _) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        (None, Some(conf)) => {
            mpd::db_file_from_config(Path::new(shellexpand::tilde(conf).as_ref()))?
        }
        (None, None) => mpd::find_db_file()?,
    };
    log::debug!("MPD database: {:?}", db_path);

    let tracks = mpd::load_tracks(&db_path)?;
    if tracks.is_empty() {
        log::warn!("MPD database contains no tracks");
        return Ok(());
    }

    let width = args.width.unwrap_or_else(term::terminal_width);
    let cols = term::available_columns(width);
    log::debug!("Formatting {} tracks for {} columns", tracks.len(), cols);
    let lines: Vec<String> = tracks.iter().map(|t| codec::encode(t, cols)).collect();

    let session = SelectorSession::new().with_program(args.selector.as_str());
    let chosen = session.run(lines)?;
    if chosen.is_empty() {
        log::debug!("Nothing selected");
        return Ok(());
    }

    QueueReconciler::new().enqueue(&chosen)?;
    log::info!("Queued {} track(s) after the current one", chosen.len());

    Ok(())
}
