use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Rendering used for `--dry` output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    /// Grouped by season folder
    Human,
    /// Tab-separated: folder, original name, new name
    Simple,
    /// JSON array of planned renames
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "series-renamer")]
#[command(author, version, long_about = None)]
#[command(about = "Rename TV series episode files to a uniform naming convention")]
pub struct Args {
    /// Series folder, containing season subfolders or the episodes themselves
    pub root_dir: PathBuf,

    /// Series name used in new filenames (defaults to the folder name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Comma-separated list of extensions to rename, e.g. ".mkv,.srt"
    /// [default: .mkv,.srt,.mka,.mp4 or $SERIES_RENAMER_EXTENSIONS]
    #[arg(short, long, value_name = "LIST")]
    pub extensions: Option<String>,

    /// Leave the season number out of new filenames ("Show E01.mkv")
    #[arg(long)]
    pub no_season: bool,

    /// Show the planned renames without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Output format for --dry [default: human]
    #[arg(long, value_enum, requires = "dry")]
    pub format: Option<PreviewFormat>,

    /// Keep renaming after a failed file instead of stopping
    #[arg(short, long)]
    pub keep_going: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
