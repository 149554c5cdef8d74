use clap::{Args, Parser, Subcommand};
use media_shelf_core::{SortField, SortOrder};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "media-shelf")]
#[command(about = "Browse a media library and rename videos with their subtitles")]
#[command(long_about = None)]
pub struct Cli {
    /// Library root to use instead of the configured one
    #[arg(long, global = true)]
    pub library: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List catalogued files, one page at a time
    List(ListArgs),
    /// Show details for a single file
    Info {
        path: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the subtitle that belongs to a video
    Subtitle { video: PathBuf },
    /// Rename a file, taking a matching subtitle along for videos
    Rename(RenameArgs),
    /// Look up a movie on TMDB
    Movie { title: String },
    /// Look up a TV show on TMDB
    Tv { name: String },
    /// List the episodes of one season of a TV show
    Episodes {
        show: String,
        #[arg(long)]
        season: u32,
        #[arg(long)]
        episode: Option<u32>,
    },
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Defaults to the configured page size
    #[arg(long)]
    pub per_page: Option<usize>,
    /// Case-insensitive match on file name or relative path
    #[arg(long)]
    pub search: Option<String>,
    /// filename, size or modified
    #[arg(long, default_value_t = SortField::Modified)]
    pub sort: SortField,
    /// asc or desc
    #[arg(long, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    pub path: PathBuf,
    /// New name; the original extension is always kept
    pub new_name: String,
    /// Leave the companion subtitle untouched
    #[arg(long)]
    pub keep_subtitle: bool,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
    #[arg(long)]
    pub json: bool,
}
