use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "ytdeck",
    version,
    about = "Play YouTube links from the terminal and keep a short recent list"
)]
pub struct Cli {
    /// How many recent videos to keep for this session
    #[arg(long, global = true, default_value_t = 5)]
    pub capacity: usize,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the video id and links a URL resolves to
    Resolve {
        input: String,
        #[arg(long)]
        json: bool,
    },
    /// Resolve a URL or id and open it in the player
    Play {
        input: String,
        #[command(flatten)]
        playback: PlaybackArgs,
    },
    /// Open an exact 11-character video id
    Open {
        id: String,
        #[command(flatten)]
        playback: PlaybackArgs,
    },
    /// Interactive session with a URL box and the recent list (default)
    Tui {
        #[command(flatten)]
        playback: PlaybackArgs,
    },
}

#[derive(Debug, Default, Clone, Args)]
pub struct PlaybackArgs {
    /// Print the embed URL instead of launching a player
    #[arg(long)]
    pub dry_run: bool,

    /// Program that receives the embed URL (defaults to $YTDECK_OPENER, then the system opener)
    #[arg(long, value_name = "PATH")]
    pub opener: Option<PathBuf>,
}
