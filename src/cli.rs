use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jellyfin-renamer")]
#[command(author, version, long_about = None)]
#[command(about = "Rename media files to Jellyfin's multi-part and multi-episode naming schemes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inject incrementing episode numbers after the season token
    ExtendEpisodes {
        /// The working directory containing the files to be renamed
        #[arg(short, long, value_name = "DIR")]
        directory_working: PathBuf,

        /// Regex with groups: season, replaced episode indicator, trailing text
        #[arg(short, long, value_name = "REGEX")]
        regex_pattern: String,

        /// Episode number given to the first matching file
        #[arg(short, long, default_value = "1")]
        episode_count: u32,

        /// Print intended rename changes instead of actually renaming files
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace arbitrary part indicators with Jellyfin's part indicators
    Parts {
        /// The working directory containing the files to be renamed
        #[arg(short, long, value_name = "DIR")]
        directory_working: PathBuf,

        /// Regex with groups: coordinates, part indicator, unused, file extension
        #[arg(short, long, value_name = "REGEX")]
        regex_pattern: String,

        /// JSON object mapping the arbitrary part indicator to Jellyfin's, e.g. '{"A": "-part-1"}'
        #[arg(short, long, value_name = "JSON")]
        mapping: String,

        /// Print intended rename changes instead of actually renaming files
        #[arg(long)]
        dry_run: bool,
    },

    /// Reverse the renames recorded in the directory's undo log
    Undo {
        /// The working directory containing the undo log
        #[arg(short, long, value_name = "DIR")]
        directory_working: PathBuf,
    },
}
