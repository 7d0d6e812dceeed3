use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use url::Url;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Show the loader when stderr is a TTY.
    Auto,
    /// Always show the loader (even when piped).
    Always,
    /// Never show the loader.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Base URL of the GitHub REST API.
    #[arg(long, default_value = "https://api.github.com")]
    pub api_base: Url,

    /// Directory holding the persisted favorites list and theme flag.
    ///
    /// Defaults to the platform config directory (e.g. `~/.config/github-profile-render`).
    #[arg(long)]
    pub store_dir: Option<PathBuf>,

    /// HTTP User-Agent sent with API requests.
    #[arg(long, default_value = "github-profile-render/0.1")]
    pub user_agent: String,

    /// Loader display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a user and render their profile card.
    Lookup {
        /// GitHub username (surrounding whitespace is ignored).
        username: String,

        /// Output HTML file path. Defaults to `profile-<login>.html`.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Add the username to favorites after a successful lookup.
        #[arg(long)]
        save: bool,
    },
    /// Manage the persisted favorites list.
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Inspect or flip the persisted light/dark theme flag.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    /// Add a username (no-op if already present).
    Add { username: String },
    /// Print stored usernames in insertion order.
    List,
    /// Delete the whole favorites list.
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum ThemeAction {
    /// Flip between light and dark.
    Toggle,
    /// Print the current theme.
    Show,
}
