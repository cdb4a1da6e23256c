//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use marquee_client::Theme;
use marquee_model::Section;

#[derive(Debug, Parser)]
#[command(
    name = "marqueectl",
    version,
    about = "Browse a movie catalog from the terminal",
    propagate_version = true
)]
pub struct Cli {
    /// Alternate config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse a curated section (now_playing, popular, top_rated, upcoming)
    Browse {
        section: Section,
        /// Number of pages to aggregate
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Search movies by text
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Discover movies by genre filter
    Discover {
        /// Genre id filter expression (comma = AND, pipe = OR)
        #[arg(long)]
        genres: Option<String>,
        /// Sort key, e.g. popularity.desc
        #[arg(long)]
        sort_by: Option<String>,
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// List movie genres
    Genres,
    /// Show a movie: details, cast, trailer, similar titles
    Movie { id: u64 },
    /// Show a person and their filmography
    Person { id: u64 },
    /// Log in via the browser approval flow
    Login,
    /// Log out and delete the session
    Logout,
    /// Show the authenticated account
    Whoami,
    /// List favourite movies
    Favourites {
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// List watchlist movies
    Watchlist {
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Mark a movie as favourite
    Favourite {
        id: u64,
        /// Unmark instead
        #[arg(long)]
        remove: bool,
    },
    /// Add a movie to the watchlist
    WatchlistAdd {
        id: u64,
        /// Remove instead
        #[arg(long)]
        remove: bool,
    },
    /// Persist the theme preference
    Theme { theme: Theme },
}
