//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the `marks` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_marks_cli::cli_args::{Args, MarksCommand};
///
/// let args = Args::parse_from(["marks", "open", "2"]);
/// assert_eq!(args.command, MarksCommand::Open { id: 2 });
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "marks", version, about = "Save, list and open bookmarked articles")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the article store JSON file.
    ///
    /// If not provided, defaults to `~/.rust-marks/articles.json`.
    #[arg(long, short = 's', global = true)]
    pub store_path: Option<String>,

    #[command(subcommand)]
    pub command: MarksCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MarksCommand {
    /// List saved articles with their IDs.
    List {
        /// Only show articles carrying this exact tag.
        #[arg(long, short = 't')]
        tag: Option<String>,
    },

    /// Open the article with the given ID in the default browser.
    Open {
        /// Position of the article, as shown by `list`.
        id: usize,
    },

    /// Fetch a page and save it as an article.
    Save {
        /// URL of the page; its `<title>` becomes the article title.
        url: String,

        /// Free-text description of the article.
        description: String,

        /// Comma-separated tags, e.g. `rust,async`.
        tags: Option<String>,
    },

    /// Delete the article with the given ID.
    Delete {
        /// Position of the article, as shown by `list`.
        id: usize,
    },

    /// Delete every saved article.
    Clear,

    /// Pick any number of articles interactively and open them all.
    OpenAll,
}
