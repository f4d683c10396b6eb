use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Command-line bookshelf manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding books.json and config.json
    /// (default: BOOKSHELF_DATA or the user data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the shelf
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Publication year (must be a number)
        year: String,

        /// Mark the book as already finished
        #[arg(long)]
        complete: bool,
    },

    /// List the shelf (unread and finished sections)
    #[command(alias = "ls")]
    List {
        /// Show only unread books
        #[arg(long, conflicts_with = "complete")]
        unread: bool,

        /// Show only finished books
        #[arg(long)]
        complete: bool,
    },

    /// Search book titles
    #[command(alias = "s")]
    Search {
        /// Keyword matched case-insensitively against titles
        keyword: String,
    },

    /// Edit a book's fields (unspecified fields keep their value)
    #[command(alias = "e")]
    Edit {
        /// Id of the book (as shown by list)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New publication year
        #[arg(long)]
        year: Option<String>,

        /// Mark as finished
        #[arg(long, conflicts_with = "unread")]
        complete: bool,

        /// Mark as unread
        #[arg(long)]
        unread: bool,
    },

    /// Flip a book between unread and finished
    #[command(alias = "t")]
    Toggle {
        /// Id of the book (as shown by list)
        id: String,
    },

    /// Delete a book from the shelf
    #[command(alias = "rm")]
    Delete {
        /// Id of the book (as shown by list)
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
