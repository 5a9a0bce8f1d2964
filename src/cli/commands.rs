//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Terminal content engine for a markdown blog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Blog title
        #[arg(short, long, default_value = "My blog")]
        title: String,
    },

    /// List posts, newest first
    List {
        /// Only posts carrying this tag (exact, case-sensitive match)
        #[arg(short, long)]
        tag: Option<String>,

        /// Show at most this many posts
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single post with its chronological neighbours
    Show {
        /// Post slug
        slug: String,
    },

    /// List tags with post counts, most used first
    Tags {
        /// Show only the first N tags
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show recent posts and popular tags
    Overview,

    /// Export the post index as JSON
    Export {
        /// Output file (default: .quill/index.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
