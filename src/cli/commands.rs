use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "Query a small, fixed catalog of books through GraphQL"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookshelf.toml by default)
    #[arg(long, global = true, env = "BOOKSHELF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rolled daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all books in the catalog
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute a GraphQL query against the schema
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query string (use '-' to read from stdin)
        #[arg(conflicts_with = "file")]
        query: Option<String>,

        /// Read the query document from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in GraphQL SDL
    Schema {
        /// Write the SDL to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
