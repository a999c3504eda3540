use clap::{Parser, Subcommand};

mod args;


pub use args::{BrowseArgs, ListArgs};

#[derive(Debug, Parser)]
#[command(name = "fileshelf")]
#[command(about = "File portal record browser", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the collection once and print one page of the filtered listing.
    Ls(ListArgs),
    /// Print the available temporal filter labels.
    Filters,
    /// Interactive listing with live search, filter, and page commands.
    Browse(BrowseArgs),
}
