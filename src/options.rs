//! Collect all functions and structs that are used to parse the command line arguments.
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[clap(about = "Render the contents of a directory in a tree-like format")]
/// Arguments to the application.
pub struct Options {
    #[clap(value_parser)]
    /// Path to the directory to traverse into
    pub path: PathBuf,

    #[clap(short = 'f', long)]
    /// List regular files alongside directories
    pub files: bool,
}
