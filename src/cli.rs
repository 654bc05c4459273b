use std::path::PathBuf;

use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Load every .xlsx file under a directory into data.db and profile its columns into metadata.csv",
    long_about = None
)]
pub struct Cli {
    /// Directory searched recursively for spreadsheets
    pub root: PathBuf,
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
