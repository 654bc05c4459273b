//! File-system helpers: input discovery and CSV output.
//!
//! - **Discovery**: recursive walk of the input root, keeping files whose
//!   extension matches exactly, in file-name order so repeated runs see the
//!   same sequence.
//! - **CSV output**: writers use standard quoting, so only fields containing
//!   delimiters, quotes, or line breaks are quoted.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use csv::QuoteStyle;
use log::warn;
use walkdir::WalkDir;

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(extension)
}

pub fn discover_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry under {root:?}: {err}");
                continue;
            }
        };
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }
    files
}

pub fn open_csv_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>> {
    let file = File::create(path).with_context(|| format!("Creating output file {path:?}"))?;
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .double_quote(true);
    Ok(builder.from_writer(BufWriter::new(file)))
}

pub fn open_csv_reader(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("Opening input file {path:?}"))?;
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).double_quote(true).flexible(false);
    Ok(builder.from_reader(BufReader::new(file)))
}
