use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{debug, error, info, warn};

use crate::{
    config::ConvertConfig,
    error::ConvertError,
    io_utils,
    metadata::{MetadataReport, ReportRow},
    naming,
    profile::profile_column,
    sheet::{CalamineReader, SheetReader},
    store::{SqliteStore, TableStore},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub discovered: usize,
    pub processed: usize,
    pub failed: usize,
    pub columns: usize,
}

#[derive(Debug, Default)]
pub struct ConvertOutcome {
    pub report: MetadataReport,
    pub failures: Vec<ConvertError>,
    pub processed: usize,
}

/// Converts every matching spreadsheet under `root` into the configured
/// database and writes the metadata report.
pub fn execute(root: &Path, config: &ConvertConfig) -> Result<ConvertSummary> {
    info!(
        "Converting '*.{}' files under {:?} into {:?}",
        config.extension, root, config.database
    );
    let files = io_utils::discover_files(root, &config.extension);
    debug!("Discovered {} file(s)", files.len());

    let mut store = SqliteStore::open(&config.database)?;
    let outcome = convert_files(&files, &CalamineReader, &mut store);

    outcome
        .report
        .save(&config.report)
        .with_context(|| format!("Writing metadata report to {:?}", config.report))?;

    let summary = ConvertSummary {
        discovered: files.len(),
        processed: outcome.processed,
        failed: outcome.failures.len(),
        columns: outcome.report.len(),
    };
    info!(
        "Converted {} of {} file(s) ({} failed); {} column profile(s) written to {:?}",
        summary.processed, summary.discovered, summary.failed, summary.columns, config.report
    );
    Ok(summary)
}

/// Runs each file through read, persist, and profile. A failing file is logged
/// and skipped; it contributes nothing to the report.
pub fn convert_files<R, S>(files: &[PathBuf], reader: &R, store: &mut S) -> ConvertOutcome
where
    R: SheetReader,
    S: TableStore,
{
    let mut outcome = ConvertOutcome::default();
    let mut claimed: HashMap<String, PathBuf> = HashMap::new();
    for path in files {
        match convert_file(path, reader, store) {
            Ok((table, rows)) => {
                if let Some(previous) = claimed.insert(table.clone(), path.clone()) {
                    warn!(
                        "Table '{table}' from {path:?} replaced the one written from {previous:?}"
                    );
                }
                info!("Processed {path:?} -> {table}");
                outcome.report.extend(rows);
                outcome.processed += 1;
            }
            Err(err) => {
                error!("Error processing {:?}: {err}", err.path());
                outcome.failures.push(err);
            }
        }
    }
    outcome
}

/// Converts one file, returning the table name and one report row per column.
pub fn convert_file<R, S>(
    path: &Path,
    reader: &R,
    store: &mut S,
) -> std::result::Result<(String, Vec<ReportRow>), ConvertError>
where
    R: SheetReader,
    S: TableStore,
{
    let table_name = table_name_for(path);
    let mut table = reader
        .read_first_sheet(path)
        .map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    table.rename_columns(naming::sanitize);
    store
        .replace_table(&table_name, &table)
        .map_err(|source| ConvertError::Persist {
            path: path.to_path_buf(),
            table: table_name.clone(),
            source,
        })?;
    let rows = table
        .columns
        .iter()
        .map(|column| ReportRow::new(&table_name, &column.name, &profile_column(column)))
        .collect();
    Ok((table_name, rows))
}

/// Sanitized file stem; the extension is dropped first.
pub fn table_name_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    naming::sanitize(&stem)
}
