use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{io_utils, profile::ColumnProfile};

pub const REPORT_HEADERS: [&str; 6] = ["table", "column", "type", "nunique", "top5", "category"];

/// One line of the metadata report: the profile of a single persisted column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub table: String,
    pub column: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub nunique: usize,
    pub top5: String,
    pub category: String,
}

impl ReportRow {
    pub fn new(table: &str, column: &str, profile: &ColumnProfile) -> Self {
        Self {
            table: table.to_string(),
            column: column.to_string(),
            data_type: profile.data_type.to_string(),
            nunique: profile.nunique,
            top5: profile.listing(),
            category: profile.category.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataReport {
    pub rows: Vec<ReportRow>,
}

impl MetadataReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = ReportRow>) {
        self.rows.extend(rows);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes the report as CSV. The header row is written even when the
    /// report has no rows.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = io_utils::open_csv_writer(path)?;
        writer
            .write_record(REPORT_HEADERS)
            .with_context(|| format!("Writing report header to {path:?}"))?;
        for row in &self.rows {
            writer
                .serialize(row)
                .with_context(|| format!("Writing report row for {}.{}", row.table, row.column))?;
        }
        writer
            .flush()
            .with_context(|| format!("Flushing report {path:?}"))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = io_utils::open_csv_reader(path)?;
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<ReportRow>, _>>()
            .with_context(|| format!("Parsing report {path:?}"))?;
        Ok(Self { rows })
    }
}
