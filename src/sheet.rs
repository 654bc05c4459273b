//! Spreadsheet reading through `calamine`.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use anyhow::{Context, Result, anyhow, bail};
use calamine::{Data, DataType, Range, Reader, open_workbook_auto};

use crate::{data::Value, naming, table::SourceTable};

/// Reads the first sheet of a spreadsheet file.
pub trait SheetReader {
    fn read_first_sheet(&self, path: &Path) -> Result<SourceTable>;
}

/// Reader backed by `calamine`; the format is chosen from the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineReader;

impl SheetReader for CalamineReader {
    fn read_first_sheet(&self, path: &Path) -> Result<SourceTable> {
        let mut workbook =
            open_workbook_auto(path).with_context(|| format!("Opening workbook {path:?}"))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| anyhow!("Workbook {path:?} contains no sheets"))?
            .with_context(|| format!("Reading first sheet of {path:?}"))?;
        table_from_range(&range)
    }
}

/// Converts a used range into a table: the first row is the header, blank rows
/// are skipped. Header positions count from column A even when the used range
/// starts further right.
pub fn table_from_range(range: &Range<Data>) -> Result<SourceTable> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        bail!("Sheet is empty");
    };
    let first_column = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let headers = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_name(first_column + idx, cell))
        .collect::<Vec<_>>();
    let body = rows
        .map(|row| row.iter().map(cell_value).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(Option::is_some))
        .collect();
    Ok(SourceTable::from_rows(dedupe_headers(headers), body))
}

fn header_name(idx: usize, cell: &Data) -> String {
    match cell_value(cell) {
        Some(Value::String(name)) if name.is_empty() => naming::unnamed_column(idx),
        Some(value) => value.as_display(),
        None => naming::unnamed_column(idx),
    }
}

/// Suffixes repeated header names with `.1`, `.2`, ... in first-seen order,
/// skipping any suffix already taken by another header.
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken = headers.iter().cloned().collect::<HashSet<_>>();
    let mut seen = HashSet::new();
    let mut repeats: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .map(|name| {
            if seen.insert(name.clone()) {
                return name;
            }
            let counter = repeats.entry(name.clone()).or_insert(0);
            loop {
                *counter += 1;
                let candidate = format!("{name}.{counter}");
                if taken.insert(candidate.clone()) {
                    seen.insert(candidate.clone());
                    return candidate;
                }
            }
        })
        .collect()
}

/// Maps a raw cell onto a tagged value. Whole floats become integers, the way
/// spreadsheet users expect `3` to read back; error cells count as missing.
pub fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::Int(i) => Some(Value::Integer(*i)),
        Data::Float(f) => Some(float_value(*f)),
        Data::Bool(b) => Some(Value::Boolean(*b)),
        Data::String(s) => Some(Value::String(s.clone())),
        Data::DateTime(_) | Data::DateTimeIso(_) => Some(
            cell.as_datetime()
                .map(Value::DateTime)
                .unwrap_or_else(|| Value::String(cell.to_string())),
        ),
        Data::DurationIso(s) => Some(Value::String(s.clone())),
    }
}

fn float_value(value: f64) -> Value {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    if value.fract() == 0.0 && value >= -I64_BOUND && value < I64_BOUND {
        Value::Integer(value as i64)
    } else {
        Value::Float(value)
    }
}
