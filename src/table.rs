use crate::data::{ColumnType, Value, infer_column_type};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data_type: ColumnType,
    pub values: Vec<Option<Value>>,
}

impl Column {
    /// Builds a column and infers its declared type from the cells.
    pub fn new(name: impl Into<String>, values: Vec<Option<Value>>) -> Self {
        let data_type = infer_column_type(&values);
        Self {
            name: name.into(),
            data_type,
            values,
        }
    }
}

/// The first sheet of one spreadsheet, held column-wise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    pub columns: Vec<Column>,
}

impl SourceTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Builds a table from a header row and row-major cells. Short rows are
    /// padded with missing cells; cells past the header width are dropped.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Option<Value>>>) -> Self {
        let mut values = vec![Vec::with_capacity(rows.len()); headers.len()];
        for row in rows {
            let mut cells = row.into_iter();
            for column in values.iter_mut() {
                column.push(cells.next().flatten());
            }
        }
        let columns = headers
            .into_iter()
            .zip(values)
            .map(|(name, values)| Column::new(name, values))
            .collect();
        Self { columns }
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Applies `rename` to every column name, preserving order.
    pub fn rename_columns<F>(&mut self, mut rename: F)
    where
        F: FnMut(&str) -> String,
    {
        for column in &mut self.columns {
            column.name = rename(&column.name);
        }
    }

    pub fn row(&self, index: usize) -> Vec<Option<&Value>> {
        self.columns
            .iter()
            .map(|c| c.values.get(index).and_then(|v| v.as_ref()))
            .collect()
    }
}
