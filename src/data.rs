use std::{
    fmt,
    hash::{Hash, Hasher},
};

use chrono::NaiveDateTime;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single non-missing cell as produced by the sheet reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(NaiveDateTime),
}

// Cells never carry NaN, so float equality is reflexive in practice.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::String(s) => s.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Boolean(b) => b.hash(state),
            Value::DateTime(dt) => dt.hash(state),
        }
    }
}

impl Value {
    pub fn as_display(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

/// Declared primitive type of a column, decided once when the sheet is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    DateTime,
    String,
    Mixed,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::DateTime => "datetime",
            ColumnType::String => "string",
            ColumnType::Mixed => "mixed",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// SQLite column affinity used when the table is persisted.
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Integer | ColumnType::Boolean => "INTEGER",
            ColumnType::Float => "REAL",
            ColumnType::DateTime => "TIMESTAMP",
            ColumnType::String | ColumnType::Mixed => "TEXT",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
struct TypeCandidate {
    seen_any: bool,
    possible_integer: bool,
    possible_float: bool,
    possible_boolean: bool,
    possible_datetime: bool,
    possible_string: bool,
}

impl TypeCandidate {
    fn new() -> Self {
        Self {
            seen_any: false,
            possible_integer: true,
            possible_float: true,
            possible_boolean: true,
            possible_datetime: true,
            possible_string: true,
        }
    }

    fn observe(&mut self, value: &Value) {
        self.seen_any = true;
        let (integer, float, boolean, datetime, string) = match value {
            Value::Integer(_) => (true, true, false, false, false),
            Value::Float(_) => (false, true, false, false, false),
            Value::Boolean(_) => (false, false, true, false, false),
            Value::DateTime(_) => (false, false, false, true, false),
            Value::String(_) => (false, false, false, false, true),
        };
        self.possible_integer &= integer;
        self.possible_float &= float;
        self.possible_boolean &= boolean;
        self.possible_datetime &= datetime;
        self.possible_string &= string;
    }

    fn decide(&self) -> ColumnType {
        if !self.seen_any {
            ColumnType::String
        } else if self.possible_integer {
            ColumnType::Integer
        } else if self.possible_float {
            ColumnType::Float
        } else if self.possible_boolean {
            ColumnType::Boolean
        } else if self.possible_datetime {
            ColumnType::DateTime
        } else if self.possible_string {
            ColumnType::String
        } else {
            ColumnType::Mixed
        }
    }
}

/// Infers the declared type of a column from its non-missing cells.
pub fn infer_column_type<'a, I>(values: I) -> ColumnType
where
    I: IntoIterator<Item = &'a Option<Value>>,
{
    let mut candidate = TypeCandidate::new();
    for value in values.into_iter().flatten() {
        candidate.observe(value);
    }
    candidate.decide()
}
