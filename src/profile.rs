//! Per-column profiling: distinct counts, a short frequency listing, and a
//! semantic category used downstream to pick a matching strategy.

use std::fmt;

use crate::{
    data::ColumnType,
    frequency::{FrequencyTable, ValueFrequency, render_listing},
    table::Column,
};

/// Columns with at most this many distinct values are always enums.
pub const ENUM_MAX_DISTINCT: usize = 12;
/// Single-word columns with at most this many distinct values are enums.
pub const SINGLE_WORD_ENUM_MAX_DISTINCT: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Numeric,
    Enum,
    Embedding,
    StringDiff,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Numeric => "numeric",
            Category::Enum => "enum",
            Category::Embedding => "embedding",
            Category::StringDiff => "string-diff",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub data_type: ColumnType,
    pub nunique: usize,
    pub top_values: Vec<ValueFrequency>,
    pub category: Category,
}

impl ColumnProfile {
    pub fn listing(&self) -> String {
        render_listing(&self.top_values)
    }
}

pub fn profile_column(column: &Column) -> ColumnProfile {
    let frequencies = FrequencyTable::from_values(&column.values);
    let nunique = frequencies.distinct();
    let top_values = frequencies.top_values();
    let category = classify(column.data_type, nunique, &top_values);
    ColumnProfile {
        data_type: column.data_type,
        nunique,
        top_values,
        category,
    }
}

pub fn classify(data_type: ColumnType, nunique: usize, top_values: &[ValueFrequency]) -> Category {
    if data_type.is_numeric() {
        return Category::Numeric;
    }
    let has_spaces = top_values
        .iter()
        .any(|entry| entry.value.as_display().contains(' '));
    if nunique <= ENUM_MAX_DISTINCT || (nunique <= SINGLE_WORD_ENUM_MAX_DISTINCT && !has_spaces) {
        Category::Enum
    } else if has_spaces {
        Category::Embedding
    } else {
        Category::StringDiff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Value;

    fn text_column(values: impl IntoIterator<Item = String>) -> Column {
        Column::new(
            "col",
            values.into_iter().map(|v| Some(Value::String(v))).collect(),
        )
    }

    #[test]
    fn integer_columns_are_numeric() {
        let column = Column::new("n", (0..100).map(|i| Some(Value::Integer(i))).collect());
        let profile = profile_column(&column);
        assert_eq!(profile.data_type, ColumnType::Integer);
        assert_eq!(profile.nunique, 100);
        assert_eq!(profile.category, Category::Numeric);
    }

    #[test]
    fn ten_distinct_words_are_enum() {
        let profile = profile_column(&text_column((0..100).map(|i| format!("word{}", i % 10))));
        assert_eq!(profile.nunique, 10);
        assert_eq!(profile.category, Category::Enum);
    }

    #[test]
    fn twenty_distinct_single_words_are_enum() {
        let profile = profile_column(&text_column((0..20).map(|i| format!("token{i}"))));
        assert_eq!(profile.nunique, 20);
        assert_eq!(profile.category, Category::Enum);
    }

    #[test]
    fn twenty_distinct_phrases_are_embedding() {
        let profile = profile_column(&text_column((0..20).map(|i| format!("free text {i}"))));
        assert_eq!(profile.category, Category::Embedding);
    }

    #[test]
    fn thirty_distinct_phrases_are_embedding() {
        let profile = profile_column(&text_column((0..30).map(|i| format!("phrase number {i}"))));
        assert_eq!(profile.nunique, 30);
        assert_eq!(profile.category, Category::Embedding);
    }

    #[test]
    fn thirty_distinct_tokens_are_string_diff() {
        let profile = profile_column(&text_column((0..30).map(|i| format!("SKU-{i:04}"))));
        assert_eq!(profile.category, Category::StringDiff);
    }

    #[test]
    fn empty_column_falls_through_to_enum() {
        let profile = profile_column(&Column::new("empty", Vec::new()));
        assert_eq!(profile.nunique, 0);
        assert_eq!(profile.listing(), "");
        assert_eq!(profile.category, Category::Enum);
    }

    #[test]
    fn spaces_outside_listing_do_not_count() {
        // Only the two leaders are listed; the spaced tail is too rare to appear.
        let mut values = vec!["alpha".to_string(); 200];
        values.extend(vec!["beta".to_string(); 200]);
        values.extend((0..40).map(|i| format!("rare value {i}")));
        let profile = profile_column(&text_column(values));
        assert_eq!(profile.top_values.len(), 2);
        assert_eq!(profile.category, Category::StringDiff);
    }
}
