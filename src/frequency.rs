use std::collections::HashMap;

use itertools::Itertools;

use crate::data::Value;

/// Ranks 1 and 2 are kept whatever their share.
pub const GUARANTEED_TOP_VALUES: usize = 2;
/// Upper bound on the number of values in a listing.
pub const MAX_TOP_VALUES: usize = 5;
/// Share a value past the guaranteed ranks must exceed to be listed.
pub const MIN_LISTED_FREQUENCY: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct ValueFrequency {
    pub value: Value,
    pub count: usize,
    pub frequency: f64,
}

impl ValueFrequency {
    pub fn render(&self) -> String {
        let percent = self.frequency * 100.0;
        format!("{}\t{percent:.1}%", self.value)
    }
}

/// Counts of each distinct non-missing value in one column.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    total: usize,
    positions: HashMap<Value, usize>,
    counts: Vec<(Value, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a Option<Value>>,
    {
        let mut table = Self::new();
        for value in values.into_iter().flatten() {
            table.ingest(value);
        }
        table
    }

    pub fn ingest(&mut self, value: &Value) {
        self.total += 1;
        match self.positions.get(value) {
            Some(&idx) => self.counts[idx].1 += 1,
            None => {
                self.positions.insert(value.clone(), self.counts.len());
                self.counts.push((value.clone(), 1));
            }
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// All distinct values by descending count; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<ValueFrequency> {
        if self.total == 0 {
            return Vec::new();
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .map(|(value, count)| ValueFrequency {
                value: value.clone(),
                count: *count,
                frequency: *count as f64 / total,
            })
            .collect()
    }

    /// The guaranteed top ranks, then later ranks above the minimum share,
    /// capped at [`MAX_TOP_VALUES`].
    pub fn top_values(&self) -> Vec<ValueFrequency> {
        let mut ranked = self.ranked().into_iter();
        let mut kept = ranked
            .by_ref()
            .take(GUARANTEED_TOP_VALUES)
            .collect::<Vec<_>>();
        kept.extend(
            ranked
                .filter(|entry| entry.frequency > MIN_LISTED_FREQUENCY)
                .take(MAX_TOP_VALUES.saturating_sub(kept.len())),
        );
        kept
    }
}

/// Renders entries as newline-joined `value<TAB>percent%` lines.
pub fn render_listing(entries: &[ValueFrequency]) -> String {
    entries.iter().map(ValueFrequency::render).join("\n")
}
