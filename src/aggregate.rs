use indexmap::IndexMap;

use crate::parse::Record;

/// Parallel x/y sequences for one benchmark key. The i-th label in `x`
/// belongs to the i-th value in `y`.
#[derive(Serialize, Debug, Default, PartialEq)]
pub struct Series {
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// Measurements grouped by key. Keys keep first-seen order, values keep
/// arrival order within a key. Serializes as the top-level JSON object.
#[derive(Serialize, Debug, Default)]
#[serde(transparent)]
pub struct Aggregate {
    series: IndexMap<String, Series>,
}

impl Aggregate {
    pub fn new() -> Aggregate {
        Self::default()
    }

    pub fn insert(&mut self, record: Record) {
        let series = self.series.entry(record.key).or_default();
        series.x.push(record.x);
        series.y.push(record.y);
    }
}
