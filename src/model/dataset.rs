use serde::Serialize;

use crate::model::record::{BacteriaCode, Record};

/// Ordered, immutable collection of validated records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(Record::temperature).collect()
    }

    pub fn growth_rates(&self) -> Vec<f64> {
        self.records.iter().map(Record::growth_rate).collect()
    }

    /// Derives a new dataset holding the records that satisfy `keep`, in order.
    pub fn select<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&Record) -> bool,
    {
        Dataset {
            records: self.records.iter().filter(|r| keep(r)).copied().collect(),
        }
    }

    pub fn count_by_bacteria(&self, code: BacteriaCode) -> usize {
        self.records.iter().filter(|r| r.bacteria() == code).count()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
