use std::{collections::BTreeMap, path::Path};

use crate::model::{CountResult, ExtensionKey, LineTally};

/// Extension → accumulated counts for one run.
///
/// Keys iterate in ascending order so serialized reports are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionReport {
    buckets: BTreeMap<ExtensionKey, CountResult>,
}

impl ExtensionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one file's tally into the bucket for its extension.
    pub fn record(&mut self, path: &Path, tally: LineTally) {
        self.buckets
            .entry(ExtensionKey::from_path(path))
            .or_default()
            .accumulate(tally);
    }

    pub fn get(&self, key: &str) -> Option<&CountResult> {
        self.buckets.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ExtensionKey, &CountResult)> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Grand total across every bucket.
    pub fn totals(&self) -> CountResult {
        let mut totals = CountResult::new();
        for bucket in self.buckets.values() {
            totals.merge(bucket);
        }
        totals
    }
}

impl<'a> IntoIterator for &'a ExtensionReport {
    type Item = (&'a ExtensionKey, &'a CountResult);
    type IntoIter = std::collections::btree_map::Iter<'a, ExtensionKey, CountResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

impl<P: AsRef<Path>> Extend<(P, LineTally)> for ExtensionReport {
    fn extend<I: IntoIterator<Item = (P, LineTally)>>(&mut self, iter: I) {
        for (path, tally) in iter {
            self.record(path.as_ref(), tally);
        }
    }
}

impl<P: AsRef<Path>> FromIterator<(P, LineTally)> for ExtensionReport {
    fn from_iter<I: IntoIterator<Item = (P, LineTally)>>(iter: I) -> Self {
        Aggregator::aggregate(iter)
    }
}

/// Folds per-file tallies into an [`ExtensionReport`].
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate<I, P>(tallies: I) -> ExtensionReport
    where
        I: IntoIterator<Item = (P, LineTally)>,
        P: AsRef<Path>,
    {
        let mut report = ExtensionReport::new();
        report.extend(tallies);
        report
    }
}
