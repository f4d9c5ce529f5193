//! Keyed deduplication.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns `records` with duplicates removed, keyed by `key`.
///
/// The first record seen for each key wins; later records with the same key are
/// dropped. Output order is first-occurrence order, so applying this twice is a
/// no-op. Composite keys are just tuples: `|car| (car.make.clone(), car.model.clone())`.
pub fn distinct_by<T, K, F>(records: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for record in records {
        if seen.insert(key(record)) {
            out.push(record.clone());
        }
    }
    out
}
