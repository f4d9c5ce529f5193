//! Keyed grouping and boolean partitioning.

use std::collections::HashMap;
use std::hash::Hash;

/// Partitions `records` into a key → group mapping.
///
/// Within each group, records keep their relative input order. The union of all
/// groups is a permutation of the input.
pub fn group_by<T, K, F>(records: &[T], mut key: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record.clone());
    }
    groups
}

/// Groups `records` by key and counts each group.
pub fn group_count<T, K, F>(records: &[T], mut key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

/// Groups `records` by key and sums a projected value per group.
pub fn group_sum<T, K, FK, FV>(records: &[T], mut key: FK, mut value: FV) -> HashMap<K, f64>
where
    K: Eq + Hash,
    FK: FnMut(&T) -> K,
    FV: FnMut(&T) -> f64,
{
    let mut sums: HashMap<K, f64> = HashMap::new();
    for record in records {
        *sums.entry(key(record)).or_insert(0.0) += value(record);
    }
    sums
}

/// Groups `records` by key and averages a projected value per group.
///
/// Every key present in the result has at least one record behind it, so the
/// per-group division is never by zero.
pub fn group_average<T, K, FK, FV>(records: &[T], mut key: FK, mut value: FV) -> HashMap<K, f64>
where
    K: Eq + Hash,
    FK: FnMut(&T) -> K,
    FV: FnMut(&T) -> f64,
{
    let mut acc: HashMap<K, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = acc.entry(key(record)).or_insert((0.0, 0));
        entry.0 += value(record);
        entry.1 += 1;
    }
    acc.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// Result of [`partition_by`]: the records that matched the predicate, and the rest.
///
/// Both halves keep their relative input order; together they reconstruct the input
/// as a multiset.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    pub matching: Vec<T>,
    pub rest: Vec<T>,
}

/// Splits `records` into exactly two groups by `predicate`.
pub fn partition_by<T, F>(records: &[T], mut predicate: F) -> Partition<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for record in records {
        if predicate(record) {
            matching.push(record.clone());
        } else {
            rest.push(record.clone());
        }
    }
    Partition { matching, rest }
}
