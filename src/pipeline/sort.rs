//! Stable sorting.

use std::cmp::Ordering;

/// Sort direction for [`sort_by`] and [`sort_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Returns `records` sorted by `compare`.
///
/// The sort is stable: records that compare equal retain their relative input order.
/// [`SortOrder::Descending`] reverses the comparator, not the sorted sequence, so
/// stability holds in both directions. Multi-key sorts tie-break inside `compare`
/// (`Ordering::then_with`); float keys should compare via [`f64::total_cmp`].
pub fn sort_by<T, F>(records: &[T], compare: F, order: SortOrder) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut out = records.to_vec();
    match order {
        SortOrder::Ascending => out.sort_by(|a, b| compare(a, b)),
        SortOrder::Descending => out.sort_by(|a, b| compare(a, b).reverse()),
    }
    out
}

/// Returns `records` sorted by a derived key.
///
/// Convenience wrapper around [`sort_by`] for `Ord` keys.
pub fn sort_by_key<T, K, F>(records: &[T], key: F, order: SortOrder) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_by(records, |a, b| key(a).cmp(&key(b)), order)
}
