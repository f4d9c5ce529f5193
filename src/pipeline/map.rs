//! Record projection.

/// Returns the element-wise projection of `records` through `transform`.
pub fn map<T, U, F>(records: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    records.iter().map(transform).collect()
}
