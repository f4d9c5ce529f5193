//! The generic collection query pipeline.
//!
//! Every stage is a free function over a record slice `&[T]`: it borrows its input,
//! returns a fresh owned value, and leaves the input untouched. Stages compose by
//! nesting calls; there is no builder object and no shared state between stages.
//!
//! Stage families:
//!
//! - [`filter()`] / [`map()`]: element selection and projection
//! - [`sort_by()`] / [`sort_by_key()`]: stable ordering, ascending or descending
//! - [`limit()`] / [`skip()`]: positional windowing
//! - [`distinct_by()`]: keyed deduplication, first occurrence wins
//! - [`group_by()`] / [`group_count()`] / [`group_sum()`] / [`group_average()`] /
//!   [`partition_by()`]: keyed and boolean partitioning, with per-group aggregates
//! - [`reduce`]: single-value reductions (min/max/sum/average/match tests/joins)
//!
//! Reductions over an empty slice never fail: element-valued reductions return
//! `None`, numeric ones return zero, `all_match`/`none_match` are vacuously true,
//! and joins return the empty string.
//!
//! ## Example: filter → sort → limit
//!
//! ```rust
//! use record_query::pipeline::{filter, limit, sort_by_key, SortOrder};
//!
//! let years = vec![2014, 2008, 2020, 2008, 2011];
//!
//! let modern = filter(&years, |y| *y >= 2010);
//! let oldest_first = sort_by_key(&modern, |y| *y, SortOrder::Ascending);
//! assert_eq!(limit(&oldest_first, 2), vec![2011, 2014]);
//!
//! // The input is never mutated.
//! assert_eq!(years.len(), 5);
//! ```

pub mod distinct;
pub mod filter;
pub mod group;
pub mod map;
pub mod reduce;
pub mod sort;
pub mod window;

pub use distinct::distinct_by;
pub use filter::filter;
pub use group::{group_average, group_by, group_count, group_sum, partition_by, Partition};
pub use map::map;
pub use reduce::{
    all_match, any_match, average_by, count, find_first, join_projected, max_by, min_by,
    none_match, population_std_dev, sum_by,
};
pub use sort::{sort_by, sort_by_key, SortOrder};
pub use window::{limit, skip};
