//! Single-value reductions.
//!
//! Every reduction has a defined empty-input result instead of an error path:
//! element-valued reductions ([`max_by`], [`min_by`], [`find_first`]) return `None`,
//! numeric ones ([`sum_by`], [`average_by`], [`count`], [`population_std_dev`])
//! return zero, the match tests degrade to their vacuous truths, and
//! [`join_projected`] returns the empty string.

use std::cmp::Ordering;
use std::iter::Sum;

/// Number of records.
pub fn count<T>(records: &[T]) -> usize {
    records.len()
}

/// The greatest record under `compare`, or `None` if the input is empty.
pub fn max_by<T, F>(records: &[T], mut compare: F) -> Option<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    records.iter().max_by(|a, b| compare(a, b)).cloned()
}

/// The least record under `compare`, or `None` if the input is empty.
pub fn min_by<T, F>(records: &[T], mut compare: F) -> Option<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    records.iter().min_by(|a, b| compare(a, b)).cloned()
}

/// Sum of a projected value across all records; zero when the input is empty.
pub fn sum_by<T, N, F>(records: &[T], value: F) -> N
where
    N: Sum<N>,
    F: FnMut(&T) -> N,
{
    records.iter().map(value).sum()
}

/// Mean of a projected value across all records; `0.0` when the input is empty.
pub fn average_by<T, F>(records: &[T], value: F) -> f64
where
    F: FnMut(&T) -> f64,
{
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(value).sum();
    total / records.len() as f64
}

/// `true` if any record satisfies `predicate`; `false` on empty input.
pub fn any_match<T, F>(records: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    records.iter().any(predicate)
}

/// `true` if every record satisfies `predicate`; vacuously `true` on empty input.
pub fn all_match<T, F>(records: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    records.iter().all(predicate)
}

/// `true` if no record satisfies `predicate`; vacuously `true` on empty input.
pub fn none_match<T, F>(records: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    !records.iter().any(predicate)
}

/// The first record, or `None` if the input is empty.
///
/// Execution is single-threaded throughout, so a find-any has nothing cheaper to
/// offer than find-first; callers wanting either use this.
pub fn find_first<T: Clone>(records: &[T]) -> Option<T> {
    records.first().cloned()
}

/// Concatenates a projected string per record, separated by `separator`.
///
/// Empty input yields the empty string.
pub fn join_projected<T, F>(records: &[T], separator: &str, projection: F) -> String
where
    F: FnMut(&T) -> String,
{
    records
        .iter()
        .map(projection)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Population standard deviation of a projected value (divide by n, not n − 1).
///
/// Fewer than two records give `0.0` exactly, never NaN.
pub fn population_std_dev<T, F>(records: &[T], mut value: F) -> f64
where
    F: FnMut(&T) -> f64,
{
    let n = records.len();
    if n <= 1 {
        return 0.0;
    }

    let values: Vec<f64> = records.iter().map(|r| value(r)).collect();
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::{
        all_match, any_match, average_by, count, find_first, join_projected, max_by, min_by,
        none_match, population_std_dev, sum_by,
    };

    #[test]
    fn max_and_min_pick_the_extremes() {
        let input = vec![30000.0_f64, 60000.0, 45000.0];
        assert_eq!(max_by(&input, |a, b| a.total_cmp(b)), Some(60000.0));
        assert_eq!(min_by(&input, |a, b| a.total_cmp(b)), Some(30000.0));
    }

    #[test]
    fn max_and_min_on_empty_are_none() {
        let input: Vec<i32> = Vec::new();
        assert_eq!(max_by(&input, |a, b| a.cmp(b)), None);
        assert_eq!(min_by(&input, |a, b| a.cmp(b)), None);
    }

    #[test]
    fn sum_works_for_integers_and_floats() {
        let ints = vec![1_i64, 2, 3];
        assert_eq!(sum_by(&ints, |n| *n), 6_i64);

        let floats = vec![1.5_f64, 2.5];
        assert_eq!(sum_by(&floats, |n| *n), 4.0);

        let empty: Vec<i64> = Vec::new();
        assert_eq!(sum_by(&empty, |n| *n), 0_i64);
    }

    #[test]
    fn average_on_empty_is_zero() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(average_by(&empty, |n| *n), 0.0);

        let input = vec![10.0, 20.0];
        assert_eq!(average_by(&input, |n| *n), 15.0);
    }

    #[test]
    fn match_tests_have_vacuous_truths_on_empty() {
        let empty: Vec<i32> = Vec::new();
        assert!(!any_match(&empty, |_| true));
        assert!(all_match(&empty, |_| false));
        assert!(none_match(&empty, |_| true));

        let input = vec![1, 2, 3];
        assert!(any_match(&input, |n| *n == 2));
        assert!(!all_match(&input, |n| *n == 2));
        assert!(none_match(&input, |n| *n == 9));
    }

    #[test]
    fn find_first_returns_the_head() {
        assert_eq!(find_first(&[7, 8, 9]), Some(7));
        assert_eq!(find_first::<i32>(&[]), None);
    }

    #[test]
    fn count_is_the_length() {
        assert_eq!(count(&[1, 2, 3]), 3);
        assert_eq!(count::<i32>(&[]), 0);
    }

    #[test]
    fn join_concatenates_with_separator() {
        let input = vec!["BMW", "Audi"];
        assert_eq!(join_projected(&input, ", ", |m| m.to_string()), "BMW, Audi");

        let empty: Vec<&str> = Vec::new();
        assert_eq!(join_projected(&empty, ", ", |m| m.to_string()), "");
    }

    #[test]
    fn std_dev_of_identical_values_is_zero() {
        let input = vec![20.0, 20.0, 20.0];
        assert_eq!(population_std_dev(&input, |n| *n), 0.0);
    }

    #[test]
    fn std_dev_uses_the_population_formula() {
        // mean 15, squared deviations (25, 25), variance 25 -> stdev 5.
        let input = vec![10.0, 20.0];
        assert_eq!(population_std_dev(&input, |n| *n), 5.0);
    }

    #[test]
    fn std_dev_of_zero_or_one_record_is_zero() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(population_std_dev(&empty, |n| *n), 0.0);
        assert_eq!(population_std_dev(&[42.0], |n| *n), 0.0);
    }
}
