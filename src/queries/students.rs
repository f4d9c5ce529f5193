//! Query operations over student records.
//!
//! Age is derived, not stored, so every age-dependent operation takes an explicit
//! `as_of` date and computes ages through [`Student::age_on`].

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::Student;
use crate::pipeline::{self, SortOrder};

/// Conventional adult-age threshold used by the scenario tests.
pub const ADULT_AGE: i32 = 18;

/// Students of a given gender (case-insensitive), capped at `limit`.
pub fn with_gender(students: &[Student], gender: &str, limit: usize) -> Vec<Student> {
    let matching = pipeline::filter(students, |s| s.gender.eq_ignore_ascii_case(gender));
    pipeline::limit(&matching, limit)
}

/// Students sorted youngest-first by their age on `as_of`, capped at `limit`.
pub fn sorted_by_age(students: &[Student], as_of: NaiveDate, limit: usize) -> Vec<Student> {
    let sorted = pipeline::sort_by_key(students, |s| s.age_on(as_of), SortOrder::Ascending);
    pipeline::limit(&sorted, limit)
}

/// Mean age on `as_of`; `0.0` when there are no students.
pub fn average_age(students: &[Student], as_of: NaiveDate) -> f64 {
    pipeline::average_by(students, |s| f64::from(s.age_on(as_of)))
}

/// Full names, capped at `limit`.
pub fn full_names(students: &[Student], limit: usize) -> Vec<String> {
    let names = pipeline::map(students, Student::full_name);
    pipeline::limit(&names, limit)
}

/// All students grouped by gender.
pub fn group_by_gender(students: &[Student]) -> HashMap<String, Vec<Student>> {
    pipeline::group_by(students, |s| s.gender.clone())
}

/// The greatest age on `as_of`, or `None` when there are no students.
pub fn max_age(students: &[Student], as_of: NaiveDate) -> Option<i32> {
    let ages = pipeline::map(students, |s| s.age_on(as_of));
    pipeline::max_by(&ages, |a, b| a.cmp(b))
}

/// The first `limit` students keyed by id.
///
/// Ids are assumed unique; on a duplicate the later record wins the slot.
pub fn by_id(students: &[Student], limit: usize) -> HashMap<i64, Student> {
    let page = pipeline::limit(students, limit);
    page.into_iter().map(|s| (s.id, s)).collect()
}

/// Email addresses, capped at `limit`.
pub fn emails(students: &[Student], limit: usize) -> Vec<String> {
    let addresses = pipeline::map(students, |s| s.email.clone());
    pipeline::limit(&addresses, limit)
}

/// Whether any student is at least `adult_age` on `as_of`.
pub fn any_adult(students: &[Student], as_of: NaiveDate, adult_age: i32) -> bool {
    pipeline::any_match(students, |s| s.age_on(as_of) >= adult_age)
}

/// Number of students per gender.
pub fn count_by_gender(students: &[Student]) -> HashMap<String, usize> {
    pipeline::group_count(students, |s| s.gender.clone())
}

/// The youngest student of a given gender on `as_of`.
pub fn youngest_with_gender(
    students: &[Student],
    gender: &str,
    as_of: NaiveDate,
) -> Option<Student> {
    let matching = pipeline::filter(students, |s| s.gender.eq_ignore_ascii_case(gender));
    pipeline::min_by(&matching, |a, b| a.age_on(as_of).cmp(&b.age_on(as_of)))
}

/// First names of the first `limit` students joined into one string.
pub fn join_first_names(students: &[Student], separator: &str, limit: usize) -> String {
    let page = pipeline::limit(students, limit);
    pipeline::join_projected(&page, separator, |s| s.first_name.clone())
}

/// Sum of ages on `as_of`.
pub fn total_age(students: &[Student], as_of: NaiveDate) -> i64 {
    pipeline::sum_by(students, |s| i64::from(s.age_on(as_of)))
}

/// Whether every student is at least `adult_age` on `as_of`; vacuously `true` when
/// there are no students.
pub fn all_adults(students: &[Student], as_of: NaiveDate, adult_age: i32) -> bool {
    pipeline::all_match(students, |s| s.age_on(as_of) >= adult_age)
}

/// The oldest student on `as_of`.
pub fn oldest(students: &[Student], as_of: NaiveDate) -> Option<Student> {
    pipeline::max_by(students, |a, b| a.age_on(as_of).cmp(&b.age_on(as_of)))
}

/// First names in uppercase, capped at `limit`.
pub fn first_names_uppercase(students: &[Student], limit: usize) -> Vec<String> {
    let names = pipeline::map(students, |s| s.first_name.to_uppercase());
    pipeline::limit(&names, limit)
}

/// The student with the given id.
pub fn find_by_id(students: &[Student], id: i64) -> Option<Student> {
    let matching = pipeline::filter(students, |s| s.id == id);
    pipeline::find_first(&matching)
}

/// Number of students at each age on `as_of`.
pub fn age_distribution(students: &[Student], as_of: NaiveDate) -> HashMap<i32, usize> {
    pipeline::group_count(students, |s| s.age_on(as_of))
}

/// All students grouped by their age on `as_of`.
pub fn group_by_age(students: &[Student], as_of: NaiveDate) -> HashMap<i32, Vec<Student>> {
    pipeline::group_by(students, |s| s.age_on(as_of))
}

/// Population standard deviation of ages on `as_of`; `0.0` for fewer than two
/// students.
pub fn age_standard_deviation(students: &[Student], as_of: NaiveDate) -> f64 {
    pipeline::population_std_dev(students, |s| f64::from(s.age_on(as_of)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::{DEFAULT_PAGE_LIMIT, DEFAULT_PREVIEW_LIMIT};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Ages on 2024-01-01: Ada 23, Grace 17, Alan 31, Joan 17, Mary 25.
    fn sample_students() -> Vec<Student> {
        vec![
            Student::new(1, "Ada", "Lovelace", "Female", date(2000, 6, 15), "ada@example.com"),
            Student::new(2, "Grace", "Hopper", "Female", date(2006, 12, 9), "grace@example.com"),
            Student::new(3, "Alan", "Turing", "Male", date(1992, 6, 23), "alan@example.com"),
            Student::new(4, "Joan", "Clarke", "female", date(2006, 6, 24), "joan@example.com"),
            Student::new(5, "Mary", "Shelley", "Female", date(1998, 8, 30), "mary@example.com"),
        ]
    }

    fn as_of() -> NaiveDate {
        date(2024, 1, 1)
    }

    #[test]
    fn with_gender_matches_case_insensitively() {
        let students = sample_students();
        let out = with_gender(&students, "female", DEFAULT_PREVIEW_LIMIT);
        assert_eq!(out.len(), 4);
        let out = with_gender(&students, "Male", DEFAULT_PREVIEW_LIMIT);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].first_name, "Alan");
    }

    #[test]
    fn sorted_by_age_is_youngest_first_and_stable() {
        let students = sample_students();
        let out = sorted_by_age(&students, as_of(), DEFAULT_PREVIEW_LIMIT);
        let ids: Vec<i64> = out.iter().map(|s| s.id).collect();
        // Grace and Joan are both 17; Grace came first in the input.
        assert_eq!(ids, vec![2, 4, 1, 5, 3]);
    }

    #[test]
    fn average_age_over_the_sample() {
        let students = sample_students();
        // (23 + 17 + 31 + 17 + 25) / 5
        assert_eq!(average_age(&students, as_of()), 22.6);
        assert_eq!(average_age(&[], as_of()), 0.0);
    }

    #[test]
    fn name_projections() {
        let students = sample_students();
        assert_eq!(
            full_names(&students, 2),
            vec!["Ada Lovelace", "Grace Hopper"]
        );
        assert_eq!(
            first_names_uppercase(&students, 3),
            vec!["ADA", "GRACE", "ALAN"]
        );
        assert_eq!(join_first_names(&students, ", ", 3), "Ada, Grace, Alan");
        assert_eq!(join_first_names(&[], ", ", DEFAULT_PAGE_LIMIT), "");
    }

    #[test]
    fn gender_grouping_is_case_sensitive_on_the_key() {
        let students = sample_students();
        let groups = group_by_gender(&students);
        // Grouping keys by the stored label; "female" and "Female" are distinct keys.
        assert_eq!(groups["Female"].len(), 3);
        assert_eq!(groups["female"].len(), 1);
        assert_eq!(groups["Male"].len(), 1);

        let counts = count_by_gender(&students);
        assert_eq!(counts["Female"], 3);
        assert_eq!(counts["Male"], 1);
    }

    #[test]
    fn max_age_and_oldest() {
        let students = sample_students();
        assert_eq!(max_age(&students, as_of()), Some(31));
        assert_eq!(oldest(&students, as_of()).unwrap().first_name, "Alan");
        assert_eq!(max_age(&[], as_of()), None);
        assert_eq!(oldest(&[], as_of()), None);
    }

    #[test]
    fn by_id_maps_the_first_page() {
        let students = sample_students();
        let index = by_id(&students, 3);
        assert_eq!(index.len(), 3);
        assert_eq!(index[&2].first_name, "Grace");
        assert!(!index.contains_key(&4));
    }

    #[test]
    fn emails_cap_at_limit() {
        let students = sample_students();
        assert_eq!(emails(&students, DEFAULT_PAGE_LIMIT).len(), 5);
        assert_eq!(emails(&students, 2), vec!["ada@example.com", "grace@example.com"]);
    }

    #[test]
    fn adult_checks_use_the_threshold() {
        let students = sample_students();
        assert!(any_adult(&students, as_of(), ADULT_AGE));
        assert!(!all_adults(&students, as_of(), ADULT_AGE));
        // Everyone is at least 17.
        assert!(all_adults(&students, as_of(), 17));
        // Vacuous truth on empty input.
        assert!(all_adults(&[], as_of(), ADULT_AGE));
        assert!(!any_adult(&[], as_of(), ADULT_AGE));
    }

    #[test]
    fn youngest_with_gender_filters_then_minimizes() {
        let students = sample_students();
        let youngest = youngest_with_gender(&students, "Female", as_of()).unwrap();
        // Grace and Joan are both 17; Grace is first in input order.
        assert_eq!(youngest.first_name, "Grace");
        assert_eq!(youngest_with_gender(&students, "Other", as_of()), None);
    }

    #[test]
    fn total_age_sums_whole_years() {
        let students = sample_students();
        assert_eq!(total_age(&students, as_of()), 113);
        assert_eq!(total_age(&[], as_of()), 0);
    }

    #[test]
    fn find_by_id_returns_the_matching_student() {
        let students = sample_students();
        assert_eq!(find_by_id(&students, 4).unwrap().first_name, "Joan");
        assert_eq!(find_by_id(&students, 99), None);
    }

    #[test]
    fn age_distribution_counts_each_age() {
        let students = sample_students();
        let dist = age_distribution(&students, as_of());
        assert_eq!(dist[&17], 2);
        assert_eq!(dist[&23], 1);
        assert_eq!(dist.len(), 4);

        let groups = group_by_age(&students, as_of());
        assert_eq!(groups[&17].len(), 2);
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, students.len());
    }

    #[test]
    fn age_standard_deviation_degenerate_cases() {
        assert_eq!(age_standard_deviation(&[], as_of()), 0.0);
        let one = vec![sample_students().remove(0)];
        assert_eq!(age_standard_deviation(&one, as_of()), 0.0);
    }
}
