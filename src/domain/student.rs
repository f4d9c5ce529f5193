use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single student record.
///
/// Age is never stored: it is derived from `date_of_birth` against a caller-supplied
/// as-of date via [`Student::age_on`], so age-dependent queries stay pure functions
/// of their inputs instead of depending on when a caching step last ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Record id. Carries no meaning beyond identifying the row.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Free-form gender label, compared case-insensitively by the queries.
    pub gender: String,
    /// Date of birth (`YYYY-MM-DD` in serialized form).
    pub date_of_birth: NaiveDate,
    pub email: String,
}

impl Student {
    /// Create a new student record.
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: impl Into<String>,
        date_of_birth: NaiveDate,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: gender.into(),
            date_of_birth,
            email: email.into(),
        }
    }

    /// Whole-year age on `as_of`.
    ///
    /// Counts completed years: the year difference, minus one if the birthday has not
    /// yet occurred in the `as_of` year. Negative if `as_of` precedes the birth date.
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        let mut age = as_of.year() - self.date_of_birth.year();
        if (as_of.month(), as_of.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            age -= 1;
        }
        age
    }

    /// `"First Last"` display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
