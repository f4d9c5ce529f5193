//! `record-query` is a small library of functional-style query operations (filter,
//! map, sort, group, reduce, join) over two in-memory record collections:
//! [`domain::Car`] and [`domain::Student`].
//!
//! The heart of the crate is a generic [`pipeline`] of pure stages over `&[T]`;
//! the [`queries`] module composes those stages into a catalogue of ready-made
//! operations per record type. Every operation is stateless, borrows its input,
//! and returns a fresh value; composition across operations is left to the caller.
//!
//! Record lists can be supplied directly or loaded from CSV/JSON/NDJSON files via
//! [`source::load_from_path`].
//!
//! ## Quick example: query a car list
//!
//! ```rust
//! use record_query::domain::Car;
//! use record_query::queries::cars;
//!
//! let fleet = vec![
//!     Car::new(1, "BMW", "X3", 2010, 30000.0, "Blue"),
//!     Car::new(2, "BMW", "X5", 2020, 60000.0, "White"),
//!     Car::new(3, "Audi", "A4", 2015, 45000.0, "Black"),
//! ];
//!
//! let counts = cars::count_by_make(&fleet);
//! assert_eq!(counts["BMW"], 2);
//!
//! let priciest = cars::highest_priced(&fleet).unwrap();
//! assert_eq!(priciest.id, 2);
//!
//! let split = cars::partition_by_price(&fleet, 50000.0);
//! assert_eq!(split.matching.len(), 1);
//! assert_eq!(split.rest.len(), 2);
//! ```
//!
//! ## Age is derived, never stored
//!
//! Student age is a function of `date_of_birth` and an explicit as-of date, so
//! age-dependent queries are pure and reproducible:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use record_query::domain::Student;
//! use record_query::queries::students;
//!
//! let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let roster = vec![Student::new(
//!     1,
//!     "Ada",
//!     "Lovelace",
//!     "Female",
//!     NaiveDate::from_ymd_opt(2000, 6, 15).unwrap(),
//!     "ada@example.com",
//! )];
//!
//! assert_eq!(students::average_age(&roster, as_of), 23.0);
//! assert!(students::all_adults(&roster, as_of, students::ADULT_AGE));
//! ```
//!
//! ## Modules
//!
//! - [`domain`]: the two record types
//! - [`pipeline`]: the generic stage vocabulary (filter/map/sort/window/distinct/
//!   group/reduce)
//! - [`queries`]: the per-entity operation catalogue
//! - [`source`]: typed CSV/JSON record loading with observer-based outcome
//!   reporting
//! - [`error`]: the loading error type
//!
//! ## Empty inputs are not errors
//!
//! No query fails for structural reasons. Element-valued reductions return `None`
//! on empty input, numeric ones return zero, `all`/`none` match tests are
//! vacuously true, and joins return the empty string. The only error type in the
//! crate, [`LoadError`], belongs to the [`source`] layer.

pub mod domain;
pub mod error;
pub mod pipeline;
pub mod queries;
pub mod source;

pub use error::{LoadError, LoadResult};
