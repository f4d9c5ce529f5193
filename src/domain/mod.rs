//! Record types the query catalogue operates on.
//!
//! [`Car`] and [`Student`] are plain value types with public fields. They share no
//! relationship beyond both being consumed by the [`crate::pipeline`] stages; the
//! `id` field is the only notion of identity either carries.

mod car;
mod student;

pub use car::Car;
pub use student::Student;
