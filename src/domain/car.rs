use std::fmt;

use serde::{Deserialize, Serialize};

/// A single car record.
///
/// Construction is the only lifecycle step: records are built once (directly or via
/// [`crate::source`]) and never mutated by the query layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Record id. Carries no meaning beyond identifying the row.
    pub id: i64,
    /// Manufacturer name, e.g. `"BMW"`.
    pub make: String,
    /// Model name, e.g. `"X3"`.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// List price.
    pub price: f64,
    /// Exterior color name.
    pub color: String,
}

impl Car {
    /// Create a new car record.
    pub fn new(
        id: i64,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        price: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            make: make.into(),
            model: model.into(),
            year,
            price,
            color: color.into(),
        }
    }

    /// `"Make - Model"` label, used by the labelling projections.
    pub fn label(&self) -> String {
        format!("{} - {}", self.make, self.model)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Make: {}, Model: {}, Year: {}, Price: {}, Color: {}",
            self.id, self.make, self.model, self.year, self.price, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Car;

    #[test]
    fn display_lists_every_field() {
        let car = Car::new(7, "Audi", "A4", 2015, 45000.0, "Black");
        assert_eq!(
            car.to_string(),
            "Id: 7, Make: Audi, Model: A4, Year: 2015, Price: 45000, Color: Black"
        );
    }

    #[test]
    fn label_joins_make_and_model() {
        let car = Car::new(1, "BMW", "X3", 2010, 30000.0, "Blue");
        assert_eq!(car.label(), "BMW - X3");
    }
}
