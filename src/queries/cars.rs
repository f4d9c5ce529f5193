//! Query operations over car records.

use std::collections::HashMap;

use crate::domain::Car;
use crate::pipeline::{self, Partition, SortOrder};

/// Cars of a given make (case-insensitive), capped at `limit`.
pub fn with_make(cars: &[Car], make: &str, limit: usize) -> Vec<Car> {
    let matching = pipeline::filter(cars, |car| car.make.eq_ignore_ascii_case(make));
    pipeline::limit(&matching, limit)
}

/// Cars from a given model year, capped at `limit`.
pub fn from_year(cars: &[Car], year: i32, limit: usize) -> Vec<Car> {
    let matching = pipeline::filter(cars, |car| car.year == year);
    pipeline::limit(&matching, limit)
}

/// Cars priced within `[min_price, max_price]` inclusive, capped at `limit`.
pub fn within_price_range(cars: &[Car], min_price: f64, max_price: f64, limit: usize) -> Vec<Car> {
    let matching = pipeline::filter(cars, |car| {
        car.price >= min_price && car.price <= max_price
    });
    pipeline::limit(&matching, limit)
}

/// Model names, capped at `limit`.
pub fn model_names(cars: &[Car], limit: usize) -> Vec<String> {
    let models = pipeline::map(cars, |car| car.model.clone());
    pipeline::limit(&models, limit)
}

/// Makes in uppercase, capped at `limit`.
pub fn makes_uppercase(cars: &[Car], limit: usize) -> Vec<String> {
    let makes = pipeline::map(cars, |car| car.make.to_uppercase());
    pipeline::limit(&makes, limit)
}

/// Model years in ascending order, capped at `limit`.
pub fn years_ascending(cars: &[Car], limit: usize) -> Vec<i32> {
    let years = pipeline::map(cars, |car| car.year);
    let sorted = pipeline::sort_by_key(&years, |year| *year, SortOrder::Ascending);
    pipeline::limit(&sorted, limit)
}

/// Prices in descending order, capped at `limit`.
pub fn prices_descending(cars: &[Car], limit: usize) -> Vec<f64> {
    let prices = pipeline::map(cars, |car| car.price);
    let sorted = pipeline::sort_by(&prices, |a, b| a.total_cmp(b), SortOrder::Descending);
    pipeline::limit(&sorted, limit)
}

/// The car with the highest price.
pub fn highest_priced(cars: &[Car]) -> Option<Car> {
    pipeline::max_by(cars, |a, b| a.price.total_cmp(&b.price))
}

/// The car with the lowest price.
pub fn lowest_priced(cars: &[Car]) -> Option<Car> {
    pipeline::min_by(cars, |a, b| a.price.total_cmp(&b.price))
}

/// All cars grouped by make.
pub fn group_by_make(cars: &[Car]) -> HashMap<String, Vec<Car>> {
    pipeline::group_by(cars, |car| car.make.clone())
}

/// Number of cars per make.
pub fn count_by_make(cars: &[Car]) -> HashMap<String, usize> {
    pipeline::group_count(cars, |car| car.make.clone())
}

/// Mean price across all cars; `0.0` when there are none.
pub fn average_price(cars: &[Car]) -> f64 {
    pipeline::average_by(cars, |car| car.price)
}

/// Sum of all prices.
pub fn total_price(cars: &[Car]) -> f64 {
    pipeline::sum_by(cars, |car| car.price)
}

/// Whether any car has the given color (case-insensitive).
pub fn any_with_color(cars: &[Car], color: &str) -> bool {
    pipeline::any_match(cars, |car| car.color.eq_ignore_ascii_case(color))
}

/// Whether every car is priced strictly above `threshold`; vacuously `true` when
/// there are no cars.
pub fn all_pricier_than(cars: &[Car], threshold: f64) -> bool {
    pipeline::all_match(cars, |car| car.price > threshold)
}

/// Whether no car has the given model (case-insensitive); vacuously `true` when
/// there are no cars.
pub fn none_with_model(cars: &[Car], model: &str) -> bool {
    pipeline::none_match(cars, |car| car.model.eq_ignore_ascii_case(model))
}

/// Cars after the first `n`, capped at `limit`.
pub fn skip_first(cars: &[Car], n: usize, limit: usize) -> Vec<Car> {
    let remaining = pipeline::skip(cars, n);
    pipeline::limit(&remaining, limit)
}

/// The first `n` cars.
pub fn first_n(cars: &[Car], n: usize) -> Vec<Car> {
    pipeline::limit(cars, n)
}

/// Distinct colors in first-seen order.
pub fn distinct_colors(cars: &[Car]) -> Vec<String> {
    let colors = pipeline::map(cars, |car| car.color.clone());
    pipeline::distinct_by(&colors, |color| color.clone())
}

/// `"Make - Model"` labels, capped at `limit`.
pub fn make_model_labels(cars: &[Car], limit: usize) -> Vec<String> {
    let labels = pipeline::map(cars, Car::label);
    pipeline::limit(&labels, limit)
}

/// The first car in the list.
pub fn first_car(cars: &[Car]) -> Option<Car> {
    pipeline::find_first(cars)
}

/// Any car from the list.
///
/// Execution is single-threaded, so this is the first car; kept as a separate
/// operation so callers can express "any will do".
pub fn any_car(cars: &[Car]) -> Option<Car> {
    pipeline::find_first(cars)
}

/// Cars deduplicated on the (make, model) pair, sorted by make then model.
///
/// On a key collision the first-seen car survives.
pub fn dedupe_by_make_model(cars: &[Car]) -> Vec<Car> {
    let unique = pipeline::distinct_by(cars, |car| (car.make.clone(), car.model.clone()));
    pipeline::sort_by(
        &unique,
        |a, b| a.make.cmp(&b.make).then_with(|| a.model.cmp(&b.model)),
        SortOrder::Ascending,
    )
}

/// All cars split by whether their price is strictly above `threshold`.
pub fn partition_by_price(cars: &[Car], threshold: f64) -> Partition<Car> {
    pipeline::partition_by(cars, |car| car.price > threshold)
}

/// Sum of prices per make.
pub fn total_price_by_make(cars: &[Car]) -> HashMap<String, f64> {
    pipeline::group_sum(cars, |car| car.make.clone(), |car| car.price)
}

/// Makes of the first `limit` cars joined into one string.
pub fn join_makes(cars: &[Car], separator: &str, limit: usize) -> String {
    let page = pipeline::limit(cars, limit);
    pipeline::join_projected(&page, separator, |car| car.make.clone())
}

/// One formatted detail line per car, capped at `limit`.
pub fn descriptions(cars: &[Car], limit: usize) -> Vec<String> {
    let preview = pipeline::limit(cars, limit);
    pipeline::map(&preview, Car::to_string)
}

/// Mean price per make.
pub fn average_price_by_make(cars: &[Car]) -> HashMap<String, f64> {
    pipeline::group_average(cars, |car| car.make.clone(), |car| car.price)
}

/// Detail lines of the first `limit` cars joined into one string.
pub fn joined_details(cars: &[Car], separator: &str, limit: usize) -> String {
    let preview = pipeline::limit(cars, limit);
    pipeline::join_projected(&preview, separator, Car::to_string)
}

/// The car with the latest model year.
pub fn newest(cars: &[Car]) -> Option<Car> {
    pipeline::max_by(cars, |a, b| a.year.cmp(&b.year))
}
