use record_query::domain::{Car, Student};
use record_query::source::{load_from_path, LoadOptions, SourceFormat};
use record_query::{LoadError, LoadResult};

#[test]
fn load_cars_from_json_array_by_extension() {
    let fleet: Vec<Car> = load_from_path("tests/fixtures/cars.json", &LoadOptions::default()).unwrap();

    assert_eq!(fleet.len(), 3);
    assert_eq!(fleet[2], Car::new(3, "Audi", "A4", 2015, 45000.0, "Black"));
}

#[test]
fn load_students_from_ndjson_by_extension() {
    let roster: Vec<Student> =
        load_from_path("tests/fixtures/students.ndjson", &LoadOptions::default()).unwrap();

    assert_eq!(roster.len(), 3);
    assert_eq!(roster[0].first_name, "Ada");
    assert_eq!(roster[2].gender, "Male");
}

#[test]
fn forced_format_overrides_extension_inference() {
    let opts = LoadOptions {
        format: Some(SourceFormat::Csv),
        ..Default::default()
    };
    // A CSV file behind a non-CSV name still loads when the format is forced.
    let fleet: Vec<Car> = load_from_path("tests/fixtures/cars.csv", &opts).unwrap();
    assert_eq!(fleet.len(), 6);
}

#[test]
fn unsupported_extension_is_an_unknown_format_error() {
    let result: LoadResult<Vec<Car>> =
        load_from_path("tests/fixtures/cars.parquet", &LoadOptions::default());
    assert!(matches!(result.unwrap_err(), LoadError::UnknownFormat { .. }));
}
