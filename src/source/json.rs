//! JSON record loading.
//!
//! Supported inputs:
//! - a JSON array of objects: `[{"id":1}, {"id":2}]`
//! - a single JSON object (loaded as a one-record list)
//! - newline-delimited JSON (NDJSON): `{"id":1}\n{"id":2}\n`

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{LoadError, LoadResult};

/// Load a JSON or NDJSON file into a list of typed records.
pub fn load_json_from_path<T>(path: impl AsRef<Path>) -> LoadResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let text = fs::read_to_string(path)?;
    load_json_from_str(&text)
}

/// Load typed records from an in-memory JSON or NDJSON string.
///
/// Blank input is an empty record list, not an error.
pub fn load_json_from_str<T>(input: &str) -> LoadResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(_) => Ok(serde_json::from_value(v)?),
            serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(v)?]),
            _ => Err(LoadError::Json(serde::de::Error::custom(
                "json must be an object, an array of objects, or NDJSON",
            ))),
        }
    } else {
        // Fall back to NDJSON.
        let mut records = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record = serde_json::from_str(line).map_err(|e| {
                LoadError::Json(serde::de::Error::custom(format!(
                    "invalid ndjson at line {}: {}",
                    i + 1,
                    e
                )))
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::load_json_from_str;
    use crate::domain::Student;

    fn ada() -> Student {
        Student::new(
            1,
            "Ada",
            "Lovelace",
            "Female",
            NaiveDate::from_ymd_opt(2000, 6, 15).unwrap(),
            "ada@example.com",
        )
    }

    const ADA_JSON: &str = r#"{"id":1,"first_name":"Ada","last_name":"Lovelace","gender":"Female","date_of_birth":"2000-06-15","email":"ada@example.com"}"#;

    #[test]
    fn loads_an_array_of_objects() {
        let input = format!("[{ADA_JSON}]");
        let students: Vec<Student> = load_json_from_str(&input).unwrap();
        assert_eq!(students, vec![ada()]);
    }

    #[test]
    fn loads_a_single_object_as_one_record() {
        let students: Vec<Student> = load_json_from_str(ADA_JSON).unwrap();
        assert_eq!(students.len(), 1);
    }

    #[test]
    fn falls_back_to_ndjson() {
        let input = format!("{ADA_JSON}\n{ADA_JSON}\n");
        let students: Vec<Student> = load_json_from_str(&input).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1], ada());
    }

    #[test]
    fn blank_input_is_an_empty_list() {
        let students: Vec<Student> = load_json_from_str("  \n ").unwrap();
        assert!(students.is_empty());
    }

    #[test]
    fn rejects_scalar_json() {
        let err = load_json_from_str::<Student>("42").unwrap_err();
        assert!(err.to_string().contains("must be an object"));
    }

    #[test]
    fn ndjson_errors_name_the_line() {
        let input = format!("{ADA_JSON}\nnot json\n");
        let err = load_json_from_str::<Student>(&input).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
