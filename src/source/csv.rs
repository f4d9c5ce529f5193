//! CSV record loading.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadResult;

/// Load a headered CSV file into a list of typed records.
///
/// Column order in the file is free; headers are matched to the record's field
/// names by serde.
pub fn load_csv_from_path<T>(path: impl AsRef<Path>) -> LoadResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load typed records from an existing CSV reader.
pub fn load_csv_from_reader<T, R>(rdr: &mut csv::Reader<R>) -> LoadResult<Vec<T>>
where
    T: DeserializeOwned,
    R: std::io::Read,
{
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}
