//! Loading edge records from disk and writing simplified networks back.

mod csv_file;
mod geojson_file;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

pub use csv_file::read_csv;
pub use geojson_file::{parse_geojson, read_geojson, to_feature_collection, write_geojson};

use crate::{error::SimplifyError, records::EdgeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    GeoJson,
    Csv,
}

impl InputFormat {
    /// `.csv` files are read as way segment dumps, anything else as GeoJSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::GeoJson,
        }
    }
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<EdgeRecord>, SimplifyError> {
    let reader = BufReader::new(File::open(path)?);

    match InputFormat::from_path(path) {
        InputFormat::Csv => read_csv(reader),
        InputFormat::GeoJson => read_geojson(reader),
    }
}

pub fn write_records_to_path(path: &Path, records: &[EdgeRecord]) -> Result<(), SimplifyError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_geojson(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
