use std::io::{Read, Write};

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};

use crate::{coordinate::Coordinate, error::SimplifyError, records::EdgeRecord};

pub fn read_geojson<R: Read>(mut reader: R) -> Result<Vec<EdgeRecord>, SimplifyError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_geojson(&content)
}

/// Edge records of every line feature. Multi line strings give one record per
/// part, all sharing the feature's visits.
pub fn parse_geojson(content: &str) -> Result<Vec<EdgeRecord>, SimplifyError> {
    let geojson: GeoJson = content.parse()?;

    match geojson {
        GeoJson::FeatureCollection(collection) => {
            let mut records = Vec::with_capacity(collection.features.len());
            for feature in &collection.features {
                records.extend(feature_records(feature)?);
            }
            Ok(records)
        }
        GeoJson::Feature(feature) => feature_records(&feature),
        GeoJson::Geometry(_) => Err(SimplifyError::InvalidFeature(String::from(
            "bare geometry has no visits",
        ))),
    }
}

fn feature_records(feature: &Feature) -> Result<Vec<EdgeRecord>, SimplifyError> {
    let Some(geometry) = &feature.geometry else {
        return Err(SimplifyError::InvalidFeature(String::from(
            "feature without geometry",
        )));
    };

    let visits = parse_visits(feature.property("visits"))?;
    let length = parse_length(feature.property("length"))?;

    // A given length only applies to a single part
    let (lines, length) = match &geometry.value {
        Value::LineString(line) => (vec![line], length),
        Value::MultiLineString(lines) => (lines.iter().collect(), None),
        _ => {
            return Err(SimplifyError::InvalidFeature(String::from(
                "only line strings are supported",
            )));
        }
    };

    lines
        .into_iter()
        .map(|line| {
            let polyline = line
                .iter()
                .map(|position| to_coordinate(position))
                .collect::<Result<Vec<_>, _>>()?;

            let mut record = EdgeRecord::from_polyline(polyline, visits)?;
            if let Some(length) = length {
                record.length = length;
            }
            Ok(record)
        })
        .collect()
}

fn to_coordinate(position: &[f64]) -> Result<Coordinate, SimplifyError> {
    match position {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Ok(Coordinate::new(*lon, *lat)),
        _ => Err(SimplifyError::InvalidFeature(format!(
            "invalid position {position:?}"
        ))),
    }
}

/// Visits are either numbers or numeric strings such as `"1.20e+01"`.
fn parse_visits(value: Option<&JsonValue>) -> Result<u64, SimplifyError> {
    let visits = match value {
        Some(JsonValue::Number(number)) => number.as_f64(),
        Some(JsonValue::String(text)) => text.trim().parse::<f64>().ok(),
        Some(other) => return Err(SimplifyError::InvalidVisits(other.to_string())),
        None => return Err(SimplifyError::InvalidVisits(String::from("missing"))),
    };

    match visits {
        Some(visits) if visits.is_finite() && visits >= 0.0 => Ok(visits.round() as u64),
        _ => Err(SimplifyError::InvalidVisits(
            value.map(|value| value.to_string()).unwrap_or_default(),
        )),
    }
}

fn parse_length(value: Option<&JsonValue>) -> Result<Option<f64>, SimplifyError> {
    match value {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(number)) => {
            let length = number.as_f64().unwrap_or(f64::NAN);
            if length.is_finite() && length >= 0.0 {
                Ok(Some(length))
            } else {
                Err(SimplifyError::InvalidLength(length))
            }
        }
        Some(other) => Err(SimplifyError::InvalidFeature(format!(
            "invalid length {other}"
        ))),
    }
}

pub fn to_feature_collection(records: &[EdgeRecord]) -> FeatureCollection {
    let features = records
        .iter()
        .map(|record| {
            let mut properties = JsonObject::new();
            properties.insert(String::from("visits"), JsonValue::from(record.visits));
            properties.insert(String::from("length"), JsonValue::from(record.length));

            Feature {
                bbox: None,
                id: None,
                properties: Some(properties),
                foreign_members: None,
                geometry: Some(Geometry::new(Value::LineString(
                    record.polyline.iter().map(Vec::from).collect(),
                ))),
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        foreign_members: None,
        features,
    }
}

pub fn write_geojson<W: Write>(writer: W, records: &[EdgeRecord]) -> Result<(), SimplifyError> {
    let geojson = GeoJson::FeatureCollection(to_feature_collection(records));
    serde_json::to_writer(writer, &geojson)?;
    Ok(())
}
