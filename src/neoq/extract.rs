//! Loading NEOs and close approaches from the JPL data files.
//!
//! - NEOs come from a headered CSV; only the `pdes`, `name`, `diameter` and
//!   `pha` columns are used.
//! - Close approaches come from the close-approach API's JSON document, whose
//!   `data` rows are positional and described by the `fields` list.

use crate::error::{NeoError, Result};
use crate::model::{CloseApproach, NearEarthObject};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Timestamp layout of the `cd` field, e.g. `1900-Jan-01 00:11`.
const CAD_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    diameter: String,
    #[serde(default)]
    pha: String,
}

impl From<NeoRow> for NearEarthObject {
    fn from(row: NeoRow) -> Self {
        let name = Some(row.name.trim().to_string());
        let diameter = row.diameter.trim().parse().unwrap_or(f64::NAN);
        NearEarthObject::new(row.pdes.trim(), name, diameter, row.pha.trim() == "Y")
    }
}

/// Read NEOs from the CSV file at `path`.
pub fn load_neos<P: AsRef<Path>>(path: P) -> Result<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let neos = read_neos(File::open(path)?)?;
    log::info!("loaded {} NEOs from {}", neos.len(), path.display());
    Ok(neos)
}

/// Read NEOs from CSV data.
pub fn read_neos<R: Read>(reader: R) -> Result<Vec<NearEarthObject>> {
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize::<NeoRow>()
        .map(|row| -> Result<NearEarthObject> { Ok(row?.into()) })
        .collect()
}

#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<JsonValue>>,
}

/// Positions of the fields we need within each `data` row.
struct CadColumns {
    des: usize,
    cd: usize,
    dist: usize,
    v_rel: usize,
}

impl CadColumns {
    fn resolve(fields: &[String]) -> Result<Self> {
        let find = |name: &str| {
            fields.iter().position(|f| f == name).ok_or_else(|| {
                NeoError::Parse(format!("close-approach data has no '{}' field", name))
            })
        };
        Ok(Self {
            des: find("des")?,
            cd: find("cd")?,
            dist: find("dist")?,
            v_rel: find("v_rel")?,
        })
    }
}

/// Read close approaches from the JSON file at `path`.
pub fn load_approaches<P: AsRef<Path>>(path: P) -> Result<Vec<CloseApproach>> {
    let path = path.as_ref();
    let approaches = read_approaches(BufReader::new(File::open(path)?))?;
    log::info!(
        "loaded {} close approaches from {}",
        approaches.len(),
        path.display()
    );
    Ok(approaches)
}

/// Read close approaches from close-approach JSON data.
pub fn read_approaches<R: Read>(reader: R) -> Result<Vec<CloseApproach>> {
    let document: CadDocument = serde_json::from_reader(reader)?;
    let columns = CadColumns::resolve(&document.fields)?;

    document
        .data
        .iter()
        .enumerate()
        .map(|(i, row)| parse_approach(row, &columns).map_err(|e| row_error(i, e)))
        .collect()
}

fn parse_approach(row: &[JsonValue], columns: &CadColumns) -> Result<CloseApproach> {
    let designation = cell_str(row, columns.des)?;
    let cd = cell_str(row, columns.cd)?;
    let time = NaiveDateTime::parse_from_str(&cd, CAD_TIME_FORMAT)
        .map_err(|e| NeoError::Parse(format!("invalid date '{}': {}", cd, e)))?;
    let distance = cell_f64(row, columns.dist)?;
    let velocity = cell_f64(row, columns.v_rel)?;

    Ok(CloseApproach::new(designation, time, distance, velocity))
}

fn row_error(index: usize, err: NeoError) -> NeoError {
    match err {
        NeoError::Parse(msg) => NeoError::Parse(format!("row {}: {}", index, msg)),
        other => other,
    }
}

fn cell_str(row: &[JsonValue], index: usize) -> Result<String> {
    match row.get(index) {
        Some(JsonValue::String(s)) => Ok(s.trim().to_string()),
        Some(JsonValue::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(NeoError::Parse(format!(
            "column {} is not a string: {}",
            index, other
        ))),
        None => Err(NeoError::Parse(format!("missing column {}", index))),
    }
}

fn cell_f64(row: &[JsonValue], index: usize) -> Result<f64> {
    let raw = cell_str(row, index)?;
    raw.parse()
        .map_err(|_| NeoError::Parse(format!("column {} is not a number: '{}'", index, raw)))
}
