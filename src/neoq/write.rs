//! Serializing close approaches to CSV or JSON.
//!
//! Both formats carry the approach together with its NEO. Unknown values are
//! written as an empty CSV cell, or as `""` (name) and `null` (diameter) in
//! JSON.

use crate::error::{NeoError, Result};
use crate::model::CloseApproach;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One flat CSV row.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: Option<&'a str>,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

impl<'a> From<&'a CloseApproach> for CsvRow<'a> {
    fn from(approach: &'a CloseApproach) -> Self {
        let neo = approach.neo();
        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            designation: &approach.designation,
            name: neo.and_then(|n| n.name.as_deref()),
            diameter_km: neo.and_then(|n| n.known_diameter()),
            potentially_hazardous: neo.is_some_and(|n| n.hazardous),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonApproach<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: JsonNeo<'a>,
}

#[derive(Debug, Serialize)]
struct JsonNeo<'a> {
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

impl<'a> From<&'a CloseApproach> for JsonApproach<'a> {
    fn from(approach: &'a CloseApproach) -> Self {
        let neo = approach.neo();
        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            neo: JsonNeo {
                designation: &approach.designation,
                name: neo.and_then(|n| n.name.as_deref()).unwrap_or(""),
                diameter_km: neo.and_then(|n| n.known_diameter()),
                potentially_hazardous: neo.is_some_and(|n| n.hazardous),
            },
        }
    }
}

/// Write `results` as CSV, one row per approach, with a header row.
pub fn write_to_csv<'a, I, W>(results: I, writer: W) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
    W: Write,
{
    // Header is written explicitly so that empty result sets still get one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record([
        "datetime_utc",
        "distance_au",
        "velocity_km_s",
        "designation",
        "name",
        "diameter_km",
        "potentially_hazardous",
    ])?;

    let mut count = 0;
    for approach in results {
        writer.serialize(CsvRow::from(approach))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Write `results` as a pretty-printed JSON array.
pub fn write_to_json<'a, I, W>(results: I, mut writer: W) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
    W: Write,
{
    let records: Vec<JsonApproach<'a>> = results.into_iter().map(JsonApproach::from).collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(records.len())
}

/// Output formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(NeoError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Write `results` to `path`, in the format implied by its extension.
///
/// Returns the number of approaches written.
pub fn write_results<'a, I>(results: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let format = OutputFormat::from_path(path)?;
    let file = BufWriter::new(File::create(path)?);
    let count = match format {
        OutputFormat::Csv => write_to_csv(results, file)?,
        OutputFormat::Json => write_to_json(results, file)?,
    };
    log::info!("wrote {} close approaches to {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_database;

    #[test]
    fn csv_has_header_and_rows() {
        let db = sample_database();
        let mut buf = Vec::new();
        let count = write_to_csv(db.approaches(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(count, 4);
        assert_eq!(
            lines[0],
            "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous"
        );
        assert_eq!(lines[1], "1900-01-01 00:11,0.1,5.5,433,Eros,16.84,false");
        assert_eq!(lines[3], "2020-01-05 12:00,0.9,12.25,2020 AB,,,false");
    }

    #[test]
    fn csv_of_nothing_is_just_the_header() {
        let mut buf = Vec::new();
        assert_eq!(write_to_csv(std::iter::empty(), &mut buf).unwrap(), 0);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }

    #[test]
    fn json_nests_the_neo() {
        let db = sample_database();
        let mut buf = Vec::new();
        write_to_json(db.approaches(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[1]["datetime_utc"], "2029-04-13 21:46");
        assert_eq!(records[1]["distance_au"], 0.5);
        assert_eq!(records[1]["neo"]["designation"], "99942");
        assert_eq!(records[1]["neo"]["name"], "Apophis");
        assert_eq!(records[1]["neo"]["potentially_hazardous"], true);

        assert_eq!(records[2]["neo"]["name"], "");
        assert!(records[2]["neo"]["diameter_km"].is_null());
    }

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("out.csv")).unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("OUT.JSON")).unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::from_path(Path::new("out.txt")),
            Err(NeoError::UnsupportedFormat(_))
        ));
        assert!(OutputFormat::from_path(Path::new("out")).is_err());
    }

    #[test]
    fn writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let db = sample_database();

        let csv_path = dir.path().join("results.csv");
        assert_eq!(write_results(db.approaches(), &csv_path).unwrap(), 4);
        assert!(std::fs::read_to_string(&csv_path)
            .unwrap()
            .starts_with("datetime_utc,"));

        let json_path = dir.path().join("results.json");
        assert_eq!(write_results(db.approaches(), &json_path).unwrap(), 4);
        let text = std::fs::read_to_string(&json_path).unwrap();
        assert!(text.trim_start().starts_with('['));
    }
}
