use crate::database::NeoDatabase;
use crate::model::{CloseApproach, NearEarthObject, DATETIME_FORMAT};
use chrono::NaiveDateTime;
use std::sync::Arc;

/// A small NEO catalogue in the JPL small-body CSV layout.
pub const NEOS_CSV: &str = "\
id,spkid,full_name,pdes,name,prefix,neo,pha,diameter,albedo
a0000433,2000433,\"   433 Eros (A898 PA)\",433,Eros,,Y,N,16.84,0.25
a0099942,2099942,\"99942 Apophis (2004 MN4)\",99942,Apophis,,Y,Y,0.37,0.23
bK20A00B,3840000,\"       (2020 AB)\",2020 AB,,,Y,N,,
";

/// Close approaches for [`NEOS_CSV`] in the JPL close-approach JSON layout.
pub const CAD_JSON: &str = r#"{
  "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
  "count": "4",
  "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
  "data": [
    ["433", "659", "2415020.507669610", "1900-Jan-01 00:11", "0.1", "0.0920", "0.0923", "5.5", "5.5", "< 00:01", "10.4"],
    ["99942", "199", "2462240.407091595", "2029-Apr-13 21:46", "0.5", "0.0002", "0.0002", "7.42", "5.84", "< 00:01", "19.1"],
    ["2020 AB", "5", "2458851.5", "2020-Jan-05 12:00", "0.9", "0.8", "1.0", "12.25", "12.2", "00:12", "25.5"],
    ["433", "659", "2459938.5", "2023-Jan-01 06:30", "0.3", "0.29", "0.31", "3.2", "3.1", "< 00:01", "10.4"]
  ]
}"#;

pub fn neo(designation: &str, name: Option<&str>, diameter: f64, hazardous: bool) -> NearEarthObject {
    NearEarthObject::new(designation, name.map(str::to_string), diameter, hazardous)
}

/// Build an unlinked approach; `time` uses the `YYYY-MM-DD HH:MM` format.
pub fn approach(designation: &str, time: &str, distance: f64, velocity: f64) -> CloseApproach {
    let time = NaiveDateTime::parse_from_str(time, DATETIME_FORMAT)
        .unwrap_or_else(|e| panic!("bad fixture time {time:?}: {e}"));
    CloseApproach::new(designation, time, distance, velocity)
}

pub fn linked(mut approach: CloseApproach, neo: NearEarthObject) -> CloseApproach {
    approach.neo = Some(Arc::new(neo));
    approach
}

/// The records of [`NEOS_CSV`] and [`CAD_JSON`], linked into a database.
pub fn sample_database() -> NeoDatabase {
    let neos = vec![
        neo("433", Some("Eros"), 16.84, false),
        neo("99942", Some("Apophis"), 0.37, true),
        neo("2020 AB", None, f64::NAN, false),
    ];
    let approaches = vec![
        approach("433", "1900-01-01 00:11", 0.1, 5.5),
        approach("99942", "2029-04-13 21:46", 0.5, 7.42),
        approach("2020 AB", "2020-01-05 12:00", 0.9, 12.25),
        approach("433", "2023-01-01 06:30", 0.3, 3.2),
    ];
    NeoDatabase::new(neos, approaches)
}
