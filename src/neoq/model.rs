use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::sync::Arc;

/// Display format for approach timestamps, shared by the terminal output and
/// the serializers.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A near-Earth object, keyed by its primary designation.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    pub designation: String,
    pub name: Option<String>,
    /// Diameter in kilometers, `NaN` when unknown.
    pub diameter: f64,
    pub hazardous: bool,
}

impl NearEarthObject {
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter,
            hazardous,
        }
    }

    /// `"433 (Eros)"`, or just the designation for unnamed objects.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    pub fn has_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    /// The diameter, or `None` when unknown.
    pub fn known_diameter(&self) -> Option<f64> {
        self.has_diameter().then_some(self.diameter)
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {}", self.fullname())?;
        if self.has_diameter() {
            write!(f, " has a diameter of {:.3} km and", self.diameter)?;
        }
        let hazard = if self.hazardous { "is" } else { "is not" };
        write!(f, " {} potentially hazardous.", hazard)
    }
}

/// A single close approach of an NEO to Earth.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    pub designation: String,
    /// UTC calendar date and time of closest approach.
    pub time: NaiveDateTime,
    /// Nominal approach distance in astronomical units.
    pub distance: f64,
    /// Relative approach velocity in km/s.
    pub velocity: f64,
    /// Set by the database once the NEO collection is linked.
    pub neo: Option<Arc<NearEarthObject>>,
}

impl CloseApproach {
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    pub fn neo(&self) -> Option<&NearEarthObject> {
        self.neo.as_deref()
    }

    pub fn time_str(&self) -> String {
        self.time.format(DATETIME_FORMAT).to_string()
    }

    fn neo_fullname(&self) -> String {
        self.neo()
            .map(NearEarthObject::fullname)
            .unwrap_or_else(|| self.designation.clone())
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.neo_fullname(),
            self.distance,
            self.velocity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approach, neo};

    #[test]
    fn fullname_includes_name_when_present() {
        assert_eq!(neo("433", Some("Eros"), 16.84, false).fullname(), "433 (Eros)");
        assert_eq!(neo("2020 AB", None, f64::NAN, false).fullname(), "2020 AB");
    }

    #[test]
    fn empty_name_is_treated_as_missing() {
        let obj = NearEarthObject::new("2020 AB", Some(String::new()), 1.0, false);
        assert_eq!(obj.name, None);
    }

    #[test]
    fn display_omits_unknown_diameter() {
        let known = neo("433", Some("Eros"), 16.84, false);
        assert_eq!(
            known.to_string(),
            "NEO 433 (Eros) has a diameter of 16.840 km and is not potentially hazardous."
        );

        let unknown = neo("2020 AB", None, f64::NAN, true);
        assert_eq!(unknown.to_string(), "NEO 2020 AB is potentially hazardous.");
        assert_eq!(unknown.known_diameter(), None);
    }

    #[test]
    fn approach_display_falls_back_to_designation() {
        let ca = approach("2020 AB", "2020-01-01 12:30", 0.1234, 5.678);
        assert_eq!(
            ca.to_string(),
            "On 2020-01-01 12:30, '2020 AB' approaches Earth at a distance of 0.12 au and a velocity of 5.68 km/s."
        );
        assert_eq!(ca.date(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
