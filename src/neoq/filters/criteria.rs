use super::{
    CompareOp, DateFilter, DiameterFilter, DistanceFilter, HazardFilter, Predicate,
    VelocityFilter,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An ordered, AND-combined collection of predicates.
pub type Filters = Vec<Box<dyn Predicate>>;

/// User-specified search options for close approaches.
///
/// Every option is independent; `None` imposes no constraint. Note that
/// `hazardous: Some(false)` is a constraint (non-hazardous only), distinct
/// from `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Approach happened on exactly this date.
    pub date: Option<NaiveDate>,
    /// Approach happened on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Approach happened on or before this date.
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

impl FilterCriteria {
    /// True when no option is set, i.e. every approach matches.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Compile `criteria` into one predicate per set option.
///
/// Options are checked for presence, not truthiness, so a zero bound still
/// produces a predicate. Contradictory options are accepted and simply match
/// nothing.
pub fn create_filters(criteria: &FilterCriteria) -> Filters {
    let mut filters: Filters = Vec::new();

    if let Some(date) = criteria.date {
        filters.push(Box::new(DateFilter::new(CompareOp::Eq, date)));
    }
    if let Some(start) = criteria.start_date {
        filters.push(Box::new(DateFilter::new(CompareOp::Ge, start)));
    }
    if let Some(end) = criteria.end_date {
        filters.push(Box::new(DateFilter::new(CompareOp::Le, end)));
    }
    if let Some(min) = criteria.distance_min {
        filters.push(Box::new(DistanceFilter::new(CompareOp::Ge, min)));
    }
    if let Some(max) = criteria.distance_max {
        filters.push(Box::new(DistanceFilter::new(CompareOp::Le, max)));
    }
    if let Some(min) = criteria.velocity_min {
        filters.push(Box::new(VelocityFilter::new(CompareOp::Ge, min)));
    }
    if let Some(max) = criteria.velocity_max {
        filters.push(Box::new(VelocityFilter::new(CompareOp::Le, max)));
    }
    if let Some(min) = criteria.diameter_min {
        filters.push(Box::new(DiameterFilter::new(CompareOp::Ge, min)));
    }
    if let Some(max) = criteria.diameter_max {
        filters.push(Box::new(DiameterFilter::new(CompareOp::Le, max)));
    }
    if let Some(hazardous) = criteria.hazardous {
        filters.push(Box::new(HazardFilter::new(CompareOp::Eq, hazardous)));
    }

    for filter in &filters {
        log::debug!("created filter {:?}", filter);
    }
    filters
}
