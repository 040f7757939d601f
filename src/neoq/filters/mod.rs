//! # Close-Approach Filtering
//!
//! A query is a collection of predicates over [`CloseApproach`] records, all of
//! which must hold for an approach to match. Instead of one type per
//! (attribute, comparison) pair, a predicate is split in two:
//!
//! - **What to look at**: an [`Attribute`] knows how to extract one comparable
//!   value from an approach (its date, distance, velocity, or its NEO's
//!   diameter or hazard flag).
//! - **How to compare it**: a [`CompareOp`] plus a reference value, shared by
//!   all attributes through [`AttributeFilter`].
//!
//! | Attribute | Value | Source |
//! |-----------|-------|--------|
//! | [`ApproachDate`] | `NaiveDate` | approach timestamp, time of day dropped |
//! | [`Distance`] | `f64` (au) | approach |
//! | [`Velocity`] | `f64` (km/s) | approach |
//! | [`Diameter`] | `f64` (km) | linked NEO |
//! | [`Hazardous`] | `bool` | linked NEO |
//!
//! User-facing options are compiled into predicates by [`create_filters`]:
//!
//! ```
//! use chrono::NaiveDate;
//! use neoq::filters::{create_filters, FilterCriteria};
//!
//! let criteria = FilterCriteria {
//!     start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
//!     distance_max: Some(0.1),
//!     hazardous: Some(false),
//!     ..Default::default()
//! };
//! let filters = create_filters(&criteria);
//! assert_eq!(filters.len(), 3);
//! ```
//!
//! [`CloseApproach`]: crate::model::CloseApproach

mod attribute;
mod criteria;
mod op;

pub use attribute::{
    matches_all, ApproachDate, Attribute, AttributeFilter, DateFilter, Diameter, DiameterFilter,
    Distance, DistanceFilter, HazardFilter, Hazardous, Predicate, Velocity, VelocityFilter,
};
pub use criteria::{create_filters, FilterCriteria, Filters};
pub use op::CompareOp;
