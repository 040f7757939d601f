//! Attribute extraction and the generic comparison filter built on top of it.

use super::CompareOp;
use crate::error::{NeoError, Result};
use crate::model::CloseApproach;
use chrono::NaiveDate;
use std::fmt;
use std::marker::PhantomData;

/// A comparable value that can be read off a close approach.
///
/// Implementations only provide [`Attribute::get`]; comparison is handled by
/// [`AttributeFilter`].
pub trait Attribute {
    type Value: PartialOrd + Clone + fmt::Debug + fmt::Display + Send + Sync;

    /// Attribute name, as shown in human-readable filter descriptions.
    const NAME: &'static str;

    /// Type name of the filter, as shown in debug representations.
    const FILTER_NAME: &'static str;

    /// Extract the attribute from `approach`.
    ///
    /// `Ok(None)` means the value is not available for this approach (for
    /// example an NEO attribute on an approach that was never linked), which
    /// makes any comparison against it false.
    fn get(_approach: &CloseApproach) -> Result<Option<Self::Value>> {
        Err(NeoError::UnsupportedCriterion(Self::NAME))
    }
}

/// Calendar date of the approach.
#[derive(Debug, Clone, Copy)]
pub struct ApproachDate;

impl Attribute for ApproachDate {
    type Value = NaiveDate;
    const NAME: &'static str = "date";
    const FILTER_NAME: &'static str = "DateFilter";

    fn get(approach: &CloseApproach) -> Result<Option<NaiveDate>> {
        Ok(Some(approach.date()))
    }
}

/// Nominal approach distance in au.
#[derive(Debug, Clone, Copy)]
pub struct Distance;

impl Attribute for Distance {
    type Value = f64;
    const NAME: &'static str = "distance";
    const FILTER_NAME: &'static str = "DistanceFilter";

    fn get(approach: &CloseApproach) -> Result<Option<f64>> {
        Ok(Some(approach.distance))
    }
}

/// Relative approach velocity in km/s.
#[derive(Debug, Clone, Copy)]
pub struct Velocity;

impl Attribute for Velocity {
    type Value = f64;
    const NAME: &'static str = "velocity";
    const FILTER_NAME: &'static str = "VelocityFilter";

    fn get(approach: &CloseApproach) -> Result<Option<f64>> {
        Ok(Some(approach.velocity))
    }
}

/// Diameter of the approaching NEO in km.
#[derive(Debug, Clone, Copy)]
pub struct Diameter;

impl Attribute for Diameter {
    type Value = f64;
    const NAME: &'static str = "diameter";
    const FILTER_NAME: &'static str = "DiameterFilter";

    fn get(approach: &CloseApproach) -> Result<Option<f64>> {
        Ok(approach.neo().map(|neo| neo.diameter))
    }
}

/// Whether the approaching NEO is potentially hazardous.
#[derive(Debug, Clone, Copy)]
pub struct Hazardous;

impl Attribute for Hazardous {
    type Value = bool;
    const NAME: &'static str = "hazardous";
    const FILTER_NAME: &'static str = "HazardFilter";

    fn get(approach: &CloseApproach) -> Result<Option<bool>> {
        Ok(approach.neo().map(|neo| neo.hazardous))
    }
}

/// A single criterion over close approaches, as consumed by the query engine.
pub trait Predicate: fmt::Debug + fmt::Display + Send + Sync {
    /// Whether `approach` satisfies this criterion.
    fn evaluate(&self, approach: &CloseApproach) -> Result<bool>;
}

/// Compares one [`Attribute`] of an approach against a reference value.
pub struct AttributeFilter<A: Attribute> {
    op: CompareOp,
    value: A::Value,
    _attribute: PhantomData<fn() -> A>,
}

pub type DateFilter = AttributeFilter<ApproachDate>;
pub type DistanceFilter = AttributeFilter<Distance>;
pub type VelocityFilter = AttributeFilter<Velocity>;
pub type DiameterFilter = AttributeFilter<Diameter>;
pub type HazardFilter = AttributeFilter<Hazardous>;

impl<A: Attribute> AttributeFilter<A> {
    /// The reference value is the right-hand side of `op`.
    pub fn new(op: CompareOp, value: A::Value) -> Self {
        Self {
            op,
            value,
            _attribute: PhantomData,
        }
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn value(&self) -> &A::Value {
        &self.value
    }

    /// Evaluate `A::get(approach) OP value`.
    pub fn evaluate(&self, approach: &CloseApproach) -> Result<bool> {
        Ok(A::get(approach)?.is_some_and(|actual| self.op.apply(&actual, &self.value)))
    }
}

impl<A: Attribute> Clone for AttributeFilter<A> {
    fn clone(&self) -> Self {
        Self::new(self.op, self.value.clone())
    }
}

impl<A: Attribute> fmt::Debug for AttributeFilter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(op={}, value={:?})",
            A::FILTER_NAME,
            self.op.name(),
            self.value
        )
    }
}

impl<A: Attribute> fmt::Display for AttributeFilter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", A::NAME, self.op, self.value)
    }
}

impl<A: Attribute> Predicate for AttributeFilter<A> {
    fn evaluate(&self, approach: &CloseApproach) -> Result<bool> {
        AttributeFilter::evaluate(self, approach)
    }
}

/// Logical AND over `filters`, stopping at the first failing predicate.
///
/// An empty collection matches every approach.
pub fn matches_all(filters: &[Box<dyn Predicate>], approach: &CloseApproach) -> Result<bool> {
    for filter in filters {
        if !filter.evaluate(approach)? {
            return Ok(false);
        }
    }
    Ok(true)
}
