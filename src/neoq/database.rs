//! # NEO Database
//!
//! [`NeoDatabase`] holds the linked NEO and close-approach collections and is
//! the query engine the filters are handed to.
//!
//! On construction every approach is linked to the NEO sharing its
//! designation (`CloseApproach::neo`), and lookup maps are built for
//! designations and names. NEOs are shared through `Arc`, so linking does not
//! copy records and approaches stay valid on their own once returned.
//!
//! Queries are lazy: [`NeoDatabase::query`] scans approaches in load order and
//! only evaluates the filters as the caller pulls results, which lets
//! [`crate::limit::limit`] stop the scan early.

use crate::error::Result;
use crate::filters::{matches_all, Predicate};
use crate::model::{CloseApproach, NearEarthObject};
use std::collections::HashMap;
use std::sync::Arc;

pub struct NeoDatabase {
    neos: Vec<Arc<NearEarthObject>>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    /// Approach indices per NEO index, in load order.
    approaches_by_neo: Vec<Vec<usize>>,
}

impl NeoDatabase {
    /// Link `neos` and `approaches` together.
    ///
    /// Approaches whose designation matches no NEO are kept, but stay
    /// unlinked and therefore never satisfy NEO-based filters.
    pub fn new(neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let neos: Vec<Arc<NearEarthObject>> = neos.into_iter().map(Arc::new).collect();

        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        for (idx, neo) in neos.iter().enumerate() {
            by_designation.insert(neo.designation.clone(), idx);
            if let Some(name) = &neo.name {
                by_name.insert(name.clone(), idx);
            }
        }

        let mut approaches_by_neo = vec![Vec::new(); neos.len()];
        let mut unlinked = 0usize;
        for (approach_idx, approach) in approaches.iter_mut().enumerate() {
            match by_designation.get(&approach.designation) {
                Some(&neo_idx) => {
                    approach.neo = Some(Arc::clone(&neos[neo_idx]));
                    approaches_by_neo[neo_idx].push(approach_idx);
                }
                None => {
                    log::warn!(
                        "close approach of '{}' has no matching NEO",
                        approach.designation
                    );
                    unlinked += 1;
                }
            }
        }

        log::debug!(
            "linked {} close approaches to {} NEOs ({} unlinked)",
            approaches.len() - unlinked,
            neos.len(),
            unlinked
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
            approaches_by_neo,
        }
    }

    pub fn neos(&self) -> &[Arc<NearEarthObject>] {
        &self.neos
    }

    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Exact, case-sensitive lookup by primary designation.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&Arc<NearEarthObject>> {
        self.by_designation
            .get(designation)
            .map(|&idx| &self.neos[idx])
    }

    /// Exact, case-sensitive lookup by name. Unnamed NEOs are never found.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&Arc<NearEarthObject>> {
        self.by_name.get(name).map(|&idx| &self.neos[idx])
    }

    /// Close approaches of the NEO with `designation`, in load order.
    pub fn approaches_for(&self, designation: &str) -> impl Iterator<Item = &CloseApproach> + '_ {
        self.by_designation
            .get(designation)
            .into_iter()
            .flat_map(move |&idx| self.approaches_by_neo[idx].iter())
            .map(move |&approach_idx| &self.approaches[approach_idx])
    }

    /// Lazily yield every approach satisfying all of `filters`.
    ///
    /// With no filters every approach is produced. A predicate error is
    /// yielded in place of the approach it was evaluated on.
    pub fn query<'a>(
        &'a self,
        filters: &'a [Box<dyn Predicate>],
    ) -> impl Iterator<Item = Result<&'a CloseApproach>> + 'a {
        self.approaches
            .iter()
            .filter_map(move |approach| match matches_all(filters, approach) {
                Ok(true) => Some(Ok(approach)),
                Ok(false) => None,
                Err(e) => Some(Err(e)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{create_filters, FilterCriteria};
    use crate::limit::limit;
    use crate::test_utils::{approach, neo, sample_database};

    fn designations<'a>(results: impl Iterator<Item = Result<&'a CloseApproach>>) -> Vec<String> {
        results.map(|r| r.unwrap().designation.clone()).collect()
    }

    #[test]
    fn links_approaches_to_neos() {
        let db = sample_database();

        for approach in db.approaches() {
            let linked = approach.neo().expect("approach should be linked");
            assert_eq!(linked.designation, approach.designation);
        }
        assert!(Arc::ptr_eq(
            db.approaches()[0].neo.as_ref().unwrap(),
            db.get_neo_by_designation("433").unwrap()
        ));
    }

    #[test]
    fn looks_up_by_designation_and_name() {
        let db = sample_database();

        assert_eq!(db.get_neo_by_designation("99942").unwrap().fullname(), "99942 (Apophis)");
        assert_eq!(db.get_neo_by_name("Eros").unwrap().designation, "433");
        assert!(db.get_neo_by_designation("eros").is_none());
        assert!(db.get_neo_by_name("eros").is_none());
        assert!(db.get_neo_by_name("").is_none());
    }

    #[test]
    fn lists_approaches_per_neo() {
        let db = sample_database();

        let eros: Vec<f64> = db.approaches_for("433").map(|a| a.distance).collect();
        assert_eq!(eros, vec![0.1, 0.3]);
        assert_eq!(db.approaches_for("unknown").count(), 0);
    }

    #[test]
    fn keeps_unlinked_approaches() {
        let db = NeoDatabase::new(
            vec![neo("433", Some("Eros"), 16.84, false)],
            vec![approach("404", "2020-01-01 00:00", 0.1, 1.0)],
        );

        assert_eq!(db.approaches().len(), 1);
        assert!(db.approaches()[0].neo.is_none());
    }

    #[test]
    fn query_without_filters_yields_everything() {
        let db = sample_database();
        assert_eq!(db.query(&[]).count(), db.approaches().len());
    }

    #[test]
    fn query_applies_all_filters() {
        let db = sample_database();
        let filters = create_filters(&FilterCriteria {
            distance_max: Some(0.5),
            hazardous: Some(false),
            ..Default::default()
        });

        assert_eq!(designations(db.query(&filters)), vec!["433", "433"]);
    }

    #[test]
    fn query_then_limit() {
        let db = NeoDatabase::new(
            vec![neo("433", Some("Eros"), 16.84, false)],
            vec![
                approach("433", "2020-01-01 00:00", 0.1, 1.0),
                approach("433", "2021-01-01 00:00", 0.5, 1.0),
                approach("433", "2022-01-01 00:00", 0.9, 1.0),
            ],
        );
        let filters = create_filters(&FilterCriteria {
            distance_max: Some(0.5),
            ..Default::default()
        });

        let matched: Vec<f64> = db.query(&filters).map(|r| r.unwrap().distance).collect();
        assert_eq!(matched, vec![0.1, 0.5]);

        let first: Vec<f64> = limit(db.query(&filters), Some(1))
            .map(|r| r.unwrap().distance)
            .collect();
        assert_eq!(first, vec![0.1]);
    }
}
