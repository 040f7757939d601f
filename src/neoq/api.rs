//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all neoq operations, whatever the UI.
//!
//! The facade:
//! - **Owns** the loaded [`NeoDatabase`]
//! - **Normalizes inputs** (e.g. a designation-or-name pair into a [`NeoSelector`])
//! - **Dispatches** to the matching command and returns its `CmdResult`
//!
//! It never prints and never decides presentation: that is the CLI's job.
//! Command logic is tested in `commands/*.rs`; tests here only cover input
//! normalization and dispatch.

use crate::commands;
use crate::config::NeoConfig;
use crate::database::NeoDatabase;
use crate::error::{NeoError, Result};
use crate::extract::{load_approaches, load_neos};
use crate::filters::FilterCriteria;
use crate::model::CloseApproach;
use std::path::Path;

/// The main API facade for neoq operations.
pub struct NeoApi {
    db: NeoDatabase,
}

impl NeoApi {
    pub fn new(db: NeoDatabase) -> Self {
        Self { db }
    }

    /// Load and link the NEO CSV and close-approach JSON files.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(neo_file: P, cad_file: Q) -> Result<Self> {
        let neos = load_neos(neo_file)?;
        let approaches = load_approaches(cad_file)?;
        Ok(Self::new(NeoDatabase::new(neos, approaches)))
    }

    pub fn from_config(config: &NeoConfig) -> Result<Self> {
        Self::load(&config.neo_file, &config.cad_file)
    }

    pub fn database(&self) -> &NeoDatabase {
        &self.db
    }

    /// Look up one NEO by exactly one of `designation` or `name`.
    pub fn inspect(
        &self,
        designation: Option<&str>,
        name: Option<&str>,
        with_approaches: bool,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(designation, name)?;
        commands::inspect::run(&self.db, &selector, with_approaches)
    }

    pub fn query(
        &self,
        criteria: &FilterCriteria,
        max_results: Option<usize>,
    ) -> Result<commands::CmdResult> {
        commands::query::run(&self.db, criteria, max_results)
    }

    pub fn export(&self, approaches: &[CloseApproach], path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(approaches, path)
    }
}

fn parse_selector(designation: Option<&str>, name: Option<&str>) -> Result<NeoSelector> {
    match (designation, name) {
        (Some(designation), None) => Ok(NeoSelector::Designation(designation.trim().to_string())),
        (None, Some(name)) => Ok(NeoSelector::Name(name.trim().to_string())),
        (Some(_), Some(_)) => Err(NeoError::Api(
            "Inspect takes either a designation or a name, not both".into(),
        )),
        (None, None) => Err(NeoError::Api(
            "Inspect needs a designation or a name".into(),
        )),
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NeoSelector};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_database, CAD_JSON, NEOS_CSV};

    #[test]
    fn selector_requires_exactly_one_key() {
        assert_eq!(
            parse_selector(Some(" 433 "), None).unwrap(),
            NeoSelector::Designation("433".into())
        );
        assert_eq!(
            parse_selector(None, Some("Eros")).unwrap(),
            NeoSelector::Name("Eros".into())
        );
        assert!(matches!(
            parse_selector(Some("433"), Some("Eros")),
            Err(NeoError::Api(_))
        ));
        assert!(matches!(parse_selector(None, None), Err(NeoError::Api(_))));
    }

    #[test]
    fn dispatches_inspect_and_query() {
        let api = NeoApi::new(sample_database());

        let inspected = api.inspect(None, Some("Apophis"), false).unwrap();
        assert_eq!(inspected.neos[0].designation, "99942");

        let queried = api.query(&FilterCriteria::default(), Some(1)).unwrap();
        assert_eq!(queried.approaches.len(), 1);
    }

    #[test]
    fn loads_from_config_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = NeoConfig {
            neo_file: dir.path().join("neos.csv"),
            cad_file: dir.path().join("cad.json"),
            ..NeoConfig::default()
        };
        std::fs::write(&config.neo_file, NEOS_CSV).unwrap();
        std::fs::write(&config.cad_file, CAD_JSON).unwrap();

        let api = NeoApi::from_config(&config).unwrap();
        assert_eq!(api.database().neos().len(), 3);
        assert_eq!(api.database().approaches().len(), 4);
        assert!(api.database().approaches().iter().all(|a| a.neo.is_some()));
    }
}
