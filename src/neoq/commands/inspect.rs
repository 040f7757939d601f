use crate::commands::{CmdMessage, CmdResult, NeoSelector};
use crate::database::NeoDatabase;
use crate::error::Result;

pub fn run(db: &NeoDatabase, selector: &NeoSelector, with_approaches: bool) -> Result<CmdResult> {
    let found = match selector {
        NeoSelector::Designation(designation) => db.get_neo_by_designation(designation),
        NeoSelector::Name(name) => db.get_neo_by_name(name),
    };

    let Some(neo) = found else {
        log::debug!("no NEO for {:?}", selector);
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No matching NEOs exist in the database."));
        return Ok(result);
    };

    let approaches = if with_approaches {
        db.approaches_for(&neo.designation).cloned().collect()
    } else {
        Vec::new()
    };

    Ok(CmdResult::default()
        .with_neos(vec![neo.clone()])
        .with_approaches(approaches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_database;

    #[test]
    fn finds_by_designation() {
        let db = sample_database();
        let result = run(&db, &NeoSelector::Designation("99942".into()), false).unwrap();

        assert_eq!(result.neos.len(), 1);
        assert_eq!(result.neos[0].fullname(), "99942 (Apophis)");
        assert!(result.approaches.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn finds_by_name_with_approaches() {
        let db = sample_database();
        let result = run(&db, &NeoSelector::Name("Eros".into()), true).unwrap();

        assert_eq!(result.neos[0].designation, "433");
        assert_eq!(result.approaches.len(), 2);
        assert!(result.approaches.iter().all(|a| a.designation == "433"));
    }

    #[test]
    fn reports_missing_neo() {
        let db = sample_database();
        let result = run(&db, &NeoSelector::Name("Ceres".into()), true).unwrap();

        assert!(result.neos.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(
            result.messages[0].content,
            "No matching NEOs exist in the database."
        );
    }
}
