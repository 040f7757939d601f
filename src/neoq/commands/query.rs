use crate::commands::{CmdMessage, CmdResult};
use crate::database::NeoDatabase;
use crate::error::Result;
use crate::filters::{create_filters, FilterCriteria};
use crate::limit::limit;
use crate::model::CloseApproach;

/// Run a query over `db`, keeping at most `max_results` matches.
///
/// The scan stops as soon as the cap is reached.
pub fn run(
    db: &NeoDatabase,
    criteria: &FilterCriteria,
    max_results: Option<usize>,
) -> Result<CmdResult> {
    let filters = create_filters(criteria);
    if filters.is_empty() {
        log::debug!("no criteria given, every close approach matches");
    } else {
        let described: Vec<String> = filters.iter().map(|f| f.to_string()).collect();
        log::debug!("querying with {}", described.join(" AND "));
    }

    let approaches = limit(db.query(&filters), max_results)
        .map(|found| found.cloned())
        .collect::<Result<Vec<CloseApproach>>>()?;
    log::debug!("query matched {} close approaches", approaches.len());

    let mut result = CmdResult::default().with_approaches(approaches);
    if result.approaches.is_empty() {
        result.add_message(CmdMessage::info(
            "No close approaches match the given criteria.",
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_database;
    use chrono::NaiveDate;

    #[test]
    fn no_criteria_returns_everything() {
        let db = sample_database();
        let result = run(&db, &FilterCriteria::default(), None).unwrap();

        assert_eq!(result.approaches.len(), 4);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn applies_criteria_and_limit() {
        let db = sample_database();
        let criteria = FilterCriteria {
            hazardous: Some(false),
            ..Default::default()
        };

        let all = run(&db, &criteria, None).unwrap();
        let designations: Vec<&str> = all
            .approaches
            .iter()
            .map(|a| a.designation.as_str())
            .collect();
        assert_eq!(designations, vec!["433", "2020 AB", "433"]);

        let capped = run(&db, &criteria, Some(2)).unwrap();
        assert_eq!(capped.approaches.len(), 2);
        assert_eq!(capped.approaches[1].designation, "2020 AB");
    }

    #[test]
    fn date_range_selects_by_calendar_day() {
        let db = sample_database();
        let criteria = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 5),
            end_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            ..Default::default()
        };

        let result = run(&db, &criteria, None).unwrap();
        let distances: Vec<f64> = result.approaches.iter().map(|a| a.distance).collect();
        assert_eq!(distances, vec![0.9, 0.3]);
    }

    #[test]
    fn empty_result_adds_message() {
        let db = sample_database();
        let criteria = FilterCriteria {
            diameter_min: Some(1000.0),
            ..Default::default()
        };

        let result = run(&db, &criteria, Some(5)).unwrap();
        assert!(result.approaches.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
